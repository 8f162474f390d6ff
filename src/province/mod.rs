// src/province/mod.rs
pub mod generator;
pub mod occupancy;
pub mod store;
pub mod validate;

use serde::{Deserialize, Serialize};

use crate::terrain::TerrainType;

/// Уровень поселения провинции.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementTier {
    Wilderness,
    Unsettled,
    Village,
    Town,
    City,
}

impl SettlementTier {
    /// Заселённые уровни получают буст farmlands при назначении местности.
    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(
            self,
            SettlementTier::Village | SettlementTier::Town | SettlementTier::City
        )
    }
}

/// Запись провинции в хранилище.
///
/// `x`/`y` — аксиальные гекс-координаты (q, r), глобально уникальные среди
/// провинций. `lat`/`lng` опциональны: у части рукописных записей их нет,
/// такие записи не участвуют в индексе занятых ячеек. Сгенерированные записи
/// всегда имеют координаты, округлённые до 4 знаков.
///
/// Поле `extra` подхватывает любые незнакомые ключи JSON: хранилище
/// переписывается целиком, и рукописные записи обязаны пережить цикл
/// чтение-изменение-запись без потерь.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Province {
    pub id: String,
    pub name: String,
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    pub continent: String,
    pub region: String,
    pub terrain_type: TerrainType,
    pub settlement_tier: SettlementTier,
    pub population: u32,
    pub wealth: u32,
    pub trade_goods: Vec<String>,
    pub owner_culture: String,
    pub owner_religion: String,
    pub development_progress: u32,
    pub months_at_tier: u32,
    pub development_invested: u32,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
