// src/config.rs
//! Конфигурация генерации провинций страны
//!
//! Этот модуль определяет входные данные одного запуска:
//! - префикс идентификаторов и метки континента/региона,
//! - упорядоченные таблицы суб-регионов (культура/религия/товары) и округов
//!   (человекочитаемые имена),
//! - значения по умолчанию для новых провинций,
//! - географическую область поиска и список удаляемых заглушек.
//!
//! Всё загружается из TOML-файла; обе таблицы — упорядоченные списки,
//! порядок записей значим (первое совпадение выигрывает).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::province::SettlementTier;

/// Географический прямоугольник (область поиска страны).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

/// Суб-регион: прямоугольник с атрибутами владения и товарами.
///
/// Отсутствующие стороны прямоугольника по умолчанию накрывают весь мир,
/// так что последняя запись таблицы без координат — это catch-all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubRegion {
    /// Необязательная человекочитаемая метка для конфигуратора
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_lat_min")]
    pub lat_min: f64,
    #[serde(default = "default_lat_max")]
    pub lat_max: f64,
    #[serde(default = "default_lng_min")]
    pub lng_min: f64,
    #[serde(default = "default_lng_max")]
    pub lng_max: f64,

    pub culture: String,
    pub religion: String,
    pub trade_goods: Vec<String>,
}

impl SubRegion {
    /// Содержит ли прямоугольник точку (границы включительно).
    #[must_use]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        self.lat_min <= lat && lat <= self.lat_max && self.lng_min <= lng && lng <= self.lng_max
    }
}

fn default_lat_min() -> f64 {
    -90.0
}
fn default_lat_max() -> f64 {
    90.0
}
fn default_lng_min() -> f64 {
    -180.0
}
fn default_lng_max() -> f64 {
    180.0
}

/// Округ: именованный прямоугольник для выбора отображаемого имени.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountyBox {
    pub name: String,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl CountyBox {
    #[must_use]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        self.lat_min <= lat && lat <= self.lat_max && self.lng_min <= lng && lng <= self.lng_max
    }
}

/// Полная конфигурация генерации одной страны.
///
/// # Пример
/// ```toml
/// # ireland.toml
/// id_prefix = "ireland"
/// continent = "europe"
/// region = "british_isles"
/// remove_ids = ["munster_interior", "kerry"]
///
/// bbox = { lat_min = 50.8, lat_max = 55.6, lng_min = -11.0, lng_max = -5.0 }
///
/// [[sub_regions]]
/// name = "Munster"
/// lat_min = 50.5
/// lat_max = 53.0
/// lng_min = -11.0
/// lng_max = -6.5
/// culture = "Irish"
/// religion = "Catholic"
/// trade_goods = ["cattle", "wool", "fish"]
///
/// [[county_map]]
/// name = "Cork"
/// lat_min = 51.6
/// lat_max = 52.4
/// lng_min = -9.5
/// lng_max = -7.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryConfig {
    /// Префикс идентификаторов: id провинции — `"{id_prefix}_{col}_{row}"`
    pub id_prefix: String,

    /// Континент, например "europe"
    pub continent: String,

    /// Географический регион, например "british_isles"
    pub region: String,

    /// Упорядоченная таблица суб-регионов; последняя запись по конвенции —
    /// catch-all на всю область поиска
    pub sub_regions: Vec<SubRegion>,

    /// Упорядоченная таблица округов; точки вне всех округов получают
    /// имя-страж "Unknown"
    #[serde(default)]
    pub county_map: Vec<CountyBox>,

    /// Уровень поселения новых провинций (по умолчанию `unsettled`)
    #[serde(default = "default_tier")]
    pub default_tier: SettlementTier,

    /// Население новых провинций (по умолчанию 600)
    #[serde(default = "default_population")]
    pub default_population: u32,

    /// Богатство новых провинций (по умолчанию 60)
    #[serde(default = "default_wealth")]
    pub default_wealth: u32,

    /// Область поиска; чуть шире берега страны, чтобы захватить краевые гексы
    pub bbox: GeoBounds,

    /// Идентификаторы провинций-заглушек, удаляемых перед генерацией
    #[serde(default)]
    pub remove_ids: Vec<String>,
}

fn default_tier() -> SettlementTier {
    SettlementTier::Unsettled
}
fn default_population() -> u32 {
    600
}
fn default_wealth() -> u32 {
    60
}

impl CountryConfig {
    /// Загружает и валидирует конфигурацию из TOML-файла.
    ///
    /// # Ошибки
    /// Нечитаемый файл, недопустимый TOML или непригодная конфигурация —
    /// все до начала какой-либо генерации.
    pub fn from_toml_file(path: &Path) -> Result<Self, GenError> {
        let contents = fs::read_to_string(path).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| GenError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, GenError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| GenError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Проверки, выполняемые до любой работы с хранилищем.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.id_prefix.is_empty() {
            return Err(GenError::InvalidConfig("id_prefix is empty".into()));
        }
        if self.sub_regions.is_empty() {
            return Err(GenError::InvalidConfig(
                "sub_regions table is empty; at least a catch-all entry is required".into(),
            ));
        }
        if self.bbox.lat_min >= self.bbox.lat_max {
            return Err(GenError::InvalidConfig(format!(
                "bbox latitude range is empty: {} >= {}",
                self.bbox.lat_min, self.bbox.lat_max
            )));
        }
        if self.bbox.lng_min >= self.bbox.lng_max {
            return Err(GenError::InvalidConfig(format!(
                "bbox longitude range is empty: {} >= {}",
                self.bbox.lng_min, self.bbox.lng_max
            )));
        }
        Ok(())
    }
}
