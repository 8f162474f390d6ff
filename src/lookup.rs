// src/lookup.rs
//! Поиск атрибутов по упорядоченным таблицам ограничивающих прямоугольников
//!
//! Таблицы — именно упорядоченные списки, а не мапы: корректность определяет
//! порядок совпадения (первое совпадение выигрывает), а не скорость поиска.

use std::collections::HashMap;

use crate::config::{CountyBox, SubRegion};

/// Имя-страж для точек, не попавших ни в один округ.
pub const UNKNOWN_COUNTY: &str = "Unknown";

/// Возвращает первый суб-регион, чей прямоугольник содержит точку.
///
/// Если не совпал ни один — последний элемент таблицы: по конвенции
/// конфигурации он должен быть catch-all на всю область поиска.
/// `None` только для пустой таблицы (отсекается валидацией конфига).
#[must_use]
pub fn resolve_sub_region<'a>(lat: f64, lng: f64, table: &'a [SubRegion]) -> Option<&'a SubRegion> {
    table
        .iter()
        .find(|sr| sr.contains(lat, lng))
        .or_else(|| table.last())
}

/// Возвращает имя первого округа, содержащего точку, либо [`UNKNOWN_COUNTY`].
#[must_use]
pub fn resolve_county_name<'a>(lat: f64, lng: f64, table: &'a [CountyBox]) -> &'a str {
    table
        .iter()
        .find(|c| c.contains(lat, lng))
        .map_or(UNKNOWN_COUNTY, |c| c.name.as_str())
}

/// Счётчик повторов имён округов в пределах одного запуска генерации.
///
/// Несколько гексов в одном округе получают суффиксы: "Cork", "Cork 2",
/// "Cork 3". Состояние живёт только внутри одного вызова генератора и не
/// протекает между странами или запусками.
#[derive(Debug, Default)]
pub struct CountyNamer {
    counts: HashMap<String, u32>,
}

impl CountyNamer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Отображаемое имя для очередного гекса данного округа.
    pub fn display_name(&mut self, county: &str) -> String {
        let count = self.counts.entry(county.to_owned()).or_insert(0);
        *count += 1;
        if *count == 1 {
            county.to_owned()
        } else {
            format!("{county} {count}")
        }
    }
}
