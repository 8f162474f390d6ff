// src/province/store.rs
//! Хранилище провинций: плоский JSON-массив записей
//!
//! Файл читается целиком в память в начале запуска и переписывается целиком
//! после успешной валидации. Инкрементальных правок и версионирования схемы
//! нет; слияние новой партии с коллекцией и запись — один атомарный с точки
//! зрения запуска шаг, поэтому удаления заглушек не фиксируются при
//! провалившейся генерации.

use std::fs;
use std::path::Path;

use crate::error::GenError;
use crate::province::Province;

pub fn load_provinces(path: &Path) -> Result<Vec<Province>, GenError> {
    let contents = fs::read_to_string(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| GenError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_provinces(path: &Path, provinces: &[Province]) -> Result<(), GenError> {
    let mut contents = serde_json::to_string_pretty(provinces).map_err(|source| {
        GenError::JsonParse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    contents.push('\n');
    fs::write(path, contents).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Удаляет записи с перечисленными идентификаторами (точное совпадение).
/// Возвращает число удалённых.
pub fn remove_by_id(provinces: &mut Vec<Province>, ids: &[String]) -> usize {
    let before = provinces.len();
    provinces.retain(|p| !ids.contains(&p.id));
    before - provinces.len()
}
