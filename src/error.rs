// src/error.rs
//! Ошибки генерации: либо негодный вход (до начала работы), либо нарушение
//! инвариантов готовой партии (после генерации, до записи). Повторов нет:
//! запуск или завершается валидной партией, или не пишет ничего.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid country config: {0}")]
    InvalidConfig(String),

    #[error("invalid boundary geometry: {0}")]
    InvalidBoundary(String),

    /// Партия содержит провинции с типом-заглушкой "land".
    #[error(
        "{count} generated province(s) still have the generic 'land' terrain type; \
         pass a terrain assigner or fix the config. First ids: {ids:?}"
    )]
    PlaceholderTerrain { count: usize, ids: Vec<String> },

    /// Партия содержит провинции без товаров.
    #[error(
        "{count} generated province(s) have no trade goods; every sub-region \
         entry must list at least one good. First ids: {ids:?}"
    )]
    MissingTradeGoods { count: usize, ids: Vec<String> },
}
