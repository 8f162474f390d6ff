// src/province/validate.rs
//! Валидация готовой партии перед слиянием с хранилищем
//!
//! Проверки цельно-партийные и fail-fast: одна негодная запись отклоняет всю
//! партию, частичного слияния нет. Ошибка несёт счётчик и первые несколько
//! идентификаторов для диагностики.

use crate::error::GenError;
use crate::province::Province;

/// Сколько идентификаторов-нарушителей попадает в текст ошибки.
const REPORTED_IDS: usize = 5;

pub fn validate_batch(batch: &[Province]) -> Result<(), GenError> {
    let placeholder: Vec<&Province> = batch
        .iter()
        .filter(|p| p.terrain_type.is_placeholder())
        .collect();
    if !placeholder.is_empty() {
        return Err(GenError::PlaceholderTerrain {
            count: placeholder.len(),
            ids: sample_ids(&placeholder),
        });
    }

    let no_goods: Vec<&Province> = batch.iter().filter(|p| p.trade_goods.is_empty()).collect();
    if !no_goods.is_empty() {
        return Err(GenError::MissingTradeGoods {
            count: no_goods.len(),
            ids: sample_ids(&no_goods),
        });
    }

    Ok(())
}

fn sample_ids(offenders: &[&Province]) -> Vec<String> {
    offenders
        .iter()
        .take(REPORTED_IDS)
        .map(|p| p.id.clone())
        .collect()
}
