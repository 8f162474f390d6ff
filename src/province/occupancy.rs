// src/province/occupancy.rs
//! Индекс занятых ячеек пиксельной сетки
//!
//! Строится один раз на запуск из существующего хранилища и пополняется по
//! ходу генерации, чтобы ни одна ячейка не была выдана дважды. Отвечает
//! только на вопрос «занята ли ячейка (col, row)» — аксиальные координаты
//! отслеживает сам генератор.

use std::collections::HashSet;

use crate::grid;
use crate::province::Province;

#[derive(Debug, Default)]
pub struct OccupancyIndex {
    cells: HashSet<(i32, i32)>,
}

impl OccupancyIndex {
    /// Привязывает каждую провинцию с географическими координатами к её
    /// ячейке сетки. Записи без lat/lng пропускаются.
    #[must_use]
    pub fn from_provinces(provinces: &[Province]) -> Self {
        let cells = provinces
            .iter()
            .filter_map(|p| {
                let lat = p.lat?;
                let lng = p.lng?;
                Some(grid::lat_lng_to_col_row(lat, lng))
            })
            .collect();
        Self { cells }
    }

    #[must_use]
    pub fn contains(&self, col: i32, row: i32) -> bool {
        self.cells.contains(&(col, row))
    }

    pub fn claim(&mut self, col: i32, row: i32) {
        self.cells.insert((col, row));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
