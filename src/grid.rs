// src/grid.rs
//! Преобразования координат гексагональной сетки мира
//!
//! Модуль связывает три системы координат:
//! - географические (широта/долгота),
//! - пиксельные (канва мира 9000×3300),
//! - аксиальные гексагональные (q, r) и смещённую сетку (col, row).
//!
//! Все функции чистые и детерминированные: одинаковый вход всегда даёт
//! бит-в-бит одинаковый результат. Константы должны совпадать с картой
//! клиента — менять их можно только синхронно с ней.

/// Радиус гекса в пикселях канвы.
pub const HEX_SIZE: f64 = 3.0;

/// Шаг между соседними столбцами гексов (1.5 радиуса).
pub const COL_SPACING: f64 = HEX_SIZE * 1.5;

/// √3 как f64-литерал: const-функций для sqrt нет, значение совпадает
/// с `3f64.sqrt()` до последнего бита.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Шаг между соседними строками гексов (√3 радиуса).
pub const ROW_SPACING: f64 = HEX_SIZE * SQRT_3;

/// Вертикальное смещение нечётных столбцов (полстроки).
pub const HALF_ROW: f64 = ROW_SPACING / 2.0;

/// Ширина канвы мира в пикселях.
pub const WORLD_WIDTH: f64 = 9000.0;
/// Высота канвы мира в пикселях.
pub const WORLD_HEIGHT: f64 = 3300.0;

/// Северная граница карты.
pub const MAX_LAT: f64 = 72.0;
/// Южная граница карты.
pub const MIN_LAT: f64 = -60.0;
pub const MAX_LNG: f64 = 180.0;
pub const MIN_LNG: f64 = -180.0;

const LAT_SPAN: f64 = MAX_LAT - MIN_LAT;
const LNG_SPAN: f64 = MAX_LNG - MIN_LNG;

/// Переводит географические координаты в пиксели канвы.
///
/// Долгота линейно растягивается на всю ширину, широта — сверху вниз
/// (y растёт к югу).
#[must_use]
pub fn lat_lng_to_pixel(lat: f64, lng: f64) -> (f64, f64) {
    let px = (lng - MIN_LNG) / LNG_SPAN * WORLD_WIDTH;
    let py = (MAX_LAT - lat) / LAT_SPAN * WORLD_HEIGHT;
    (px, py)
}

/// Обратное преобразование к [`lat_lng_to_pixel`].
#[must_use]
pub fn pixel_to_lat_lng(px: f64, py: f64) -> (f64, f64) {
    let lat = MAX_LAT - (py / WORLD_HEIGHT) * LAT_SPAN;
    let lng = MIN_LNG + (px / WORLD_WIDTH) * LNG_SPAN;
    (lat, lng)
}

/// Переводит центр гекса в пикселях в аксиальные координаты (q, r).
#[must_use]
pub fn pixel_to_axial(px: f64, py: f64) -> (i32, i32) {
    let q = (2.0 / 3.0 * px) / HEX_SIZE;
    let r = (-1.0 / 3.0 * px + SQRT_3 / 3.0 * py) / HEX_SIZE;
    (q.round() as i32, r.round() as i32)
}

/// Нечётный ли столбец. Через `rem_euclid`, чтобы отрицательные столбцы
/// (западное полушарие при сдвинутой сетке) вели себя как в клиенте.
#[must_use]
fn is_odd_col(col: i32) -> bool {
    col.rem_euclid(2) == 1
}

/// Привязывает широту/долготу к ближайшей ячейке смещённой сетки (col, row).
///
/// Нечётные столбцы сдвинуты вниз на полстроки (offset-раскладка гексов).
#[must_use]
pub fn lat_lng_to_col_row(lat: f64, lng: f64) -> (i32, i32) {
    let (px, py) = lat_lng_to_pixel(lat, lng);
    let col = (px / COL_SPACING).round() as i32;
    let offset = if is_odd_col(col) { HALF_ROW } else { 0.0 };
    let row = ((py - offset) / ROW_SPACING).round() as i32;
    (col, row)
}

/// Центр ячейки (col, row) в пикселях канвы. Обратная операция к
/// привязке в [`lat_lng_to_col_row`].
#[must_use]
pub fn hex_center(col: i32, row: i32) -> (f64, f64) {
    let offset = if is_odd_col(col) { HALF_ROW } else { 0.0 };
    let px = f64::from(col) * COL_SPACING;
    let py = f64::from(row) * ROW_SPACING + offset;
    (px, py)
}
