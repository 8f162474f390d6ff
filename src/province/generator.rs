// src/province/generator.rs
//! Сборка провинций: обход сетки внутри области поиска страны
//!
//! Для каждой свободной ячейки сетки внутри границы страны собирается одна
//! запись провинции. Всё изменяемое состояние запуска (занятые ячейки,
//! использованные аксиальные координаты, счётчик имён округов) живёт в
//! контексте, который принадлежит одному вызову [`generate`]: несколько
//! стран в одном процессе генерируются независимо.

use std::collections::HashSet;

use crate::boundary::BoundaryMask;
use crate::config::CountryConfig;
use crate::error::GenError;
use crate::grid;
use crate::lookup::{self, CountyNamer};
use crate::province::Province;
use crate::province::occupancy::OccupancyIndex;
use crate::terrain::TerrainAssigner;

/// Изменяемое состояние одного запуска генерации.
struct GenContext {
    occupied: OccupancyIndex,
    used_axial: HashSet<(i32, i32)>,
    namer: CountyNamer,
}

impl GenContext {
    fn new(existing: &[Province]) -> Self {
        Self {
            occupied: OccupancyIndex::from_provinces(existing),
            // Аксиальные координаты заняты всеми записями, даже без lat/lng
            used_axial: existing.iter().map(|p| (p.x, p.y)).collect(),
            namer: CountyNamer::new(),
        }
    }
}

/// Округление координат до 4 знаков для записи в хранилище.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Генерирует партию провинций для одной страны.
///
/// Обходит прямоугольник ячеек, накрывающий область поиска (с запасом в
/// одну ячейку по каждому краю), и для каждой свободной ячейки внутри
/// границы собирает запись. Слияние партии с хранилищем — забота вызывающей
/// стороны, после прохождения валидации.
pub fn generate(
    existing: &[Province],
    boundary: &BoundaryMask,
    config: &CountryConfig,
    terrain: &mut dyn TerrainAssigner,
) -> Result<Vec<Province>, GenError> {
    config.validate()?;

    let mut ctx = GenContext::new(existing);

    // Углы области поиска в пикселях: северо-запад и юго-восток
    let (px_west, py_north) = grid::lat_lng_to_pixel(config.bbox.lat_max, config.bbox.lng_min);
    let (px_east, py_south) = grid::lat_lng_to_pixel(config.bbox.lat_min, config.bbox.lng_max);

    let col_min = (px_west / grid::COL_SPACING).floor() as i32 - 1;
    let col_max = (px_east / grid::COL_SPACING).ceil() as i32 + 1;
    let row_min = (py_north / grid::ROW_SPACING).floor() as i32 - 1;
    let row_max = (py_south / grid::ROW_SPACING).ceil() as i32 + 1;

    let mut batch = Vec::new();

    for col in col_min..=col_max {
        for row in row_min..=row_max {
            if ctx.occupied.contains(col, row) {
                continue;
            }

            let (px, py) = grid::hex_center(col, row);
            if px < 0.0 || px > grid::WORLD_WIDTH || py < 0.0 || py > grid::WORLD_HEIGHT {
                continue;
            }

            let (lat, lng) = grid::pixel_to_lat_lng(px, py);
            if !boundary.contains(lng, lat) {
                continue;
            }

            let (mut q, r) = grid::pixel_to_axial(px, py);
            if ctx.used_axial.contains(&(q, r)) {
                // Крайне редкая коллизия: одиночный сдвиг q без повторной
                // проверки, сохранён как есть для совместимости вывода
                q += 1;
            }
            ctx.used_axial.insert((q, r));
            ctx.occupied.claim(col, row);

            let Some(sub_region) = lookup::resolve_sub_region(lat, lng, &config.sub_regions)
            else {
                return Err(GenError::InvalidConfig("sub_regions table is empty".into()));
            };

            let county = lookup::resolve_county_name(lat, lng, &config.county_map);
            let name = ctx.namer.display_name(county);

            let terrain_type = terrain.assign(&config.region, &config.continent, config.default_tier);

            batch.push(Province {
                id: format!("{}_{}_{}", config.id_prefix, col, row),
                name,
                x: q,
                y: r,
                lat: Some(round4(lat)),
                lng: Some(round4(lng)),
                continent: config.continent.clone(),
                region: config.region.clone(),
                terrain_type,
                settlement_tier: config.default_tier,
                population: config.default_population,
                wealth: config.default_wealth,
                trade_goods: sub_region.trade_goods.clone(),
                owner_culture: sub_region.culture.clone(),
                owner_religion: sub_region.religion.clone(),
                development_progress: 0,
                months_at_tier: 0,
                development_invested: 0,
                extra: serde_json::Map::new(),
            });
        }
    }

    Ok(batch)
}
