//! Сквозные свойства генератора: от границы и конфигурации до хранилища.

use std::collections::HashSet;
use std::fs;

use provgen::province::{generator, store, validate};
use provgen::{
    BoundaryMask, CountryConfig, GenError, PlaceholderTerrain, Province, WeightedTerrain,
};

const UNIT_SQUARE: &str =
    r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#;

const CONFIG: &str = r#"
    id_prefix = "testland"
    continent = "europe"
    region = "british_isles"
    bbox = { lat_min = 0.0, lat_max = 1.0, lng_min = 0.0, lng_max = 1.0 }
    remove_ids = ["old_placeholder"]

    [[sub_regions]]
    name = "north"
    lat_min = 0.5
    lat_max = 1.0
    lng_min = 0.0
    lng_max = 1.0
    culture = "Northern"
    religion = "Protestant"
    trade_goods = ["linen"]

    [[sub_regions]]
    name = "catch_all"
    culture = "Southern"
    religion = "Catholic"
    trade_goods = ["cattle", "wool"]

    [[county_map]]
    name = "Northshire"
    lat_min = 0.5
    lat_max = 1.0
    lng_min = 0.0
    lng_max = 1.0

    [[county_map]]
    name = "Southshire"
    lat_min = 0.0
    lat_max = 0.5
    lng_min = 0.0
    lng_max = 1.0
"#;

fn boundary() -> BoundaryMask {
    BoundaryMask::from_geojson_str(UNIT_SQUARE).unwrap()
}

fn config() -> CountryConfig {
    CountryConfig::from_toml_str(CONFIG).unwrap()
}

fn placeholder_store_entry() -> Province {
    serde_json::from_str(
        r#"{
            "id": "old_placeholder",
            "name": "Old Placeholder",
            "x": 5000, "y": 5000,
            "continent": "europe",
            "region": "british_isles",
            "terrain_type": "hills",
            "settlement_tier": "unsettled",
            "population": 600,
            "wealth": 60,
            "trade_goods": ["wool"],
            "owner_culture": "Northern",
            "owner_religion": "Protestant",
            "development_progress": 0,
            "months_at_tier": 0,
            "development_invested": 0
        }"#,
    )
    .unwrap()
}

#[test]
fn every_record_lies_inside_the_boundary() {
    let batch = generator::generate(
        &[],
        &boundary(),
        &config(),
        &mut WeightedTerrain::seeded(42),
    )
    .unwrap();

    assert!(!batch.is_empty());
    for p in &batch {
        let (lat, lng) = (p.lat.unwrap(), p.lng.unwrap());
        assert!((0.0..=1.0).contains(&lat));
        assert!((0.0..=1.0).contains(&lng));
    }
}

#[test]
fn search_box_outside_boundary_yields_nothing() {
    let mut cfg = config();
    cfg.bbox.lat_min = 10.0;
    cfg.bbox.lat_max = 11.0;
    let batch = generator::generate(
        &[],
        &boundary(),
        &cfg,
        &mut WeightedTerrain::seeded(42),
    )
    .unwrap();
    assert!(batch.is_empty());
}

#[test]
fn axial_coordinates_are_unique_within_and_against_existing() {
    let existing = vec![placeholder_store_entry()];
    let batch = generator::generate(
        &existing,
        &boundary(),
        &config(),
        &mut WeightedTerrain::seeded(42),
    )
    .unwrap();

    let mut seen: HashSet<(i32, i32)> = existing.iter().map(|p| (p.x, p.y)).collect();
    for p in &batch {
        assert!(seen.insert((p.x, p.y)), "дубликат аксиальных ({}, {})", p.x, p.y);
    }
}

#[test]
fn ids_are_unique_and_prefixed() {
    let batch = generator::generate(
        &[],
        &boundary(),
        &config(),
        &mut WeightedTerrain::seeded(42),
    )
    .unwrap();

    let mut ids = HashSet::new();
    for p in &batch {
        assert!(p.id.starts_with("testland_"));
        assert!(ids.insert(p.id.clone()), "дубликат id {}", p.id);
    }
}

#[test]
fn sub_region_attributes_follow_first_match() {
    let batch = generator::generate(
        &[],
        &boundary(),
        &config(),
        &mut WeightedTerrain::seeded(42),
    )
    .unwrap();

    for p in &batch {
        let lat = p.lat.unwrap();
        if lat >= 0.5 {
            assert_eq!(p.owner_culture, "Northern");
            assert_eq!(p.trade_goods, vec!["linen"]);
            assert!(p.name.starts_with("Northshire"));
        } else {
            assert_eq!(p.owner_culture, "Southern");
            assert_eq!(p.trade_goods, vec!["cattle", "wool"]);
            assert!(p.name.starts_with("Southshire"));
        }
    }
}

#[test]
fn two_runs_with_same_seed_are_byte_identical() {
    let a = generator::generate(
        &[],
        &boundary(),
        &config(),
        &mut WeightedTerrain::seeded(42),
    )
    .unwrap();
    let b = generator::generate(
        &[],
        &boundary(),
        &config(),
        &mut WeightedTerrain::seeded(42),
    )
    .unwrap();

    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn placeholder_assigner_makes_validation_reject_the_batch() {
    let batch = generator::generate(&[], &boundary(), &config(), &mut PlaceholderTerrain).unwrap();
    assert!(matches!(
        validate::validate_batch(&batch),
        Err(GenError::PlaceholderTerrain { .. })
    ));
}

#[test]
fn weighted_assigner_passes_validation() {
    let batch = generator::generate(
        &[],
        &boundary(),
        &config(),
        &mut WeightedTerrain::seeded(42),
    )
    .unwrap();
    validate::validate_batch(&batch).unwrap();
}

#[test]
fn full_pipeline_removes_merges_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("provinces.json");

    store::save_provinces(&path, &[placeholder_store_entry()]).unwrap();

    let cfg = config();
    let mut provinces = store::load_provinces(&path).unwrap();
    let removed = store::remove_by_id(&mut provinces, &cfg.remove_ids);
    assert_eq!(removed, 1);
    assert!(provinces.is_empty());

    let batch = generator::generate(
        &provinces,
        &boundary(),
        &cfg,
        &mut WeightedTerrain::seeded(42),
    )
    .unwrap();
    validate::validate_batch(&batch).unwrap();

    let generated = batch.len();
    provinces.extend(batch);
    store::save_provinces(&path, &provinces).unwrap();

    let reloaded = store::load_provinces(&path).unwrap();
    assert_eq!(reloaded.len(), generated);
    assert!(reloaded.iter().all(|p| p.id != "old_placeholder"));
    // Файл заканчивается переводом строки
    assert!(fs::read_to_string(&path).unwrap().ends_with('\n'));
}

#[test]
fn failed_validation_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("provinces.json");

    store::save_provinces(&path, &[placeholder_store_entry()]).unwrap();
    let original = fs::read_to_string(&path).unwrap();

    // Пайплайн с заглушкой местности: удаление и генерация происходят в
    // памяти, валидация падает, запись не выполняется
    let cfg = config();
    let mut provinces = store::load_provinces(&path).unwrap();
    store::remove_by_id(&mut provinces, &cfg.remove_ids);
    let batch =
        generator::generate(&provinces, &boundary(), &cfg, &mut PlaceholderTerrain).unwrap();
    assert!(validate::validate_batch(&batch).is_err());

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
