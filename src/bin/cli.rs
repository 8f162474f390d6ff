use clap::Parser;
use provgen::province::{generator, store, validate};
use provgen::{BoundaryMask, CountryConfig, PlaceholderTerrain, TerrainAssigner, WeightedTerrain};
use std::path::PathBuf;

/// Генератор гекс-провинций для Chronicles of Realms
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурации страны в формате TOML
    #[arg(short, long)]
    config: PathBuf,

    /// Путь к GeoJSON-границе страны (Polygon или MultiPolygon)
    #[arg(short, long)]
    boundary: PathBuf,

    /// Путь к хранилищу провинций (provinces.json)
    #[arg(short, long)]
    store: PathBuf,

    /// Сид лотереи типов местности
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Назначать заглушку "land" вместо лотереи (партия не пройдёт валидацию)
    #[arg(long)]
    placeholder_terrain: bool,

    /// Посчитать и показать результат, но не трогать хранилище
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    println!("🔍 Загрузка конфигурации...");
    let config = CountryConfig::from_toml_file(&cli.config)?;
    let boundary = BoundaryMask::from_geojson_file(&cli.boundary)?;

    let mut provinces = store::load_provinces(&cli.store)?;
    println!("Хранилище: {} провинций", provinces.len());

    let removed = store::remove_by_id(&mut provinces, &config.remove_ids);
    if removed > 0 {
        println!("Удалено {} заглушек: {:?}", removed, config.remove_ids);
    }

    let mut assigner: Box<dyn TerrainAssigner> = if cli.placeholder_terrain {
        Box::new(PlaceholderTerrain)
    } else {
        Box::new(WeightedTerrain::seeded(cli.seed))
    };

    println!(
        "Генерация провинций '{}' (континент: {}, регион: {})...",
        config.id_prefix, config.continent, config.region
    );
    let batch = generator::generate(&provinces, &boundary, &config, assigner.as_mut())?;
    println!("Сгенерировано {} новых провинций.", batch.len());

    validate::validate_batch(&batch)?;

    if cli.dry_run {
        println!("Пробный запуск: хранилище не изменено.");
    } else {
        provinces.extend(batch);
        store::save_provinces(&cli.store, &provinces)?;
        println!(
            "\nГотово! Записано в {:?}. Всего провинций: {}",
            cli.store,
            provinces.len()
        );
    }

    Ok(())
}
