use pqct_segmentation::config::segment;
use pqct_segmentation::diagnostics::{CatalogReport, TimingBreakdown};
use pqct_segmentation::image::io::{load_density_grid, save_label_mask, write_json_file};
use pqct_segmentation::segmentation::build_catalog_with;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = segment::load_config(Path::new(&config_path))?;

    let t0 = Instant::now();
    let mut timings = TimingBreakdown::default();
    let raw = timings.time("load", || load_density_grid(&config.input, config.calibration))?;
    let grid = timings.time("median_filter", || config.filter.apply(&raw));
    let catalog = timings.time("catalog", || build_catalog_with(&grid, &config.catalog));
    let mask = catalog.dominant_mask(config.keep_largest);
    timings.total_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let report = CatalogReport::from_catalog(
        &catalog,
        config.keep_largest,
        Some(config.input.display().to_string()),
        timings,
    );

    save_label_mask(&mask, u8::MAX, &config.output.mask_image)?;
    write_json_file(&config.output.regions_json, &report)?;

    println!(
        "Found {} regions ({} rejected) at threshold {:.1}; kept {}",
        catalog.len(),
        catalog.rejected,
        catalog.threshold,
        report.selected.len()
    );
    println!(
        "Saved mask to {} and regions to {}",
        config.output.mask_image.display(),
        config.output.regions_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: segment_regions <config.json>".to_string()
}
