use pqct_segmentation::cluster::cluster_two_way;
use pqct_segmentation::config::cluster;
use pqct_segmentation::diagnostics::{ClusterReport, TimingBreakdown};
use pqct_segmentation::image::io::{load_density_grid, save_label_mask, write_json_file};
use pqct_segmentation::image::{LabelMask, PixelGrid};
use pqct_segmentation::types::Coordinate;
use std::env;
use std::path::Path;
use std::time::Instant;

const FIRST_LABEL: u8 = 1;
const SECOND_LABEL: u8 = 2;
const LABEL_GAIN: u8 = 127;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = cluster::load_config(Path::new(&config_path))?;

    let t0 = Instant::now();
    let mut timings = TimingBreakdown::default();
    let raw = timings.time("load", || load_density_grid(&config.input, config.calibration))?;
    let grid = timings.time("median_filter", || config.filter.apply(&raw));
    let points = grid.foreground_points(config.threshold);
    let pair = timings
        .time("cluster", || cluster_two_way(&points))
        .ok_or_else(|| {
            format!(
                "Need at least two points at or above {} in {}, found {}",
                config.threshold,
                config.input.display(),
                points.len()
            )
        })?;
    timings.total_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let mut labels = LabelMask::new(grid.width(), grid.height());
    labels.paint(&indices_of(&grid, &pair.first), FIRST_LABEL);
    labels.paint(&indices_of(&grid, &pair.second), SECOND_LABEL);
    let report = ClusterReport::from_pair(&pair, timings);

    save_label_mask(&labels, LABEL_GAIN, &config.output.label_image)?;
    write_json_file(&config.output.clusters_json, &report)?;

    println!(
        "Split {} points into clusters of {} and {}",
        report.point_count,
        pair.first.len(),
        pair.second.len()
    );
    println!(
        "Saved labels to {} and clusters to {}",
        config.output.label_image.display(),
        config.output.clusters_json.display()
    );

    Ok(())
}

fn indices_of(grid: &PixelGrid, points: &[Coordinate]) -> Vec<usize> {
    points.iter().filter_map(|&p| grid.index_of(p)).collect()
}

fn usage() -> String {
    "Usage: cluster_points <config.json>".to_string()
}
