mod common;

use common::synthetic_grid::THRESHOLD;
use image::{ImageBuffer, Luma};
use pqct_segmentation::config::FilterConfig;
use pqct_segmentation::diagnostics::{CatalogReport, TimingBreakdown};
use pqct_segmentation::image::io::{load_density_grid, save_label_mask, write_json_file};
use pqct_segmentation::image::{median_filter, Calibration};
use pqct_segmentation::prelude::*;
use std::fs;

/// 16-bit scan with two square "bones" and salt noise in the soft tissue.
fn write_scan(path: &std::path::Path) {
    let img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_fn(48, 32, |x, y| {
        let bone = ((6..16).contains(&x) && (8..20).contains(&y))
            || ((28..36).contains(&x) && (10..18).contains(&y));
        let salt = (x, y) == (22, 4) || (x, y) == (40, 26);
        Luma([if bone || salt { 1200 } else { 200 }])
    });
    img.save(path).unwrap();
}

#[test]
fn scan_to_catalog_pipeline() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let scan = dir.path().join("scan.png");
    write_scan(&scan);

    // 200 -> 40, 1200 -> 540 mg/cm³.
    let calibration = Calibration::new(0.5, -60.0);
    let grid = load_density_grid(&scan, calibration).unwrap();
    assert_eq!((grid.width(), grid.height()), (48, 32));
    assert_eq!(grid.get(0, 0), 40.0);
    assert_eq!(grid.get(10, 10), 540.0);

    let unfiltered = build_catalog(&grid, THRESHOLD);
    assert_eq!(unfiltered.len(), 4, "salt pixels are regions before filtering");

    let filtered = FilterConfig { median_size: 3, passes: 1 }.apply(&grid);
    let catalog = build_catalog(&filtered, THRESHOLD);
    assert_eq!(catalog.len(), 2);
    let mut counts: Vec<usize> = catalog.regions.iter().map(|r| r.pixel_count).collect();
    counts.sort_unstable();
    // 3x3 median rounds the square corners off.
    assert_eq!(counts, vec![64 - 4, 120 - 4]);

    let mask_path = dir.path().join("out").join("mask.png");
    let json_path = dir.path().join("out").join("regions.json");
    save_label_mask(&catalog.dominant_mask(2), u8::MAX, &mask_path).unwrap();
    let report = CatalogReport::from_catalog(&catalog, 2, None, TimingBreakdown::default());
    write_json_file(&json_path, &report).unwrap();

    let mask = image::open(&mask_path).unwrap().into_luma8();
    assert_eq!(mask.get_pixel(10, 10)[0], 255);
    assert_eq!(mask.get_pixel(22, 4)[0], 0);
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["selected"].as_array().map(Vec::len), Some(2));
    assert!(json["input"].get("source").is_none());
}

#[test]
fn median_filter_clears_border_frame() {
    let grid = PixelGrid::from_fn(10, 10, |_, _| 900.0);
    let filtered = median_filter(&grid, 5);
    assert_eq!(filtered.get(0, 0), 900.0);

    let mut values = vec![900.0; 100];
    values[55] = 10.0;
    let grid = PixelGrid::from_values(10, 10, values).unwrap();
    let filtered = median_filter(&grid, 5);
    assert_eq!(filtered.get(1, 1), 10.0, "frame takes the grid minimum");
    assert_eq!(filtered.get(5, 5), 900.0);
}
