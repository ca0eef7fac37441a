//! I/O helpers for density grids, label masks and JSON.
//!
//! - `load_raw_grayscale`: read an 8- or 16-bit grayscale PNG/TIFF as raw
//!   scanner values.
//! - `load_density_grid`: the same, with a linear calibration applied.
//! - `save_label_mask`: write a `LabelMask` to a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{Calibration, ImageView, LabelMask, PixelGrid};
use image::{DynamicImage, GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Raw single-channel samples as loaded from disk.
#[derive(Clone, Debug)]
pub struct RawGrayscale {
    pub width: usize,
    pub height: usize,
    pub samples: Vec<f32>,
}

/// Load an image from disk keeping 16-bit precision when present.
pub fn load_raw_grayscale(path: &Path) -> Result<RawGrayscale, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let width = img.width() as usize;
    let height = img.height() as usize;
    let samples: Vec<f32> = if is_sixteen_bit(&img) {
        img.into_luma16().into_raw().into_iter().map(f32::from).collect()
    } else {
        img.into_luma8().into_raw().into_iter().map(f32::from).collect()
    };
    Ok(RawGrayscale {
        width,
        height,
        samples,
    })
}

fn is_sixteen_bit(img: &DynamicImage) -> bool {
    matches!(
        img,
        DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)
            | DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageRgba16(_)
    )
}

/// Load an image and scale its samples into calibrated densities.
pub fn load_density_grid(path: &Path, calibration: Calibration) -> Result<PixelGrid, String> {
    let raw = load_raw_grayscale(path)?;
    calibration
        .grid_from_raw(raw.width, raw.height, &raw.samples)
        .map_err(|e| format!("Failed to load {}: {e}", path.display()))
}

/// Save a label mask as an 8-bit PNG, multiplying labels by `gain` so small
/// label values stay visible.
pub fn save_label_mask(mask: &LabelMask, gain: u8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.width() as u32, mask.height() as u32);
    for (y, row) in mask.rows().enumerate() {
        for (x, &label) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([label.saturating_mul(gain)]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_png_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("mask.png");
        let mut mask = LabelMask::new(4, 3);
        mask.paint(&[0, 5, 11], 1);
        save_label_mask(&mask, 200, &path).unwrap();

        let grid = load_density_grid(&path, Calibration::new(0.5, 0.0)).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.get(1, 1), 100.0);
        assert_eq!(grid.get(2, 1), 0.0);
    }

    #[test]
    fn sixteen_bit_gray_alpha_keeps_full_precision() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan_la16.png");
        let img: image::ImageBuffer<image::LumaA<u16>, Vec<u16>> =
            image::ImageBuffer::from_fn(3, 2, |x, _| image::LumaA([1000 + x as u16, u16::MAX]));
        img.save(&path).unwrap();

        let raw = load_raw_grayscale(&path).unwrap();
        assert_eq!((raw.width, raw.height), (3, 2));
        assert_eq!(&raw.samples[..3], &[1000.0, 1001.0, 1002.0]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_raw_grayscale(Path::new("/nonexistent/scan.png")).unwrap_err();
        assert!(err.contains("/nonexistent/scan.png"), "{err}");
    }
}
