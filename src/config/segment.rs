use super::{read_json, FilterConfig};
use crate::image::Calibration;
use crate::segmentation::CatalogOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration of the `segment_regions` tool.
#[derive(Debug, Deserialize)]
pub struct SegmentToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub calibration: Calibration,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub catalog: CatalogOptions,
    /// Number of dominant regions kept in the output mask (2 for a paired
    /// bone cross-section).
    #[serde(default = "default_keep_largest")]
    pub keep_largest: usize,
    pub output: SegmentOutputConfig,
}

fn default_keep_largest() -> usize {
    2
}

#[derive(Debug, Deserialize)]
pub struct SegmentOutputConfig {
    #[serde(rename = "mask_image")]
    pub mask_image: PathBuf,
    #[serde(rename = "regions_json")]
    pub regions_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<SegmentToolConfig, String> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn minimal_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("segment.json");
        fs::write(
            &path,
            r#"{
                "input": "scan.png",
                "output": { "mask_image": "out/mask.png", "regions_json": "out/regions.json" }
            }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.input, PathBuf::from("scan.png"));
        assert_eq!(config.keep_largest, 2);
        assert_eq!(config.filter, FilterConfig::default());
        assert_eq!(config.catalog, CatalogOptions::default());
        assert_eq!(config.calibration, Calibration::default());
    }

    #[test]
    fn sections_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("segment.json");
        fs::write(
            &path,
            r#"{
                "input": "scan.png",
                "calibration": { "slope": 1.5, "intercept": -322.0 },
                "filter": { "median_size": 3 },
                "catalog": { "threshold": 710.0, "min_pixel_count": 50 },
                "keep_largest": 1,
                "output": { "mask_image": "m.png", "regions_json": "r.json" }
            }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.calibration, Calibration::new(1.5, -322.0));
        assert_eq!(config.filter.median_size, 3);
        assert_eq!(config.filter.passes, 2);
        assert_eq!(config.catalog.threshold, 710.0);
        assert_eq!(config.catalog.min_pixel_count, 50);
        assert_eq!(config.keep_largest, 1);
    }

    #[test]
    fn shipped_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/segment.json");
        let config = load_config(&path).unwrap();
        assert_eq!(config.filter, FilterConfig::default());
        assert_eq!(config.catalog, CatalogOptions::default());
        assert_eq!(config.keep_largest, 2);
        assert_eq!(config.output.regions_json, PathBuf::from("out/regions.json"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/segment.json")).unwrap_err();
        assert!(err.starts_with("Failed to read config /nonexistent/segment.json"), "{err}");
    }
}
