use super::{read_json, FilterConfig};
use crate::image::Calibration;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration of the `cluster_points` tool.
#[derive(Debug, Deserialize)]
pub struct ClusterToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub calibration: Calibration,
    #[serde(default)]
    pub filter: FilterConfig,
    /// Cells at or above this density become clustering points.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    pub output: ClusterOutputConfig,
}

fn default_threshold() -> f32 {
    280.0
}

#[derive(Debug, Deserialize)]
pub struct ClusterOutputConfig {
    #[serde(rename = "label_image")]
    pub label_image: PathBuf,
    #[serde(rename = "clusters_json")]
    pub clusters_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<ClusterToolConfig, String> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parses_threshold_and_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cluster.json");
        fs::write(
            &path,
            r#"{
                "input": "scan.tif",
                "threshold": 500,
                "filter": { "median_size": 0 },
                "output": { "label_image": "labels.png", "clusters_json": "clusters.json" }
            }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.threshold, 500.0);
        assert_eq!(config.filter.median_size, 0);
        assert_eq!(config.output.clusters_json, PathBuf::from("clusters.json"));
    }

    #[test]
    fn shipped_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/cluster.json");
        let config = load_config(&path).unwrap();
        assert_eq!(config.threshold, 280.0);
        assert_eq!(config.filter, FilterConfig::default());
        assert_eq!(config.output.label_image, PathBuf::from("out/labels.png"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"input\": ").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse config"), "{err}");
    }
}
