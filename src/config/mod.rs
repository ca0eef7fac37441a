//! JSON configuration for the command-line tools.
//!
//! Each tool reads one JSON file into a typed struct. Sections other than
//! `input` and `output` may be omitted and fall back to their defaults.

pub mod cluster;
pub mod segment;

use crate::image::{median_filter_passes, PixelGrid};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Median pre-filter applied to the calibrated grid before thresholding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Odd window size; 0 or 1 disables filtering.
    pub median_size: usize,
    pub passes: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            median_size: 5,
            passes: 2,
        }
    }
}

impl FilterConfig {
    pub fn apply(&self, grid: &PixelGrid) -> PixelGrid {
        median_filter_passes(grid, self.median_size, self.passes)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
