use serde::{Deserialize, Serialize};

/// Options controlling a region catalog build.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    /// Foreground threshold in calibrated density units (value >= threshold).
    pub threshold: f32,
    /// Filled regions with fewer pixels are dropped from the catalog. Their
    /// pixels stay claimed.
    pub min_pixel_count: usize,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            // Cortical bone cut-off in mg/cm³ used for pQCT cross-sections.
            threshold: 280.0,
            min_pixel_count: 0,
        }
    }
}

impl CatalogOptions {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    pub fn with_min_pixel_count(mut self, min_pixel_count: usize) -> Self {
        self.min_pixel_count = min_pixel_count;
        self
    }
}
