use crate::segmentation::{DetectedRegion, RegionCatalog, RegionId};
use crate::types::Coordinate;
use serde::{Deserialize, Serialize};

use super::TimingBreakdown;

/// Grid the report was computed on.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub threshold: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Summary of one detected region.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDescriptor {
    pub id: RegionId,
    pub start: Coordinate,
    pub pixel_count: usize,
    pub boundary_length: usize,
    /// `[min_x, min_y, max_x, max_y]` of the boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[i32; 4]>,
}

impl RegionDescriptor {
    pub fn from_region(region: &DetectedRegion) -> Self {
        Self {
            id: region.id,
            start: region.start,
            pixel_count: region.pixel_count,
            boundary_length: region.boundary.len(),
            bbox: region
                .boundary
                .bounds()
                .map(|(lo, hi)| [lo.x, lo.y, hi.x, hi.y]),
        }
    }
}

/// Serializable view of a `RegionCatalog` and the selection made from it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReport {
    pub input: InputDescriptor,
    pub regions: Vec<RegionDescriptor>,
    /// Ids of the selected regions, ascending by pixel count.
    pub selected: Vec<RegionId>,
    pub rejected: usize,
    pub discarded: usize,
    pub timings: TimingBreakdown,
}

impl CatalogReport {
    /// Describe `catalog` with its `keep_largest` dominant regions selected.
    pub fn from_catalog(
        catalog: &RegionCatalog,
        keep_largest: usize,
        source: Option<String>,
        timings: TimingBreakdown,
    ) -> Self {
        Self {
            input: InputDescriptor {
                width: catalog.width,
                height: catalog.height,
                threshold: catalog.threshold,
                source,
            },
            regions: catalog
                .regions
                .iter()
                .map(RegionDescriptor::from_region)
                .collect(),
            selected: catalog.largest(keep_largest).iter().map(|r| r.id).collect(),
            rejected: catalog.rejected,
            discarded: catalog.discarded,
            timings,
        }
    }
}
