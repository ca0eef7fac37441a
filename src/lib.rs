#![doc = include_str!("../README.md")]

// Core algorithms
pub mod cluster;
pub mod segmentation;

// Grids, masks, preprocessing and I/O
pub mod image;
pub mod types;

// Tool support: reports and JSON configs
pub mod config;
pub mod diagnostics;

// --- High-level re-exports -------------------------------------------------

pub use crate::cluster::{cluster_two_way, ClusterPair, DistanceMatrix};
pub use crate::image::{Calibration, LabelMask, PixelGrid};
pub use crate::segmentation::{
    build_catalog, build_catalog_with, fill_region, trace_boundary, BoundaryTrace,
    CatalogOptions, DetectedRegion, FillOutcome, RegionCatalog, RegionId, RejectReason,
    VisitationGrid,
};
pub use crate::types::Coordinate;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pqct_segmentation::prelude::*;
///
/// let grid = PixelGrid::from_fn(12, 12, |x, y| {
///     if (3..6).contains(&x) && (3..6).contains(&y) { 900.0 } else { 40.0 }
/// });
/// let catalog = build_catalog(&grid, 280.0);
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.regions[0].pixel_count, 9);
///
/// let points = grid.foreground_points(280.0);
/// let pair = cluster_two_way(&points).unwrap();
/// assert_eq!(pair.first.len() + pair.second.len(), 9);
/// ```
pub mod prelude {
    pub use crate::{
        build_catalog, build_catalog_with, cluster_two_way, CatalogOptions, ClusterPair,
        Coordinate, PixelGrid, RegionCatalog,
    };
}
