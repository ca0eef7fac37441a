//! Serializable reports written by the tools.
//!
//! `CatalogReport` describes a region catalog and the dominant regions picked
//! from it; `ClusterReport` records a two-way split. Both carry a
//! `TimingBreakdown` and serialize with camelCase keys.

pub mod catalog;
pub mod cluster;
pub mod timing;

pub use catalog::{CatalogReport, InputDescriptor, RegionDescriptor};
pub use cluster::ClusterReport;
pub use timing::{StageTiming, TimingBreakdown};
