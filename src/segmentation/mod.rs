//! Threshold-based region detection on calibrated density grids.
//!
//! The pipeline has three stages that share one `VisitationGrid` per scan:
//!
//! - Boundary tracing (`trace_boundary`): a direction-biased walk around the
//!   8-connected foreground region that contains the start pixel. Cells are
//!   marked with a transient multiplicity counter while the walk is running,
//!   which stops oscillation on one-pixel-wide structures, and collapsed to
//!   "claimed" when the walk ends.
//! - Area filling (`fill_region`): seeds are discovered on the inner side of
//!   the boundary and flooded 4-connected until no seed remains. A flood that
//!   reaches the image border marks the boundary as open and the region is
//!   rejected.
//! - Cataloguing (`build_catalog`): a row-major scan that starts a trace at
//!   every unvisited foreground cell, keeps each accepted region, and offers
//!   "K largest" selection for paired-bone cross-sections.
//!
//! Discovery order is the raster order of trace starts and is stable across
//! runs; it decides which boundary is recorded for a region and breaks ties
//! between regions of equal size.
//!
//! Complexity
//! - Tracing is linear in the boundary length (a cell is passed at most
//!   three times). Filling visits every region pixel once per accepted seed,
//!   and the catalog scan touches each grid cell a constant number of times.

mod catalog;
mod filler;
mod options;
mod tracer;
mod visitation;

pub use catalog::{build_catalog, build_catalog_with, DetectedRegion, RegionCatalog, RegionId};
pub use filler::{fill_region, FillOutcome, RejectReason};
pub use options::CatalogOptions;
pub use tracer::{trace_boundary, BoundaryTrace};
pub use visitation::{CellState, VisitationGrid};
