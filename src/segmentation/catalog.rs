use super::filler::{fill_region, FillOutcome};
use super::options::CatalogOptions;
use super::tracer::{trace_boundary, BoundaryTrace};
use super::visitation::VisitationGrid;
use crate::image::{LabelMask, PixelGrid};
use crate::types::Coordinate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::Instant;

/// Discovery index of a region within one catalog build (raster order of
/// trace starts).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub u32);

/// One filled region found by the catalog scan.
#[derive(Clone, Debug)]
pub struct DetectedRegion {
    pub id: RegionId,
    pub start: Coordinate,
    pub boundary: BoundaryTrace,
    pub pixel_count: usize,
    /// Sorted linear indices of every pixel owned by the region.
    pub mask: Vec<usize>,
}

impl DetectedRegion {
    /// Order by pixel count, then by discovery order.
    pub fn cmp_by_size(&self, other: &Self) -> Ordering {
        self.pixel_count
            .cmp(&other.pixel_count)
            .then(self.id.cmp(&other.id))
    }
}

/// All regions of one grid at one threshold, in discovery order.
#[derive(Clone, Debug)]
pub struct RegionCatalog {
    pub width: usize,
    pub height: usize,
    pub threshold: f32,
    pub regions: Vec<DetectedRegion>,
    /// Boundaries whose fill escaped to the image border.
    pub rejected: usize,
    /// Filled regions dropped by `min_pixel_count`.
    pub discarded: usize,
    pub elapsed_ms: f64,
}

impl RegionCatalog {
    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions ascending by pixel count; equal counts keep discovery order.
    pub fn sorted_by_pixel_count(&self) -> Vec<&DetectedRegion> {
        let mut sorted: Vec<&DetectedRegion> = self.regions.iter().collect();
        sorted.sort_by(|a, b| a.cmp_by_size(b));
        sorted
    }

    /// The `k` largest regions, still in ascending order. Among equal pixel
    /// counts the later-discovered region ranks higher.
    pub fn largest(&self, k: usize) -> Vec<&DetectedRegion> {
        if k > self.regions.len() {
            warn!(
                "RegionCatalog::largest requested {} regions, catalog holds {}",
                k,
                self.regions.len()
            );
        }
        let sorted = self.sorted_by_pixel_count();
        let skip = sorted.len().saturating_sub(k);
        sorted.into_iter().skip(skip).collect()
    }

    /// Byte mask with `1` on every pixel of the `k` largest regions.
    pub fn dominant_mask(&self, k: usize) -> LabelMask {
        let mut mask = LabelMask::new(self.width, self.height);
        for region in self.largest(k) {
            mask.paint(&region.mask, 1);
        }
        mask
    }
}

/// Scan `grid` and catalog every region at or above `threshold`.
pub fn build_catalog(grid: &PixelGrid, threshold: f32) -> RegionCatalog {
    build_catalog_with(grid, &CatalogOptions::new(threshold))
}

pub fn build_catalog_with(grid: &PixelGrid, options: &CatalogOptions) -> RegionCatalog {
    CatalogBuilder::new(grid, options).build()
}

struct CatalogBuilder<'a> {
    grid: &'a PixelGrid,
    options: CatalogOptions,
    visits: VisitationGrid,
    regions: Vec<DetectedRegion>,
    rejected: usize,
    discarded: usize,
}

impl<'a> CatalogBuilder<'a> {
    fn new(grid: &'a PixelGrid, options: &CatalogOptions) -> Self {
        Self {
            grid,
            options: *options,
            visits: VisitationGrid::new(grid.width(), grid.height()),
            regions: Vec::new(),
            rejected: 0,
            discarded: 0,
        }
    }

    /// Row-major scan. An unvisited foreground cell starts a trace; after it
    /// the rest of its foreground run in that row is skipped.
    fn build(mut self) -> RegionCatalog {
        let t0 = Instant::now();
        let threshold = self.options.threshold;
        let (width, height) = (self.grid.width(), self.grid.height());

        for y in 0..height {
            let mut x = 0;
            while x < width {
                let c = Coordinate::new(x as i32, y as i32);
                let idx = self.grid.idx(x, y);
                if !self.grid.is_foreground(c, threshold) || !self.visits.is_unvisited(idx) {
                    x += 1;
                    continue;
                }
                self.process_start(c);
                x += 1;
                while x < width && self.grid.get(x, y) >= threshold {
                    x += 1;
                }
            }
        }

        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "build_catalog threshold={:.1} regions={} rejected={} discarded={} elapsed_ms={:.3}",
            threshold,
            self.regions.len(),
            self.rejected,
            self.discarded,
            elapsed_ms
        );
        RegionCatalog {
            width,
            height,
            threshold,
            regions: self.regions,
            rejected: self.rejected,
            discarded: self.discarded,
            elapsed_ms,
        }
    }

    fn process_start(&mut self, start: Coordinate) {
        let threshold = self.options.threshold;
        let boundary = trace_boundary(self.grid, threshold, &mut self.visits, start);
        if boundary.is_empty() {
            return;
        }
        match fill_region(&boundary, self.grid, threshold, &mut self.visits) {
            FillOutcome::Filled { mask, pixel_count } => {
                if pixel_count < self.options.min_pixel_count {
                    self.discarded += 1;
                    return;
                }
                let id = RegionId(self.regions.len() as u32);
                debug!(
                    "region {} start=({}, {}) boundary={} pixels={}",
                    id.0,
                    start.x,
                    start.y,
                    boundary.len(),
                    pixel_count
                );
                self.regions.push(DetectedRegion {
                    id,
                    start,
                    boundary,
                    pixel_count,
                    mask,
                });
            }
            FillOutcome::Rejected { reason } => {
                debug!(
                    "boundary from ({}, {}) rejected: {:?}",
                    start.x, start.y, reason
                );
                self.rejected += 1;
            }
        }
    }
}
