//! Boundary-to-area conversion by repeated seeded flood fill.
//!
//! Seeds are looked for on the inner side of the boundary: for each
//! consecutive pair of boundary points the neighbours of the first point are
//! probed clockwise, starting one step clockwise of the walking direction.
//! Fills are 4-connected and stop only at visited cells, so the traced
//! boundary is the wall and enclosed below-threshold cavities are counted as
//! part of the region. A fill that reaches the image border means the
//! boundary leaks; the region is then rejected and its fills are undone.
use super::tracer::BoundaryTrace;
use super::visitation::VisitationGrid;
use crate::image::PixelGrid;
use crate::types::{Coordinate, Heading};
use serde::{Deserialize, Serialize};

const FOUR_NEIGHBOURS: [Coordinate; 4] = [
    Coordinate::new(-1, 0),
    Coordinate::new(1, 0),
    Coordinate::new(0, -1),
    Coordinate::new(0, 1),
];

/// Why a boundary could not be turned into a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RejectReason {
    EmptyBoundary,
    /// A fill escaped through a gap and touched the image border.
    OpenContour { escaped_at: Coordinate },
}

/// Result of filling one boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FillOutcome {
    /// `mask` holds the sorted linear indices of boundary and interior cells.
    Filled { mask: Vec<usize>, pixel_count: usize },
    Rejected { reason: RejectReason },
}

impl FillOutcome {
    pub fn pixel_count(&self) -> Option<usize> {
        match self {
            FillOutcome::Filled { pixel_count, .. } => Some(*pixel_count),
            FillOutcome::Rejected { .. } => None,
        }
    }
}

/// Fill the area enclosed by `boundary` and claim it in `visits`.
///
/// Boundary cells that are still unvisited are claimed first; they stay
/// claimed even when the region is rejected.
pub fn fill_region(
    boundary: &BoundaryTrace,
    grid: &PixelGrid,
    threshold: f32,
    visits: &mut VisitationGrid,
) -> FillOutcome {
    RegionFiller::new(grid, threshold, visits).fill(boundary)
}

struct RegionFiller<'a> {
    grid: &'a PixelGrid,
    threshold: f32,
    visits: &'a mut VisitationGrid,
    stack: Vec<usize>,
    filled: Vec<usize>,
}

impl<'a> RegionFiller<'a> {
    fn new(grid: &'a PixelGrid, threshold: f32, visits: &'a mut VisitationGrid) -> Self {
        Self {
            grid,
            threshold,
            visits,
            stack: Vec::with_capacity(64),
            filled: Vec::with_capacity(256),
        }
    }

    fn fill(mut self, boundary: &BoundaryTrace) -> FillOutcome {
        if boundary.is_empty() {
            return FillOutcome::Rejected {
                reason: RejectReason::EmptyBoundary,
            };
        }

        let mut mask: Vec<usize> = boundary
            .points()
            .iter()
            .filter_map(|&c| self.grid.index_of(c))
            .collect();
        mask.sort_unstable();
        mask.dedup();
        for &idx in &mask {
            if self.visits.is_unvisited(idx) {
                self.visits.claim(idx);
            }
        }

        while let Some(seed) = self.find_seed(boundary) {
            if let Err(escaped_at) = self.flood(seed) {
                self.visits.settle_pending(&self.filled, false);
                return FillOutcome::Rejected {
                    reason: RejectReason::OpenContour { escaped_at },
                };
            }
        }

        self.visits.settle_pending(&self.filled, true);
        mask.extend_from_slice(&self.filled);
        mask.sort_unstable();
        let pixel_count = mask.len();
        FillOutcome::Filled { mask, pixel_count }
    }

    fn find_seed(&self, boundary: &BoundaryTrace) -> Option<usize> {
        for pair in boundary.points().windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let Some(mut heading) = Heading::toward(to - from) else {
                continue;
            };
            for _ in 0..8 {
                heading = heading.clockwise();
                let probe = from.step(heading);
                let Some(idx) = self.grid.index_of(probe) else {
                    continue;
                };
                if !self.visits.is_unvisited(idx) {
                    break;
                }
                if self.grid.is_foreground(probe, self.threshold) {
                    return Some(idx);
                }
            }
        }
        None
    }

    /// 4-connected fill from `seed`; `Err` carries the border cell reached.
    fn flood(&mut self, seed: usize) -> Result<(), Coordinate> {
        self.stack.clear();
        self.visits.mark_pending(seed);
        self.filled.push(seed);
        self.stack.push(seed);

        while let Some(idx) = self.stack.pop() {
            let c = self.grid.coordinate_of(idx);
            if self.grid.is_border(c) {
                return Err(c);
            }
            for offset in FOUR_NEIGHBOURS {
                let Some(n) = self.grid.index_of(c + offset) else {
                    continue;
                };
                if self.visits.is_unvisited(n) {
                    self.visits.mark_pending(n);
                    self.filled.push(n);
                    self.stack.push(n);
                }
            }
        }
        Ok(())
    }
}
