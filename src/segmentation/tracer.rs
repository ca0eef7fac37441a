//! Direction-biased contour follower.
//!
//! The walk keeps a heading in 45° steps. When the neighbour ahead is
//! foreground the heading swings counter-clockwise as long as the next
//! neighbour in that direction is foreground too; otherwise it swings
//! clockwise until it meets foreground. After every move the heading is
//! pulled back by 90° so the next probe starts on the outside of the
//! contour and single-pixel protrusions are not skipped.
use super::visitation::VisitationGrid;
use crate::image::PixelGrid;
use crate::types::{Coordinate, Heading};
use serde::{Deserialize, Serialize};

/// Rotations tried before a position is declared a dead end.
const MAX_ROTATIONS: usize = 8;
/// Heading retardation applied after each move, in 45° steps.
const RETARD_STEPS: i32 = -2;

/// Ordered boundary path of one region. Empty means "no region here".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryTrace {
    points: Vec<Coordinate>,
}

impl BoundaryTrace {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the last point is an 8-neighbour of the first, or the trace
    /// is a single pixel.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(&first), Some(&last)) => (last - first).max_abs() <= 1,
            _ => false,
        }
    }

    /// Axis-aligned bounds as `(min, max)` corners.
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Coordinate::new(lo.x.min(p.x), lo.y.min(p.y)),
                Coordinate::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

/// Trace the boundary of the thresholded region containing `start`.
///
/// `start` is claimed before the walk. Trace markers left on the way are
/// collapsed to claims when the walk ends. Returns an empty trace when
/// `start` is outside the grid, below `threshold`, or already visited.
pub fn trace_boundary(
    grid: &PixelGrid,
    threshold: f32,
    visits: &mut VisitationGrid,
    start: Coordinate,
) -> BoundaryTrace {
    ContourTracer::new(grid, threshold, visits).trace(start)
}

struct ContourTracer<'a> {
    grid: &'a PixelGrid,
    threshold: f32,
    visits: &'a mut VisitationGrid,
    touched: Vec<usize>,
}

impl<'a> ContourTracer<'a> {
    fn new(grid: &'a PixelGrid, threshold: f32, visits: &'a mut VisitationGrid) -> Self {
        debug_assert_eq!(
            (grid.width(), grid.height()),
            (visits.width(), visits.height()),
            "visitation grid must match the pixel grid"
        );
        Self {
            grid,
            threshold,
            visits,
            touched: Vec::with_capacity(64),
        }
    }

    fn trace(mut self, start: Coordinate) -> BoundaryTrace {
        let Some(start_idx) = self.grid.index_of(start) else {
            return BoundaryTrace::default();
        };
        if !self.is_foreground(start) || !self.visits.is_unvisited(start_idx) {
            return BoundaryTrace::default();
        }
        self.visits.claim(start_idx);

        let mut points = vec![start];
        let mut pos = start;
        let mut heading = Heading::EAST;
        while let Some(next_heading) = self.steer(pos, heading) {
            heading = next_heading;
            let next = pos.step(heading);
            if next == start {
                break;
            }
            let Some(idx) = self.grid.index_of(next) else {
                break;
            };
            if !self.is_foreground(next)
                || self.visits.is_claimed(idx)
                || self.visits.exceeds_multiplicity(idx)
            {
                break;
            }
            if self.visits.mark_traced(idx) {
                self.touched.push(idx);
            }
            points.push(next);
            pos = next;
            heading = heading.rotated(RETARD_STEPS);
        }

        self.visits.collapse(&self.touched);
        BoundaryTrace::new(points)
    }

    /// Pick the heading of the next move from `pos`, `None` when every
    /// rotation was tried.
    fn steer(&self, pos: Coordinate, heading: Heading) -> Option<Heading> {
        let mut h = heading;
        if self.is_foreground(pos.step(h)) {
            for _ in 0..MAX_ROTATIONS {
                let ccw = h.counter_clockwise();
                if !self.is_foreground(pos.step(ccw)) {
                    return Some(h);
                }
                h = ccw;
            }
        } else {
            for _ in 0..MAX_ROTATIONS {
                h = h.clockwise();
                if self.is_foreground(pos.step(h)) {
                    return Some(h);
                }
            }
        }
        None
    }

    #[inline]
    fn is_foreground(&self, c: Coordinate) -> bool {
        self.grid.is_foreground(c, self.threshold)
    }
}
