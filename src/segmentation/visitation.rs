use crate::types::Coordinate;

const UNVISITED: u8 = 0;
const CLAIMED: u8 = 1;
const FIRST_TRACE_VISIT: u8 = 2;
/// Markers above this value stop a trace.
pub(crate) const MULTIPLICITY_CAP: u8 = 3;
const PENDING_FILL: u8 = u8::MAX;

/// Decoded state of one visitation cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Unvisited,
    /// Owned by a completed region (or the boundary of a rejected one).
    Claimed,
    /// Touched `n - 1` times by the trace in progress.
    Traced(u8),
    /// Filled for a region whose fill has not been accepted yet.
    PendingFill,
}

/// Per-pixel consumption state shared across one full-image scan.
///
/// Claimed cells are never released. Trace markers and pending fills are
/// transient and are resolved by the tracer/filler that created them.
#[derive(Clone, Debug)]
pub struct VisitationGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl VisitationGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![UNVISITED; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn state(&self, idx: usize) -> CellState {
        match self.cells[idx] {
            UNVISITED => CellState::Unvisited,
            CLAIMED => CellState::Claimed,
            PENDING_FILL => CellState::PendingFill,
            n => CellState::Traced(n),
        }
    }

    #[inline]
    pub fn is_unvisited(&self, idx: usize) -> bool {
        self.cells[idx] == UNVISITED
    }

    #[inline]
    pub fn is_claimed(&self, idx: usize) -> bool {
        self.cells[idx] == CLAIMED
    }

    #[inline]
    pub fn index_of(&self, c: Coordinate) -> Option<usize> {
        if c.x < 0 || c.y < 0 {
            return None;
        }
        let (x, y) = (c.x as usize, c.y as usize);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    #[inline]
    pub fn claim(&mut self, idx: usize) {
        self.cells[idx] = CLAIMED;
    }

    /// Record one more pass of the current trace over `idx`.
    ///
    /// Returns true the first time the cell is touched so the caller can
    /// remember it for `collapse`.
    #[inline]
    pub(crate) fn mark_traced(&mut self, idx: usize) -> bool {
        match self.cells[idx] {
            UNVISITED => {
                self.cells[idx] = FIRST_TRACE_VISIT;
                true
            }
            CLAIMED => false,
            n => {
                self.cells[idx] = n.saturating_add(1).min(PENDING_FILL - 1);
                false
            }
        }
    }

    #[inline]
    pub(crate) fn exceeds_multiplicity(&self, idx: usize) -> bool {
        let v = self.cells[idx];
        v > MULTIPLICITY_CAP && v != PENDING_FILL
    }

    /// Turn every trace marker in `indices` into a claim.
    pub(crate) fn collapse(&mut self, indices: &[usize]) {
        for &idx in indices {
            if self.cells[idx] >= FIRST_TRACE_VISIT && self.cells[idx] != PENDING_FILL {
                self.cells[idx] = CLAIMED;
            }
        }
    }

    #[inline]
    pub(crate) fn mark_pending(&mut self, idx: usize) {
        self.cells[idx] = PENDING_FILL;
    }

    /// Resolve pending fill cells: claim them on acceptance, release them
    /// otherwise.
    pub(crate) fn settle_pending(&mut self, indices: &[usize], accept: bool) {
        let state = if accept { CLAIMED } else { UNVISITED };
        for &idx in indices {
            debug_assert_eq!(self.cells[idx], PENDING_FILL);
            self.cells[idx] = state;
        }
    }

    /// Number of claimed cells.
    pub fn claimed_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == CLAIMED).count()
    }
}
