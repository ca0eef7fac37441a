//! Grid preprocessing applied before segmentation.
//!
//! - `Calibration`: linear raw-to-density scaling.
//! - `median_filter`: square median filter; the frame that the kernel cannot
//!   cover is set to the grid minimum so it never reads as foreground.
use super::PixelGrid;
use serde::{Deserialize, Serialize};

/// Linear scanner calibration, `density = raw * slope + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    pub slope: f32,
    pub intercept: f32,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            slope: 1.0,
            intercept: 0.0,
        }
    }
}

impl Calibration {
    pub fn new(slope: f32, intercept: f32) -> Self {
        Self { slope, intercept }
    }

    #[inline]
    pub fn apply(&self, raw: f32) -> f32 {
        raw * self.slope + self.intercept
    }

    /// Build a calibrated grid from raw scanner values.
    pub fn grid_from_raw(
        &self,
        width: usize,
        height: usize,
        raw: &[f32],
    ) -> Result<PixelGrid, String> {
        let values = raw.iter().map(|&v| self.apply(v)).collect();
        PixelGrid::from_values(width, height, values)
    }
}

/// Square median filter of odd `size` (even sizes are rounded up).
///
/// Cells closer than `size / 2` to the border are set to the grid minimum.
/// A `size` of 0 or 1 returns an unchanged copy.
pub fn median_filter(grid: &PixelGrid, size: usize) -> PixelGrid {
    if size <= 1 {
        return grid.clone();
    }
    let size = size | 1;
    let half = size / 2;
    let (w, h) = (grid.width(), grid.height());
    let minimum = grid.min_value();
    let mut out = vec![minimum; w * h];
    if w <= 2 * half || h <= 2 * half {
        return PixelGrid::from_fn(w, h, |_, _| minimum);
    }

    let mut window = Vec::with_capacity(size * size);
    let median = size * size / 2;
    for y in half..h - half {
        for x in half..w - half {
            window.clear();
            for yy in y - half..=y + half {
                let row = &grid.values()[yy * w..(yy + 1) * w];
                window.extend_from_slice(&row[x - half..=x + half]);
            }
            let (_, m, _) = window.select_nth_unstable_by(median, |a, b| a.total_cmp(b));
            out[y * w + x] = *m;
        }
    }
    PixelGrid::from_fn(w, h, |x, y| out[y * w + x])
}

/// Apply `median_filter` `passes` times.
pub fn median_filter_passes(grid: &PixelGrid, size: usize, passes: usize) -> PixelGrid {
    let mut current = grid.clone();
    for _ in 0..passes {
        current = median_filter(&current, size);
    }
    current
}
