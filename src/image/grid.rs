//! Owned single-channel density grid in row-major layout.
//!
//! Values are calibrated densities (same units as the segmentation
//! threshold). The grid is read-only once built; preprocessing such as
//! median filtering produces a new grid.
use crate::types::Coordinate;

#[derive(Clone, Debug)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl PixelGrid {
    /// Wrap row-major `values`; fails when the length is not `width * height`.
    pub fn from_values(width: usize, height: usize, values: Vec<f32>) -> Result<Self, String> {
        if values.len() != width * height {
            return Err(format!(
                "Failed to build {width}x{height} grid: expected {} values, got {}",
                width * height,
                values.len()
            ));
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut values = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            values,
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
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Convert (x, y) to a linear index into the value buffer.
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[self.idx(x, y)]
    }

    /// Value at a signed coordinate, `None` outside the grid.
    #[inline]
    pub fn value_at(&self, c: Coordinate) -> Option<f32> {
        self.index_of(c).map(|i| self.values[i])
    }

    /// Linear index of a signed coordinate, `None` outside the grid.
    #[inline]
    pub fn index_of(&self, c: Coordinate) -> Option<usize> {
        if c.x < 0 || c.y < 0 {
            return None;
        }
        let (x, y) = (c.x as usize, c.y as usize);
        (x < self.width && y < self.height).then(|| self.idx(x, y))
    }

    #[inline]
    pub fn coordinate_of(&self, idx: usize) -> Coordinate {
        Coordinate::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// True when `c` lies on the outermost row or column.
    #[inline]
    pub fn is_border(&self, c: Coordinate) -> bool {
        c.x == 0
            || c.y == 0
            || c.x as usize + 1 == self.width
            || c.y as usize + 1 == self.height
    }

    /// Foreground test used by every segmentation stage: in bounds and at or
    /// above `threshold`. Out-of-bounds and NaN cells are background.
    #[inline]
    pub fn is_foreground(&self, c: Coordinate, threshold: f32) -> bool {
        self.value_at(c).is_some_and(|v| v >= threshold)
    }

    /// All coordinates at or above `threshold`, in raster order.
    pub fn foreground_points(&self, threshold: f32) -> Vec<Coordinate> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, &v)| v >= threshold)
            .map(|(i, _)| self.coordinate_of(i))
            .collect()
    }

    /// Smallest finite value, or `0.0` for an empty grid.
    pub fn min_value(&self) -> f32 {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f32>, v| Some(acc.map_or(v, |a| a.min(v))))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_rejects_length_mismatch() {
        let err = PixelGrid::from_values(3, 3, vec![0.0; 8]).unwrap_err();
        assert!(err.contains("expected 9 values"), "unexpected error: {err}");
    }

    #[test]
    fn foreground_excludes_out_of_bounds_and_nan() {
        let grid = PixelGrid::from_fn(2, 2, |x, y| match (x, y) {
            (0, 0) => f32::NAN,
            _ => 10.0,
        });
        assert!(!grid.is_foreground(Coordinate::new(0, 0), 5.0));
        assert!(grid.is_foreground(Coordinate::new(1, 1), 5.0));
        assert!(!grid.is_foreground(Coordinate::new(-1, 0), 5.0));
        assert!(!grid.is_foreground(Coordinate::new(2, 0), 5.0));
    }

    #[test]
    fn foreground_points_are_raster_ordered() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| if (x + y) % 2 == 0 { 1.0 } else { 0.0 });
        let pts = grid.foreground_points(0.5);
        assert_eq!(
            pts,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(2, 0),
                Coordinate::new(1, 1)
            ]
        );
    }
}
