#![allow(dead_code)]

use image::{GrayImage, Luma};
use pqct_segmentation::image::PixelGrid;

pub const SOFT_TISSUE: f32 = 40.0;
pub const CORTICAL: f32 = 1100.0;
pub const THRESHOLD: f32 = 280.0;

/// Simple shape painter for synthetic density grids.
pub struct Scene {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl Scene {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            values: vec![SOFT_TISSUE; width * height],
        }
    }

    /// Filled disc of radius `r` (`dx² + dy² <= r²`).
    pub fn disc(mut self, cx: i32, cy: i32, r: i32, value: f32) -> Self {
        self.paint(|x, y| {
            let (dx, dy) = (x - cx, y - cy);
            dx * dx + dy * dy <= r * r
        }, value);
        self
    }

    /// Annulus between radii `inner` (exclusive) and `outer` (inclusive).
    pub fn ring(mut self, cx: i32, cy: i32, inner: i32, outer: i32, value: f32) -> Self {
        self.paint(|x, y| {
            let d2 = (x - cx) * (x - cx) + (y - cy) * (y - cy);
            d2 > inner * inner && d2 <= outer * outer
        }, value);
        self
    }

    pub fn rect(mut self, x0: i32, y0: i32, w: i32, h: i32, value: f32) -> Self {
        self.paint(|x, y| x >= x0 && x < x0 + w && y >= y0 && y < y0 + h, value);
        self
    }

    pub fn build(self) -> PixelGrid {
        PixelGrid::from_values(self.width, self.height, self.values)
            .expect("scene dimensions match value count")
    }

    fn paint(&mut self, inside: impl Fn(i32, i32) -> bool, value: f32) {
        for y in 0..self.height {
            for x in 0..self.width {
                if inside(x as i32, y as i32) {
                    self.values[y * self.width + x] = value;
                }
            }
        }
    }
}

/// 255 where `grid >= threshold`, 0 elsewhere.
pub fn binarize(grid: &PixelGrid, threshold: f32) -> GrayImage {
    GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        let v = grid.get(x as usize, y as usize);
        Luma([if v >= threshold { 255 } else { 0 }])
    })
}
