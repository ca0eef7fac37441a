/// Owned 8-bit label mask, row-major. `0` is background; other values are
/// caller-defined labels (region selection, cluster membership).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelMask {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl LabelMask {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.w + x]
    }

    /// Write `label` at every linear index in `indices`.
    pub fn paint(&mut self, indices: &[usize], label: u8) {
        for &idx in indices {
            self.data[idx] = label;
        }
    }

    /// Number of cells carrying `label`.
    pub fn count(&self, label: u8) -> usize {
        self.data.iter().filter(|&&v| v == label).count()
    }
}

impl crate::image::traits::ImageView for LabelMask {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}
