use crate::types::Coordinate;
use nalgebra::DMatrix;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Dense symmetric matrix of pairwise Euclidean distances, indexed by point
/// index.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    inner: DMatrix<f64>,
}

impl DistanceMatrix {
    pub fn new(points: &[Coordinate]) -> Self {
        let n = points.len();
        let mut inner = DMatrix::<f64>::zeros(n, n);
        if n > 0 {
            fill_columns(inner.as_mut_slice(), points);
        }
        Self { inner }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.nrows()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.nrows() == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.inner[(i, j)]
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.inner
    }

    /// Indices `(i, j)`, `i < j`, of the farthest-apart pair.
    ///
    /// Pairs are scanned with `i` ascending, then `j` ascending; the first
    /// strict maximum wins. `None` for fewer than two points.
    pub fn farthest_pair(&self) -> Option<(usize, usize)> {
        let n = self.len();
        if n < 2 {
            return None;
        }
        let mut best = (0, 1);
        let mut best_d = self.get(0, 1);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = self.get(i, j);
                if d > best_d {
                    best_d = d;
                    best = (i, j);
                }
            }
        }
        Some(best)
    }

    /// Closest point to `from` among those with `taken[k] == false`.
    /// Equal distances keep the lowest index.
    pub fn nearest(&self, from: usize, taken: &[bool]) -> Option<(usize, f64)> {
        debug_assert_eq!(taken.len(), self.len());
        let mut best: Option<(usize, f64)> = None;
        for (k, &is_taken) in taken.iter().enumerate() {
            if is_taken {
                continue;
            }
            let d = self.get(from, k);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((k, d)),
            }
        }
        best
    }
}

/// `data` is column-major; column `j` holds distances from point `j`.
fn fill_columns(data: &mut [f64], points: &[Coordinate]) {
    let n = points.len();
    #[cfg(feature = "parallel")]
    {
        data.par_chunks_mut(n)
            .enumerate()
            .for_each(|(j, column)| fill_column(column, points, j));
    }
    #[cfg(not(feature = "parallel"))]
    {
        data.chunks_mut(n)
            .enumerate()
            .for_each(|(j, column)| fill_column(column, points, j));
    }
}

fn fill_column(column: &mut [f64], points: &[Coordinate], j: usize) {
    let pj = points[j];
    for (cell, &pi) in column.iter_mut().zip(points) {
        *cell = pi.distance(pj);
    }
}
