//! Pairwise distances in the original space
//!
//! Computed once when a layout is built and read-only afterwards.

use crate::points::PointSet;

/// Symmetric n×n matrix of Euclidean distances, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute all pairwise distances, visiting each unordered pair once
    pub fn build(points: &PointSet) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];

        for i in 0..n {
            let pi = points.row(i);
            for j in 0..i {
                let d = euclidean(pi, points.row(j));
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        Self { n, data }
    }

    /// Number of points covered
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Distances from point `i` to every point, index-aligned
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Largest distance from point `i` to any other point
    pub fn max_from(&self, i: usize) -> f64 {
        self.row(i).iter().copied().fold(0.0, f64::max)
    }
}

/// Euclidean distance between two equal-length coordinate slices
pub fn euclidean(p: &[f64], q: &[f64]) -> f64 {
    p.iter()
        .zip(q)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}
