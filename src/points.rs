//! Point sets in the original (high-dimensional) space
//!
//! A [`PointSet`] is an immutable n×d matrix: rows are points, columns are
//! dimensions. Every constructor validates the matrix, so downstream code can
//! rely on `n >= 1`, `d >= 1`, equal row lengths and finite coordinates.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Validated n×d matrix of original-space coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PointSetRepr", into = "Vec<Vec<f64>>")]
pub struct PointSet {
    rows: Vec<Vec<f64>>,
}

/// Accepted on-disk shapes: a bare matrix or `{ points: [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum PointSetRepr {
    Bare(Vec<Vec<f64>>),
    Wrapped { points: Vec<Vec<f64>> },
}

impl TryFrom<PointSetRepr> for PointSet {
    type Error = LayoutError;

    fn try_from(repr: PointSetRepr) -> Result<Self> {
        match repr {
            PointSetRepr::Bare(rows) | PointSetRepr::Wrapped { points: rows } => Self::new(rows),
        }
    }
}

impl From<PointSet> for Vec<Vec<f64>> {
    fn from(points: PointSet) -> Self {
        points.rows
    }
}

impl PointSet {
    /// Build a point set, rejecting empty, ragged or non-finite input
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let first = rows
            .first()
            .ok_or_else(|| LayoutError::InvalidInput("point set is empty".to_string()))?;
        let dim = first.len();
        if dim == 0 {
            return Err(LayoutError::InvalidInput(
                "points must have at least one dimension".to_string(),
            ));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(LayoutError::InvalidInput(format!(
                    "point {i} has {} dimensions, expected {dim}",
                    row.len()
                )));
            }
            if let Some(k) = row.iter().position(|v| !v.is_finite()) {
                return Err(LayoutError::InvalidInput(format!(
                    "point {i} has a non-finite coordinate at dimension {k}"
                )));
            }
        }

        Ok(Self { rows })
    }

    /// Sample `n` points uniformly in `[-range/2, range/2]^dim`
    pub fn random<R: Rng + ?Sized>(n: usize, dim: usize, range: f64, rng: &mut R) -> Result<Self> {
        if !(range.is_finite() && range > 0.0) {
            return Err(LayoutError::InvalidInput(format!(
                "range must be positive and finite, got {range}"
            )));
        }
        let half = range / 2.0;
        let rows = (0..n)
            .map(|_| (0..dim).map(|_| rng.gen_range(-half..=half)).collect())
            .collect();
        Self::new(rows)
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dimensionality of the original space
    pub fn dim(&self) -> usize {
        self.rows[0].len()
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}
