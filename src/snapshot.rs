//! Rendering-facing view of a layout
//!
//! A renderer only needs three things from the engine: where every proxy
//! sits, which point has focus, and which points form its neighborhood.

use serde::{Deserialize, Serialize};

/// State a renderer reads between ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Index of the focused point
    pub selected: usize,
    /// Nearest neighbors of `selected`, nearest first
    pub nn: Vec<usize>,
    /// Display-space positions, index-aligned with the input points
    pub positions: Vec<[f64; 3]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LayoutSnapshot {
        LayoutSnapshot {
            selected: 0,
            nn: vec![1, 2],
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.5, -1.0], [0.25, 2.0, 0.0]],
        }
    }

    mod snapshots {
        use super::*;

        #[test]
        fn snapshot_layout_json() {
            let json = serde_json::to_string_pretty(&sample()).unwrap();
            insta::assert_snapshot!(json);
        }
    }
}
