//! vecspace - Interactive 3D neighborhood layout for high-dimensional point sets.
//!
//! Points from an n×d matrix get 3D proxies whose separations are pulled
//! toward the original-space distances by a spring simulation. A focus point
//! and its nearest neighbors can be changed at any time; renderers read the
//! resulting [`LayoutSnapshot`] between ticks.
//!
//! ```no_run
//! use vecspace::{LayoutSettings, PointSet, VectorSpace};
//!
//! let points = PointSet::new(vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]])?;
//! let settings = LayoutSettings { k: 2, ..Default::default() };
//! let mut space = VectorSpace::new(points, settings)?;
//!
//! space.change_focus(0)?;
//! space.tick(1.0 / 60.0)?;
//! let snapshot = space.snapshot();
//! # Ok::<(), vecspace::LayoutError>(())
//! ```

pub mod distance;
pub mod error;
pub mod forces;
pub mod io;
pub mod point_readers;
pub mod point_writers;
pub mod points;
pub mod settings;
pub mod simulation;
pub mod snapshot;
pub mod snapshot_writers;

pub use distance::DistanceMatrix;
pub use error::{LayoutError, Result};
pub use io::{FormatRegistry, IoError, IoResult, PointWriter, Reader, Writer};
pub use points::PointSet;
pub use settings::LayoutSettings;
pub use simulation::VectorSpace;
pub use snapshot::LayoutSnapshot;
