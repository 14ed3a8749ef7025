//! Layout settings
//!
//! Settings are plain data with documented defaults. A settings file only
//! needs the keys it overrides:
//!
//! ```yaml
//! k: 5                  # neighborhood size
//! spring_constant: 2.0
//! use_drag: true
//! seed: 42              # reproducible initial layout
//! ```
//!
//! The camelCase names (`springConstant`, `useDrag`, ...) are accepted as
//! aliases. Unknown keys are rejected.
//!
//! `display_k` and `use_cooling` are stored and reported but have no effect
//! on the physics.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::io::{IoError, IoResult};

/// Constants controlling the layout simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSettings {
    /// Number of nearest neighbors kept for the focus point
    pub k: usize,
    /// Number of points a renderer should show (no effect on the physics)
    #[serde(alias = "displayK")]
    pub display_k: usize,
    /// Freeze springs between pairs that are both in the neighborhood
    #[serde(alias = "weighByDistance")]
    pub weigh_by_distance: bool,
    /// Edge length of the cube the initial positions are drawn from
    pub range: f64,

    /// Simulate spring forces
    #[serde(alias = "useSpring")]
    pub use_spring: bool,
    /// Simulate inverse-square repulsion
    #[serde(alias = "useRepulsive")]
    pub use_repulsive: bool,
    /// Simulate velocity drag
    #[serde(alias = "useDrag")]
    pub use_drag: bool,
    /// Reserved; no effect
    #[serde(alias = "useCooling")]
    pub use_cooling: bool,

    #[serde(alias = "springConstant")]
    pub spring_constant: f64,
    #[serde(alias = "repulsionConstant")]
    pub repulsion_constant: f64,
    pub mass: f64,
    #[serde(alias = "dragConstant")]
    pub drag_constant: f64,
    /// Scales original-space distances into display space
    #[serde(alias = "scaleModifier")]
    pub scale_modifier: f64,

    /// Seed for the initial layout; entropy when unset
    pub seed: Option<u64>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            k: 10,
            display_k: 200,
            weigh_by_distance: true,
            range: 10.0,
            use_spring: true,
            use_repulsive: false,
            use_drag: true,
            use_cooling: false,
            spring_constant: 3.0,
            repulsion_constant: 0.25,
            mass: 0.1,
            drag_constant: 0.1,
            scale_modifier: 0.2,
            seed: None,
        }
    }
}

impl LayoutSettings {
    /// Check these settings against a point set of `n` points
    pub fn validate(&self, n: usize) -> Result<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(invalid(format!("mass must be positive, got {}", self.mass)));
        }
        if !(self.range.is_finite() && self.range > 0.0) {
            return Err(invalid(format!("range must be positive, got {}", self.range)));
        }
        if self.k >= n {
            return Err(invalid(format!(
                "k must be less than the number of points ({n}), got {}",
                self.k
            )));
        }

        let constants = [
            ("spring_constant", self.spring_constant),
            ("repulsion_constant", self.repulsion_constant),
            ("drag_constant", self.drag_constant),
            ("scale_modifier", self.scale_modifier),
        ];
        for (name, value) in constants {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Parse settings from YAML (or JSON) text
    pub fn from_yaml_str(content: &str) -> IoResult<Self> {
        serde_yaml::from_str(content).map_err(|e| IoError::Parse(e.to_string()))
    }

    /// Load settings from a YAML or JSON file
    pub fn load(path: &Path) -> IoResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

fn invalid(message: String) -> LayoutError {
    LayoutError::InvalidConfiguration(message)
}
