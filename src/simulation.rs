//! Neighborhood layout simulation
//!
//! [`VectorSpace`] keeps a 3D proxy for every point of a high-dimensional
//! [`PointSet`] and moves the proxies so that display-space separations
//! approach the (scaled) original-space distances.
//!
//! Each [`tick`](VectorSpace::tick) runs three phases in order:
//!
//! 1. forces are cleared and recomputed over all ordered pairs,
//! 2. velocities integrate `force / mass`,
//! 3. positions integrate the new velocities (semi-implicit Euler).
//!
//! [`change_focus`](VectorSpace::change_focus) selects a point and recomputes
//! its `k` nearest neighbors in the original space. While
//! `weigh_by_distance` is on, pairs inside that neighborhood exert no spring
//! or repulsion on each other.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::distance::DistanceMatrix;
use crate::error::{LayoutError, Result};
use crate::forces::{Vec3, drag_force, repulsive_force, spring_force};
use crate::points::PointSet;
use crate::settings::LayoutSettings;
use crate::snapshot::LayoutSnapshot;

/// Force-directed 3D layout of a high-dimensional point set
#[derive(Debug, Clone)]
pub struct VectorSpace {
    points: PointSet,
    distances: DistanceMatrix,
    settings: LayoutSettings,
    /// Farthest distance from point 0; a scale reference only
    max_distance: f64,

    selected: usize,
    nn: Vec<usize>,
    /// `in_nn[i]` mirrors `nn.contains(&i)`
    in_nn: Vec<bool>,
    /// Per-point weights, all 1.0; not applied to any force
    nn_weights: Vec<f64>,

    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    forces: Vec<Vec3>,
}

impl VectorSpace {
    /// Build a layout, seeding the initial positions from `settings.seed`
    pub fn new(points: PointSet, settings: LayoutSettings) -> Result<Self> {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(points, settings, &mut rng)
    }

    /// Build a layout drawing the initial positions from `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        points: PointSet,
        settings: LayoutSettings,
        rng: &mut R,
    ) -> Result<Self> {
        let n = points.len();
        settings.validate(n)?;

        let distances = DistanceMatrix::build(&points);
        let max_distance = distances.max_from(0);

        let half = settings.range / 2.0;
        let positions = (0..n)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                )
            })
            .collect();

        info!(
            points = n,
            dim = points.dim(),
            k = settings.k,
            max_distance,
            "built vector space"
        );

        Ok(Self {
            points,
            distances,
            settings,
            max_distance,
            selected: 0,
            nn: Vec::new(),
            in_nn: vec![false; n],
            nn_weights: vec![1.0; n],
            positions,
            velocities: vec![Vec3::zeros(); n],
            forces: vec![Vec3::zeros(); n],
        })
    }

    /// Focus on point `index` and recompute its nearest neighbors
    ///
    /// Neighbors are ordered by ascending original-space distance, with ties
    /// broken by ascending index. The focus point itself is never included,
    /// so the list holds `min(k, n - 1)` entries.
    pub fn change_focus(&mut self, index: usize) -> Result<&[usize]> {
        let n = self.len();
        if index >= n {
            return Err(LayoutError::IndexOutOfRange { index, len: n });
        }

        self.selected = index;
        self.nn = self.nearest_neighbors(index, self.settings.k);

        self.in_nn.iter_mut().for_each(|m| *m = false);
        for &j in &self.nn {
            self.in_nn[j] = true;
        }

        debug!(selected = index, neighbors = ?self.nn, "changed focus");
        Ok(&self.nn)
    }

    /// The `k` points nearest `index`, excluding `index` itself
    pub fn nearest_neighbors(&self, index: usize, k: usize) -> Vec<usize> {
        let dist = self.distances.row(index);
        let mut order: Vec<usize> = (0..self.len()).filter(|&j| j != index).collect();
        order.sort_by(|&a, &b| dist[a].total_cmp(&dist[b]).then(a.cmp(&b)));
        order.truncate(k);
        order
    }

    /// Advance the simulation by `dt`
    ///
    /// `dt == 0` recomputes forces but leaves positions and velocities
    /// untouched.
    pub fn tick(&mut self, dt: f64) -> Result<()> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(LayoutError::InvalidInput(format!(
                "time step must be finite and non-negative, got {dt}"
            )));
        }

        self.compute_forces();
        self.compute_velocities(dt);
        self.update_positions(dt);

        trace!(dt, max_force = self.max_force(), "tick");
        Ok(())
    }

    /// Run `ticks` steps of size `dt`
    pub fn run(&mut self, ticks: usize, dt: f64) -> Result<()> {
        for _ in 0..ticks {
            self.tick(dt)?;
        }
        Ok(())
    }

    /// Tick until every point is at rest
    ///
    /// At rest means both the largest force and the largest speed are below
    /// `tolerance`. Returns the number of ticks taken, or `None` if
    /// `max_ticks` ran out first.
    pub fn settle(&mut self, dt: f64, tolerance: f64, max_ticks: usize) -> Result<Option<usize>> {
        for step in 1..=max_ticks {
            self.tick(dt)?;
            if self.max_force() < tolerance && self.max_speed() < tolerance {
                debug!(ticks = step, "layout settled");
                return Ok(Some(step));
            }
        }
        Ok(None)
    }

    /// Clear and recompute the force on every point
    fn compute_forces(&mut self) {
        let n = self.len();
        let s = &self.settings;

        for i in 0..n {
            let pi = self.positions[i];
            let mut total = Vec3::zeros();

            for j in 0..n {
                if i == j {
                    continue;
                }
                let pj = self.positions[j];

                let mut pair = Vec3::zeros();
                if s.use_spring {
                    let ideal = self.distances.get(i, j) * s.scale_modifier;
                    pair += spring_force(&pi, &pj, ideal, s.spring_constant);
                }
                if s.use_repulsive {
                    pair += repulsive_force(&pi, &pj, s.repulsion_constant);
                }

                // neighborhood pairs hold their relative layout
                if s.weigh_by_distance && self.in_nn[i] && self.in_nn[j] {
                    pair = Vec3::zeros();
                }

                if s.use_drag {
                    pair += drag_force(&self.velocities[i], s.drag_constant);
                }

                total += pair;
            }

            self.forces[i] = total;
        }
    }

    fn compute_velocities(&mut self, dt: f64) {
        let inv_mass = 1.0 / self.settings.mass;
        for (v, f) in self.velocities.iter_mut().zip(&self.forces) {
            *v += f * (inv_mass * dt);
        }
    }

    fn update_positions(&mut self, dt: f64) {
        for (p, v) in self.positions.iter_mut().zip(&self.velocities) {
            *p += v * dt;
        }
    }

    /// Replace the settings, keeping positions and velocities
    ///
    /// The neighborhood of the current focus is recomputed so a new `k`
    /// takes effect immediately.
    pub fn apply_settings(&mut self, settings: LayoutSettings) -> Result<()> {
        settings.validate(self.len())?;
        debug!(?settings, "applying settings");
        self.settings = settings;
        self.change_focus(self.selected)?;
        Ok(())
    }

    /// Current view for a renderer
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            selected: self.selected,
            nn: self.nn.clone(),
            positions: self.positions.iter().map(|p| [p.x, p.y, p.z]).collect(),
        }
    }

    /// Largest force magnitude from the last tick
    pub fn max_force(&self) -> f64 {
        self.forces.iter().map(|f| f.norm()).fold(0.0, f64::max)
    }

    /// Largest proxy speed
    pub fn max_speed(&self) -> f64 {
        self.velocities.iter().map(|v| v.norm()).fold(0.0, f64::max)
    }

    /// Total kinetic energy `Σ m|v|²/2`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.settings.mass * self.velocities.iter().map(|v| v.norm_squared()).sum::<f64>()
    }

    /// Display-space distance between two proxies
    pub fn separation(&self, i: usize, j: usize) -> f64 {
        (self.positions[i] - self.positions[j]).norm()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn nn(&self) -> &[usize] {
        &self.nn
    }

    pub fn nn_weights(&self) -> &[f64] {
        &self.nn_weights
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn forces(&self) -> &[Vec3] {
        &self.forces
    }

    /// Overwrite the proxy positions, e.g. to restore a saved layout
    pub fn set_positions(&mut self, positions: Vec<Vec3>) -> Result<()> {
        if positions.len() != self.len() {
            return Err(LayoutError::InvalidInput(format!(
                "expected {} positions, got {}",
                self.len(),
                positions.len()
            )));
        }
        if positions.iter().any(|p| !p.iter().all(|v| v.is_finite())) {
            return Err(LayoutError::InvalidInput(
                "positions must be finite".to_string(),
            ));
        }
        self.positions = positions;
        Ok(())
    }
}
