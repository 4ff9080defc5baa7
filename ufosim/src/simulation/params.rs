//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings the scene is built from:
//! - the domain rectangle (`Bounds`),
//! - the ship template used at start-up and on every reset,
//! - the debris distribution and the target placement,
//! - the thruster strengths and the random seed

use super::controls::Thrusters;
use super::states::{Body, NVec2, Target};

/// Axis-aligned domain rectangle `[min_x, max_x] x [min_y, max_y]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Inclusive containment test
    pub fn contains(&self, p: &NVec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Initial state of the ship, reused verbatim whenever it is reset
#[derive(Debug, Clone, PartialEq)]
pub struct ShipParams {
    pub x: NVec2, // spawn position
    pub v: NVec2, // spawn velocity
    pub omega: f64, // spawn angular velocity
    pub radius: f64,
    pub density: f64,
}

impl ShipParams {
    /// A freshly initialized ship
    pub fn spawn(&self) -> Body {
        Body::new(self.x, self.v, self.omega, self.radius, self.density)
    }
}

/// Distribution the debris field is drawn from
#[derive(Debug, Clone, PartialEq)]
pub struct DebrisParams {
    pub count: usize,
    pub density: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub speed_floor: f64, // added away from zero on each velocity axis
    pub speed_jitter: f64, // half-width of the uniform velocity draw
    pub max_spin: f64, // angular velocity is uniform in [-max_spin, max_spin)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetParams {
    pub x: NVec2,
    pub radius: f64,
}

impl TargetParams {
    pub fn place(&self) -> Target {
        Target {
            x: self.x,
            radius: self.radius,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub bounds: Bounds, // simulation domain
    pub ship: ShipParams, // ship template
    pub debris: DebrisParams, // debris distribution
    pub target: TargetParams, // goal placement
    pub thrusters: Thrusters, // input strengths
    pub seed: u64, // deterministic seed
}
