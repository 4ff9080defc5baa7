//! Core state types for the rigid-body simulation.
//!
//! Defines the dynamic circular `Body` (ship and debris), the static
//! `Target`, and the `Scene` aggregate that owns all of them.
//!
//! Debris bodies are never destroyed, so a `DebrisId` handed out once stays
//! valid for the lifetime of the scene.

use std::f64::consts::PI;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// A dynamic circular rigid body
///
/// `radius`, `m` and `moi` are fixed at construction; everything else is
/// kinematic state mutated by the integrator, the collision resolver and the
/// input layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub f: NVec2, // external force, owned by the input layer
    pub alpha: f64, // orientation (radians)
    pub omega: f64, // angular velocity
    pub torque: f64, // external torque, owned by the input layer
    m: f64, // mass
    moi: f64, // moment of inertia
    radius: f64, // collision radius
}

impl Body {
    /// Create a body at rest (no force, no torque, zero orientation)
    ///
    /// Mass follows from the areal density, `m = density * r^2 * pi`, and the
    /// moment of inertia from the disk approximation `moi = pi/2 * r^4`.
    /// Both `radius` and `density` must be strictly positive; configuration
    /// validation guarantees this for every body built from a scenario.
    pub fn new(x: NVec2, v: NVec2, omega: f64, radius: f64, density: f64) -> Self {
        debug_assert!(radius > 0.0 && density > 0.0);
        Self {
            x,
            v,
            f: NVec2::zeros(),
            alpha: 0.0,
            omega,
            torque: 0.0,
            m: density * radius * radius * PI,
            moi: PI * 0.5 * radius.powi(4),
            radius,
        }
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn moment_of_inertia(&self) -> f64 {
        self.moi
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Squared linear speed
    pub fn speed2(&self) -> f64 {
        self.v.norm_squared()
    }

    /// Linear momentum `m * v`
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}

/// The goal body. Never integrated or collided against
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub x: NVec2, // position
    pub radius: f64, // landing radius
}

/// Stable handle to a debris body inside a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DebrisId(pub usize);

/// The whole simulated world: one ship, a fixed set of debris, one target
#[derive(Debug, Clone)]
pub struct Scene {
    pub ship: Body, // player-controlled body
    pub debris: Vec<Body>, // fixed-size debris field
    pub target: Target, // landing goal
    pub t: f64, // simulated time
}

impl Scene {
    pub fn new(ship: Body, debris: Vec<Body>, target: Target) -> Self {
        Self {
            ship,
            debris,
            target,
            t: 0.0,
        }
    }

    /// Handles of every debris body, in iteration order
    pub fn debris_ids(&self) -> impl Iterator<Item = DebrisId> {
        (0..self.debris.len()).map(DebrisId)
    }

    pub fn debris(&self, id: DebrisId) -> Option<&Body> {
        self.debris.get(id.0)
    }

    pub fn debris_mut(&mut self, id: DebrisId) -> Option<&mut Body> {
        self.debris.get_mut(id.0)
    }

    /// Total linear momentum of all dynamic bodies
    pub fn total_momentum(&self) -> NVec2 {
        self.debris
            .iter()
            .fold(self.ship.momentum(), |acc, b| acc + b.momentum())
    }
}
