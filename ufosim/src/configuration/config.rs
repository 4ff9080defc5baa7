//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – sub-step, restitution, degenerate-contact policy
//! - [`ParametersConfig`] – domain bounds, thrusters and the random seed
//! - [`ShipConfig`]       – the ship's spawn state (also used on every reset)
//! - [`DebrisConfig`]     – the distribution the debris field is drawn from
//! - [`TargetConfig`]     – where the landing target sits
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document describes the classic
//! game: a 10 x 6 field, 20 debris bodies, ship on the left, target on the
//! right.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   sub_step: 0.001              # fixed integration step (s)
//!   restitution: 0.9             # 1.0 = perfectly elastic
//!   degenerate_contact: "skip"   # or "fixed_normal"
//!
//! parameters:
//!   seed: 42
//!   bounds: { min_x: -5.0, max_x: 5.0, min_y: -3.0, max_y: 3.0 }
//!   thrusters: { linear_acc: 0.25, angular_acc: 1.0 }
//!
//! ship:
//!   x: [ -3.5, 0.0 ]
//!   v: [ 0.0, 0.0 ]
//!   omega: 0.0
//!   radius: 0.3
//!   density: 5.0
//!
//! debris:
//!   count: 20
//!   density: 30.0
//!   min_radius: 0.08
//!   max_radius: 0.3
//!   speed_floor: 0.25
//!   speed_jitter: 0.25
//!   max_spin: 0.5
//!
//! target:
//!   x: [ 3.5, 1.5 ]
//!   radius: 0.5
//! ```

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::simulation::controls::Thrusters;
use crate::simulation::engine::{Engine, DEFAULT_RESTITUTION, DEFAULT_SUB_STEP};
use crate::simulation::params::{Bounds, DebrisParams, Parameters, ShipParams, TargetParams};
use crate::simulation::states::NVec2;

/// What to do when two bodies share the exact same center
/// degenerate_contact: "skip"` or `degenerate_contact: "fixed_normal"
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateContactConfig {
    #[default]
    #[serde(rename = "skip")] // Leave both bodies untouched for this sub-step
    Skip,

    #[serde(rename = "fixed_normal")] // Push apart and apply the impulse along +x
    FixedNormal,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub sub_step: f64, // fixed step, seconds
    pub restitution: f64, // elasticity of every contact
    pub degenerate_contact: DegenerateContactConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sub_step: DEFAULT_SUB_STEP,
            restitution: DEFAULT_RESTITUTION,
            degenerate_contact: DegenerateContactConfig::Skip,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct BoundsConfig {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            min_x: -5.0,
            max_x: 5.0,
            min_y: -3.0,
            max_y: 3.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct ThrustersConfig {
    pub linear_acc: f64, // forward/backward acceleration while held
    pub angular_acc: f64, // angular acceleration while turning
}

impl Default for ThrustersConfig {
    fn default() -> Self {
        Self {
            linear_acc: 0.25,
            angular_acc: 1.0,
        }
    }
}

/// Global parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub seed: u64, // deterministic seed to make runs reproducable
    pub bounds: BoundsConfig, // domain rectangle
    pub thrusters: ThrustersConfig, // input strengths
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bounds: BoundsConfig::default(),
            thrusters: ThrustersConfig::default(),
        }
    }
}

/// Spawn state of the ship
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ShipConfig {
    pub x: [f64; 2], // spawn position
    pub v: [f64; 2], // spawn velocity
    pub omega: f64, // spawn angular velocity
    pub radius: f64,
    pub density: f64, // mass per unit area
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            x: [-3.5, 0.0],
            v: [0.0, 0.0],
            omega: 0.0,
            radius: 0.3,
            density: 5.0,
        }
    }
}

/// Distribution of the randomly generated debris field
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DebrisConfig {
    pub count: usize,
    pub density: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub speed_floor: f64, // minimum magnitude of each non-zero velocity component
    pub speed_jitter: f64, // random spread added on top of the floor
    pub max_spin: f64, // initial angular velocity is drawn from [-max_spin, max_spin)
}

impl Default for DebrisConfig {
    fn default() -> Self {
        Self {
            count: 20,
            density: 30.0,
            min_radius: 0.08,
            max_radius: 0.3,
            speed_floor: 0.25,
            speed_jitter: 0.25,
            max_spin: 0.5,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TargetConfig {
    pub x: [f64; 2],
    pub radius: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            x: [3.5, 1.5],
            radius: 0.5,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Engine-level configuration
    pub parameters: ParametersConfig, // Bounds, thrusters, seed
    pub ship: ShipConfig,
    pub debris: DebrisConfig,
    pub target: TargetConfig,
}

impl ScenarioConfig {
    /// Parse and validate a YAML scenario
    pub fn from_yaml(src: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(src).context("malformed scenario YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations the simulation cannot run
    ///
    /// Everything the physics divides by (masses, moments of inertia, the
    /// sub-step used as loop increment) must come out strictly positive, and
    /// every number must be finite.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.numeric_fields() {
            ensure!(value.is_finite(), "{} must be finite, got {}", name, value);
        }

        let e = &self.engine;
        ensure!(e.sub_step > 0.0, "engine.sub_step must be positive, got {}", e.sub_step);
        ensure!(
            (0.0..=1.0).contains(&e.restitution),
            "engine.restitution must lie in [0, 1], got {}",
            e.restitution
        );

        let b = &self.parameters.bounds;
        ensure!(b.min_x < b.max_x, "bounds: min_x ({}) must be below max_x ({})", b.min_x, b.max_x);
        ensure!(b.min_y < b.max_y, "bounds: min_y ({}) must be below max_y ({})", b.min_y, b.max_y);

        let s = &self.ship;
        ensure!(s.radius > 0.0, "ship.radius must be positive, got {}", s.radius);
        ensure!(s.density > 0.0, "ship.density must be positive, got {}", s.density);
        ensure!(
            self.bounds().contains(&NVec2::new(s.x[0], s.x[1])),
            "ship spawns at ({}, {}), outside the bounds",
            s.x[0],
            s.x[1]
        );

        let d = &self.debris;
        ensure!(d.density > 0.0, "debris.density must be positive, got {}", d.density);
        ensure!(d.min_radius > 0.0, "debris.min_radius must be positive, got {}", d.min_radius);
        ensure!(
            d.min_radius <= d.max_radius,
            "debris.min_radius ({}) exceeds debris.max_radius ({})",
            d.min_radius,
            d.max_radius
        );
        ensure!(d.speed_floor >= 0.0, "debris.speed_floor must not be negative");
        ensure!(d.speed_jitter >= 0.0, "debris.speed_jitter must not be negative");
        ensure!(d.max_spin >= 0.0, "debris.max_spin must not be negative");

        ensure!(self.target.radius > 0.0, "target.radius must be positive, got {}", self.target.radius);
        Ok(())
    }

    // every float in the document, with its YAML path
    fn numeric_fields(&self) -> [(&'static str, f64); 24] {
        let (e, p, s, d, t) = (&self.engine, &self.parameters, &self.ship, &self.debris, &self.target);
        [
            ("engine.sub_step", e.sub_step),
            ("engine.restitution", e.restitution),
            ("parameters.bounds.min_x", p.bounds.min_x),
            ("parameters.bounds.max_x", p.bounds.max_x),
            ("parameters.bounds.min_y", p.bounds.min_y),
            ("parameters.bounds.max_y", p.bounds.max_y),
            ("parameters.thrusters.linear_acc", p.thrusters.linear_acc),
            ("parameters.thrusters.angular_acc", p.thrusters.angular_acc),
            ("ship.x[0]", s.x[0]),
            ("ship.x[1]", s.x[1]),
            ("ship.v[0]", s.v[0]),
            ("ship.v[1]", s.v[1]),
            ("ship.omega", s.omega),
            ("ship.radius", s.radius),
            ("ship.density", s.density),
            ("debris.density", d.density),
            ("debris.min_radius", d.min_radius),
            ("debris.max_radius", d.max_radius),
            ("debris.speed_floor", d.speed_floor),
            ("debris.speed_jitter", d.speed_jitter),
            ("debris.max_spin", d.max_spin),
            ("target.x[0]", t.x[0]),
            ("target.x[1]", t.x[1]),
            ("target.radius", t.radius),
        ]
    }

    pub fn bounds(&self) -> Bounds {
        let b = self.parameters.bounds;
        Bounds {
            min_x: b.min_x,
            max_x: b.max_x,
            min_y: b.min_y,
            max_y: b.max_y,
        }
    }

    /// Runtime engine settings
    pub fn engine(&self) -> Engine {
        Engine {
            sub_step: self.engine.sub_step,
            restitution: self.engine.restitution,
            degenerate: self.engine.degenerate_contact,
        }
    }

    /// Runtime parameters
    pub fn parameters(&self) -> Parameters {
        let (s, d, t) = (&self.ship, &self.debris, &self.target);
        Parameters {
            bounds: self.bounds(),
            ship: ShipParams {
                x: NVec2::new(s.x[0], s.x[1]),
                v: NVec2::new(s.v[0], s.v[1]),
                omega: s.omega,
                radius: s.radius,
                density: s.density,
            },
            debris: DebrisParams {
                count: d.count,
                density: d.density,
                min_radius: d.min_radius,
                max_radius: d.max_radius,
                speed_floor: d.speed_floor,
                speed_jitter: d.speed_jitter,
                max_spin: d.max_spin,
            },
            target: TargetParams {
                x: NVec2::new(t.x[0], t.x[1]),
                radius: t.radius,
            },
            thrusters: Thrusters {
                linear_acc: self.parameters.thrusters.linear_acc,
                angular_acc: self.parameters.thrusters.angular_acc,
            },
            seed: self.parameters.seed,
        }
    }
}
