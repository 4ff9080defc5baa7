//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - scene state (`Scene` with ship, debris and target at t = 0)
//!
//! Debris is drawn from a `ChaCha20Rng` seeded with `Parameters::seed`, so
//! one configuration always yields the same field.

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::controls::Key;
use crate::simulation::engine::Engine;
use crate::simulation::params::{Bounds, DebrisParams, Parameters};
use crate::simulation::states::{Body, NVec2, Scene};
use crate::simulation::step::{advance_frame, perform_step, FrameReport, StepReport};

/// The runtime bundle: engine settings, parameters and the current scene
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub scene: Scene,
}

impl Scenario {
    /// Validate `cfg` and build the initial scene from it
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        let engine = cfg.engine();
        let parameters = cfg.parameters();
        let mut rng = ChaCha20Rng::seed_from_u64(parameters.seed);

        let scene = Scene::new(
            parameters.ship.spawn(),
            spawn_debris(&parameters.debris, &parameters.bounds, &mut rng),
            parameters.target.place(),
        );
        debug!(
            debris = scene.debris.len(),
            seed = parameters.seed,
            sub_step = engine.sub_step,
            "scenario built"
        );

        Ok(Self {
            engine,
            parameters,
            scene,
        })
    }

    /// Assemble a scenario from an already constructed scene
    pub fn from_scene(engine: Engine, parameters: Parameters, scene: Scene) -> Self {
        Self {
            engine,
            parameters,
            scene,
        }
    }

    /// One sub-step of the engine's fixed length
    pub fn step(&mut self) -> StepReport {
        perform_step(&mut self.scene, &self.engine, &self.parameters, self.engine.sub_step)
    }

    /// Cover `frame_dt` seconds with fixed sub-steps
    pub fn advance(&mut self, frame_dt: f64) -> FrameReport {
        advance_frame(self, frame_dt)
    }

    pub fn press(&mut self, key: Key) {
        self.parameters.thrusters.press(&mut self.scene.ship, key);
    }

    pub fn release(&mut self, key: Key) {
        self.parameters.thrusters.release(&mut self.scene.ship, key);
    }
}

/// Draw `params.count` debris bodies uniformly inside `bounds`
pub fn spawn_debris<R: Rng>(params: &DebrisParams, bounds: &Bounds, rng: &mut R) -> Vec<Body> {
    (0..params.count)
        .map(|_| {
            let x = NVec2::new(
                uniform(rng, bounds.min_x, bounds.max_x),
                uniform(rng, bounds.min_y, bounds.max_y),
            );
            let v = NVec2::new(
                floored_speed(rng, params.speed_jitter, params.speed_floor),
                floored_speed(rng, params.speed_jitter, params.speed_floor),
            );
            let radius = uniform(rng, params.min_radius, params.max_radius);
            let omega = uniform(rng, -params.max_spin, params.max_spin);
            Body::new(x, v, omega, radius, params.density)
        })
        .collect()
}

// uniform in [lo, hi); degenerate ranges collapse to `lo`
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + rng.gen::<f64>() * (hi - lo)
}

// u in [-jitter, jitter), then pushed `floor` further away from zero.
// An exact zero stays zero.
fn floored_speed<R: Rng>(rng: &mut R, jitter: f64, floor: f64) -> f64 {
    let u = uniform(rng, -jitter, jitter);
    if u == 0.0 {
        0.0
    } else {
        u + u.signum() * floor
    }
}
