//! Scene orchestration
//!
//! `perform_step` advances the scene by exactly one fixed sub-step:
//! integrate, resolve contacts, enforce the domain. `advance_frame` drives
//! it from a variable-rate external clock by running as many sub-steps as
//! fit into the frame delta.

use tracing::{debug, info, trace};

use super::boundary::{reset_ship, wrap_debris};
use super::collision::{resolve_pair, Contact};
use super::engine::Engine;
use super::goal::ship_has_landed;
use super::integrator::symplectic_euler;
use super::params::Parameters;
use super::scenario::Scenario;
use super::states::Scene;

/// What happened during one sub-step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub contacts: usize, // pairs that overlapped and were resolved
    pub degenerate: usize, // pairs with coincident centers
    pub wraps: usize, // debris bodies wrapped to the opposite edge
    pub ship_reset: bool, // ship left the domain and was respawned
}

impl StepReport {
    fn record(&mut self, contact: Contact) {
        match contact {
            Contact::Separate => {}
            Contact::Resolved { .. } => self.contacts += 1,
            Contact::Degenerate { resolved } => {
                self.degenerate += 1;
                if resolved {
                    self.contacts += 1;
                }
            }
        }
    }
}

/// Accumulated statistics for one rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub sub_steps: usize,
    pub contacts: usize,
    pub degenerate: usize,
    pub wraps: usize,
    pub ship_resets: usize,
    pub landed: bool, // landing condition after the last sub-step
}

impl FrameReport {
    fn absorb(&mut self, step: &StepReport) {
        self.sub_steps += 1;
        self.contacts += step.contacts;
        self.degenerate += step.degenerate;
        self.wraps += step.wraps;
        self.ship_resets += usize::from(step.ship_reset);
    }
}

/// Advance the scene by one sub-step of length `dt`
///
/// Order is fixed: ship then debris for integration; every debris against
/// the ship, then every unordered debris pair exactly once; finally the
/// domain is enforced. `dt` must not exceed the engine's sub-step.
pub fn perform_step(scene: &mut Scene, engine: &Engine, params: &Parameters, dt: f64) -> StepReport {
    debug_assert!(dt > 0.0 && dt <= engine.sub_step, "sub-step {} outside (0, {}]", dt, engine.sub_step);
    let mut report = StepReport::default();

    symplectic_euler(&mut scene.ship, dt);
    for b in scene.debris.iter_mut() {
        symplectic_euler(b, dt);
    }

    for b in scene.debris.iter_mut() {
        report.record(resolve_pair(b, &mut scene.ship, engine));
    }

    // all pairs (i, j) with i < j, no broad phase
    let n = scene.debris.len();
    for i in 0..n {
        let (head, tail) = scene.debris.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            report.record(resolve_pair(a, b, engine));
        }
    }

    if reset_ship(&mut scene.ship, &params.bounds, &params.ship) {
        info!(t = scene.t, "ship left the domain, respawned");
        report.ship_reset = true;
    }
    for b in scene.debris.iter_mut() {
        if wrap_debris(b, &params.bounds) {
            report.wraps += 1;
        }
    }

    scene.t += dt;

    trace!(
        t = scene.t,
        contacts = report.contacts,
        degenerate = report.degenerate,
        wraps = report.wraps,
        "sub-step done"
    );
    report
}

/// Run fixed sub-steps until `frame_dt` seconds of simulated time are
/// covered, then evaluate the landing condition
///
/// Sub-steps are counted by accumulating the sub-step length, so a frame
/// runs roughly `ceil(frame_dt / sub_step)` steps and none at all for a
/// non-positive delta.
pub fn advance_frame(scenario: &mut Scenario, frame_dt: f64) -> FrameReport {
    let Scenario {
        engine,
        parameters,
        scene,
        ..
    } = scenario;

    let mut frame = FrameReport::default();
    let dt = engine.sub_step;
    let mut elapsed = 0.0;
    while elapsed < frame_dt {
        let step = perform_step(scene, engine, parameters, dt);
        frame.absorb(&step);
        elapsed += dt;
    }

    frame.landed = ship_has_landed(&scene.ship, &scene.target);
    if frame.landed {
        debug!(t = scene.t, "ship is on the target");
    }
    frame
}
