//! Fixed-step time integration of a single body
//!
//! Semi-implicit (symplectic) Euler for both the linear and the angular
//! state, driven by the force and torque the input layer left on the body.

use super::states::Body;

/// Advance one body by `dt` using symplectic Euler
///
/// Velocities are updated first and the *new* velocities move the position
/// and orientation. `f` and `torque` are only read; they persist until the
/// input layer changes them.
pub fn symplectic_euler(body: &mut Body, dt: f64) {
    // Linear: v_n+1 = v_n + dt * F / m, x_n+1 = x_n + dt * v_n+1
    let a = body.f / body.mass();
    body.v += dt * a;
    body.x += dt * body.v;

    // Angular: w_n+1 = w_n + dt * tau / I, alpha_n+1 = alpha_n + dt * w_n+1
    let ang_acc = body.torque / body.moment_of_inertia();
    body.omega += dt * ang_acc;
    body.alpha += dt * body.omega;
}
