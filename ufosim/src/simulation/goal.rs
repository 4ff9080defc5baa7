//! Landing condition for the ship

use super::states::{Body, Target};

/// Upper bound compared against the ship's squared linear speed
pub const LANDING_SPEED_LIMIT: f64 = 0.1;

/// Upper bound for the ship's signed angular velocity
pub const LANDING_SPIN_LIMIT: f64 = 0.1;

/// True when the ship sits on the target, nearly at rest and barely spinning
///
/// Both the distance and the speed tests compare a squared quantity against
/// an unsquared limit, and the spin test compares the signed angular
/// velocity, so any clockwise spin passes. That mirrors the game this models
/// and is kept as is.
pub fn ship_has_landed(ship: &Body, target: &Target) -> bool {
    let d2 = (ship.x - target.x).norm_squared();
    d2 < target.radius && ship.speed2() < LANDING_SPEED_LIMIT && ship.omega < LANDING_SPIN_LIMIT
}
