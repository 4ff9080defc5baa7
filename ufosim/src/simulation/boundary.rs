//! Keeping bodies inside the domain rectangle
//!
//! The ship is replaced by a fresh copy of its template as soon as it leaves
//! the domain. Debris wraps each offending axis to the opposite edge and
//! keeps everything else.

use super::params::{Bounds, ShipParams};
use super::states::Body;

/// Wrap a debris body back into `bounds`, independently per axis.
/// Returns true when any coordinate was moved
pub fn wrap_debris(body: &mut Body, bounds: &Bounds) -> bool {
    let mut wrapped = false;

    if body.x.x < bounds.min_x {
        body.x.x = bounds.max_x;
        wrapped = true;
    } else if body.x.x > bounds.max_x {
        body.x.x = bounds.min_x;
        wrapped = true;
    }

    if body.x.y < bounds.min_y {
        body.x.y = bounds.max_y;
        wrapped = true;
    } else if body.x.y > bounds.max_y {
        body.x.y = bounds.min_y;
        wrapped = true;
    }

    wrapped
}

/// Reset the ship to its template if it left `bounds`.
/// Returns true when the ship was reset
pub fn reset_ship(ship: &mut Body, bounds: &Bounds, template: &ShipParams) -> bool {
    if bounds.contains(&ship.x) {
        return false;
    }
    *ship = template.spawn();
    true
}
