//! Circle-circle contact detection and resolution
//!
//! Each overlapping pair is handled in two independent stages:
//! 1. positional projection, splitting the penetration evenly so the two
//!    circles end up exactly touching,
//! 2. a linear impulse along the contact normal with a fixed restitution.
//!
//! Collisions never change angular state.

use tracing::warn;

use crate::configuration::config::DegenerateContactConfig;

use super::engine::Engine;
use super::states::{Body, NVec2};

/// Outcome of testing one pair of bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// Not overlapping; neither body was touched
    Separate,
    /// Overlap removed and impulse applied
    Resolved { penetration: f64, impulse: f64 },
    /// Centers coincide so no normal exists. `resolved` tells whether the
    /// pair was pushed apart along the fallback normal or left alone
    Degenerate { resolved: bool },
}

impl Contact {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Contact::Resolved { .. } | Contact::Degenerate { resolved: true })
    }
}

/// Fallback normal used by [`DegenerateContactConfig::FixedNormal`]
pub fn fallback_normal() -> NVec2 {
    NVec2::new(1.0, 0.0)
}

/// Detect and resolve a contact between `a` and `b` in place
///
/// The normal points from `a` toward `b`. The impulse is applied whether or
/// not the pair is already separating along the normal.
pub fn resolve_pair(a: &mut Body, b: &mut Body, engine: &Engine) -> Contact {
    let delta = b.x - a.x;
    let distance = delta.norm();
    let min_distance = a.radius() + b.radius();

    if distance >= min_distance {
        return Contact::Separate;
    }

    if distance == 0.0 {
        return match engine.degenerate {
            DegenerateContactConfig::Skip => {
                warn!(x = a.x.x, y = a.x.y, "coincident centers, contact skipped");
                Contact::Degenerate { resolved: false }
            }
            DegenerateContactConfig::FixedNormal => {
                warn!(x = a.x.x, y = a.x.y, "coincident centers, resolving along fallback normal");
                separate_along(a, b, fallback_normal(), min_distance, engine.restitution);
                Contact::Degenerate { resolved: true }
            }
        };
    }

    let normal = delta / distance;
    let penetration = min_distance - distance;
    let impulse = separate_along(a, b, normal, penetration, engine.restitution);

    Contact::Resolved {
        penetration,
        impulse,
    }
}

// Projects the pair apart by `penetration` and applies the restitution
// impulse along the unit `normal`. Returns the impulse magnitude J.
fn separate_along(a: &mut Body, b: &mut Body, normal: NVec2, penetration: f64, e: f64) -> f64 {
    let half = 0.5 * penetration;
    a.x -= half * normal;
    b.x += half * normal;

    // closing speed along the normal
    let vn = (a.v - b.v).dot(&normal);

    // |n|^2 == 1, so the denominator is just the inverse mass sum
    let inv_mass_sum = a.mass().recip() + b.mass().recip();
    let j = -(1.0 + e) * vn / inv_mass_sum;

    a.v += (j / a.mass()) * normal;
    b.v -= (j / b.mass()) * normal;

    j
}
