//! High-level runtime engine settings
//!
//! Selects the fixed sub-step, the restitution coefficient and what to do
//! with a degenerate (zero-distance) contact.

use crate::configuration::config::DegenerateContactConfig;

/// Default sub-step in seconds
pub const DEFAULT_SUB_STEP: f64 = 0.001;

/// Default restitution (elasticity) coefficient
pub const DEFAULT_RESTITUTION: f64 = 0.9;

#[derive(Debug, Clone)]
pub struct Engine {
    pub sub_step: f64, // fixed integration step, seconds
    pub restitution: f64, // 1.0 = perfectly elastic
    pub degenerate: DegenerateContactConfig, // skip or resolve along a fixed normal
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            sub_step: DEFAULT_SUB_STEP,
            restitution: DEFAULT_RESTITUTION,
            degenerate: DegenerateContactConfig::Skip,
        }
    }
}
