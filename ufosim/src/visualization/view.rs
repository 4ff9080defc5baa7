//! Read-only render extract
//!
//! A renderer never touches the simulation directly. After the sub-steps of
//! a frame are done it captures a `SceneView` and draws circles from it.

use serde::Serialize;

use crate::simulation::goal::ship_has_landed;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, Target};

/// What a renderer needs to draw one body
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub x: f64,
    pub y: f64,
    pub alpha: f64, // orientation, radians
    pub radius: f64,
}

impl From<&Body> for BodyView {
    fn from(b: &Body) -> Self {
        Self {
            x: b.x.x,
            y: b.x.y,
            alpha: b.alpha,
            radius: b.radius(),
        }
    }
}

impl From<&Target> for BodyView {
    fn from(t: &Target) -> Self {
        Self {
            x: t.x.x,
            y: t.x.y,
            alpha: 0.0,
            radius: t.radius,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SceneView {
    pub t: f64,
    pub ship: BodyView,
    pub debris: Vec<BodyView>,
    pub target: BodyView,
    pub landed: bool,
}

impl SceneView {
    pub fn capture(scenario: &Scenario) -> Self {
        let scene = &scenario.scene;
        Self {
            t: scene.t,
            ship: BodyView::from(&scene.ship),
            debris: scene.debris.iter().map(BodyView::from).collect(),
            target: BodyView::from(&scene.target),
            landed: ship_has_landed(&scene.ship, &scene.target),
        }
    }

    /// YAML rendering of the snapshot, for dumping from the CLI
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
