//! Input layer: turns held keys into force and torque on the ship
//!
//! Pressing a key overwrites the matching channel (force or torque);
//! releasing it zeroes that channel. Thrust direction is taken from the
//! ship's orientation at the moment of the press and is not re-aimed while
//! the key stays down.

use super::states::{Body, NVec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Key {
    Forward,
    Back,
    TurnLeft,
    TurnRight,
}

/// Strength of the ship's thrusters, expressed as accelerations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thrusters {
    pub linear_acc: f64,
    pub angular_acc: f64,
}

impl Thrusters {
    pub fn press(&self, ship: &mut Body, key: Key) {
        // force scaled by mass so the requested acceleration is body-independent
        let heading = NVec2::new(ship.alpha.cos(), ship.alpha.sin());
        let thrust = self.linear_acc * ship.mass();
        let spin = self.angular_acc * ship.moment_of_inertia();

        match key {
            Key::Forward => ship.f = thrust * heading,
            Key::Back => ship.f = -thrust * heading,
            Key::TurnLeft => ship.torque = spin,
            Key::TurnRight => ship.torque = -spin,
        }
    }

    pub fn release(&self, ship: &mut Body, key: Key) {
        match key {
            Key::Forward | Key::Back => ship.f = NVec2::zeros(),
            Key::TurnLeft | Key::TurnRight => ship.torque = 0.0,
        }
    }
}
