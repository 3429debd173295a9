//! Damped spring integrator for UI values.
//!
//! Force model: `F = -k·x - c·v`, integrated with semi-implicit Euler in fixed
//! sub-steps so large frame gaps stay stable. Changing the target keeps the
//! current position and velocity, so an in-flight motion bends toward the new
//! target instead of restarting.

use contracts::SpringConfig;
use std::time::Duration;

/// Largest frame gap fed into the integrator; longer stalls (tab in background)
/// are treated as this long instead of teleporting the value.
const MAX_FRAME: f64 = 0.064;
const SUB_STEP: f64 = 1.0 / 240.0;
/// At rest once closer than this to the target...
const REST_DISPLACEMENT: f64 = 0.01;
/// ...and slower than this, in units per second.
const REST_VELOCITY: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
    rest_displacement: f64,
    rest_velocity: f64,
}

impl Spring {
    /// A spring at rest on `value`.
    pub fn at_rest(value: f64, config: SpringConfig) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            config,
            rest_displacement: REST_DISPLACEMENT,
            rest_velocity: REST_VELOCITY,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < self.rest_displacement
            && self.velocity.abs() < self.rest_velocity
    }

    /// Re-aims the spring; position and velocity are kept.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn snap_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Stops the spring where it currently is.
    pub fn freeze(&mut self) {
        self.target = self.position;
        self.velocity = 0.0;
    }

    /// Advances the simulation and returns the new position.
    pub fn step(&mut self, dt: Duration) -> f64 {
        if self.is_settled() {
            self.snap_to(self.target);
            return self.position;
        }

        let SpringConfig {
            damping,
            stiffness,
            mass,
        } = self.config;
        if !(damping >= 0.0 && stiffness > 0.0 && mass > 0.0) {
            self.snap_to(self.target);
            return self.position;
        }

        let mut remaining = dt.as_secs_f64().clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(SUB_STEP);
            let displacement = self.position - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() || !self.position.is_finite() || !self.velocity.is_finite() {
            self.snap_to(self.target);
        }
        self.position
    }
}
