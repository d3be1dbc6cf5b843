//! The particle value type and its integration step.

use crate::vec2::Vec2;

/// A single simulated particle.
///
/// Plain trivially-copyable aggregate: position, velocity, acceleration,
/// remaining lifetime in seconds, and an alive flag. Owns no resources;
/// storage layouts decide how collections of these are arranged in memory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// World-space position.
    pub position: Vec2,
    /// Velocity in world units per second.
    pub velocity: Vec2,
    /// Acceleration in world units per second squared.
    pub acceleration: Vec2,
    /// Seconds of life remaining. Crossing zero kills the particle.
    pub lifetime: f32,
    /// Dead particles are never advanced again until reused.
    pub alive: bool,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            lifetime: 0.0,
            alive: true,
        }
    }
}

impl Particle {
    /// Create an alive particle from its kinematic state.
    pub fn new(position: Vec2, velocity: Vec2, acceleration: Vec2, lifetime: f32) -> Self {
        Self {
            position,
            velocity,
            acceleration,
            lifetime,
            alive: true,
        }
    }

    /// Full-state clear: zero position, velocity, and acceleration,
    /// lifetime back to zero, alive again.
    ///
    /// This is a clear, not a respawn — callers that want a fresh
    /// particle assign new kinematics afterwards.
    pub fn reset(&mut self) {
        self.position = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
        self.lifetime = 0.0;
        self.alive = true;
    }

    /// Mark the particle dead. No other state changes.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Advance one step of semi-implicit Euler. No-op when dead.
    ///
    /// Velocity integrates acceleration first, then position integrates
    /// the updated velocity. A lifetime that reaches or crosses zero
    /// kills the particle at the end of the step.
    pub fn update(&mut self, dt: f32) {
        if !self.alive {
            return;
        }

        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;

        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            self.alive = false;
        }
    }
}
