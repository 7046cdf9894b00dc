//! Gravity Hopper - a gravity-slingshot puzzle core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity physics, collisions, level state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input mapping, and HUD live in the host application; this crate
//! only consumes jump targets and frame deltas and emits kinematic state and
//! level outcomes.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep for the demo loop (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta the session will feed to the integrator
    pub const MAX_DT: f32 = 0.1;

    /// Playfield dimensions (origin at top-left, pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    /// Extra slack on every side before a drifting player counts as lost
    pub const OUT_OF_BOUNDS_MARGIN: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 12.0;
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 200.0);

    /// Impulse applied along the jump direction (pixels/s)
    pub const JUMP_FORCE: f32 = 500.0;
    /// Engine gravitational constant (pixels³/s² per unit body gravity)
    pub const GRAVITY_CONSTANT: f32 = 200.0;
    /// Per-frame velocity damping; bleeds energy so levels stay winnable
    pub const DAMPING: f32 = 0.99;
    /// Maximum player speed (pixels/s)
    pub const MAX_VELOCITY: f32 = 300.0;

    /// Jumps allowed per level attempt
    pub const JUMPS_PER_LEVEL: u32 = 5;

    /// Anchor ("home") body placed at the start of every level
    pub const ANCHOR_POSITION: Vec2 = Vec2::new(100.0, 200.0);
    pub const ANCHOR_RADIUS: f32 = 40.0;
    pub const ANCHOR_GRAVITY: f32 = 0.9;

    /// Goal body radius/gravity for procedural levels
    pub const GOAL_RADIUS: f32 = 45.0;
    pub const GOAL_GRAVITY: f32 = 1.2;
}

/// Axis-aligned rectangle, used for the playfield bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// The playfield at its reference dimensions
    pub fn playfield() -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(consts::PLAYFIELD_WIDTH, consts::PLAYFIELD_HEIGHT),
        }
    }

    /// Grow the rectangle by `margin` on every side
    #[inline]
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}
