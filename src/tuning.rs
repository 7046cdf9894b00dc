//! Data-driven game balance
//!
//! Defaults reproduce the reference constants exactly; a host can override
//! individual values from JSON without recompiling.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and budget balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Impulse applied along the jump direction (pixels/s)
    pub jump_force: f32,
    /// Engine gravitational constant
    pub gravity_constant: f32,
    /// Per-frame velocity damping factor
    pub damping: f32,
    /// Maximum player speed (pixels/s)
    pub max_velocity: f32,
    /// Largest frame delta fed to the integrator
    pub max_dt: f32,
    /// Jumps allowed per level attempt
    pub jumps_per_level: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            jump_force: JUMP_FORCE,
            gravity_constant: GRAVITY_CONSTANT,
            damping: DAMPING,
            max_velocity: MAX_VELOCITY,
            max_dt: MAX_DT,
            jumps_per_level: JUMPS_PER_LEVEL,
        }
    }
}
