//! Per-frame physics integration
//!
//! Literal pairwise superposition over every body, then damping, speed clamp,
//! and a semi-implicit Euler position update. The caller is responsible for
//! clamping `dt` (the session tick does); a huge step here can tunnel through
//! bodies.

use glam::Vec2;

use super::body::BodyRegistry;
use super::state::PlayerState;
use crate::tuning::Tuning;

/// Advance the player by one frame under gravity from all bodies.
///
/// `is_jumping` and `landed_on` are untouched; contact resolution owns those.
pub fn advance(player: &PlayerState, bodies: &BodyRegistry, dt: f32, tuning: &Tuning) -> PlayerState {
    let mut accel = Vec2::ZERO;

    for body in bodies.iter() {
        let d = body.pos - player.pos;
        let dist_sq = d.length_squared();
        let contact = body.radius + player.radius;

        // A body already in contact contributes no force; without this the
        // inverse-square term blows up as r -> 0
        if dist_sq < contact * contact {
            continue;
        }

        accel += tuning.gravity_constant * body.gravity / dist_sq * d.normalize_or_zero();
    }

    // Contain numeric degeneracy locally: one NaN frame would poison every
    // frame after it
    if !accel.is_finite() {
        accel = Vec2::ZERO;
    }

    let mut vel = (player.vel + accel * dt) * tuning.damping;
    let speed = vel.length();
    if speed > tuning.max_velocity {
        vel = vel.normalize_or_zero() * tuning.max_velocity;
    }
    if !vel.is_finite() {
        vel = Vec2::ZERO;
    }

    PlayerState {
        pos: player.pos + vel * dt,
        vel,
        ..*player
    }
}
