//! Per-frame session tick
//!
//! Drives one frame in the fixed order the core depends on: jump command,
//! integrator, contact resolution. Outcome transitions happen synchronously
//! here, never via scheduled callbacks.

use glam::Vec2;

use super::collision;
use super::jump;
use super::physics;
use super::state::{LevelOutcome, LevelSession};

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// One-shot jump command, already resolved to a playfield point
    pub jump_target: Option<Vec2>,
    /// Rebuild the level from scratch
    pub restart: bool,
}

/// Advance the session by one frame and return the frame's outcome.
///
/// `dt` is clamped here to the tuning bound before it reaches the integrator;
/// a terminal session stays frozen until `restart` is requested.
pub fn tick(session: &mut LevelSession, input: &TickInput, dt: f32) -> LevelOutcome {
    if input.restart {
        session.restart();
    }

    if session.outcome.is_terminal() {
        return session.outcome;
    }

    let dt = if dt.is_finite() {
        dt.clamp(0.0, session.tuning.max_dt)
    } else {
        0.0
    };

    // Jump command is applied atomically before the integrator consumes the
    // new velocity: either both player and budget change, or neither does
    if let Some(target) = input.jump_target {
        match jump::jump(&session.player, target, &session.budget, &session.tuning) {
            Ok((player, budget)) => {
                session.player = player;
                session.budget = budget;
                log::debug!(
                    "jump {}/{} toward ({:.0}, {:.0})",
                    session.budget.used,
                    session.budget.max,
                    target.x,
                    target.y
                );
            }
            // Recoverable: the input is dropped, defeat (if any) arrives
            // through the normal outcome channel
            Err(err) => log::debug!("jump refused: {err}"),
        }
    }

    session.time_ticks += 1;

    session.player = physics::advance(&session.player, &session.bodies, dt, &session.tuning);
    let (player, outcome) = collision::resolve(
        session.player,
        &session.bodies,
        &session.budget,
        session.loss_bounds(),
    );
    session.player = player;

    if outcome.is_terminal() && !session.outcome.is_terminal() {
        log::info!(
            "level {} ended after {} ticks: {:?}",
            session.level_index,
            session.time_ticks,
            outcome
        );
    }
    session.outcome = outcome;
    outcome
}
