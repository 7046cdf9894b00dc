//! Contact detection and outcome resolution
//!
//! Runs once per frame, immediately after the integrator. Evaluation order is
//! fixed and load-bearing: goal contact wins over a landing even when both
//! overlap in the same frame, and a bounds exit loses regardless of remaining
//! jumps.

use glam::Vec2;

use super::body::BodyRegistry;
use super::state::{DefeatReason, JumpBudget, LevelOutcome, PlayerState};
use crate::Rect;
use crate::consts::OUT_OF_BOUNDS_MARGIN;

/// Resolve contacts and derive this frame's outcome.
///
/// `bounds` is the raw playfield; the fixed out-of-bounds margin is applied
/// here. Bodies are tested in registry order and the first matching rule wins.
pub fn resolve(
    player: PlayerState,
    bodies: &BodyRegistry,
    budget: &JumpBudget,
    bounds: Rect,
) -> (PlayerState, LevelOutcome) {
    // Goal contact always wins, even mid-flight
    for body in bodies.iter() {
        if body.is_goal && body.overlaps(player.pos, player.radius) {
            return (
                player,
                LevelOutcome::Victory {
                    jumps_used: budget.used,
                },
            );
        }
    }

    if !bounds.expand(OUT_OF_BOUNDS_MARGIN).contains(player.pos) {
        return (
            player,
            LevelOutcome::Defeat {
                reason: DefeatReason::OutOfBounds,
            },
        );
    }

    let mut player = player;

    // Departure grace ends the moment the launch body's overlap breaks; after
    // that it is landable again like any other body
    if let Some(id) = player.departing_from {
        let still_inside = bodies
            .get(id)
            .is_some_and(|b| b.overlaps(player.pos, player.radius));
        if !still_inside {
            player.departing_from = None;
        }
    }

    for body in bodies.iter() {
        let new_landing = player.is_jumping
            && player.landed_on != Some(body.id)
            && player.departing_from != Some(body.id)
            && !body.is_goal;
        if new_landing && body.overlaps(player.pos, player.radius) {
            // Landing fully arrests momentum; the rest between jumps is the
            // core mechanic, so no bounce and no residual velocity
            player.vel = Vec2::ZERO;
            player.is_jumping = false;
            player.landed_on = Some(body.id);
            player.departing_from = None;
            break;
        }
    }

    // Settled with nothing left to spend: the attempt is over
    if !player.is_jumping && budget.exhausted() {
        return (
            player,
            LevelOutcome::Defeat {
                reason: DefeatReason::JumpsExhausted,
            },
        );
    }

    (player, LevelOutcome::InProgress)
}
