//! The jump impulse controller
//!
//! Converts a one-shot target point into an initial velocity. Pure: on success
//! the new player state and budget are returned together, so the caller can
//! never observe a half-applied jump between frames.

use glam::Vec2;
use thiserror::Error;

use super::state::{JumpBudget, PlayerState};
use crate::tuning::Tuning;

/// Ways a jump command can be refused; all leave state untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JumpError {
    /// The player is mid-flight; the input should be dropped
    #[error("already in flight")]
    AlreadyInFlight,
    /// Every jump in the budget has been spent
    #[error("jump budget exhausted")]
    BudgetExhausted,
    /// Target coincides with the player; no direction can be derived
    #[error("jump target coincides with player position")]
    DegenerateTarget,
}

/// Apply a jump impulse toward `target`.
///
/// A zero-length direction is rejected rather than normalized: propagating a
/// NaN velocity would corrupt every later frame.
pub fn jump(
    player: &PlayerState,
    target: Vec2,
    budget: &JumpBudget,
    tuning: &Tuning,
) -> Result<(PlayerState, JumpBudget), JumpError> {
    if player.is_jumping {
        return Err(JumpError::AlreadyInFlight);
    }
    if budget.exhausted() {
        return Err(JumpError::BudgetExhausted);
    }

    let dir = target - player.pos;
    if dir.length_squared() < f32::EPSILON {
        return Err(JumpError::DegenerateTarget);
    }

    let player = PlayerState {
        vel: dir.normalize() * tuning.jump_force,
        is_jumping: true,
        landed_on: None,
        // The launch body gets landing immunity until its overlap clears
        departing_from: player.landed_on,
        ..*player
    };
    let budget = JumpBudget {
        used: budget.used + 1,
        max: budget.max,
    };
    Ok((player, budget))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::JUMP_FORCE;

    fn resting() -> PlayerState {
        PlayerState {
            pos: Vec2::new(100.0, 200.0),
            vel: Vec2::ZERO,
            radius: 12.0,
            is_jumping: false,
            landed_on: Some(0),
            departing_from: None,
        }
    }

    #[test]
    fn test_jump_sets_velocity_toward_target() {
        let budget = JumpBudget::new(5);
        let (player, budget) = jump(
            &resting(),
            Vec2::new(400.0, 200.0),
            &budget,
            &Tuning::default(),
        )
        .unwrap();

        assert_eq!(player.vel, Vec2::new(JUMP_FORCE, 0.0));
        assert!(player.is_jumping);
        assert_eq!(player.landed_on, None);
        assert_eq!(player.departing_from, Some(0));
        assert_eq!(budget.used, 1);
    }

    #[test]
    fn test_direction_is_normalized() {
        let budget = JumpBudget::new(5);
        let (player, _) = jump(
            &resting(),
            Vec2::new(103.0, 204.0),
            &budget,
            &Tuning::default(),
        )
        .unwrap();

        assert!((player.vel.length() - JUMP_FORCE).abs() < 1e-3);
        // 3-4-5 triangle
        assert!((player.vel.x - JUMP_FORCE * 0.6).abs() < 1e-3);
        assert!((player.vel.y - JUMP_FORCE * 0.8).abs() < 1e-3);
    }

    #[test]
    fn test_already_in_flight_leaves_state_unchanged() {
        let mut player = resting();
        player.is_jumping = true;
        player.landed_on = None;
        player.vel = Vec2::new(50.0, 50.0);
        let budget = JumpBudget::new(5);

        let err = jump(&player, Vec2::new(400.0, 200.0), &budget, &Tuning::default()).unwrap_err();
        assert_eq!(err, JumpError::AlreadyInFlight);
        // Inputs are borrowed; nothing could have mutated
        assert_eq!(player.vel, Vec2::new(50.0, 50.0));
        assert_eq!(budget.used, 0);
    }

    #[test]
    fn test_exhausted_budget_refused() {
        let budget = JumpBudget { used: 5, max: 5 };
        let err = jump(
            &resting(),
            Vec2::new(400.0, 200.0),
            &budget,
            &Tuning::default(),
        )
        .unwrap_err();
        assert_eq!(err, JumpError::BudgetExhausted);
        assert_eq!(budget.used, 5);
    }

    #[test]
    fn test_degenerate_target_refused() {
        let player = resting();
        let budget = JumpBudget::new(5);
        let err = jump(&player, player.pos, &budget, &Tuning::default()).unwrap_err();
        assert_eq!(err, JumpError::DegenerateTarget);
    }

    #[test]
    fn test_budget_monotonic_and_bounded() {
        let tuning = Tuning::default();
        let mut player = resting();
        let mut budget = JumpBudget::new(2);

        for expected in 1..=2 {
            let (p, b) = jump(&player, Vec2::new(400.0, 200.0), &budget, &tuning).unwrap();
            assert_eq!(b.used, expected);
            // Simulate a landing so the next jump is allowed
            player = PlayerState {
                is_jumping: false,
                landed_on: Some(0),
                ..p
            };
            budget = b;
        }

        let err = jump(&player, Vec2::new(400.0, 200.0), &budget, &tuning).unwrap_err();
        assert_eq!(err, JumpError::BudgetExhausted);
        assert_eq!(budget.used, budget.max);
    }
}
