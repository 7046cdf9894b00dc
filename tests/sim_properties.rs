//! Property tests for the simulation core.
//!
//! Random player states, bodies, and frame deltas are fed through the
//! integrator and jump controller to verify the numeric invariants hold for
//! any input, not just the hand-picked cases in the unit tests.

use glam::Vec2;
use gravity_hopper::Tuning;
use gravity_hopper::sim::{
    Body, BodyRegistry, JumpBudget, JumpError, PlayerState, advance, jump,
};
use proptest::prelude::*;

/// Strategy that generates finite f32 values in a playfield-ish range
fn coord() -> impl Strategy<Value = f32> {
    (-100_000i32..100_000i32).prop_map(|v| v as f32 * 0.01)
}

/// Velocity components up to well past the speed clamp
fn vel_component() -> impl Strategy<Value = f32> {
    (-200_000i32..200_000i32).prop_map(|v| v as f32 * 0.01)
}

fn body_strategy(id: u32, is_goal: bool) -> impl Strategy<Value = Body> {
    (coord(), coord(), 5.0f32..80.0, 0.0f32..5.0).prop_map(move |(x, y, radius, gravity)| Body {
        id,
        pos: Vec2::new(x, y),
        radius,
        gravity,
        is_goal,
        name: format!("Body {id}"),
    })
}

fn registry_strategy() -> impl Strategy<Value = BodyRegistry> {
    (
        prop::collection::vec(body_strategy(0, false), 0..6),
        body_strategy(99, true),
    )
        .prop_map(|(mut bodies, goal)| {
            for (i, body) in bodies.iter_mut().enumerate() {
                body.id = i as u32;
            }
            bodies.push(goal);
            BodyRegistry::new(bodies, 1, 0)
        })
}

fn player_strategy() -> impl Strategy<Value = PlayerState> {
    (coord(), coord(), vel_component(), vel_component()).prop_map(|(x, y, dx, dy)| PlayerState {
        pos: Vec2::new(x, y),
        vel: Vec2::new(dx, dy),
        radius: 12.0,
        is_jumping: true,
        landed_on: None,
        departing_from: None,
    })
}

proptest! {
    #[test]
    fn advance_never_produces_non_finite_state(
        player in player_strategy(),
        bodies in registry_strategy(),
        dt in 0.001f32..0.1,
    ) {
        let next = advance(&player, &bodies, dt, &Tuning::default());
        prop_assert!(next.pos.is_finite());
        prop_assert!(next.vel.is_finite());
    }

    #[test]
    fn advance_respects_speed_clamp(
        player in player_strategy(),
        bodies in registry_strategy(),
        dt in 0.001f32..0.1,
    ) {
        let tuning = Tuning::default();
        let next = advance(&player, &bodies, dt, &tuning);
        prop_assert!(next.vel.length() <= tuning.max_velocity * 1.0001);
    }

    #[test]
    fn overlapping_bodies_exert_no_force(
        dx in -30.0f32..30.0,
        dy in -30.0f32..30.0,
        gravity in 0.0f32..100.0,
    ) {
        // Player center within the contact radius (40 + 12) of the only body
        let body = Body {
            id: 0,
            pos: Vec2::new(400.0, 300.0),
            radius: 40.0,
            gravity,
            is_goal: true,
            name: "Dense".into(),
        };
        let bodies = BodyRegistry::new(vec![body], 1, 0);
        let player = PlayerState {
            pos: Vec2::new(400.0 + dx, 300.0 + dy),
            vel: Vec2::ZERO,
            radius: 12.0,
            is_jumping: true,
            landed_on: None,
            departing_from: None,
        };

        let next = advance(&player, &bodies, 1.0 / 60.0, &Tuning::default());
        prop_assert_eq!(next.vel, Vec2::ZERO);
        prop_assert_eq!(next.pos, player.pos);
    }

    #[test]
    fn jump_sequences_keep_budget_monotonic_and_bounded(
        targets in prop::collection::vec((coord(), coord()), 1..20),
        max in 1u32..8,
    ) {
        let tuning = Tuning::default();
        let mut player = PlayerState {
            pos: Vec2::new(100.0, 200.0),
            vel: Vec2::ZERO,
            radius: 12.0,
            is_jumping: false,
            landed_on: Some(0),
            departing_from: None,
        };
        let mut budget = JumpBudget::new(max);

        for (x, y) in targets {
            let before = budget.used;
            match jump(&player, Vec2::new(x, y), &budget, &tuning) {
                Ok((p, b)) => {
                    prop_assert_eq!(b.used, before + 1);
                    prop_assert!(b.used <= b.max);
                    prop_assert!(p.vel.is_finite());
                    // Settle so the next jump is legal
                    player = PlayerState {
                        is_jumping: false,
                        landed_on: Some(0),
                        vel: Vec2::ZERO,
                        ..p
                    };
                    budget = b;
                }
                Err(JumpError::BudgetExhausted) => {
                    prop_assert_eq!(before, budget.max);
                }
                Err(JumpError::DegenerateTarget) => {
                    prop_assert_eq!(budget.used, before);
                }
                Err(JumpError::AlreadyInFlight) => {
                    // Player is always settled before jumping here
                    prop_assert!(false, "unexpected AlreadyInFlight");
                }
            }
        }
    }
}
