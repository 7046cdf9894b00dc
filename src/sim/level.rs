//! Level generation
//!
//! Levels 1-3 are hand-authored exact layouts (the learnable difficulty ramp);
//! level 4 and up place bodies procedurally. Difficulty scales through body
//! count only - the radius/gravity ranges never widen.
//!
//! Placement performs no overlap rejection: bodies (including the goal) may
//! spawn overlapping the anchor or each other. Gravity fields can legitimately
//! nest in this design, so that is a property of the generator, not a bug.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{Body, BodyRegistry};
use crate::consts::*;

/// Seed used when the caller does not supply one
pub const DEFAULT_SEED: u64 = 0x6772_6176;

/// Keep procedural bodies this far off every playfield edge
const EDGE_INSET: f32 = 60.0;

/// Procedural radius range (does not vary by level)
const BODY_RADIUS_RANGE: std::ops::Range<f32> = 18.0..42.0;
/// Procedural gravity range (does not vary by level)
const BODY_GRAVITY_RANGE: std::ops::Range<f32> = 0.5..1.5;

/// Total bodies for a procedural level, anchor and goal included
#[inline]
pub fn body_count_for_level(level_index: u32) -> u32 {
    (3 + level_index).min(8)
}

/// Generate the body registry for a level using the default seed policy
pub fn generate_level(level_index: u32) -> BodyRegistry {
    generate_level_seeded(level_index, DEFAULT_SEED)
}

/// Generate the body registry for a level
///
/// Deterministic: the same `(level_index, seed)` pair always produces an
/// identical registry.
pub fn generate_level_seeded(level_index: u32, seed: u64) -> BodyRegistry {
    let bodies = match level_index {
        0 | 1 => level_one(),
        2 => level_two(),
        3 => level_three(),
        _ => procedural(level_index, seed),
    };

    let registry = BodyRegistry::new(bodies, level_index.max(1), seed);
    log::info!(
        "level {}: {} bodies, goal '{}'",
        registry.level_index,
        registry.len(),
        registry.goal().name
    );
    registry
}

fn anchor() -> Body {
    Body {
        id: 0,
        pos: ANCHOR_POSITION,
        radius: ANCHOR_RADIUS,
        gravity: ANCHOR_GRAVITY,
        is_goal: false,
        name: "Home".into(),
    }
}

fn level_one() -> Vec<Body> {
    vec![
        anchor(),
        Body {
            id: 1,
            pos: Vec2::new(250.0, 200.0),
            radius: 35.0,
            gravity: 0.8,
            is_goal: false,
            name: "Moon".into(),
        },
        Body {
            id: 2,
            pos: Vec2::new(400.0, 200.0),
            radius: 45.0,
            gravity: 1.2,
            is_goal: true,
            name: "Terra Nova".into(),
        },
    ]
}

fn level_two() -> Vec<Body> {
    vec![
        anchor(),
        Body {
            id: 1,
            pos: Vec2::new(300.0, 350.0),
            radius: 30.0,
            gravity: 0.7,
            is_goal: false,
            name: "Ceres".into(),
        },
        Body {
            id: 2,
            pos: Vec2::new(500.0, 150.0),
            radius: 35.0,
            gravity: 1.0,
            is_goal: false,
            name: "Vesta".into(),
        },
        Body {
            id: 3,
            pos: Vec2::new(650.0, 400.0),
            radius: 45.0,
            gravity: 1.2,
            is_goal: true,
            name: "Kepler".into(),
        },
    ]
}

fn level_three() -> Vec<Body> {
    vec![
        anchor(),
        Body {
            id: 1,
            pos: Vec2::new(250.0, 450.0),
            radius: 28.0,
            gravity: 0.6,
            is_goal: false,
            name: "Io".into(),
        },
        Body {
            id: 2,
            pos: Vec2::new(420.0, 250.0),
            radius: 32.0,
            gravity: 1.1,
            is_goal: false,
            name: "Europa".into(),
        },
        Body {
            id: 3,
            pos: Vec2::new(580.0, 480.0),
            radius: 38.0,
            gravity: 0.9,
            is_goal: false,
            name: "Callisto".into(),
        },
        Body {
            id: 4,
            pos: Vec2::new(700.0, 150.0),
            radius: 45.0,
            gravity: 1.2,
            is_goal: true,
            name: "Gliese".into(),
        },
    ]
}

fn procedural(level_index: u32, seed: u64) -> Vec<Body> {
    // Mix level into the run seed so every level gets its own stream while
    // staying reproducible for a given run
    let level_seed = (level_index as u64)
        .wrapping_mul(2654435761)
        .wrapping_add(seed);
    let mut rng = Pcg32::seed_from_u64(level_seed);

    let total = body_count_for_level(level_index);
    let mut bodies = Vec::with_capacity(total as usize);
    bodies.push(anchor());

    // Intermediate bodies: everything but the anchor and the goal
    for i in 1..total - 1 {
        bodies.push(Body {
            id: i,
            pos: random_position(&mut rng),
            radius: rng.random_range(BODY_RADIUS_RANGE),
            gravity: rng.random_range(BODY_GRAVITY_RANGE),
            is_goal: false,
            name: format!("Planet {i}"),
        });
    }

    // Goal always goes last, with fixed radius/gravity
    bodies.push(Body {
        id: total - 1,
        pos: random_position(&mut rng),
        radius: GOAL_RADIUS,
        gravity: GOAL_GRAVITY,
        is_goal: true,
        name: "Goal".into(),
    });

    bodies
}

fn random_position(rng: &mut Pcg32) -> Vec2 {
    Vec2::new(
        rng.random_range(EDGE_INSET..PLAYFIELD_WIDTH - EDGE_INSET),
        rng.random_range(EDGE_INSET..PLAYFIELD_HEIGHT - EDGE_INSET),
    )
}
