//! Gravitational bodies and the per-level registry
//!
//! Bodies are immutable once a level is generated; the registry is discarded
//! wholesale when a new level starts. Creation order is the iteration order,
//! which in turn decides contact resolution priority.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A fixed circular gravitational source in the playfield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Mass proxy; force contribution scales linearly with this
    pub gravity: f32,
    /// Contact with the goal body ends the level in victory
    pub is_goal: bool,
    pub name: String,
}

impl Body {
    /// Circle-circle overlap test against a player-sized circle
    #[inline]
    pub fn overlaps(&self, pos: Vec2, radius: f32) -> bool {
        self.pos.distance_squared(pos) <= (self.radius + radius) * (self.radius + radius)
    }
}

/// Immutable-per-level set of bodies, in creation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    /// Level this registry was generated for
    pub level_index: u32,
    /// Seed the procedural placement drew from
    pub seed: u64,
}

impl BodyRegistry {
    /// Build a registry from an already-ordered body list.
    ///
    /// Panics if the goal invariant is violated: every level has exactly one
    /// body with `is_goal == true`.
    pub fn new(bodies: Vec<Body>, level_index: u32, seed: u64) -> Self {
        let goals = bodies.iter().filter(|b| b.is_goal).count();
        assert_eq!(goals, 1, "level {level_index} generated {goals} goal bodies");
        Self {
            bodies,
            level_index,
            seed,
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// The unique goal body
    pub fn goal(&self) -> &Body {
        self.bodies
            .iter()
            .find(|b| b.is_goal)
            .expect("registry invariant: exactly one goal body")
    }
}
