//! Player state, jump budget, and the owning level session
//!
//! `LevelSession` replaces the original design's global mutable store: it owns
//! the body registry, player state, and jump budget for one level attempt, and
//! everything is rebuilt from the generator on restart or advance.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::BodyRegistry;
use super::level;
use crate::consts::*;
use crate::tuning::Tuning;

/// The player projectile's kinematic state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// True from the jump impulse until the next landing
    pub is_jumping: bool,
    /// Body the player is resting on; `Some` only while not jumping
    pub landed_on: Option<u32>,
    /// Launch body still overlapping the player; it cannot recapture the
    /// player until the overlap first clears (prevents sticking)
    pub departing_from: Option<u32>,
}

impl PlayerState {
    /// Player at the level spawn point, at rest on the anchor body
    pub fn spawn() -> Self {
        Self {
            pos: PLAYER_SPAWN,
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            is_jumping: false,
            landed_on: Some(0),
            departing_from: None,
        }
    }
}

/// Finite count of jumps allowed per level attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpBudget {
    pub used: u32,
    pub max: u32,
}

impl JumpBudget {
    pub fn new(max: u32) -> Self {
        debug_assert!(max >= 1);
        Self { used: 0, max }
    }

    #[inline]
    pub fn exhausted(&self) -> bool {
        self.used >= self.max
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.max - self.used
    }
}

/// Why a level was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefeatReason {
    /// Drifted past the playfield bounds plus margin
    OutOfBounds,
    /// Settled without reaching the goal and no jumps left
    JumpsExhausted,
}

/// Terminal state of a level attempt, derived fresh each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelOutcome {
    InProgress,
    Victory { jumps_used: u32 },
    Defeat { reason: DefeatReason },
}

impl LevelOutcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LevelOutcome::InProgress)
    }
}

/// One level attempt: exclusive owner of registry, player, and budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSession {
    pub level_index: u32,
    /// Run seed, carried across levels for reproducibility
    pub seed: u64,
    pub bodies: BodyRegistry,
    pub player: PlayerState,
    pub budget: JumpBudget,
    pub tuning: Tuning,
    /// Frames ticked since the level started
    pub time_ticks: u64,
    /// Outcome of the most recent frame
    pub outcome: LevelOutcome,
}

impl LevelSession {
    pub fn new(level_index: u32, seed: u64, tuning: Tuning) -> Self {
        let bodies = level::generate_level_seeded(level_index, seed);
        let budget = JumpBudget::new(tuning.jumps_per_level);
        Self {
            level_index,
            seed,
            bodies,
            player: PlayerState::spawn(),
            budget,
            tuning,
            time_ticks: 0,
            outcome: LevelOutcome::InProgress,
        }
    }

    /// Bounds a player may occupy before counting as lost
    pub fn loss_bounds(&self) -> crate::Rect {
        crate::Rect::playfield()
    }

    /// Discard player, budget, and registry and rebuild the same level.
    ///
    /// This is the only cancellation primitive: nothing in-flight survives.
    pub fn restart(&mut self) {
        *self = Self::new(self.level_index, self.seed, self.tuning.clone());
        log::info!("level {} restarted", self.level_index);
    }

    /// Move on to the next level, rebuilding all state from the generator
    pub fn advance_level(&mut self) {
        let next = self.level_index + 1;
        *self = Self::new(next, self.seed, self.tuning.clone());
        log::info!("advanced to level {next}");
    }
}
