//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed constants (see `crate::consts` and `crate::tuning`)
//! - Seeded RNG only
//! - Stable body iteration order (creation order decides contact resolution)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod jump;
pub mod level;
pub mod physics;
pub mod state;
pub mod tick;

pub use body::{Body, BodyRegistry};
pub use collision::resolve;
pub use jump::{JumpError, jump};
pub use level::generate_level;
pub use physics::advance;
pub use state::{DefeatReason, JumpBudget, LevelOutcome, LevelSession, PlayerState};
pub use tick::{TickInput, tick};
