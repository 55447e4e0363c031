//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (players walked by id)
//! - No rendering or platform dependencies
//! - The step function is snapshot-in, snapshot-out with no I/O

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{blobs_overlap, bounce_axis};
pub use input::{Actions, PlayerAction};
pub use state::{Arena, GameEnd, GameState, Player, StateError, Target};
pub use tick::advance;
