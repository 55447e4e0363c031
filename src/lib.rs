//! Blob Dash - a two-player arena race
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state model, input boundary, physics step)
//!
//! Rendering and input capture are external collaborators: they feed
//! per-player directional flags into the sim at a fixed tick rate and draw
//! whatever snapshot comes back.

pub mod sim;

pub use sim::{Actions, Arena, GameEnd, GameState, Player, PlayerAction, Target, advance};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Simulation tick rate driving the round
    pub const TICK_HZ: u32 = 120;

    /// Per-tick multiplicative velocity damping (friction/drag)
    pub const DAMPING: f32 = 0.93;
    /// Velocity impulse added per tick of held directional input
    pub const INPUT_IMPULSE: f32 = 0.25;
    /// Rightward seed velocity every player starts the round with
    pub const SEED_SPEED: f32 = 10.0;

    /// Horizontal inset of each start position, as a fraction of arena width
    pub const START_INSET_FRAC: f32 = 0.1;
    /// Blob width is min(arena height, arena width) divided by this
    pub const BLOB_SIZE_DIVISOR: f32 = 10.0;
}
