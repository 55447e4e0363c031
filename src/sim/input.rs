//! Per-tick input boundary
//!
//! The input-capture layer (keyboard, gamepad, whatever the presentation
//! uses) translates device events into held-direction flags and hands the
//! sim one `Actions` snapshot per tick.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Currently-held directional input for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAction {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl PlayerAction {
    /// Unit input vector for the held flags, `None` when nothing is held
    ///
    /// Opposing flags cancel; diagonals normalize to unit length so a held
    /// diagonal is no faster than a cardinal.
    pub fn direction(&self) -> Option<Vec2> {
        let horizontal = (self.right as i8 - self.left as i8) as f32;
        let vertical = (self.up as i8 - self.down as i8) as f32;

        if horizontal == 0.0 && vertical == 0.0 {
            return None;
        }

        Some(Vec2::new(horizontal, vertical).normalize_or_zero())
    }
}

/// One tick's worth of input: player id -> held flags
///
/// Ids absent from the map mean no input for that player this tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Actions {
    pub player_actions: BTreeMap<String, PlayerAction>,
}

impl Actions {
    /// All-false entry for every player in the roster
    ///
    /// The capture layer starts each round from this and flips flags on key
    /// press/release events.
    pub fn for_roster(state: &GameState) -> Self {
        Self {
            player_actions: state
                .players
                .keys()
                .map(|id| (id.clone(), PlayerAction::default()))
                .collect(),
        }
    }

    /// Replace one player's held flags
    pub fn set(&mut self, id: impl Into<String>, action: PlayerAction) {
        self.player_actions.insert(id.into(), action);
    }

    pub fn get(&self, id: &str) -> Option<&PlayerAction> {
        self.player_actions.get(id)
    }
}
