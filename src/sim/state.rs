//! Game state and core simulation types
//!
//! The state model is a leaf: entities (players, targets, arena, end
//! condition) and their initial configuration for a given arena size. All
//! types are serde-derived so the driving layer can snapshot them as JSON.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// A player-controlled blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radius-like width used for collision and rendering
    pub width: f32,
    /// Id of the target this player must reach
    pub target: String,
}

/// A stationary goal blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: String,
    /// Fixed for the round
    pub position: Vec2,
    /// Radius-like width used for collision
    pub width: f32,
}

/// Rectangular arena bounds, origin at (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

/// Terminal round result
///
/// Present only once the round is decided; never cleared or overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEnd {
    /// Id of the player whose blob first reached its target
    pub victor: String,
}

/// Roster invariant violations, surfaced at construction time
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("player {player} references missing target {target}")]
    DanglingTarget { player: String, target: String },
    #[error("entity {0} has non-positive width")]
    NonPositiveWidth(String),
}

/// Complete state for one round (deterministic, serializable)
///
/// `BTreeMap` keys give the stable iteration order the step function relies
/// on for its first-winner tie-break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub players: BTreeMap<String, Player>,
    pub targets: BTreeMap<String, Target>,
    pub arena: Arena,
    /// Set exactly once, when the round is decided
    pub end: Option<GameEnd>,
}

fn seed_player(id: &str, start: Vec2, blob_size: f32, target: &Target) -> Player {
    Player {
        id: id.to_string(),
        position: start,
        velocity: Vec2::new(SEED_SPEED, 0.0),
        width: blob_size,
        target: target.id.clone(),
    }
}

impl GameState {
    /// Create the canonical two-player round for the given viewport size
    ///
    /// Players start on the horizontal midline, inset from each side by 10%
    /// of arena width, each assigned the target at the opposite extreme.
    /// Inputs are trusted positive; degenerate dimensions produce degenerate
    /// geometry rather than an error.
    pub fn new(height: f32, width: f32) -> Self {
        let mid_y = height / 2.0;
        let offset = width * START_INSET_FRAC;
        let blob_size = height.min(width) / BLOB_SIZE_DIVISOR;

        let target1 = Target {
            id: "target1".to_string(),
            position: Vec2::new(width - offset, mid_y),
            width: blob_size,
        };
        let target2 = Target {
            id: "target2".to_string(),
            position: Vec2::new(offset, mid_y),
            width: blob_size,
        };

        let player1 = seed_player("player1", Vec2::new(offset, mid_y), blob_size, &target1);
        let player2 = seed_player(
            "player2",
            Vec2::new(width - offset, mid_y),
            blob_size,
            &target2,
        );

        Self {
            players: BTreeMap::from([
                (player1.id.clone(), player1),
                (player2.id.clone(), player2),
            ]),
            targets: BTreeMap::from([
                (target1.id.clone(), target1),
                (target2.id.clone(), target2),
            ]),
            arena: Arena { width, height },
            end: None,
        }
    }

    /// Build a state from an arbitrary roster
    ///
    /// Validates the invariants the step function assumes: every player's
    /// target id resolves, and all widths are positive.
    pub fn from_parts(
        players: BTreeMap<String, Player>,
        targets: BTreeMap<String, Target>,
        arena: Arena,
    ) -> Result<Self, StateError> {
        for player in players.values() {
            if player.width <= 0.0 {
                return Err(StateError::NonPositiveWidth(player.id.clone()));
            }
            if !targets.contains_key(&player.target) {
                return Err(StateError::DanglingTarget {
                    player: player.id.clone(),
                    target: player.target.clone(),
                });
            }
        }
        for target in targets.values() {
            if target.width <= 0.0 {
                return Err(StateError::NonPositiveWidth(target.id.clone()));
            }
        }

        Ok(Self {
            players,
            targets,
            arena,
            end: None,
        })
    }

    /// Whether the round has reached its terminal state
    pub fn is_decided(&self) -> bool {
        self.end.is_some()
    }
}
