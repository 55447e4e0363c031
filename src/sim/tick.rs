//! Fixed timestep simulation step
//!
//! The only place game time moves: one call consumes the current snapshot
//! plus one tick's input and produces the next snapshot.

use log::warn;

use super::collision::{blobs_overlap, bounce_axis};
use super::input::Actions;
use super::state::{GameEnd, GameState};
use crate::consts::{DAMPING, INPUT_IMPULSE};

/// Advance the game state by one fixed timestep
///
/// Pure transformation: the input snapshot is never aliased or mutated. On a
/// decided state this is a no-op, so the terminal state is stable under
/// repeated calls.
///
/// Action entries naming unknown player ids are collaborator bugs; they are
/// skipped with a warning and never affect other players.
pub fn advance(state: &GameState, actions: &Actions) -> GameState {
    if state.end.is_some() {
        return state.clone();
    }

    let mut next = state.clone();

    // Phase 1: integrate held input into velocities.
    for (id, action) in &actions.player_actions {
        let Some(direction) = action.direction() else {
            continue;
        };

        match next.players.get_mut(id) {
            Some(player) => player.velocity += direction * INPUT_IMPULSE,
            None => warn!("action for unknown player {id}"),
        }
    }

    // Phase 2: motion, wall bounce, win detection. Players are walked in id
    // order; the first player found overlapping its target decides the
    // round, and later detections in the same tick never overwrite it.
    for player in next.players.values_mut() {
        player.position += player.velocity;
        player.velocity *= DAMPING;

        let (x, vx) = bounce_axis(player.position.x, player.velocity.x, next.arena.width);
        player.position.x = x;
        player.velocity.x = vx;

        let (y, vy) = bounce_axis(player.position.y, player.velocity.y, next.arena.height);
        player.position.y = y;
        player.velocity.y = vy;

        let Some(target) = next.targets.get(&player.target) else {
            warn!(
                "player {} references missing target {}",
                player.id, player.target
            );
            continue;
        };

        if next.end.is_none()
            && blobs_overlap(player.position, player.width, target.position, target.width)
        {
            next.end = Some(GameEnd {
                victor: player.id.clone(),
            });
        }
    }

    next
}
