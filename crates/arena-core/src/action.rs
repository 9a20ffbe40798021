use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};
use crate::geometry::GridPosition;
use crate::layer::StateKey;
use crate::player::{Player, PlayerId};
use crate::state::{GameState, RenderState};

/// A state transition dispatched into the [`Store`](crate::Store).
///
/// Every producer action marks its slice dirty; only `UpdateDirty` can clear it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Set or clear the dirty flag of a slice.
    UpdateDirty { key: StateKey, dirty: bool },
    /// Change the grid dimensions. Both must be non-zero.
    ResizeGrid { key: StateKey, columns: u32, rows: u32 },
    /// Replace the whole player list.
    SetPlayers { key: StateKey, players: Vec<Player> },
    /// Add a player. With a `render_state` the token appears at that pixel
    /// position immediately instead of animating in.
    SpawnPlayer {
        key: StateKey,
        player: Player,
        render_state: Option<RenderState>,
    },
    /// Move a player to another cell; its token glides there.
    MovePlayer {
        key: StateKey,
        id: PlayerId,
        position: GridPosition,
    },
    /// Mark a player dead. Its token stays tracked but is no longer drawn.
    KillPlayer { key: StateKey, id: PlayerId },
    /// Drop a player. Its token is pruned on the next render pass.
    RemovePlayer { key: StateKey, id: PlayerId },
}

impl Action {
    pub fn update_dirty(dirty: bool, key: StateKey) -> Self {
        Action::UpdateDirty { key, dirty }
    }

    pub fn key(&self) -> StateKey {
        match self {
            Action::UpdateDirty { key, .. }
            | Action::ResizeGrid { key, .. }
            | Action::SetPlayers { key, .. }
            | Action::SpawnPlayer { key, .. }
            | Action::MovePlayer { key, .. }
            | Action::KillPlayer { key, .. }
            | Action::RemovePlayer { key, .. } => *key,
        }
    }

    /// Human-readable description for logs and the dispatch journal.
    pub fn description(&self) -> &str {
        match self {
            Action::UpdateDirty { dirty: true, .. } => "Mark dirty",
            Action::UpdateDirty { dirty: false, .. } => "Clear dirty",
            Action::ResizeGrid { .. } => "Resize grid",
            Action::SetPlayers { .. } => "Set players",
            Action::SpawnPlayer { .. } => "Spawn player",
            Action::MovePlayer { .. } => "Move player",
            Action::KillPlayer { .. } => "Kill player",
            Action::RemovePlayer { .. } => "Remove player",
        }
    }

    /// Apply the transition to the slice this action targets.
    pub(crate) fn apply(&self, state: &mut GameState) -> Result<()> {
        match self {
            Action::UpdateDirty { dirty, .. } => {
                state.dirty = *dirty;
                return Ok(());
            }
            Action::ResizeGrid { columns, rows, .. } => {
                if *columns == 0 || *rows == 0 {
                    return Err(ArenaError::InvalidGrid {
                        columns: *columns,
                        rows: *rows,
                    });
                }
                state.columns = *columns;
                state.rows = *rows;
            }
            Action::SetPlayers { players, .. } => {
                state.players = players.clone();
            }
            Action::SpawnPlayer {
                player,
                render_state,
                ..
            } => {
                state.players.push(player.clone());
                if let Some(rs) = render_state {
                    // The token must belong to the spawned player.
                    state.new_render_states.push(RenderState {
                        stone: player.id,
                        ..*rs
                    });
                }
            }
            Action::MovePlayer { key, id, position } => {
                let player = state
                    .get_player_mut(id)
                    .ok_or(ArenaError::UnknownPlayer { key: *key, id: *id })?;
                player.position = *position;
            }
            Action::KillPlayer { key, id } => {
                state
                    .get_player_mut(id)
                    .ok_or(ArenaError::UnknownPlayer { key: *key, id: *id })?
                    .kill();
            }
            Action::RemovePlayer { key, id } => {
                state
                    .remove_player(id)
                    .ok_or(ArenaError::UnknownPlayer { key: *key, id: *id })?;
            }
        }
        state.dirty = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_player_marks_dirty() {
        let player = Player::new("a", GridPosition::new(0, 0));
        let id = player.id;
        let mut state = GameState::new(8, 8).with_players(vec![player]);
        state.dirty = false;

        Action::MovePlayer {
            key: StateKey::Player,
            id,
            position: GridPosition::new(3, 4),
        }
        .apply(&mut state)
        .unwrap();

        assert!(state.dirty);
        assert_eq!(state.get_player(&id).unwrap().position, GridPosition::new(3, 4));
    }

    #[test]
    fn test_unknown_player_is_rejected() {
        let mut state = GameState::new(8, 8);
        let ghost = Player::new("ghost", GridPosition::new(0, 0)).id;
        let result = Action::KillPlayer {
            key: StateKey::Player,
            id: ghost,
        }
        .apply(&mut state);

        assert!(matches!(result, Err(ArenaError::UnknownPlayer { .. })));
        assert!(!state.dirty);
    }

    #[test]
    fn test_resize_grid_rejects_zero() {
        let mut state = GameState::new(8, 8);
        let result = Action::ResizeGrid {
            key: StateKey::Player,
            columns: 0,
            rows: 8,
        }
        .apply(&mut state);
        assert!(matches!(result, Err(ArenaError::InvalidGrid { columns: 0, rows: 8 })));
        assert_eq!(state.columns, 8);
    }

    #[test]
    fn test_spawn_with_render_state_binds_stone() {
        let player = Player::new("late", GridPosition::new(1, 1));
        let other = Player::new("other", GridPosition::new(0, 0)).id;
        let mut state = GameState::new(8, 8);

        Action::SpawnPlayer {
            key: StateKey::Player,
            player: player.clone(),
            render_state: Some(RenderState::new(other, 10.0, 20.0, 5.0)),
        }
        .apply(&mut state)
        .unwrap();

        assert_eq!(state.players.len(), 1);
        assert_eq!(state.new_render_states.len(), 1);
        assert_eq!(state.new_render_states[0].stone, player.id);
        assert!((state.new_render_states[0].x - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_clear_dirty() {
        let mut state = GameState::new(8, 8).with_players(Vec::new());
        Action::update_dirty(false, StateKey::Player)
            .apply(&mut state)
            .unwrap();
        assert!(!state.dirty);
        assert_eq!(
            Action::update_dirty(false, StateKey::Player).description(),
            "Clear dirty"
        );
    }
}
