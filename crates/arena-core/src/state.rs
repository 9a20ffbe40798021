use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::player::{Player, PlayerId};

/// The animated on-screen state of one player token.
///
/// `x`/`y` are the current interpolated centre in pixels. `stone` names the
/// player the token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub stone: PlayerId,
}

impl RenderState {
    pub fn new(stone: PlayerId, x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius, stone }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Authoritative state for a grid of players, as held by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    /// Grid width in cells.
    pub columns: u32,
    /// Grid height in cells.
    pub rows: u32,
    /// Set by producers whenever `players` or `new_render_states` change.
    pub dirty: bool,
    pub players: Vec<Player>,
    /// Tokens that must appear at a fixed position without animating.
    /// Drained by the player layer on its next dirty update.
    pub new_render_states: Vec<RenderState>,
}

impl GameState {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            ..Default::default()
        }
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self.dirty = true;
        self
    }

    pub fn get_player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *id)
    }

    pub fn get_player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == *id)
    }

    pub fn remove_player(&mut self, id: &PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == *id)?;
        Some(self.players.remove(index))
    }

    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.alive).count()
    }
}
