use serde::{Deserialize, Serialize};

use arena_core::{GridPosition, Player, Point, RenderState, Size};

/// Where a player's token should end up, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalRenderState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub stone: Player,
}

impl FinalRenderState {
    pub fn target(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// A render state already sitting on the target.
    pub fn to_render_state(&self) -> RenderState {
        RenderState::new(self.stone.id, self.x, self.y, self.radius)
    }
}

/// Maps grid cells onto the pixel area of a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub cell_width: f64,
    pub cell_height: f64,
    radius_ratio: f64,
}

impl GridLayout {
    /// Returns `None` when the grid or the container has no area.
    pub fn new(container: Size, columns: u32, rows: u32, radius_ratio: f64) -> Option<Self> {
        if columns == 0 || rows == 0 || !container.is_drawable() {
            return None;
        }
        Some(Self {
            cell_width: container.width / columns as f64,
            cell_height: container.height / rows as f64,
            radius_ratio,
        })
    }

    pub fn center_of(&self, position: GridPosition) -> Point {
        Point::new(
            position.column as f64 * self.cell_width + self.cell_width / 2.0,
            position.row as f64 * self.cell_height + self.cell_height / 2.0,
        )
    }

    pub fn token_radius(&self) -> f64 {
        self.cell_width.min(self.cell_height) * self.radius_ratio / 2.0
    }

    pub fn final_render_state(&self, player: &Player) -> FinalRenderState {
        let center = self.center_of(player.position);
        FinalRenderState {
            x: center.x,
            y: center.y,
            radius: self.token_radius(),
            stone: player.clone(),
        }
    }
}
