use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::Store;

/// Kind of canvas layer. Each layer owns exactly one drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerType {
    Player,
}

/// Key under which a slice of game state lives in the [`Store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateKey {
    Player,
}

/// A canvas layer driven once per animation frame: `update()` then `render(dt)`.
pub trait Layer {
    fn layer_type(&self) -> LayerType;

    /// The store slice this layer reads and acknowledges.
    fn state_key(&self) -> StateKey;

    /// Consume new authoritative state from the store, if any.
    fn update(&mut self, store: &mut Store) -> Result<()>;

    /// Advance animation by `dt` seconds and redraw if needed.
    fn render(&mut self, dt: f64);

    /// True while the layer still owes a redraw.
    fn is_dirty(&self) -> bool;
}
