//! # Arena Core
//!
//! Authoritative game state for the arena canvas: grid positions, players,
//! the keyed state store with its action journal, and the contract every
//! canvas layer implements.

pub mod geometry;
pub mod player;
pub mod state;
pub mod action;
pub mod store;
pub mod layer;
pub mod config;
pub mod error;

pub use action::Action;
pub use config::RenderConfig;
pub use error::{ArenaError, Result};
pub use geometry::{GridPosition, Point, Size};
pub use layer::{Layer, LayerType, StateKey};
pub use player::{FillStyle, Player, PlayerId};
pub use state::{GameState, RenderState};
pub use store::Store;
