//! # Arena Renderer
//!
//! Canvas layers for the arena board. The player layer turns grid positions
//! from the store into pixel targets and animates circular tokens toward them
//! at a fixed speed.
//!
//! Drawing goes through the [`Surface`] trait, so the same layer can target a
//! browser canvas or the [`RecordingSurface`] used by the headless driver.

pub mod surface;
pub mod viewport;
pub mod render_data;
pub mod layout;
pub mod reconcile;
pub mod animation;
pub mod base;
pub mod player_layer;

pub use base::BaseLayer;
pub use layout::{FinalRenderState, GridLayout};
pub use player_layer::PlayerLayer;
pub use reconcile::{reconcile, Reconciliation, Targets};
pub use render_data::{DrawCommand, RecordingSurface, RenderFrame};
pub use surface::{draw_arc, ArcShape, Container, Surface};
pub use viewport::Viewport;
