use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ArenaError;
use crate::geometry::GridPosition;

/// Stable player identifier. Render states refer to players through it.
pub type PlayerId = Uuid;

/// RGBA fill colour used when drawing a player token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            r: 128,
            g: 128,
            b: 128,
            alpha: 1.0,
        }
    }
}

impl FillStyle {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

/// CSS `rgba(r, g, b, a)` form, as a 2D canvas `fillStyle` expects.
impl fmt::Display for FillStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

/// Parses `#rrggbb` or `#rrggbbaa`.
impl FromStr for FillStyle {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ArenaError::InvalidFillStyle(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let mut style = FillStyle::rgb(byte(0)?, byte(2)?, byte(4)?);
        if hex.len() == 8 {
            style.alpha = byte(6)? as f32 / 255.0;
        }
        Ok(style)
    }
}

/// A player token on the arena grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: GridPosition,
    pub alive: bool,
    pub fill_style: FillStyle,
}

impl Player {
    pub fn new(name: &str, position: GridPosition) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            position,
            alive: true,
            fill_style: FillStyle::default(),
        }
    }

    pub fn with_fill(mut self, fill_style: FillStyle) -> Self {
        self.fill_style = fill_style;
        self
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_alive() {
        let player = Player::new("alice", GridPosition::new(2, 3));
        assert!(player.alive);
        assert_eq!(player.position, GridPosition::new(2, 3));
        assert_ne!(player.id, Player::new("alice", GridPosition::new(2, 3)).id);
    }

    #[test]
    fn test_fill_style_css() {
        let style = FillStyle::rgb(255, 0, 16).with_alpha(0.5);
        assert_eq!(style.to_string(), "rgba(255, 0, 16, 0.5)");
    }

    #[test]
    fn test_fill_style_from_hex() {
        let style: FillStyle = "#ff8000".parse().unwrap();
        assert_eq!((style.r, style.g, style.b), (255, 128, 0));
        assert!((style.alpha - 1.0).abs() < 1e-6);

        let translucent: FillStyle = "#00000080".parse().unwrap();
        assert!((translucent.alpha - 128.0 / 255.0).abs() < 1e-6);

        assert!("ff8000".parse::<FillStyle>().is_err());
        assert!("#ff80".parse::<FillStyle>().is_err());
        assert!("#gg8000".parse::<FillStyle>().is_err());
    }
}
