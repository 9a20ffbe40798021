use serde::{Deserialize, Serialize};

use arena_core::Size;

use crate::surface::Container;

/// A fixed-size layout host, resized explicitly by whoever owns the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
}

impl Viewport {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
        }
    }

    pub fn resize(&mut self, canvas_width: f64, canvas_height: f64) {
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
    }
}

impl Container for Viewport {
    fn offset_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_changes_offset_size() {
        let mut viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.offset_size(), Size::new(800.0, 600.0));
        viewport.resize(1024.0, 768.0);
        assert_eq!(viewport.offset_size(), Size::new(1024.0, 768.0));
    }
}
