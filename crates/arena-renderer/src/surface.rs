use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use arena_core::{FillStyle, Size};

/// The layout host a layer is mounted in. Its size is read every frame.
pub trait Container {
    /// Current size in CSS pixels (`offsetWidth` × `offsetHeight`).
    fn offset_size(&self) -> Size;
}

/// An immediate-mode 2D drawing surface backing one layer.
pub trait Surface {
    /// Resize the backing store. Resizing clears any previous drawing.
    fn resize(&mut self, size: Size);

    /// Fill a circular arc segment.
    fn fill_arc(&mut self, arc: &ArcShape);
}

/// A filled arc, as passed to a canvas `arc()` + `fill()` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcShape {
    pub fill_style: FillStyle,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcShape {
    /// A full circle centred on `(x, y)`.
    pub fn circle(fill_style: FillStyle, x: f64, y: f64, radius: f64) -> Self {
        Self {
            fill_style,
            x,
            y,
            radius,
            start_angle: 0.0,
            end_angle: PI * 2.0,
        }
    }

    pub fn is_full_circle(&self) -> bool {
        self.start_angle == 0.0 && self.end_angle == PI * 2.0
    }

    /// Finite centre and a positive radius.
    fn is_fillable(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.radius.is_finite() && self.radius > 0.0
    }
}

/// Draw a filled arc, skipping shapes with non-finite geometry or no area.
///
/// Returns whether anything was drawn.
pub fn draw_arc<S: Surface + ?Sized>(surface: &mut S, arc: &ArcShape) -> bool {
    if !arc.is_fillable() {
        log::trace!("skipping arc with invalid geometry: {:?}", arc);
        return false;
    }
    surface.fill_arc(arc);
    true
}
