use serde::{Deserialize, Serialize};

use arena_core::Size;

use crate::surface::{ArcShape, Surface};

/// A single draw call issued against a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Resize(Size),
    FillArc(ArcShape),
}

/// Everything drawn between two surface resizes.
///
/// A resize clears the canvas, so each one starts a new frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub size: Option<Size>,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    pub fn arcs(&self) -> impl Iterator<Item = &ArcShape> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillArc(arc) => Some(arc),
            DrawCommand::Resize(_) => None,
        })
    }
}

/// A [`Surface`] that draws nothing and records every call as frames.
///
/// Used by the headless driver and by tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    frames: Vec<RenderFrame>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn frames(&self) -> &[RenderFrame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }

    pub fn take_frames(&mut self) -> Vec<RenderFrame> {
        std::mem::take(&mut self.frames)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.frames)
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, size: Size) {
        self.frames.push(RenderFrame {
            size: Some(size),
            commands: vec![DrawCommand::Resize(size)],
        });
    }

    fn fill_arc(&mut self, arc: &ArcShape) {
        if self.frames.is_empty() {
            self.frames.push(RenderFrame::default());
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.commands.push(DrawCommand::FillArc(*arc));
        }
    }
}
