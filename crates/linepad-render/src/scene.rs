//! Recorded draw commands.
//!
//! A [`Scene`] is a surface that records what a frame drew instead of
//! rasterizing it. Tests use it to assert the exact redraw sequence; a
//! recorded frame can also be replayed onto any other backend.

use crate::surface::Surface;
use kurbo::Line;

/// A single recorded draw command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Full-surface clear.
    Clear,
    /// Stroked straight line.
    StrokeLine(Line),
}

/// Surface backend that records commands in order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since creation or the last reset.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Replay the recorded commands onto another surface.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear => surface.clear(),
                DrawCommand::StrokeLine(line) => surface.stroke_line(*line),
            }
        }
    }
}

impl Surface for Scene {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_line(&mut self, line: Line) {
        self.commands.push(DrawCommand::StrokeLine(line));
    }
}
