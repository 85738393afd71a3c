//! Draw surface boundary
//!
//! The window, the line rasterizer and the text renderer belong to the host.
//! The math side only ever talks to them through [`DrawSurface`].

use std::fmt;

use mt3_math::Vector3;

use crate::Color;

/// Something that can draw pixel-space lines and text
pub trait DrawSurface {
    /// Draw a line between two pixel positions
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color);

    /// Print text with its top-left corner at a pixel position
    fn screen_print(&mut self, x: i32, y: i32, text: &str);

    /// Draw a line between two screen-space points (z is ignored)
    fn draw_screen_line(&mut self, start: Vector3, end: Vector3, color: Color) {
        self.draw_line(start.x as i32, start.y as i32, end.x as i32, end.y as i32, color);
    }
}

/// A single recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
    },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Line { x1, y1, x2, y2, color } => {
                write!(f, "line ({}, {}) -> ({}, {}) {}", x1, y1, x2, y2, color)
            }
            DrawCommand::Text { x, y, text } => write!(f, "text ({}, {}) {}", x, y, text),
        }
    }
}

/// In-memory surface that records every call
///
/// Used by the headless runner and by tests.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands in the order they were issued
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded line commands
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Text of every recorded text command, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Line { .. } => None,
            })
            .collect()
    }

    /// Forget everything recorded so far (start of a new frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for CommandRecorder {
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2, color });
    }

    fn screen_print(&mut self, x: i32, y: i32, text: &str) {
        self.commands.push(DrawCommand::Text { x, y, text: text.to_string() });
    }
}
