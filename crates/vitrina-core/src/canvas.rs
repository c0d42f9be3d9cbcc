//! Canvas implementations for rendering.

use crate::geometry::{Point, Rect};
use crate::widget::{Canvas, TextStyle};
use crate::Color;
use serde::{Deserialize, Serialize};

/// A single recorded draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill a rectangle
    FillRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },
    /// Stroke a rectangle outline
    StrokeRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Position
        position: Point,
        /// Text style
        style: TextStyle,
    },
    /// Draw a line
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Line color
        color: Color,
        /// Line width
        width: f32,
    },
    /// Fill a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
    },
}

/// A Canvas implementation that records draw operations as [`DrawCommand`]s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to a rendering backend)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Iterate over the text content of all recorded text commands.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            bounds: rect,
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            bounds: rect,
            color,
            width,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_starts_empty() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_recording_canvas_records_fill_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert_eq!(canvas.command_count(), 1);
        assert!(matches!(
            canvas.commands()[0],
            DrawCommand::FillRect { .. }
        ));
    }

    #[test]
    fn test_recording_canvas_records_text() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("hello", Point::new(1.0, 2.0), &TextStyle::default());
        let texts: Vec<&str> = canvas.texts().collect();
        assert_eq!(texts, vec!["hello"]);
    }

    #[test]
    fn test_recording_canvas_take_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::ORIGIN, 5.0, Color::BLACK);
        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_recording_canvas_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_line(Point::ORIGIN, Point::new(1.0, 1.0), Color::BLACK, 1.0);
        canvas.clear();
        assert!(canvas.is_empty());
    }
}
