//! Static text widget.

use serde::{Deserialize, Serialize};
use std::any::Any;
use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, FontWeight, Point, Rect, Size, TextStyle, TypeId, Widget,
};

// Monospace assumption shared with the other widgets.
const CHAR_WIDTH: f32 = 8.0;

/// Static, non-interactive text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    content: String,
    /// Font size
    size: f32,
    /// Text color
    color: Color,
    /// Font weight
    weight: FontWeight,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Text {
    /// Create a text widget.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set font size.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size.max(1.0);
        self
    }

    /// Set text color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set font weight.
    #[must_use]
    pub const fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Widget for Text {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = self.content.chars().count() as f32 * CHAR_WIDTH;
        constraints.constrain(Size::new(width, self.size * 1.25))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(
            &self.content,
            Point::new(self.bounds.x, self.bounds.y),
            &TextStyle {
                size: self.size,
                color: self.color,
                weight: self.weight,
            },
        );
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Text
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
