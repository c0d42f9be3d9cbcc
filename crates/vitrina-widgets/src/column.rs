//! Column widget for vertical layout.

use serde::{Deserialize, Serialize};
use std::any::Any;
use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, Rect, Size, TypeId, Widget,
};

/// Column widget for vertical layout of children.
#[derive(Serialize, Deserialize)]
pub struct Column {
    /// Gap between children
    gap: f32,
    /// Children widgets
    #[serde(skip)]
    children: Vec<Box<dyn Widget>>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Column {
    /// Create a new empty column.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gap: 0.0,
            children: Vec::new(),
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set gap between children.
    #[must_use]
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Add a child widget.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Add a boxed child widget.
    #[must_use]
    pub fn child_boxed(mut self, widget: Box<dyn Widget>) -> Self {
        self.children.push(widget);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }
}

impl Widget for Column {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if self.children.is_empty() {
            return Size::ZERO;
        }

        let mut max_width = 0.0f32;
        let mut total_height = 0.0f32;

        for (i, child) in self.children.iter().enumerate() {
            let child_constraints = Constraints::new(
                0.0,
                constraints.max_width,
                0.0,
                (constraints.max_height - total_height).max(0.0),
            );
            let child_size = child.measure(child_constraints);
            max_width = max_width.max(child_size.width);
            total_height += child_size.height;
            if i < self.children.len() - 1 {
                total_height += self.gap;
            }
        }

        constraints.constrain(Size::new(max_width, total_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let mut y = bounds.y;
        let gap = self.gap;

        for child in &mut self.children {
            let child_size = child.measure(Constraints::loose(bounds.size()));
            let child_bounds = Rect::new(bounds.x, y, bounds.width, child_size.height);
            child.layout(child_bounds);
            y += child_size.height + gap;
        }

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        // First child to produce a message wins; one gesture, one outcome.
        for child in &mut self.children {
            if let Some(message) = child.event(event) {
                return Some(message);
            }
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Group
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
