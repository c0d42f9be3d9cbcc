//! Toggle switch widget.
//!
//! Used by the catalog shell for the light/dark theme switch; the widget is
//! deliberately unaware of what it toggles.

use serde::{Deserialize, Serialize};
use std::any::Any;
use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TextStyle, TypeId,
    Widget,
};

/// Message emitted when toggle state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChanged {
    /// The new toggle state
    pub on: bool,
}

/// Toggle switch widget (on/off).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toggle {
    /// Current state
    on: bool,
    /// Label text
    label: String,
    /// Track width
    track_width: f32,
    /// Track height
    track_height: f32,
    /// Track color when off
    track_off_color: Color,
    /// Track color when on
    track_on_color: Color,
    /// Thumb color
    thumb_color: Color,
    /// Label color
    label_color: Color,
    /// Whether the control has keyboard focus
    #[serde(skip)]
    focused: bool,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Toggle {
    fn default() -> Self {
        Self {
            on: false,
            label: String::new(),
            track_width: 44.0,
            track_height: 24.0,
            track_off_color: Color::new(0.7, 0.7, 0.7, 1.0),
            track_on_color: Color::new(0.2, 0.47, 0.96, 1.0),
            thumb_color: Color::WHITE,
            label_color: Color::BLACK,
            focused: false,
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }
}

impl Toggle {
    /// Create a new toggle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the toggle state.
    #[must_use]
    pub const fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the current state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.on
    }

    fn flip(&mut self) -> Option<Box<dyn Any + Send>> {
        self.on = !self.on;
        Some(Box::new(ToggleChanged { on: self.on }))
    }
}

impl Widget for Toggle {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let label_width = if self.label.is_empty() {
            0.0
        } else {
            self.label.chars().count() as f32 * 8.0 + 8.0
        };
        constraints.constrain(Size::new(self.track_width + label_width, self.track_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let track = Rect::new(self.bounds.x, self.bounds.y, self.track_width, self.track_height);
        let track_color = if self.on {
            self.track_on_color
        } else {
            self.track_off_color
        };
        canvas.fill_rect(track, track_color);

        let radius = self.track_height / 2.0 - 2.0;
        let thumb_x = if self.on {
            track.right() - radius - 2.0
        } else {
            track.x + radius + 2.0
        };
        canvas.fill_circle(
            Point::new(thumb_x, track.y + self.track_height / 2.0),
            radius,
            self.thumb_color,
        );

        if !self.label.is_empty() {
            canvas.draw_text(
                &self.label,
                Point::new(track.right() + 8.0, track.y + 4.0),
                &TextStyle {
                    color: self.label_color,
                    ..Default::default()
                },
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::FocusIn => self.focused = true,
            Event::FocusOut => self.focused = false,
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => {
                return self.flip();
            }
            Event::KeyDown { key } if self.focused => {
                if matches!(key, Key::Enter | Key::Space) {
                    return self.flip();
                }
            }
            _ => {}
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
