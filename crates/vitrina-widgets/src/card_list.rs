//! Card list renderer for catalog products.
//!
//! Pure presentation: a sequence of items in, a grid of cards out. No
//! internal state and no messages.

use serde::{Deserialize, Serialize};
use std::any::Any;
use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, FontWeight, Point, Rect, Size, TextStyle, TypeId, Widget,
};

/// Longest description shown on a card before truncation.
pub const MAX_DESCRIPTION_CHARS: usize = 100;

/// Truncate a card description to [`MAX_DESCRIPTION_CHARS`] characters,
/// appending a continuation marker. Shorter text is returned unmodified.
#[must_use]
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() <= MAX_DESCRIPTION_CHARS {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_DESCRIPTION_CHARS).collect();
    truncated.push('…');
    truncated
}

/// Data shown on one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardItem {
    /// Card title
    pub title: String,
    /// Long-form description, truncated for display
    pub description: String,
    /// Price in the catalog's currency
    pub price: f64,
    /// Category caption
    pub category: String,
    /// Image URI
    pub image: String,
}

/// Grid of product cards.
#[derive(Serialize, Deserialize)]
pub struct CardList {
    /// Items to render, one card each
    items: Vec<CardItem>,
    /// Card width
    card_width: f32,
    /// Card height
    card_height: f32,
    /// Gap between cards
    gap: f32,
    /// Card background
    background_color: Color,
    /// Card border
    border_color: Color,
    /// Title and body text color
    text_color: Color,
    /// Category caption color
    caption_color: Color,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for CardList {
    fn default() -> Self {
        Self::new()
    }
}

impl CardList {
    /// Create an empty card list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            card_width: 320.0,
            card_height: 380.0,
            gap: 16.0,
            background_color: Color::WHITE,
            border_color: Color::new(0.85, 0.85, 0.85, 1.0),
            text_color: Color::BLACK,
            caption_color: Color::new(0.45, 0.45, 0.45, 1.0),
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the items to render.
    #[must_use]
    pub fn items(mut self, items: impl IntoIterator<Item = CardItem>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// Set card dimensions.
    #[must_use]
    pub fn card_size(mut self, width: f32, height: f32) -> Self {
        self.card_width = width.max(100.0);
        self.card_height = height.max(100.0);
        self
    }

    /// Set gap between cards.
    #[must_use]
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Number of cards.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Cards per row for a given available width.
    fn per_row(&self, available_width: f32) -> usize {
        let fit = ((available_width + self.gap) / (self.card_width + self.gap)) as usize;
        fit.max(1)
    }

    /// Grid position of the card at `index` for a given row width.
    fn card_rect(&self, index: usize, available_width: f32) -> Rect {
        let per_row = self.per_row(available_width);
        let col = index % per_row;
        let row = index / per_row;
        Rect::new(
            (col as f32).mul_add(self.card_width + self.gap, self.bounds.x),
            (row as f32).mul_add(self.card_height + self.gap, self.bounds.y),
            self.card_width,
            self.card_height,
        )
    }

    fn paint_card(&self, canvas: &mut dyn Canvas, item: &CardItem, rect: Rect) {
        canvas.fill_rect(rect, self.background_color);
        canvas.stroke_rect(rect, self.border_color, 1.0);

        // Image placeholder: the top half of the card, URI as alt text.
        let image_rect = Rect::new(rect.x, rect.y, rect.width, rect.height / 2.0);
        canvas.fill_rect(image_rect, self.border_color.with_alpha(0.3));
        canvas.draw_text(
            &item.image,
            Point::new(image_rect.x + 8.0, image_rect.y + 8.0),
            &TextStyle {
                size: 10.0,
                color: self.caption_color,
                weight: FontWeight::Light,
            },
        );

        let mut y = image_rect.bottom() + 12.0;
        canvas.draw_text(
            &item.title,
            Point::new(rect.x + 12.0, y),
            &TextStyle {
                size: 18.0,
                color: self.text_color,
                weight: FontWeight::Bold,
            },
        );
        y += 28.0;
        canvas.draw_text(
            &truncate_description(&item.description),
            Point::new(rect.x + 12.0, y),
            &TextStyle {
                size: 14.0,
                color: self.text_color,
                weight: FontWeight::Normal,
            },
        );
        y += 48.0;
        canvas.draw_text(
            &item.category,
            Point::new(rect.x + 12.0, y),
            &TextStyle {
                size: 12.0,
                color: self.caption_color,
                weight: FontWeight::Normal,
            },
        );
        canvas.draw_text(
            &format!("${:.2}", item.price),
            Point::new(rect.right() - 80.0, y),
            &TextStyle {
                size: 16.0,
                color: self.text_color,
                weight: FontWeight::Medium,
            },
        );
    }
}

impl Widget for CardList {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if self.items.is_empty() {
            return Size::ZERO;
        }
        let width = if constraints.max_width.is_finite() {
            constraints.max_width
        } else {
            self.card_width
        };
        let per_row = self.per_row(width);
        let rows = self.items.len().div_ceil(per_row);
        let height = (rows as f32).mul_add(self.card_height + self.gap, -self.gap);
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for (index, item) in self.items.iter().enumerate() {
            let rect = self.card_rect(index, self.bounds.width);
            self.paint_card(canvas, item, rect);
        }
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
        AccessibleRole::Group
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrina_core::RecordingCanvas;

    fn item(title: &str, description: &str) -> CardItem {
        CardItem {
            title: title.to_string(),
            description: description.to_string(),
            price: 29.99,
            category: "men".to_string(),
            image: "https://example.com/p.jpg".to_string(),
        }
    }

    // =========================================================================
    // Truncation tests
    // =========================================================================

    #[test]
    fn test_long_description_truncated_with_marker() {
        let long = "x".repeat(150);
        let shown = truncate_description(&long);
        assert_eq!(shown.chars().count(), MAX_DESCRIPTION_CHARS + 1);
        assert!(shown.starts_with(&"x".repeat(100)));
        assert!(shown.ends_with('…'));
    }

    #[test]
    fn test_short_description_unmodified() {
        let short = "y".repeat(50);
        assert_eq!(truncate_description(&short), short);
    }

    #[test]
    fn test_exact_limit_unmodified() {
        let exact = "z".repeat(MAX_DESCRIPTION_CHARS);
        assert_eq!(truncate_description(&exact), exact);
    }

    #[test]
    fn test_truncation_is_char_boundary_safe() {
        let multibyte = "é".repeat(150);
        let shown = truncate_description(&multibyte);
        assert_eq!(shown.chars().count(), MAX_DESCRIPTION_CHARS + 1);
    }

    // =========================================================================
    // Widget tests
    // =========================================================================

    #[test]
    fn test_empty_list_paints_nothing() {
        let mut list = CardList::new();
        list.layout(Rect::new(0.0, 0.0, 800.0, 600.0));
        let mut canvas = RecordingCanvas::new();
        list.paint(&mut canvas);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_paint_shows_truncated_description() {
        let long = "a".repeat(150);
        let mut list = CardList::new().items([item("Shirt", &long)]);
        list.layout(Rect::new(0.0, 0.0, 800.0, 600.0));

        let mut canvas = RecordingCanvas::new();
        list.paint(&mut canvas);
        let texts: Vec<&str> = canvas.texts().collect();
        assert!(texts.contains(&"Shirt"));
        let expected = format!("{}…", "a".repeat(100));
        assert!(texts.contains(&expected.as_str()));
        assert!(!texts.contains(&long.as_str()));
    }

    #[test]
    fn test_measure_wraps_rows() {
        let list = CardList::new()
            .items((0..4).map(|i| item(&format!("P{i}"), "d")))
            .card_size(320.0, 380.0)
            .gap(16.0);
        // 700px fits two 320px cards per row: 4 items = 2 rows.
        let size = list.measure(Constraints::loose(Size::new(700.0, f32::INFINITY)));
        assert_eq!(size.height, 380.0 * 2.0 + 16.0);
    }

    #[test]
    fn test_measure_empty_is_zero() {
        let list = CardList::new();
        let size = list.measure(Constraints::loose(Size::new(700.0, 600.0)));
        assert_eq!(size, Size::ZERO);
    }

    #[test]
    fn test_card_rect_grid_positions() {
        let mut list = CardList::new()
            .items((0..3).map(|i| item(&format!("P{i}"), "d")))
            .card_size(320.0, 380.0)
            .gap(16.0);
        list.layout(Rect::new(0.0, 0.0, 700.0, 800.0));

        assert_eq!(list.card_rect(0, 700.0).x, 0.0);
        assert_eq!(list.card_rect(1, 700.0).x, 336.0);
        // Third card wraps to the second row.
        let third = list.card_rect(2, 700.0);
        assert_eq!(third.x, 0.0);
        assert_eq!(third.y, 396.0);
    }

    #[test]
    fn test_events_are_ignored() {
        let mut list = CardList::new().items([item("P", "d")]);
        assert!(list.event(&Event::FocusIn).is_none());
        assert!(!list.is_interactive());
    }
}
