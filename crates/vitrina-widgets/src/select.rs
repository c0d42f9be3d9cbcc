//! Select/Dropdown widget for choosing from options.
//!
//! The widget is a controlled component: the caller owns the selection and
//! supplies it on construction; user actions are reported as
//! [`SelectionChanged`] messages carrying the complete replacement selection,
//! never a delta. The widget itself only owns ephemeral interaction state
//! (open flag, highlighted index, focus).
//!
//! Single or multiple mode is fixed by the [`Selection`] variant the widget
//! is constructed with and cannot change for the widget's lifetime.

use serde::{Deserialize, Serialize};
use std::any::Any;
use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TextStyle, TypeId,
    Widget,
};

/// A selectable option: a label/value pair where the value is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique value for this option
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Create an option where value equals label.
    #[must_use]
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            label: text,
        }
    }
}

/// The caller-owned selection, per mode.
///
/// Transitions are pure: each method returns the selection that results from
/// an action, or `None` when the action would not change anything. The
/// multiple-mode sequence never holds two options with equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Single mode: one option or none
    Single(Option<SelectOption>),
    /// Multiple mode: ordered sequence, unique by value
    Multiple(Vec<SelectOption>),
}

impl Selection {
    /// Empty single-mode selection.
    #[must_use]
    pub const fn single() -> Self {
        Self::Single(None)
    }

    /// Empty multiple-mode selection.
    #[must_use]
    pub const fn multiple() -> Self {
        Self::Multiple(Vec::new())
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(current) => current.is_none(),
            Self::Multiple(current) => current.is_empty(),
        }
    }

    /// Check if an option with this value is selected.
    #[must_use]
    pub fn contains_value(&self, value: &str) -> bool {
        match self {
            Self::Single(current) => current.as_ref().is_some_and(|o| o.value == value),
            Self::Multiple(current) => current.iter().any(|o| o.value == value),
        }
    }

    /// The selection after choosing `option`.
    ///
    /// Multiple mode appends to the end, preserving prior order; choosing an
    /// already-selected value is a no-op (`None`). Single mode replaces;
    /// re-choosing the current value is a no-op.
    #[must_use]
    pub fn with_selected(&self, option: &SelectOption) -> Option<Self> {
        if self.contains_value(&option.value) {
            return None;
        }
        match self {
            Self::Single(_) => Some(Self::Single(Some(option.clone()))),
            Self::Multiple(current) => {
                let mut next = current.clone();
                next.push(option.clone());
                Some(Self::Multiple(next))
            }
        }
    }

    /// The selection after removing the entry with `value`, order preserved.
    ///
    /// Returns `None` when no such entry exists.
    #[must_use]
    pub fn with_removed(&self, value: &str) -> Option<Self> {
        if !self.contains_value(value) {
            return None;
        }
        match self {
            Self::Single(_) => Some(Self::Single(None)),
            Self::Multiple(current) => Some(Self::Multiple(
                current.iter().filter(|o| o.value != value).cloned().collect(),
            )),
        }
    }

    /// The emptied selection, or `None` when already empty.
    #[must_use]
    pub fn cleared(&self) -> Option<Self> {
        if self.is_empty() {
            return None;
        }
        match self {
            Self::Single(_) => Some(Self::Single(None)),
            Self::Multiple(_) => Some(Self::Multiple(Vec::new())),
        }
    }
}

/// Message emitted when the user's action changes the selection.
///
/// Carries the full replacement selection, never a delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// The new selection
    pub selection: Selection,
}

// Fixed text metrics; the paint backend uses the same monospace assumption.
const CHAR_WIDTH: f32 = 8.0;
const CHIP_PADDING: f32 = 6.0;
const REMOVE_BOX: f32 = 14.0;
const CLEAR_BOX: f32 = 16.0;
const ARROW_BOX: f32 = 20.0;

/// Select/Dropdown widget.
#[derive(Serialize, Deserialize)]
pub struct Select {
    /// Available options
    options: Vec<SelectOption>,
    /// Caller-supplied selection (controlled; only echoed, never owned)
    value: Selection,
    /// Placeholder text when nothing selected
    placeholder: String,
    /// Whether the dropdown is currently open
    #[serde(skip)]
    open: bool,
    /// Keyboard-highlighted index into `options`, valid while open
    #[serde(skip)]
    highlighted: usize,
    /// Whether the control has keyboard focus
    #[serde(skip)]
    focused: bool,
    /// Minimum width
    min_width: f32,
    /// Header and option row height
    item_height: f32,
    /// Background color
    background_color: Color,
    /// Border color
    border_color: Color,
    /// Selected option background
    selected_bg_color: Color,
    /// Highlighted option background
    highlight_bg_color: Color,
    /// Text color
    text_color: Color,
    /// Placeholder text color
    placeholder_color: Color,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Select {
    /// Create a single-mode select.
    #[must_use]
    pub fn single() -> Self {
        Self::with_value(Selection::single())
    }

    /// Create a multiple-mode select.
    #[must_use]
    pub fn multiple() -> Self {
        Self::with_value(Selection::multiple())
    }

    fn with_value(value: Selection) -> Self {
        Self {
            options: Vec::new(),
            value,
            placeholder: "Select...".to_string(),
            open: false,
            highlighted: 0,
            focused: false,
            min_width: 300.0,
            item_height: 32.0,
            background_color: Color::WHITE,
            border_color: Color::new(0.8, 0.8, 0.8, 1.0),
            selected_bg_color: Color::new(0.9, 0.95, 1.0, 1.0),
            highlight_bg_color: Color::new(0.8, 0.88, 1.0, 1.0),
            text_color: Color::BLACK,
            placeholder_color: Color::new(0.6, 0.6, 0.6, 1.0),
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
        }
    }

    /// Add an option.
    #[must_use]
    pub fn option(mut self, opt: SelectOption) -> Self {
        self.options.push(opt);
        self
    }

    /// Add multiple options.
    #[must_use]
    pub fn options(mut self, opts: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(opts);
        self
    }

    /// Set options from simple string values.
    #[must_use]
    pub fn options_from_strings(
        mut self,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.options = values.into_iter().map(SelectOption::simple).collect();
        self
    }

    /// Set the caller-supplied selection.
    ///
    /// # Panics
    ///
    /// Panics if the selection's mode differs from the mode the widget was
    /// constructed with; the mode is fixed for the widget's lifetime.
    #[must_use]
    pub fn value(mut self, selection: Selection) -> Self {
        self.set_value(selection);
        self
    }

    /// Replace the caller-supplied selection (after handling a
    /// [`SelectionChanged`] message).
    ///
    /// # Panics
    ///
    /// Panics if the selection's mode differs from the constructed mode.
    pub fn set_value(&mut self, selection: Selection) {
        assert!(
            std::mem::discriminant(&self.value) == std::mem::discriminant(&selection),
            "Select mode is fixed at construction; cannot swap single/multiple selection"
        );
        self.value = selection;
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set minimum width.
    #[must_use]
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width.max(50.0);
        self
    }

    /// Set header/option row height.
    #[must_use]
    pub fn item_height(mut self, height: f32) -> Self {
        self.item_height = height.max(20.0);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Get the caller-supplied selection.
    #[must_use]
    pub fn get_value(&self) -> &Selection {
        &self.value
    }

    /// Get all options.
    #[must_use]
    pub fn get_options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Check if the dropdown is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Get the highlighted option index.
    #[must_use]
    pub const fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    // --- geometry -----------------------------------------------------------

    fn header_rect(&self) -> Rect {
        Rect::new(self.bounds.x, self.bounds.y, self.bounds.width, self.item_height)
    }

    fn clear_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x + self.bounds.width - ARROW_BOX - CLEAR_BOX,
            self.bounds.y + (self.item_height - CLEAR_BOX) / 2.0,
            CLEAR_BOX,
            CLEAR_BOX,
        )
    }

    fn chip_width(option: &SelectOption) -> f32 {
        option.label.chars().count() as f32 * CHAR_WIDTH + CHIP_PADDING * 2.0 + REMOVE_BOX
    }

    /// Chip rectangles for the selected values, in selection order.
    fn chip_rects(&self) -> Vec<Rect> {
        let Selection::Multiple(selected) = &self.value else {
            return Vec::new();
        };
        let mut x = self.bounds.x + CHIP_PADDING;
        let y = self.bounds.y + (self.item_height - 24.0) / 2.0;
        selected
            .iter()
            .map(|option| {
                let rect = Rect::new(x, y, Self::chip_width(option), 24.0);
                x = rect.right() + CHIP_PADDING;
                rect
            })
            .collect()
    }

    /// The remove affordance region inside a chip.
    fn chip_remove_rect(chip: &Rect) -> Rect {
        Rect::new(
            chip.right() - REMOVE_BOX - CHIP_PADDING / 2.0,
            chip.y + (chip.height - REMOVE_BOX) / 2.0,
            REMOVE_BOX,
            REMOVE_BOX,
        )
    }

    fn item_rect(&self, index: usize) -> Rect {
        let y = (index as f32).mul_add(self.item_height, self.bounds.y + self.item_height);
        Rect::new(self.bounds.x, y, self.bounds.width, self.item_height)
    }

    fn item_at_position(&self, position: &Point) -> Option<usize> {
        if !self.open {
            return None;
        }
        (0..self.options.len()).find(|&i| self.item_rect(i).contains_point(position))
    }

    // --- transitions --------------------------------------------------------

    fn set_open(&mut self, open: bool) {
        // Every open transition resets the highlight to the first option.
        if open && !self.open {
            self.highlighted = 0;
        }
        self.open = open;
    }

    fn move_highlight(&mut self, down: bool) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        // Clamped, no wraparound.
        self.highlighted = if down {
            (self.highlighted + 1).min(last)
        } else {
            self.highlighted.saturating_sub(1)
        };
    }

    /// Commit an option as the user's choice; `None` when it changes nothing.
    fn commit(&self, index: usize) -> Option<SelectionChanged> {
        let option = self.options.get(index)?;
        self.value
            .with_selected(option)
            .map(|selection| SelectionChanged { selection })
    }

    fn changed(selection: Option<Selection>) -> Option<Box<dyn Any + Send>> {
        selection.map(|selection| {
            Box::new(SelectionChanged { selection }) as Box<dyn Any + Send>
        })
    }
}

impl Widget for Select {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.min_width, self.item_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let header = self.header_rect();
        canvas.fill_rect(header, self.background_color);
        canvas.stroke_rect(header, self.border_color, 1.0);

        let text_style = TextStyle {
            color: self.text_color,
            ..Default::default()
        };

        match &self.value {
            Selection::Multiple(selected) => {
                for (option, chip) in selected.iter().zip(self.chip_rects()) {
                    canvas.fill_rect(chip, self.selected_bg_color);
                    canvas.stroke_rect(chip, self.border_color, 1.0);
                    canvas.draw_text(
                        &option.label,
                        Point::new(chip.x + CHIP_PADDING, chip.y + 4.0),
                        &text_style,
                    );
                    let remove = Self::chip_remove_rect(&chip);
                    canvas.draw_text("×", Point::new(remove.x + 3.0, remove.y), &text_style);
                }
            }
            Selection::Single(selected) => {
                let (text, style) = selected.as_ref().map_or_else(
                    || {
                        (
                            self.placeholder.as_str(),
                            TextStyle {
                                color: self.placeholder_color,
                                ..Default::default()
                            },
                        )
                    },
                    |option| (option.label.as_str(), text_style.clone()),
                );
                canvas.draw_text(
                    text,
                    Point::new(header.x + CHIP_PADDING, header.y + (self.item_height - 16.0) / 2.0),
                    &style,
                );
            }
        }

        // Clear-all affordance, always visible.
        let clear = self.clear_rect();
        canvas.draw_text("×", Point::new(clear.x + 4.0, clear.y), &text_style);

        // Dropdown arrow.
        let arrow = Point::new(header.right() - ARROW_BOX / 2.0 - 4.0, header.y + self.item_height / 2.0);
        canvas.fill_circle(arrow, 3.0, self.text_color);

        if self.open {
            for (i, option) in self.options.iter().enumerate() {
                let item = self.item_rect(i);
                let bg = if i == self.highlighted {
                    self.highlight_bg_color
                } else if self.value.contains_value(&option.value) {
                    self.selected_bg_color
                } else {
                    self.background_color
                };
                canvas.fill_rect(item, bg);
                canvas.draw_text(
                    &option.label,
                    Point::new(item.x + CHIP_PADDING, item.y + (self.item_height - 16.0) / 2.0),
                    &text_style,
                );
            }
            if !self.options.is_empty() {
                let list = Rect::new(
                    self.bounds.x,
                    self.bounds.y + self.item_height,
                    self.bounds.width,
                    self.options.len() as f32 * self.item_height,
                );
                canvas.stroke_rect(list, self.border_color, 1.0);
            }
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::FocusIn => {
                self.focused = true;
            }
            Event::FocusOut => {
                self.focused = false;
                self.set_open(false);
            }
            // Keyboard is scoped to the control's own focus.
            Event::KeyDown { key } if self.focused => match key {
                Key::Enter | Key::Space => {
                    if self.open {
                        let changed = self.commit(self.highlighted);
                        self.set_open(false);
                        return changed.map(|msg| Box::new(msg) as Box<dyn Any + Send>);
                    }
                    self.set_open(true);
                }
                Key::Up | Key::Down => {
                    if self.open {
                        self.move_highlight(*key == Key::Down);
                    } else {
                        self.set_open(true);
                    }
                }
                Key::Escape => {
                    self.set_open(false);
                }
                _ => {}
            },
            Event::MouseMove { position } => {
                if let Some(index) = self.item_at_position(position) {
                    self.highlighted = index;
                }
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                // Child affordances win over the header toggle; a gesture is
                // either a removal/clear or a toggle, never both.
                if self.clear_rect().contains_point(position) {
                    return Self::changed(self.value.cleared());
                }
                if let Selection::Multiple(selected) = &self.value {
                    for (option, chip) in selected.iter().zip(self.chip_rects()) {
                        if Self::chip_remove_rect(&chip).contains_point(position) {
                            let value = option.value.clone();
                            return Self::changed(self.value.with_removed(&value));
                        }
                    }
                }
                if self.header_rect().contains_point(position) {
                    self.set_open(!self.open);
                } else if let Some(index) = self.item_at_position(position) {
                    let changed = self.commit(index);
                    self.set_open(false);
                    return changed.map(|msg| Box::new(msg) as Box<dyn Any + Send>);
                } else if self.open {
                    self.set_open(false);
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
        AccessibleRole::ComboBox
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
    use vitrina_core::Widget;

    fn abc_options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "A"),
            SelectOption::new("b", "B"),
            SelectOption::new("c", "C"),
        ]
    }

    fn focused_multiple() -> Select {
        let mut s = Select::multiple().options(abc_options());
        s.layout(Rect::new(0.0, 0.0, 300.0, 32.0));
        s.event(&Event::FocusIn);
        s
    }

    fn key(s: &mut Select, key: Key) -> Option<Box<dyn Any + Send>> {
        s.event(&Event::KeyDown { key })
    }

    fn downcast(msg: Box<dyn Any + Send>) -> SelectionChanged {
        *msg.downcast::<SelectionChanged>().expect("SelectionChanged")
    }

    // =========================================================================
    // Selection transition tests
    // =========================================================================

    #[test]
    fn test_selection_multiple_appends_in_order() {
        let a = SelectOption::new("a", "A");
        let b = SelectOption::new("b", "B");
        let s1 = Selection::multiple().with_selected(&a).expect("changed");
        let s2 = s1.with_selected(&b).expect("changed");
        assert_eq!(s2, Selection::Multiple(vec![a, b]));
    }

    #[test]
    fn test_selection_multiple_reselect_is_noop() {
        let a = SelectOption::new("a", "A");
        let s1 = Selection::multiple().with_selected(&a).expect("changed");
        assert_eq!(s1.with_selected(&a), None);
        // Same value, different label: still a duplicate by value.
        assert_eq!(s1.with_selected(&SelectOption::new("a", "Other")), None);
    }

    #[test]
    fn test_selection_remove_preserves_order() {
        let selection = Selection::Multiple(abc_options());
        let next = selection.with_removed("b").expect("changed");
        assert_eq!(
            next,
            Selection::Multiple(vec![SelectOption::new("a", "A"), SelectOption::new("c", "C")])
        );
    }

    #[test]
    fn test_selection_remove_missing_is_noop() {
        let selection = Selection::Multiple(abc_options());
        assert_eq!(selection.with_removed("z"), None);
    }

    #[test]
    fn test_selection_clear() {
        assert_eq!(
            Selection::Multiple(abc_options()).cleared(),
            Some(Selection::multiple())
        );
        let single = Selection::Single(Some(SelectOption::simple("x")));
        assert_eq!(single.cleared(), Some(Selection::single()));
    }

    #[test]
    fn test_selection_clear_when_empty_is_noop() {
        assert_eq!(Selection::multiple().cleared(), None);
        assert_eq!(Selection::single().cleared(), None);
    }

    #[test]
    fn test_selection_single_replace_and_noop() {
        let a = SelectOption::new("a", "A");
        let b = SelectOption::new("b", "B");
        let s1 = Selection::single().with_selected(&a).expect("changed");
        assert_eq!(s1, Selection::Single(Some(a.clone())));
        assert_eq!(s1.with_selected(&a), None);
        let s2 = s1.with_selected(&b).expect("changed");
        assert_eq!(s2, Selection::Single(Some(b)));
    }

    // =========================================================================
    // Open/close state machine tests
    // =========================================================================

    #[test]
    fn test_opening_resets_highlight() {
        let mut s = focused_multiple();
        key(&mut s, Key::Down); // Opens
        key(&mut s, Key::Down); // highlight = 1
        key(&mut s, Key::Down); // highlight = 2
        assert_eq!(s.highlighted_index(), 2);
        key(&mut s, Key::Escape);
        assert!(!s.is_open());
        key(&mut s, Key::Up); // Reopens
        assert!(s.is_open());
        assert_eq!(s.highlighted_index(), 0);
    }

    #[test]
    fn test_arrow_keys_open_when_closed() {
        let mut s = focused_multiple();
        assert!(!s.is_open());
        key(&mut s, Key::Down);
        assert!(s.is_open());
        assert_eq!(s.highlighted_index(), 0);
    }

    #[test]
    fn test_highlight_clamps_no_wraparound() {
        let mut s = focused_multiple();
        key(&mut s, Key::Down); // Opens at 0
        key(&mut s, Key::Up);
        assert_eq!(s.highlighted_index(), 0); // Clamped at 0
        for _ in 0..10 {
            key(&mut s, Key::Down);
        }
        assert_eq!(s.highlighted_index(), 2); // Clamped at last
    }

    #[test]
    fn test_escape_closes() {
        let mut s = focused_multiple();
        key(&mut s, Key::Down);
        assert!(s.is_open());
        key(&mut s, Key::Escape);
        assert!(!s.is_open());
    }

    #[test]
    fn test_focus_out_closes() {
        let mut s = focused_multiple();
        key(&mut s, Key::Down);
        s.event(&Event::FocusOut);
        assert!(!s.is_open());
    }

    #[test]
    fn test_keyboard_ignored_without_focus() {
        let mut s = Select::multiple().options(abc_options());
        s.layout(Rect::new(0.0, 0.0, 300.0, 32.0));
        key(&mut s, Key::Down);
        assert!(!s.is_open());
    }

    #[test]
    fn test_header_click_toggles_open() {
        let mut s = focused_multiple();
        let header = Point::new(100.0, 16.0);
        s.event(&Event::MouseDown {
            position: header,
            button: MouseButton::Left,
        });
        assert!(s.is_open());
        s.event(&Event::MouseDown {
            position: header,
            button: MouseButton::Left,
        });
        assert!(!s.is_open());
    }

    #[test]
    fn test_click_outside_closes() {
        let mut s = focused_multiple();
        key(&mut s, Key::Down);
        let result = s.event(&Event::MouseDown {
            position: Point::new(100.0, 500.0),
            button: MouseButton::Left,
        });
        assert!(!s.is_open());
        assert!(result.is_none());
    }

    #[test]
    fn test_hover_moves_highlight() {
        let mut s = focused_multiple();
        key(&mut s, Key::Down); // Open, highlight 0
        s.event(&Event::MouseMove {
            position: Point::new(100.0, 80.0), // Item 1 (rows start at y=32)
        });
        assert_eq!(s.highlighted_index(), 1);
    }

    // =========================================================================
    // Commit and message tests
    // =========================================================================

    #[test]
    fn test_arrow_arrow_enter_selects_second_option() {
        // Closed, Arrow-Down opens at 0, Arrow-Down moves to 1, Enter commits B.
        let mut s = focused_multiple();
        key(&mut s, Key::Down);
        key(&mut s, Key::Down);
        let msg = downcast(key(&mut s, Key::Enter).expect("selection changed"));
        assert_eq!(
            msg.selection,
            Selection::Multiple(vec![SelectOption::new("b", "B")])
        );
        assert!(!s.is_open());
    }

    #[test]
    fn test_commit_does_not_mutate_controlled_value() {
        let mut s = focused_multiple();
        key(&mut s, Key::Down);
        key(&mut s, Key::Enter);
        // Controlled: the widget reports, the caller owns.
        assert_eq!(s.get_value(), &Selection::multiple());
    }

    #[test]
    fn test_enter_on_selected_option_emits_nothing_but_closes() {
        let mut s = Select::multiple()
            .options(abc_options())
            .value(Selection::Multiple(vec![SelectOption::new("a", "A")]));
        s.layout(Rect::new(0.0, 0.0, 300.0, 32.0));
        s.event(&Event::FocusIn);
        key(&mut s, Key::Down); // Open, highlight 0 = already-selected A
        let result = key(&mut s, Key::Enter);
        assert!(result.is_none());
        assert!(!s.is_open());
    }

    #[test]
    fn test_click_option_selects_and_closes() {
        let mut s = focused_multiple();
        key(&mut s, Key::Down);
        let result = s.event(&Event::MouseDown {
            position: Point::new(100.0, 48.0), // Item 0
            button: MouseButton::Left,
        });
        let msg = downcast(result.expect("selection changed"));
        assert_eq!(
            msg.selection,
            Selection::Multiple(vec![SelectOption::new("a", "A")])
        );
        assert!(!s.is_open());
    }

    #[test]
    fn test_enter_with_empty_options_just_closes() {
        let mut s = Select::multiple();
        s.layout(Rect::new(0.0, 0.0, 300.0, 32.0));
        s.event(&Event::FocusIn);
        key(&mut s, Key::Down);
        assert!(s.is_open());
        assert!(key(&mut s, Key::Enter).is_none());
        assert!(!s.is_open());
    }

    #[test]
    fn test_single_mode_enter_replaces_value() {
        let mut s = Select::single()
            .options(abc_options())
            .value(Selection::Single(Some(SelectOption::new("a", "A"))));
        s.layout(Rect::new(0.0, 0.0, 300.0, 32.0));
        s.event(&Event::FocusIn);
        key(&mut s, Key::Down);
        key(&mut s, Key::Down); // Highlight B
        let msg = downcast(key(&mut s, Key::Enter).expect("selection changed"));
        assert_eq!(msg.selection, Selection::Single(Some(SelectOption::new("b", "B"))));
    }

    // =========================================================================
    // Clear and chip removal tests
    // =========================================================================

    #[test]
    fn test_clear_click_does_not_toggle_open() {
        let mut s = Select::multiple()
            .options(abc_options())
            .value(Selection::Multiple(vec![SelectOption::new("a", "A")]));
        s.layout(Rect::new(0.0, 0.0, 300.0, 32.0));
        s.event(&Event::FocusIn);

        // Clear box sits inside the header; its click must not open the list.
        let clear = Point::new(300.0 - 20.0 - 8.0, 16.0);
        let result = s.event(&Event::MouseDown {
            position: clear,
            button: MouseButton::Left,
        });
        let msg = downcast(result.expect("selection changed"));
        assert_eq!(msg.selection, Selection::multiple());
        assert!(!s.is_open());
    }

    #[test]
    fn test_clear_when_empty_emits_nothing() {
        let mut s = focused_multiple();
        let clear = Point::new(300.0 - 20.0 - 8.0, 16.0);
        let result = s.event(&Event::MouseDown {
            position: clear,
            button: MouseButton::Left,
        });
        assert!(result.is_none());
        // The gesture is still consumed by the affordance, not the toggle.
        assert!(!s.is_open());
    }

    #[test]
    fn test_chip_remove_click_removes_only_that_chip() {
        let selected = vec![SelectOption::new("a", "A"), SelectOption::new("b", "B")];
        let mut s = Select::multiple()
            .options(abc_options())
            .value(Selection::Multiple(selected));
        s.layout(Rect::new(0.0, 0.0, 300.0, 32.0));
        s.event(&Event::FocusIn);

        // First chip: x = 6, width = 1*8 + 12 + 14 = 34; remove box right-aligned.
        let remove = Point::new(6.0 + 34.0 - 14.0 - 3.0 + 7.0, 16.0);
        let result = s.event(&Event::MouseDown {
            position: remove,
            button: MouseButton::Left,
        });
        let msg = downcast(result.expect("selection changed"));
        assert_eq!(
            msg.selection,
            Selection::Multiple(vec![SelectOption::new("b", "B")])
        );
        assert!(!s.is_open());
    }

    // =========================================================================
    // Mode and trait tests
    // =========================================================================

    #[test]
    #[should_panic(expected = "mode is fixed at construction")]
    fn test_mode_swap_fails_fast() {
        let _ = Select::multiple().value(Selection::single());
    }

    #[test]
    fn test_measure_respects_min_size() {
        let s = Select::multiple().min_width(200.0).item_height(40.0);
        let size = s.measure(Constraints::loose(Size::new(400.0, 200.0)));
        assert_eq!(size, Size::new(200.0, 40.0));
    }

    #[test]
    fn test_widget_metadata() {
        let s = Select::multiple()
            .with_test_id("category-filter")
            .with_accessible_name("Category");
        assert_eq!(Widget::test_id(&s), Some("category-filter"));
        assert_eq!(s.accessible_name(), Some("Category"));
        assert_eq!(s.accessible_role(), AccessibleRole::ComboBox);
        assert!(s.is_focusable());
        assert!(s.children().is_empty());
    }

    #[test]
    fn test_paint_open_list_shows_all_options() {
        use vitrina_core::RecordingCanvas;

        let mut s = focused_multiple();
        key(&mut s, Key::Down);
        let mut canvas = RecordingCanvas::new();
        s.paint(&mut canvas);
        let texts: Vec<&str> = canvas.texts().collect();
        for label in ["A", "B", "C"] {
            assert!(texts.contains(&label), "missing option label {label}");
        }
    }

    // =========================================================================
    // Property tests
    // =========================================================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn option_strategy() -> impl Strategy<Value = SelectOption> {
            "[a-e]".prop_map(SelectOption::simple)
        }

        proptest! {
            #[test]
            fn prop_selection_never_holds_duplicate_values(
                picks in proptest::collection::vec(option_strategy(), 0..20)
            ) {
                let mut selection = Selection::multiple();
                for pick in &picks {
                    if let Some(next) = selection.with_selected(pick) {
                        selection = next;
                    }
                }
                let Selection::Multiple(selected) = &selection else {
                    unreachable!()
                };
                let mut values: Vec<&str> =
                    selected.iter().map(|o| o.value.as_str()).collect();
                values.sort_unstable();
                let before = values.len();
                values.dedup();
                prop_assert_eq!(before, values.len());
            }

            #[test]
            fn prop_remove_excludes_exactly_one_entry(
                picks in proptest::collection::vec(option_strategy(), 1..20),
                which in 0usize..20,
            ) {
                let mut selection = Selection::multiple();
                for pick in &picks {
                    if let Some(next) = selection.with_selected(pick) {
                        selection = next;
                    }
                }
                let Selection::Multiple(before) = selection.clone() else {
                    unreachable!()
                };
                prop_assume!(!before.is_empty());

                let target = before[which % before.len()].value.clone();
                let next = selection.with_removed(&target);
                prop_assert!(next.is_some(), "removal of present value must change");
                let Some(Selection::Multiple(after)) = next else {
                    unreachable!()
                };
                let expected: Vec<SelectOption> = before
                    .iter()
                    .filter(|o| o.value != target)
                    .cloned()
                    .collect();
                prop_assert_eq!(after, expected);
            }

            #[test]
            fn prop_highlight_stays_in_bounds(
                downs in proptest::collection::vec(any::<bool>(), 0..40)
            ) {
                let mut s = focused_multiple();
                key(&mut s, Key::Down); // Open
                for down in downs {
                    key(&mut s, if down { Key::Down } else { Key::Up });
                    prop_assert!(s.highlighted_index() < s.get_options().len());
                }
            }
        }
    }
}
