//! Theme system for consistent styling.
//!
//! The theme is process-wide mutable UI state, independent of any widget's
//! selection or interaction state. Embedders construct a [`ThemeHandle`] and
//! inject it wherever styling decisions are made; flipping the mode is an
//! explicit write through the handle.

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Light or dark rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    /// Light backgrounds, dark text
    #[default]
    Light,
    /// Dark backgrounds, light text
    Dark,
}

impl ThemeMode {
    /// Get the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A color palette for theming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Primary brand color
    pub primary: Color,
    /// Surface/background color
    pub surface: Color,
    /// Background color
    pub background: Color,
    /// Error/danger color
    pub error: Color,
    /// Text on primary
    pub on_primary: Color,
    /// Text on surface
    pub on_surface: Color,
    /// Text on background
    pub on_background: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}

impl ColorPalette {
    /// Create a light color palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: Color::new(0.2, 0.47, 0.96, 1.0),
            surface: Color::WHITE,
            background: Color::new(0.98, 0.98, 0.98, 1.0),
            error: Color::new(0.69, 0.18, 0.18, 1.0),
            on_primary: Color::WHITE,
            on_surface: Color::new(0.13, 0.13, 0.13, 1.0),
            on_background: Color::new(0.13, 0.13, 0.13, 1.0),
        }
    }

    /// Create a dark color palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: Color::new(0.51, 0.71, 1.0, 1.0),
            surface: Color::new(0.14, 0.14, 0.14, 1.0),
            background: Color::new(0.07, 0.07, 0.07, 1.0),
            error: Color::new(0.94, 0.47, 0.47, 1.0),
            on_primary: Color::BLACK,
            on_surface: Color::WHITE,
            on_background: Color::WHITE,
        }
    }

    /// Get the palette for a mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// A complete theme: a mode plus the palette derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Current mode
    pub mode: ThemeMode,
    /// Colors for the current mode
    pub palette: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::Light)
    }
}

impl Theme {
    /// Create a theme for the given mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self {
            mode,
            palette: ColorPalette::for_mode(mode),
        }
    }

    /// Switch to the opposite mode, swapping in the matching palette.
    pub fn toggle(&mut self) {
        *self = Self::for_mode(self.mode.toggled());
    }
}

/// Shared read/write access to the process-wide theme.
#[derive(Debug, Clone, Default)]
pub struct ThemeHandle {
    inner: Arc<RwLock<Theme>>,
}

impl ThemeHandle {
    /// Create a handle holding the given theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            inner: Arc::new(RwLock::new(theme)),
        }
    }

    /// Get a snapshot of the current theme.
    ///
    /// Falls back to the default theme if the lock was poisoned.
    #[must_use]
    pub fn get(&self) -> Theme {
        self.inner.read().map(|t| t.clone()).unwrap_or_default()
    }

    /// Get the current mode.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.get().mode
    }

    /// Replace the current theme.
    pub fn set(&self, theme: Theme) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = theme;
        }
    }

    /// Flip between light and dark, returning the new mode.
    pub fn toggle(&self) -> ThemeMode {
        if let Ok(mut guard) = self.inner.write() {
            guard.toggle();
            guard.mode
        } else {
            ThemeMode::default()
        }
    }
}
