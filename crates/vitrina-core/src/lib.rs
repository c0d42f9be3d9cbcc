//! Core types and traits for the Vitrina catalog UI.
//!
//! This crate provides foundational types used throughout Vitrina:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], [`Key`], [`MouseButton`]
//! - The [`Widget`] trait and the [`Canvas`] paint abstraction
//! - Theming: [`Theme`], [`ThemeHandle`]
//! - Elm-style state management: [`State`], [`Command`]

mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
mod state;
mod theme;
pub mod widget;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use state::{Command, State};
pub use theme::{ColorPalette, Theme, ThemeHandle, ThemeMode};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget, WidgetId,
};
