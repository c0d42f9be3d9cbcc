//! Vitrina: a product catalog UI with a multi-select category filter.
//!
//! The root crate composes the pieces: [`vitrina_catalog`] fetches and
//! validates the product collection, [`vitrina_widgets`] renders the filter
//! select, the theme toggle, and the card grid, and [`CatalogApp`] ties them
//! together in an Elm-style update loop.

mod app;

pub use app::{category_options, filter_products, CatalogApp, CatalogMessage, CatalogState};
