//! Load state for the product collection.
//!
//! Descendants of the data provider observe exactly one of three states:
//! loading, failed, or a ready collection. Failure is terminal for the
//! current mount; recovery requires a fresh fetch.

use crate::client::CatalogError;
use crate::product::Product;
use serde::{Deserialize, Serialize};

/// The provider's observable state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum LoadState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Fetch or validation failed; message is for display only
    Failed(String),
    /// Validated collection, immutable from here on
    Ready(Vec<Product>),
}

impl LoadState {
    /// Build from a completed fetch.
    #[must_use]
    pub fn from_result(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => Self::Ready(products),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// Check if the fetch is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the fetch failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Get the validated products, if ready.
    ///
    /// Returns `None` while loading or after failure; consumers must not
    /// treat absence as an empty catalog.
    #[must_use]
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            Self::Ready(products) => Some(products),
            _ => None,
        }
    }
}
