//! HTTP client for the product endpoint.
//!
//! One GET per fetch, no retries. Failures map to [`CatalogError`]; the UI
//! collapses all of them into a single failed load state.

use crate::product::{parse_products, Product, ValidationError};
use serde_json::Value;
use std::fmt;

/// Default product-list endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Failure fetching or validating the product collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Transport-level failure (DNS, connection, timeout).
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The body was received but is not a valid product collection.
    Validation(ValidationError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(reason) => write!(f, "network error: {reason}"),
            Self::Status(code) => write!(f, "server returned HTTP {code}"),
            Self::Validation(err) => write!(f, "validation failed: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

/// Client for the remote product catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    endpoint: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Create a client against the default endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a client against a custom endpoint.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Get the configured endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and validate the product collection.
    ///
    /// Performs exactly one GET. A non-success status yields
    /// [`CatalogError::Status`] without reading the body; a body that is not
    /// a conforming product array yields [`CatalogError::Validation`]. A
    /// partial collection is never returned.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure, error status, or
    /// validation failure.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = reqwest::get(&self.endpoint)
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| CatalogError::Validation(ValidationError::Syntax(e.to_string())))?;

        Ok(parse_products(&body)?)
    }
}
