//! Product data layer for Vitrina.
//!
//! Fetches the product list from a remote endpoint, validates every element
//! against the product schema (rejecting the whole batch on any failure),
//! and exposes the result as a three-state [`LoadState`].

mod client;
mod product;
mod provider;

pub use client::{CatalogClient, CatalogError, DEFAULT_ENDPOINT};
pub use product::{parse_products, Product, Rating, ValidationError};
pub use provider::LoadState;
