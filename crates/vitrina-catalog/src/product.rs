//! Product records and the parse-or-fail validation boundary.
//!
//! Remote data enters the system as untyped JSON. [`parse_products`] either
//! returns a fully validated collection or a structured error naming the
//! offending element; partially validated data never leaves this module.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Aggregate rating attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score
    pub rate: f64,
    /// Number of ratings
    pub count: u64,
}

/// A single catalog product, immutable once validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: i64,
    /// Display title
    pub title: String,
    /// Price, non-negative
    pub price: f64,
    /// Long-form description
    pub description: String,
    /// Grouping key for filtering
    pub category: String,
    /// Image URI
    pub image: String,
    /// Aggregate rating
    pub rating: Rating,
}

/// Rejection of a fetched collection because it does not conform to the
/// product schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// The response body was not syntactically valid JSON.
    Syntax(String),
    /// The top-level JSON value was not an array.
    NotAnArray,
    /// One element failed schema conformance; the whole batch is rejected.
    Element {
        /// Index of the offending element
        index: usize,
        /// What was wrong with it
        reason: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(reason) => write!(f, "response is not valid JSON: {reason}"),
            Self::NotAnArray => write!(f, "expected a JSON array of products"),
            Self::Element { index, reason } => {
                write!(f, "product at index {index} is invalid: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate an untyped JSON value as a product collection.
///
/// Every element must conform; the first non-conforming element rejects the
/// entire batch. A partial list is never returned.
///
/// # Errors
///
/// Returns [`ValidationError`] if the value is not an array or any element
/// fails schema or invariant checks.
pub fn parse_products(value: &Value) -> Result<Vec<Product>, ValidationError> {
    let elements = value.as_array().ok_or(ValidationError::NotAnArray)?;

    let mut products = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let product: Product =
            serde_json::from_value(element.clone()).map_err(|e| ValidationError::Element {
                index,
                reason: e.to_string(),
            })?;
        check_invariants(&product).map_err(|reason| ValidationError::Element {
            index,
            reason: reason.to_string(),
        })?;
        products.push(product);
    }
    Ok(products)
}

/// Schema conformance beyond shape: numeric fields must make sense.
fn check_invariants(product: &Product) -> Result<(), &'static str> {
    if !product.price.is_finite() || product.price < 0.0 {
        return Err("price must be a non-negative number");
    }
    if !product.rating.rate.is_finite() || product.rating.rate < 0.0 {
        return Err("rating.rate must be a non-negative number");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(id: i64, category: &str) -> Value {
        json!({
            "id": id,
            "title": format!("Product {id}"),
            "price": 9.99,
            "description": "A fine item",
            "category": category,
            "image": "https://example.com/p.jpg",
            "rating": { "rate": 4.5, "count": 120 }
        })
    }

    #[test]
    fn test_parse_valid_collection() {
        let value = json!([sample(1, "men"), sample(2, "jewelery")]);
        let products = parse_products(&value).expect("valid collection");
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[1].category, "jewelery");
        assert_eq!(products[0].rating.count, 120);
    }

    #[test]
    fn test_parse_empty_array() {
        let products = parse_products(&json!([])).expect("empty is valid");
        assert!(products.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_products(&json!({"id": 1})).unwrap_err();
        assert_eq!(err, ValidationError::NotAnArray);
    }

    #[test]
    fn test_missing_rating_count_rejects_whole_batch() {
        let mut bad = sample(2, "men");
        bad["rating"]
            .as_object_mut()
            .expect("rating object")
            .remove("count");
        let value = json!([sample(1, "men"), bad, sample(3, "men")]);

        let err = parse_products(&value).unwrap_err();
        match err {
            ValidationError::Element { index, .. } => assert_eq!(index, 1),
            other => panic!("expected element error, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_field_type_rejects() {
        let mut bad = sample(1, "men");
        bad["price"] = json!("free");
        let err = parse_products(&json!([bad])).unwrap_err();
        assert!(matches!(err, ValidationError::Element { index: 0, .. }));
    }

    #[test]
    fn test_negative_price_rejects() {
        let mut bad = sample(1, "men");
        bad["price"] = json!(-1.0);
        let err = parse_products(&json!([bad])).unwrap_err();
        match err {
            ValidationError::Element { index, reason } => {
                assert_eq!(index, 0);
                assert!(reason.contains("price"));
            }
            other => panic!("expected element error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_display_names_index() {
        let err = ValidationError::Element {
            index: 4,
            reason: "missing field `image`".to_string(),
        };
        assert!(err.to_string().contains("index 4"));
    }

    #[test]
    fn test_product_serde_round_trip() {
        let value = json!([sample(7, "electronics")]);
        let products = parse_products(&value).expect("valid");
        let back = serde_json::to_value(&products[0]).expect("serialize");
        assert_eq!(back, value[0]);
    }
}
