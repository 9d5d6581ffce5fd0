//! Admin product form validation.
//!
//! The form collects a draft product and validates it against a fixed
//! rule table before submission:
//!
//! - `name`: required, at most 255 characters
//! - `price`: required, numeric, between 1 and 1000 inclusive
//! - `category`: required
//!
//! Validation yields either a [`ProductPayload`] ready to submit or a
//! single [`FieldError`] for the first failing field, in field order.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a product name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Minimum allowed price.
pub const MIN_PRICE: f64 = 1.0;

/// Maximum allowed price.
pub const MAX_PRICE: f64 = 1000.0;

/// A form field, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Price,
    Category,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::Category => "category",
        }
    }
}

/// A field-scoped validation error.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct FieldError {
    /// The field that failed.
    pub field: Field,
    /// Human-readable message shown next to the form.
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw form input before validation.
///
/// `price` is `None` when the field is empty or not numeric;
/// `category_id` is `None` when nothing is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: Option<f64>,
    pub category_id: Option<CategoryId>,
}

/// A validated product, ready to submit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
}

impl ProductDraft {
    /// Validate this draft against the rule table.
    ///
    /// Returns the first failing field's error; later fields are not
    /// inspected once one fails.
    pub fn validate(&self) -> Result<ProductPayload, FieldError> {
        if self.name.is_empty() {
            return Err(FieldError::new(Field::Name, "Name is required"));
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(FieldError::new(
                Field::Name,
                format!("Name must be at most {MAX_NAME_LENGTH} characters"),
            ));
        }

        let price = match self.price {
            Some(price) if price.is_finite() => price,
            _ => return Err(FieldError::new(Field::Price, "Price is required")),
        };
        if price < MIN_PRICE {
            return Err(FieldError::new(
                Field::Price,
                format!("Price must be at least {MIN_PRICE}"),
            ));
        }
        if price > MAX_PRICE {
            return Err(FieldError::new(
                Field::Price,
                format!("Price must be at most {MAX_PRICE}"),
            ));
        }

        let category_id = self
            .category_id
            .ok_or_else(|| FieldError::new(Field::Category, "Category is required"))?;

        Ok(ProductPayload {
            name: self.name.clone(),
            price,
            category_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "a".to_string(),
            price: Some(10.0),
            category_id: Some(CategoryId::new(1)),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let payload = valid_draft().validate().unwrap();
        assert_eq!(payload.name, "a");
        assert_eq!(payload.price, 10.0);
        assert_eq!(payload.category_id, CategoryId::new(1));
    }

    #[test]
    fn test_missing_name() {
        let draft = ProductDraft {
            name: String::new(),
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field, Field::Name);
        assert!(err.message.to_lowercase().contains("required"));
    }

    #[test]
    fn test_name_length_boundary() {
        let draft = ProductDraft {
            name: "a".repeat(255),
            ..valid_draft()
        };
        assert!(draft.validate().is_ok());

        let draft = ProductDraft {
            name: "a".repeat(256),
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field, Field::Name);
        assert!(err.message.contains("255"));
    }

    #[test]
    fn test_missing_price() {
        let draft = ProductDraft {
            price: None,
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field, Field::Price);
        assert!(err.message.to_lowercase().contains("required"));
    }

    #[test]
    fn test_non_numeric_price_reads_as_missing() {
        // A non-numeric input parses to NaN at the form boundary.
        let draft = ProductDraft {
            price: Some(f64::NAN),
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field, Field::Price);
        assert!(err.message.to_lowercase().contains("required"));
    }

    #[test]
    fn test_price_lower_boundary() {
        let draft = ProductDraft {
            price: Some(1.0),
            ..valid_draft()
        };
        assert!(draft.validate().is_ok());

        for price in [0.0, -1.0] {
            let draft = ProductDraft {
                price: Some(price),
                ..valid_draft()
            };
            let err = draft.validate().unwrap_err();
            assert_eq!(err.field, Field::Price);
            assert!(err.message.contains('1'));
        }
    }

    #[test]
    fn test_price_upper_boundary() {
        let draft = ProductDraft {
            price: Some(1000.0),
            ..valid_draft()
        };
        assert!(draft.validate().is_ok());

        let draft = ProductDraft {
            price: Some(1001.0),
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field, Field::Price);
        assert!(err.message.contains("1000"));
    }

    #[test]
    fn test_missing_category() {
        let draft = ProductDraft {
            category_id: None,
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field, Field::Category);
        assert!(err.message.to_lowercase().contains("required"));
    }

    #[test]
    fn test_first_failing_field_wins() {
        let draft = ProductDraft {
            name: String::new(),
            price: Some(0.0),
            category_id: None,
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field, Field::Name);
    }
}
