//! # Input Validation
//!
//! Schema rules for every RPC mutation, sitting between type-level
//! deserialization and the database's own constraints:
//!
//! ```text
//!   client form checks        cosmetic, untrusted
//!        ▼
//!   serde deserialization     field types, enum variants
//!        ▼
//!   THIS MODULE               emptiness, sign rules, shapes, cross-field
//!        ▼                    consistency; fails before storage is touched
//!   SQLite constraints        NOT NULL / CHECK / UNIQUE / foreign keys
//! ```
//!
//! Each `Create*Input` gets a `validate()` method assembled from the field
//! rules below, so handlers read as `input.validate()?` before touching the
//! store.

use crate::error::{ValidationError, ValidationResult};
use crate::types::{
    CreateExpenseInput, CreateInvoiceInput, CreateOrderInput, CreateOrderItemInput,
    CreatePartyInput, CreateProductInput, CreateTransactionInput, CreateWarehouseInput,
    OrderType, UpdateInventoryInput,
};
use crate::money::Money;
use crate::MAX_TEXT_LEN;

// =============================================================================
// Field Rules
// =============================================================================

/// Required free-text field (name, location, description, category):
/// non-blank after trimming, capped at [`MAX_TEXT_LEN`].
pub fn validate_required_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

/// SKU shape: non-empty, at most 50 characters, drawn from letters, digits,
/// `-` and `_` only. Uniqueness is the database's job; this is just shape.
///
/// ```rust
/// use atlas_core::validation::validate_sku;
///
/// assert!(validate_sku("WID-001").is_ok());
/// assert!(validate_sku("has space").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates an optional email address.
///
/// Light-weight shape check: one `@`, non-empty local part, domain with a
/// dot, no whitespace. Full RFC compliance is the mail system's problem.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }
    if email.len() > 320 {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: 320,
        });
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid("missing '@'"));
    };
    if local.is_empty() {
        return Err(invalid("missing local part"));
    }
    if domain.contains('@') {
        return Err(invalid("more than one '@'"));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("invalid domain"));
    }

    Ok(())
}

/// Validates a money field that must be strictly positive.
pub fn validate_positive_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a money field that must be zero or positive.
pub fn validate_non_negative_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates an integer count that must be zero or positive (stock levels).
pub fn validate_non_negative_count(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates an integer count that must be strictly positive (order item
/// quantities).
pub fn validate_positive_count(field: &str, value: i64) -> ValidationResult<()> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates the order-party invariant: exactly one of customer/supplier is
/// set, matching the order type.
///
/// ## Invariant
/// ```text
/// type = sales     ⇒  customer_id set,  supplier_id unset
/// type = purchase  ⇒  supplier_id set,  customer_id unset
/// ```
///
/// The original client enforced this only in its form logic; the backend
/// rejects mismatches outright so a misbehaving caller cannot persist an
/// order with no party or two parties.
pub fn validate_order_parties(
    order_type: OrderType,
    customer_id: Option<i64>,
    supplier_id: Option<i64>,
) -> ValidationResult<()> {
    match order_type {
        OrderType::Sales => {
            if customer_id.is_none() {
                return Err(ValidationError::Conflicting {
                    field: "customer_id".to_string(),
                    reason: "sales orders require a customer".to_string(),
                });
            }
            if supplier_id.is_some() {
                return Err(ValidationError::Conflicting {
                    field: "supplier_id".to_string(),
                    reason: "sales orders must not reference a supplier".to_string(),
                });
            }
        }
        OrderType::Purchase => {
            if supplier_id.is_none() {
                return Err(ValidationError::Conflicting {
                    field: "supplier_id".to_string(),
                    reason: "purchase orders require a supplier".to_string(),
                });
            }
            if customer_id.is_some() {
                return Err(ValidationError::Conflicting {
                    field: "customer_id".to_string(),
                    reason: "purchase orders must not reference a customer".to_string(),
                });
            }
        }
    }
    Ok(())
}

// =============================================================================
// Per-Input Validation
// =============================================================================

impl CreateWarehouseInput {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required_text("name", &self.name)?;
        validate_required_text("location", &self.location)?;
        Ok(())
    }
}

impl CreateProductInput {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required_text("name", &self.name)?;
        validate_sku(&self.sku)?;
        validate_positive_amount("price", self.price)?;
        validate_non_negative_amount("cost", self.cost)?;
        Ok(())
    }
}

impl UpdateInventoryInput {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_non_negative_count("quantity", self.quantity)?;
        if let Some(level) = self.reorder_level {
            validate_non_negative_count("reorder_level", level)?;
        }
        Ok(())
    }
}

impl CreatePartyInput {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required_text("name", &self.name)?;
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

impl CreateOrderInput {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_order_parties(self.order_type, self.customer_id, self.supplier_id)
    }
}

impl CreateOrderItemInput {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_positive_count("quantity", self.quantity)?;
        validate_positive_amount("unit_price", self.unit_price)?;
        Ok(())
    }
}

impl CreateInvoiceInput {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_positive_amount("amount", self.amount)?;
        validate_non_negative_amount("tax_amount", self.tax_amount)?;
        Ok(())
    }
}

impl CreateExpenseInput {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required_text("description", &self.description)?;
        validate_positive_amount("amount", self.amount)?;
        validate_required_text("category", &self.category)?;
        Ok(())
    }
}

impl CreateTransactionInput {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_positive_amount("amount", self.amount)?;
        validate_required_text("description", &self.description)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("name", "Main Warehouse").is_ok());
        assert!(validate_required_text("name", "").is_err());
        assert!(validate_required_text("name", "   ").is_err());
        assert!(validate_required_text("name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("WID-001").is_ok());
        assert!(validate_sku("ABC123").is_ok());
        assert!(validate_sku("part_7").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ops@example.com").is_ok());
        assert!(validate_email("a.b+c@mail.example.co").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("spa ced@example.com").is_err());
    }

    #[test]
    fn test_amount_sign_rules() {
        assert!(validate_positive_amount("price", Money::from_cents(1)).is_ok());
        assert!(validate_positive_amount("price", Money::zero()).is_err());
        assert!(validate_positive_amount("price", Money::from_cents(-1)).is_err());

        assert!(validate_non_negative_amount("cost", Money::zero()).is_ok());
        assert!(validate_non_negative_amount("cost", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_count_rules() {
        assert!(validate_non_negative_count("quantity", 0).is_ok());
        assert!(validate_non_negative_count("quantity", -1).is_err());

        assert!(validate_positive_count("quantity", 1).is_ok());
        assert!(validate_positive_count("quantity", 0).is_err());
    }

    #[test]
    fn test_order_parties_sales() {
        assert!(validate_order_parties(OrderType::Sales, Some(1), None).is_ok());
        assert!(validate_order_parties(OrderType::Sales, None, None).is_err());
        assert!(validate_order_parties(OrderType::Sales, Some(1), Some(2)).is_err());
        assert!(validate_order_parties(OrderType::Sales, None, Some(2)).is_err());
    }

    #[test]
    fn test_order_parties_purchase() {
        assert!(validate_order_parties(OrderType::Purchase, None, Some(2)).is_ok());
        assert!(validate_order_parties(OrderType::Purchase, None, None).is_err());
        assert!(validate_order_parties(OrderType::Purchase, Some(1), Some(2)).is_err());
    }

    #[test]
    fn test_create_product_input() {
        let valid = CreateProductInput {
            name: "Widget".to_string(),
            description: None,
            sku: "WID-001".to_string(),
            price: Money::from_cents(1999),
            cost: Money::zero(),
        };
        assert!(valid.validate().is_ok());

        let mut bad_price = valid.clone();
        bad_price.price = Money::zero();
        assert!(matches!(
            bad_price.validate(),
            Err(ValidationError::MustBePositive { .. })
        ));

        let mut bad_cost = valid.clone();
        bad_cost.cost = Money::from_cents(-1);
        assert!(matches!(
            bad_cost.validate(),
            Err(ValidationError::Negative { .. })
        ));

        let mut bad_name = valid;
        bad_name.name = " ".to_string();
        assert!(matches!(
            bad_name.validate(),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_create_party_input_checks_email() {
        let input = CreatePartyInput {
            name: "ACME".to_string(),
            email: Some("not-an-email".to_string()),
            phone: None,
            address: None,
        };
        assert!(matches!(
            input.validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));

        let no_email = CreatePartyInput {
            name: "ACME".to_string(),
            email: None,
            phone: None,
            address: None,
        };
        assert!(no_email.validate().is_ok());
    }
}
