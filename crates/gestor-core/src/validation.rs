//! # Validation Module
//!
//! Input validation utilities for GestorPro.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                │
//! │  ├── `required` attributes, number inputs                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store / commands (Rust)                                      │
//! │  └── THIS MODULE: field rules before any state changes                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (total_compras >= 0)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gestor_core::validation::{validate_name, validate_phone};
//!
//! assert!(validate_name("nome", "Ana").is_ok());
//! assert!(validate_phone("(11) 98765-4321").is_ok());
//! ```

use crate::error::ValidationError;
use crate::{MAX_QUERY_LENGTH, MAX_SALE_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of person and product names.
pub const MAX_NAME_LENGTH: usize = 120;

/// Maximum length of free-text labels (category, role, description).
pub const MAX_LABEL_LENGTH: usize = 200;

/// Maximum length of a phone number.
pub const MAX_PHONE_LENGTH: usize = 30;

// =============================================================================
// String Validators
// =============================================================================

fn required_trimmed<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value)
}

fn max_chars(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

/// Validates a person or product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 120 characters
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = required_trimmed(field, name)?;
    max_chars(field, name, MAX_NAME_LENGTH)
}

/// Validates a free-text label such as a category, role or bill description.
pub fn validate_label(field: &str, label: &str) -> ValidationResult<()> {
    let label = required_trimmed(field, label)?;
    max_chars(field, label, MAX_LABEL_LENGTH)
}

/// Validates a phone number.
///
/// ## Rules
/// - Required
/// - At most 30 characters
/// - Digits, spaces and `+ - ( )` only, with at least one digit
///
/// ```rust
/// use gestor_core::validation::validate_phone;
///
/// assert!(validate_phone("111").is_ok());
/// assert!(validate_phone("+55 (11) 3333-4444").is_ok());
/// assert!(validate_phone("call me").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = required_trimmed("telefone", phone)?;
    max_chars("telefone", phone, MAX_PHONE_LENGTH)?;

    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');
    if !phone.chars().all(allowed) || !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "telefone".to_string(),
            reason: "must contain only digits, spaces, and + - ( )".to_string(),
        });
    }

    Ok(())
}

/// Validates an optional email address.
///
/// Absent and blank values are accepted (they are stored as NULL). A
/// present value needs a single `@`, a non-empty local part and a dotted
/// domain.
pub fn validate_email(email: Option<&str>) -> ValidationResult<()> {
    let Some(email) = email.map(str::trim).filter(|e| !e.is_empty()) else {
        return Ok(());
    };

    max_chars("email", email, MAX_LABEL_LENGTH)?;

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must look like name@domain.tld".to_string(),
    };

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }

    Ok(())
}

/// Validates a search query and returns it trimmed.
///
/// Empty queries are allowed (they match everything).
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();
    max_chars("query", query, MAX_QUERY_LENGTH)?;
    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a monetary amount in centavos (price, salary, bill amount).
///
/// Zero is allowed; negative amounts are not.
pub fn validate_amount_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a quantity on hand. Zero means out of stock.
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantidade".to_string(),
        });
    }
    Ok(())
}

/// Validates the quantity on a sale line.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_SALE_QUANTITY (9 999)
pub fn validate_sale_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantidade".to_string(),
        });
    }

    if qty > MAX_SALE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantidade".to_string(),
            min: 1,
            max: MAX_SALE_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ```rust
/// use gestor_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
