//! Schema validation for API payloads.
//!
//! Each entity kind has a validation function that takes the raw JSON body
//! and produces either a normalized, fully-typed record or a list of every
//! violated field with a human-readable reason. Validation is pure; nothing
//! is persisted on failure.

use serde::Serialize;
use serde_json::Value;

use crate::types::email::Email;

/// Maximum length of a customer name, counted in characters after trimming.
pub const NAME_MAX_LENGTH: usize = 120;

/// A single violated field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The offending field name.
    pub field: &'static str,
    /// Why the field was rejected.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A validated create-customer payload.
///
/// `name` is stored trimmed; length constraints apply to the trimmed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: Email,
}

/// A validated create-order payload.
///
/// `customer_id` is carried as an opaque string here; resolving it against
/// the customer collection happens in the handler, not during validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: String,
    pub item: String,
    pub amount: f64,
}

/// Validate a raw create-customer payload.
///
/// Rules: `name` required, string, trimmed length in [1,120]; `email`
/// required, must parse as an [`Email`].
///
/// # Errors
///
/// Returns every violated field with a reason.
pub fn validate_customer(input: &Value) -> Result<NewCustomer, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = match required_string(input, "name") {
        Ok(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                errors.push(FieldError::new("name", "must not be empty"));
                None
            } else if trimmed.chars().count() > NAME_MAX_LENGTH {
                errors.push(FieldError::new(
                    "name",
                    format!("must be at most {NAME_MAX_LENGTH} characters"),
                ));
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let email = match required_string(input, "email") {
        Ok(raw) => match Email::parse(raw) {
            Ok(email) => Some(email),
            Err(e) => {
                errors.push(FieldError::new("email", e.to_string()));
                None
            }
        },
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match (name, email) {
        (Some(name), Some(email)) => Ok(NewCustomer { name, email }),
        _ => Err(errors),
    }
}

/// Validate a raw create-order payload.
///
/// Rules: `customer_id` required, non-empty string; `item` required,
/// non-empty string; `amount` required, must parse as an `f64` (JSON number
/// or numeric string).
///
/// # Errors
///
/// Returns every violated field with a reason.
pub fn validate_order(input: &Value) -> Result<NewOrder, Vec<FieldError>> {
    let mut errors = Vec::new();

    let customer_id = match required_string(input, "customer_id") {
        Ok(s) if s.is_empty() => {
            errors.push(FieldError::new("customer_id", "must not be empty"));
            None
        }
        Ok(s) => Some(s.to_owned()),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let item = match required_string(input, "item") {
        Ok(s) if s.is_empty() => {
            errors.push(FieldError::new("item", "must not be empty"));
            None
        }
        Ok(s) => Some(s.to_owned()),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let amount = match required_number(input, "amount") {
        Ok(amount) => Some(amount),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match (customer_id, item, amount) {
        (Some(customer_id), Some(item), Some(amount)) => Ok(NewOrder {
            customer_id,
            item,
            amount,
        }),
        _ => Err(errors),
    }
}

/// Extract a required string field from the payload.
fn required_string<'a>(input: &'a Value, field: &'static str) -> Result<&'a str, FieldError> {
    match input.get(field) {
        None | Some(Value::Null) => Err(FieldError::new(field, "field required")),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(FieldError::new(field, "must be a string")),
    }
}

/// Extract a required floating-point field from the payload.
///
/// Numeric strings are accepted alongside JSON numbers; booleans and other
/// types are not.
fn required_number(input: &Value, field: &'static str) -> Result<f64, FieldError> {
    match input.get(field) {
        None | Some(Value::Null) => Err(FieldError::new(field, "field required")),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| FieldError::new(field, "must be a number")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| FieldError::new(field, "must be a number")),
        Some(_) => Err(FieldError::new(field, "must be a number")),
    }
}
