//! # Domain Invariants
//!
//! Payload shape rules shared by the component constructors and the
//! schemas. Each returns the offending field in its error so callers can
//! report it without knowing which rule fired.

use serde_json::Value;

use super::errors::CredentialError;

/// Length of an LM or NT hash in hexadecimal characters (16 bytes).
pub const HASH_HEX_LEN: usize = 32;

/// Invariant: the payload is present and is a JSON string.
///
/// Null, numbers, booleans, arrays and objects are all rejected; nothing
/// is coerced to a string.
pub fn invariant_string_payload<'a>(
    field: &'static str,
    value: Option<&'a Value>,
) -> Result<&'a str, CredentialError> {
    match value {
        Some(Value::String(payload)) => Ok(payload),
        Some(Value::Null) => Err(CredentialError::invalid_payload(field, "null")),
        Some(other) => Err(CredentialError::invalid_payload(
            field,
            format!("expected a string, found {}", json_type_name(other)),
        )),
        None => Err(CredentialError::invalid_payload(field, "missing")),
    }
}

/// Invariant: the payload is a 16-byte hash written as 32 hex digits.
///
/// Either case is accepted.
pub fn invariant_hex_hash(field: &'static str, payload: &str) -> Result<(), CredentialError> {
    if payload.len() != HASH_HEX_LEN {
        return Err(CredentialError::invalid_payload(
            field,
            format!(
                "expected {} hex characters, found {}",
                HASH_HEX_LEN,
                payload.len()
            ),
        ));
    }
    // The payload is secret: report where it went wrong, never what.
    hex::decode(payload).map(|_| ()).map_err(|e| {
        let reason = match e {
            hex::FromHexError::InvalidHexCharacter { index, .. } => {
                format!(
                    "expected hexadecimal digits, found another character at position {index}"
                )
            }
            _ => "expected hexadecimal digits".to_string(),
        };
        CredentialError::invalid_payload(field, reason)
    })
}

/// Name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
