//! Coercion of resolved strings into typed fields.
//!
//! Every function is a no-op when the resolved value is empty. Only the
//! numeric coercions can fail, and a failure leaves the field untouched.

use tracing::warn;

use crate::error::EnvTagError;
use crate::field::{FieldRef, IntRef};
use crate::resolve::Resolved;

/// Parse as a base-10 `i64` and store it in the field's width.
pub fn coerce_int(resolved: &Resolved, field: &mut IntRef<'_>) -> Result<(), EnvTagError> {
    if resolved.is_empty() {
        return Ok(());
    }
    resolved
        .value
        .parse::<i64>()
        .map_err(Into::into)
        .and_then(|value| field.set(value))
        .map_err(|e| EnvTagError::parse_int(&resolved.name, &resolved.value, e))
}

pub fn coerce_float(resolved: &Resolved, field: &mut f64) -> Result<(), EnvTagError> {
    if resolved.is_empty() {
        return Ok(());
    }
    *field = resolved
        .value
        .parse::<f64>()
        .map_err(|e| EnvTagError::parse_float(&resolved.name, &resolved.value, e))?;
    Ok(())
}

pub fn coerce_text(resolved: &Resolved, field: &mut String) {
    if resolved.is_empty() {
        return;
    }
    field.clone_from(&resolved.value);
}

pub fn coerce_bool(resolved: &Resolved, field: &mut bool) {
    if resolved.is_empty() {
        return;
    }
    *field = parse_bool(&resolved.value);
}

/// `true`, `t` and `1` in any case are true; anything else is false.
pub fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "t" | "1")
}

/// Coerce `resolved` into whichever kind of field `field` is.
///
/// Collections are never populated.
pub fn coerce(resolved: &Resolved, field: FieldRef<'_>) -> Result<(), EnvTagError> {
    let result = match field {
        FieldRef::Bool(v) => {
            coerce_bool(resolved, v);
            Ok(())
        }
        FieldRef::Int(mut v) => coerce_int(resolved, &mut v),
        FieldRef::Float(v) => coerce_float(resolved, v),
        FieldRef::Text(v) => {
            coerce_text(resolved, v);
            Ok(())
        }
        FieldRef::Collection => Ok(()),
    };

    if let Err(e) = &result {
        warn!("Leaving {} unchanged: {}", resolved.name, e);
    }
    result
}
