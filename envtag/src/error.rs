//! Error types for environment variable binding

use std::num::{ParseFloatError, ParseIntError, TryFromIntError};

/// Errors that can occur when binding tagged fields to environment variables.
///
/// Only numeric fields can fail. Text and boolean coercion accept any
/// non-empty value, and collection fields are skipped.
#[derive(Debug, thiserror::Error)]
pub enum EnvTagError {
    /// Failed to parse the resolved value into an integer field.
    ///
    /// The field is left at the value it had before the pass.
    #[error("Failed to parse environment variable '{name}' value {value:?} as int: {source}")]
    ParseInt {
        /// Normalized environment variable name
        name: String,
        /// Resolved value that failed to parse
        value: String,
        /// Why the value was rejected
        source: IntError,
    },

    /// Failed to parse the resolved value into a floating point field.
    #[error("Failed to parse environment variable '{name}' value {value:?} as float64: {source}")]
    ParseFloat {
        /// Normalized environment variable name
        name: String,
        /// Resolved value that failed to parse
        value: String,
        /// Error from `f64::from_str`
        source: ParseFloatError,
    },
}

/// Reason an integer value was rejected.
///
/// Values are parsed as `i64` first and then narrowed to the field's width.
#[derive(Debug, thiserror::Error)]
pub enum IntError {
    /// The value is not a base-10 signed 64-bit integer.
    #[error(transparent)]
    Syntax(#[from] ParseIntError),

    /// The value is a valid `i64` but does not fit the field's type.
    #[error("value does not fit in {type_name}: {source}")]
    Narrowing {
        /// Rust type of the field, e.g. `i8`
        type_name: &'static str,
        source: TryFromIntError,
    },
}

impl EnvTagError {
    /// Create an integer parse error
    pub(crate) fn parse_int(
        name: impl Into<String>,
        value: impl Into<String>,
        source: impl Into<IntError>,
    ) -> Self {
        Self::ParseInt {
            name: name.into(),
            value: value.into(),
            source: source.into(),
        }
    }

    /// Create a float parse error
    pub(crate) fn parse_float(
        name: impl Into<String>,
        value: impl Into<String>,
        source: ParseFloatError,
    ) -> Self {
        Self::ParseFloat {
            name: name.into(),
            value: value.into(),
            source,
        }
    }

    /// Name of the environment variable the failing field was bound to.
    pub fn name(&self) -> &str {
        match self {
            Self::ParseInt { name, .. } | Self::ParseFloat { name, .. } => name,
        }
    }
}
