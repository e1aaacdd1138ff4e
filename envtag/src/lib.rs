//! Bind tagged struct fields to environment variables
//!
//! `envtag` fills in the fields of an existing struct from environment
//! variables named by `#[envtag(...)]` tags, keeping the value a field
//! already holds or falling back to a tag-declared default when the variable
//! is not set. Every variable it looks at is recorded in a [`Help`] listing
//! that can be printed as usage text.
//!
//! # Resolution
//!
//! For each field the value is taken from, in order:
//! 1. the environment variable named by the field's tag
//! 2. the field's current value, unless it is the zero value of its type
//! 3. the field's default tag
//!
//! An empty result leaves the field untouched. Zero numbers count as unset,
//! so a numeric field holding `0` falls through to its default. A `bool`
//! field always has a current value and therefore never uses its default.
//!
//! # Supported field types
//!
//! | Rust type | Shown as | Parsing |
//! |-----------|----------|---------|
//! | `i8`, `i16`, `i32`, `i64`, `isize` | `int` | base-10 `i64`, must fit the field |
//! | `f64` | `float64` | `f64::from_str` |
//! | `String` | `string` | verbatim |
//! | `bool` | `bool` | `true`, `t`, `1` (any case) are true, anything else false |
//! | `Vec<T>`, `[T; N]` | | not populated |
//!
//! Any other field type is a compile error.
//!
//! # Example
//!
//! ```rust
//! use envtag::EnvTag;
//!
//! #[derive(Debug, Default, EnvTag)]
//! struct Config {
//!     #[envtag(env = "database-url", default = "postgres://localhost/db")]
//!     pub database_url: String,
//!
//!     #[envtag(default = "10")]
//!     pub max_connections: i32,
//!
//!     pub debug_mode: bool,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("MAX_CONNECTIONS", "20");
//! let mut config = Config::default();
//! let help = envtag::parse(&mut config)?;
//!
//! assert_eq!(config.database_url, "postgres://localhost/db");
//! assert_eq!(config.max_connections, 20);
//! assert_eq!(help.len(), 3);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! `#[envtag(key = "value", ...)]` attaches arbitrary string tags to a field.
//! [`Settings`] decides which key names the variable (`env` by default) and
//! which holds the default (`default` by default), so one struct can carry
//! tags for several naming schemes.
//!
//! - A field without the name key uses its Rust name, upper-cased.
//! - A name tag of `"-"` or the bare `skip` flag excludes the field.
//!
//! ```rust
//! # use envtag::EnvTag;
//! #[derive(EnvTag)]
//! struct Config {
//!     // MAX-RETRIES, or MAX_RETRIES with kebab-to-snake enabled
//!     #[envtag(env = "max-retries", default = "3")]
//!     pub max_retries: i64,
//!
//!     #[envtag(skip)]
//!     pub computed: Vec<String>,
//! }
//! ```

mod coerce;
mod env;
mod error;
mod field;
mod help;
mod resolve;
mod settings;

pub use coerce::{coerce, coerce_bool, coerce_float, coerce_int, coerce_text, parse_bool};
pub use env::{EnvSource, ProcessEnv};
pub use envtag_derive::EnvTag;
pub use error::{EnvTagError, IntError};
pub use field::{Configurable, DeclaredType, EnvValue, FieldDescriptor, FieldRef, FieldVisitor, IntRef};
pub use help::{display_name, quote, Help, HelpEntry};
pub use resolve::{current_text, normalize_name, resolve, Resolved, Source};
pub use settings::{Settings, DEFAULT_TAG, DEFAULT_TAG_DEFAULT, SKIP_TAG_VALUE};

/// Bind `config` to the process environment with default [`Settings`].
///
/// Returns the help listing of every variable consulted.
///
/// # Errors
///
/// Returns the first integer or float field whose resolved value fails to
/// parse. Fields before it have already been updated.
pub fn parse<C: Configurable>(config: &mut C) -> Result<Help, EnvTagError> {
    let mut help = Help::new();
    Settings::default().parse(config, &mut help)?;
    Ok(help)
}
