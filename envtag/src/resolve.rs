//! Field resolution: choosing the string a field will be set from.
//!
//! Sources are consulted in a fixed order:
//! 1. the environment variable named by the field's tag
//! 2. the field's current value, when it is not the zero value of its type
//! 3. the field's default tag
//!
//! Zero integers and floats count as unset, so a field that already holds
//! `0` takes its default even if `0` was deliberate. Booleans always count
//! as set, which means a boolean field never falls back to its default.

use std::fmt;

use tracing::debug;

use crate::env::EnvSource;
use crate::field::{DeclaredType, FieldRef};
use crate::help::{Help, HelpEntry};
use crate::settings::Settings;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Environment,
    Current,
    Default,
    /// No source had a value; the field is left alone.
    None,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Environment => "environment",
            Self::Current => "current",
            Self::Default => "default",
            Self::None => "none",
        })
    }
}

/// Outcome of resolving one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Normalized environment variable name
    pub name: String,
    /// Value to coerce into the field, empty if nothing was found
    pub value: String,
    pub source: Source,
}

impl Resolved {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Turn a tag value into an environment variable name.
///
/// The name is upper-cased, and with kebab-to-snake enabled every `-`
/// becomes `_`, so `max-retries` maps to `MAX_RETRIES`.
pub fn normalize_name(tag_name: &str, kebab_to_snake: bool) -> String {
    let name = tag_name.to_uppercase();
    if kebab_to_snake {
        name.replace('-', "_")
    } else {
        name
    }
}

/// Format a field's current value, or `None` if it holds its zero value.
///
/// Floats use the shortest representation that round-trips, without an
/// exponent. Only the literal text `0` is treated as zero, so `-0` counts
/// as set.
pub fn current_text(value: &FieldRef<'_>) -> Option<String> {
    match value {
        FieldRef::Bool(v) => Some(v.to_string()),
        FieldRef::Text(v) => (!v.is_empty()).then(|| (**v).clone()),
        FieldRef::Int(v) => {
            let text = v.get().to_string();
            (text != "0").then_some(text)
        }
        FieldRef::Float(v) => {
            let text = v.to_string();
            (text != "0").then_some(text)
        }
        FieldRef::Collection => None,
    }
}

/// Resolve the value for one field and record it in `help`.
///
/// The help entry is appended before any lookup, so it is recorded even
/// when the value later fails to coerce.
pub fn resolve<E: EnvSource + ?Sized>(
    settings: &Settings,
    env: &E,
    help: &mut Help,
    declared_type: DeclaredType,
    current: Option<&str>,
    tag_name: &str,
    default: &str,
) -> Resolved {
    let name = normalize_name(tag_name, settings.kebab_to_snake());

    help.push(HelpEntry {
        name: name.clone(),
        declared_type,
        default: (!default.is_empty()).then(|| default.to_string()),
    });

    let (value, source) = if let Some(value) = env.lookup(&name) {
        (value, Source::Environment)
    } else if let Some(current) = current {
        (current.to_string(), Source::Current)
    } else if !default.is_empty() {
        (default.to_string(), Source::Default)
    } else {
        (String::new(), Source::None)
    };

    debug!("Resolved {} ({}) from {}", name, declared_type, source);

    Resolved {
        name,
        value,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::coerce;
    use crate::field::EnvValue;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("max-retries", true), "MAX_RETRIES");
        assert_eq!(normalize_name("max-retries", false), "MAX-RETRIES");
        assert_eq!(normalize_name("Port", false), "PORT");
    }

    #[test]
    fn test_environment_wins() {
        let settings = Settings::default();
        let mut help = Help::new();
        let vars = env(&[("PORT", "9090")]);

        let resolved = resolve(
            &settings,
            &vars,
            &mut help,
            DeclaredType::Int,
            Some("3000"),
            "port",
            "8080",
        );
        assert_eq!(resolved.value, "9090");
        assert_eq!(resolved.source, Source::Environment);
        assert_eq!(resolved.name, "PORT");
    }

    #[test]
    fn test_empty_environment_value_still_wins() {
        let settings = Settings::default();
        let mut help = Help::new();
        let vars = env(&[("HOST", "")]);

        let resolved = resolve(
            &settings,
            &vars,
            &mut help,
            DeclaredType::Text,
            Some("example.com"),
            "host",
            "localhost",
        );
        assert!(resolved.is_empty());
        assert_eq!(resolved.source, Source::Environment);
    }

    #[test]
    fn test_current_beats_default() {
        let settings = Settings::default();
        let mut help = Help::new();

        let resolved = resolve(
            &settings,
            &env(&[]),
            &mut help,
            DeclaredType::Text,
            Some("example.com"),
            "host",
            "localhost",
        );
        assert_eq!(resolved.value, "example.com");
        assert_eq!(resolved.source, Source::Current);
    }

    #[test]
    fn test_default_when_nothing_else() {
        let settings = Settings::default();
        let mut help = Help::new();

        let resolved = resolve(
            &settings,
            &env(&[]),
            &mut help,
            DeclaredType::Int,
            None,
            "answer",
            "42",
        );
        assert_eq!(resolved.value, "42");
        assert_eq!(resolved.source, Source::Default);

        let resolved = resolve(
            &settings,
            &env(&[]),
            &mut help,
            DeclaredType::Int,
            None,
            "nothing",
            "",
        );
        assert!(resolved.is_empty());
        assert_eq!(resolved.source, Source::None);
    }

    #[test]
    fn test_zero_numbers_count_as_unset() {
        let mut count: i32 = 0;
        let mut ratio: f64 = 0.0;
        assert_eq!(current_text(&count.field_ref()), None);
        assert_eq!(current_text(&ratio.field_ref()), None);

        let settings = Settings::default();
        let mut help = Help::new();
        let current = current_text(&count.field_ref());
        let resolved = resolve(
            &settings,
            &env(&[]),
            &mut help,
            DeclaredType::Int,
            current.as_deref(),
            "count",
            "5",
        );
        assert_eq!(resolved.value, "5");
        assert_eq!(resolved.source, Source::Default);
    }

    #[test]
    fn test_current_text_formats() {
        let mut flag = false;
        let mut count: i16 = -12;
        let mut ratio: f64 = 0.1;
        let mut big: f64 = 1e21;
        let mut negative_zero: f64 = -0.0;
        let mut name = String::new();
        let mut list = vec![1, 2, 3];

        assert_eq!(current_text(&flag.field_ref()), Some("false".to_string()));
        assert_eq!(current_text(&count.field_ref()), Some("-12".to_string()));
        assert_eq!(current_text(&ratio.field_ref()), Some("0.1".to_string()));
        assert_eq!(
            current_text(&big.field_ref()),
            Some("1000000000000000000000".to_string())
        );
        assert_eq!(
            current_text(&negative_zero.field_ref()),
            Some("-0".to_string())
        );
        assert_eq!(current_text(&name.field_ref()), None);
        assert_eq!(current_text(&list.field_ref()), None);
    }

    #[test]
    fn test_kebab_to_snake_lookup() {
        let settings = Settings::default().with_kebab_to_snake(true);
        let mut help = Help::new();
        let vars = env(&[("MAX_RETRIES", "7"), ("MAX-RETRIES", "1")]);

        let resolved = resolve(
            &settings,
            &vars,
            &mut help,
            DeclaredType::Int,
            None,
            "max-retries",
            "",
        );
        assert_eq!(resolved.name, "MAX_RETRIES");
        assert_eq!(resolved.value, "7");
    }

    #[test]
    fn test_bool_default_without_current_value() {
        let settings = Settings::default();
        let mut help = Help::new();

        let resolved = resolve(
            &settings,
            &env(&[]),
            &mut help,
            DeclaredType::Bool,
            None,
            "flag",
            "true",
        );
        assert_eq!(resolved.value, "true");
        assert_eq!(resolved.source, Source::Default);

        let mut flag = false;
        coerce(&resolved, flag.field_ref()).unwrap();
        assert!(flag);
    }

    #[test]
    fn test_int_default_coerces_to_native_value() {
        let settings = Settings::default();
        let mut help = Help::new();

        let resolved = resolve(
            &settings,
            &env(&[]),
            &mut help,
            DeclaredType::Int,
            None,
            "answer",
            "42",
        );
        let mut answer: i64 = 0;
        coerce(&resolved, answer.field_ref()).unwrap();
        assert_eq!(answer, 42);
    }

    #[test]
    fn test_help_recorded_for_every_call() {
        let settings = Settings::default();
        let mut help = Help::new();
        let vars = env(&[("PORT", "not-a-number")]);

        for _ in 0..2 {
            resolve(
                &settings,
                &vars,
                &mut help,
                DeclaredType::Int,
                None,
                "port",
                "8080",
            );
        }
        resolve(
            &settings,
            &vars,
            &mut help,
            DeclaredType::Bool,
            Some("false"),
            "debug",
            "",
        );

        assert_eq!(help.len(), 3);
        assert_eq!(help.entries()[0].name, "PORT");
        assert_eq!(help.entries()[0].default.as_deref(), Some("8080"));
        assert_eq!(help.entries()[2].name, "DEBUG");
        assert_eq!(help.entries()[2].declared_type, DeclaredType::Bool);
        assert_eq!(help.entries()[2].default, None);
    }
}
