//! Settings for a configuration pass and the field walker that applies them.

use tracing::debug;

use crate::coerce::coerce;
use crate::env::{EnvSource, ProcessEnv};
use crate::error::EnvTagError;
use crate::field::{Configurable, FieldDescriptor, FieldRef, FieldVisitor};
use crate::help::Help;
use crate::resolve::{current_text, resolve};

/// Tag key read for the environment variable name unless configured otherwise.
pub const DEFAULT_TAG: &str = "env";

/// Tag key read for the default value unless configured otherwise.
pub const DEFAULT_TAG_DEFAULT: &str = "default";

/// Tag value that excludes a field from binding.
pub const SKIP_TAG_VALUE: &str = "-";

/// How tagged fields are mapped to environment variables.
///
/// # Example
///
/// ```rust
/// use envtag::{EnvTag, Help, Settings};
///
/// #[derive(EnvTag)]
/// struct Config {
///     #[envtag(cfg = "max-retries", default = "3")]
///     max_retries: i64,
/// }
///
/// std::env::set_var("MAX_RETRIES", "5");
///
/// let settings = Settings::new("cfg", "default", true);
/// let mut config = Config { max_retries: 0 };
/// let mut help = Help::new();
/// settings.parse(&mut config, &mut help).unwrap();
///
/// assert_eq!(config.max_retries, 5);
/// assert_eq!(help.len(), 1);
/// # std::env::remove_var("MAX_RETRIES");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    prefix: String,
    tag: String,
    tag_default: String,
    kebab_to_snake: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_TAG, DEFAULT_TAG_DEFAULT, false)
    }
}

impl Settings {
    /// Read variable names from the `tag` key and defaults from the
    /// `tag_default` key. With `kebab_to_snake`, `-` in names becomes `_`.
    pub fn new(
        tag: impl Into<String>,
        tag_default: impl Into<String>,
        kebab_to_snake: bool,
    ) -> Self {
        Self {
            prefix: String::new(),
            tag: tag.into(),
            tag_default: tag_default.into(),
            kebab_to_snake,
        }
    }

    /// Prepend `prefix` verbatim to every variable name, e.g. `APP_`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_tag_default(mut self, tag_default: impl Into<String>) -> Self {
        self.tag_default = tag_default.into();
        self
    }

    pub fn with_kebab_to_snake(mut self, kebab_to_snake: bool) -> Self {
        self.kebab_to_snake = kebab_to_snake;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn tag_default(&self) -> &str {
        &self.tag_default
    }

    pub fn kebab_to_snake(&self) -> bool {
        self.kebab_to_snake
    }

    /// Tag name for `field` before normalization, or `None` if the name tag
    /// is `"-"`.
    ///
    /// Fields without the configured tag key use their Rust name.
    pub fn tag_name(&self, field: &FieldDescriptor) -> Option<String> {
        let name = match field.tag(&self.tag) {
            Some(SKIP_TAG_VALUE) => return None,
            Some("") | None => field.name,
            Some(name) => name,
        };
        Some(format!("{}{}", self.prefix, name))
    }

    /// Bind `config` to the process environment.
    ///
    /// Stops at the first field that fails to coerce. Fields visited before
    /// the failure keep their new values.
    pub fn parse<C: Configurable>(
        &self,
        config: &mut C,
        help: &mut Help,
    ) -> Result<(), EnvTagError> {
        self.parse_from(&ProcessEnv, config, help)
    }

    /// Bind `config` to the variables in `env`.
    pub fn parse_from<E, C>(&self, env: &E, config: &mut C, help: &mut Help) -> Result<(), EnvTagError>
    where
        E: EnvSource + ?Sized,
        C: Configurable,
    {
        let mut binder = Binder {
            settings: self,
            env,
            help,
        };
        config.visit_fields(&mut binder)
    }
}

/// Resolves and coerces each visited field.
struct Binder<'a, E: ?Sized> {
    settings: &'a Settings,
    env: &'a E,
    help: &'a mut Help,
}

impl<E: EnvSource + ?Sized> FieldVisitor for Binder<'_, E> {
    fn visit(&mut self, field: &FieldDescriptor, value: FieldRef<'_>) -> Result<(), EnvTagError> {
        let Some(tag_name) = self.settings.tag_name(field) else {
            debug!("Skipping field {}", field.name);
            return Ok(());
        };

        let Some(declared_type) = value.declared_type() else {
            debug!(
                "Skipping field {} ({}): collections are not supported",
                field.name, field.type_name
            );
            return Ok(());
        };

        let current = current_text(&value);
        let default = field.tag(&self.settings.tag_default).unwrap_or_default();
        let resolved = resolve(
            self.settings,
            self.env,
            self.help,
            declared_type,
            current.as_deref(),
            &tag_name,
            default,
        );
        coerce(&resolved, value)
    }
}
