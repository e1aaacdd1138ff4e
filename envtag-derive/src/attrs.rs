//! Attribute parsing for `#[envtag(...)]` annotations.
//!
//! Tag keys are free-form so that the runtime settings can choose which key
//! names the environment variable and which holds the default.

use syn::{Field, Lit};

/// Parsed `#[envtag(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// `key = "value"` pairs in declaration order.
    pub tags: Vec<(String, String)>,

    /// Bare `skip` flag: the field is never bound.
    pub skip: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[envtag(...)]` attributes from a struct field.
    ///
    /// Attributes other than `envtag` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("envtag") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                let key = meta
                    .path
                    .get_ident()
                    .map(|ident| ident.to_string())
                    .ok_or_else(|| meta.error("envtag keys must be plain identifiers"))?;

                // skip
                if !meta.input.peek(syn::Token![=]) {
                    if key == "skip" {
                        attrs.skip = true;
                        return Ok(());
                    }
                    return Err(meta.error(format!(
                        "unsupported envtag flag `{key}`, expected `skip` or `{key} = \"...\"`"
                    )));
                }

                // key = "value"
                let value = meta.value()?;
                match value.parse::<Lit>()? {
                    Lit::Str(s) => {
                        attrs.tags.push((key, s.value()));
                        Ok(())
                    }
                    other => Err(syn::Error::new_spanned(
                        other,
                        "envtag values must be string literals",
                    )),
                }
            })?;
        }

        Ok(attrs)
    }
}
