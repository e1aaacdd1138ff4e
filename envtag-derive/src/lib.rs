//! Derive macro implementation for envtag

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::FieldAttrs;

/// `EnvTag` derive macro
///
/// Implements `envtag::Configurable`, visiting every named field in
/// declaration order with its `#[envtag(...)]` tags.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[envtag(key = "value", ...)]`: Attach string tags, e.g. `env = "port"`
///   or `default = "8080"`
/// - `#[envtag(skip)]`: Leave this field out of the walk entirely
///
/// Every field type that is not skipped must implement `envtag::EnvValue`.
///
/// # Example
///
/// See the `envtag` crate documentation for usage examples.
#[proc_macro_derive(EnvTag, attributes(envtag))]
pub fn derive_envtag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvTag only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvTag only supports structs",
            ));
        }
    };

    let mut visits = Vec::with_capacity(fields.len());
    let mut bounded = Vec::with_capacity(fields.len());
    let mut errors: Option<syn::Error> = None;

    for (index, field) in fields.iter().enumerate() {
        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(e) => {
                errors = Some(match errors.take() {
                    Some(mut combined) => {
                        combined.combine(e);
                        combined
                    }
                    None => e,
                });
                continue;
            }
        };

        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        if attrs.skip {
            continue;
        }
        let field_type = &field.ty;
        bounded.push(field_type);
        let name = field_name.unraw().to_string();
        let type_name = quote!(#field_type).to_string().replace(' ', "");
        let keys = attrs.tags.iter().map(|(k, _)| k);
        let values = attrs.tags.iter().map(|(_, v)| v);
        let descriptor = format_ident!("__ENVTAG_FIELD_{}", index);

        visits.push(quote! {
            {
                const #descriptor: ::envtag::FieldDescriptor = ::envtag::FieldDescriptor::new(
                    #name,
                    #type_name,
                    &[#((#keys, #values)),*],
                );
                __visitor.visit(
                    &#descriptor,
                    <#field_type as ::envtag::EnvValue>::field_ref(&mut self.#field_name),
                )?;
            }
        });
    }

    if let Some(errors) = errors {
        return Err(errors);
    }

    // Field types mentioning generic parameters need an explicit bound
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for ty in bounded {
            where_clause
                .predicates
                .push(syn::parse_quote!(#ty: ::envtag::EnvValue));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envtag::Configurable for #struct_name #ty_generics #where_clause {
            fn visit_fields<__V: ::envtag::FieldVisitor>(
                &mut self,
                __visitor: &mut __V,
            ) -> ::core::result::Result<(), ::envtag::EnvTagError> {
                #(#visits)*
                ::core::result::Result::Ok(())
            }
        }
    })
}
