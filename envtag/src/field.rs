//! Field model shared by the derive macro and the resolver.
//!
//! `#[derive(EnvTag)]` implements [`Configurable`] by handing every named
//! field to a [`FieldVisitor`] together with its [`FieldDescriptor`]. The
//! field's static type picks its [`FieldRef`] variant through [`EnvValue`],
//! so an unsupported type is a compile error rather than a runtime one.

use std::fmt;
use std::num::TryFromIntError;

use crate::error::{EnvTagError, IntError};

/// Static description of one struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust field name
    pub name: &'static str,
    /// Field type as written in the struct, e.g. `i32`
    pub type_name: &'static str,
    /// `key = "value"` pairs from `#[envtag(...)]`, in declaration order
    pub tags: &'static [(&'static str, &'static str)],
}

impl FieldDescriptor {
    pub const fn new(
        name: &'static str,
        type_name: &'static str,
        tags: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            type_name,
            tags,
        }
    }

    /// Look up a tag value by key. The first matching key wins.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }
}

/// Declared type of a resolvable field, as shown in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    Bool,
    Int,
    Float,
    Text,
}

impl DeclaredType {
    /// Type tag used in help stanzas
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float64",
            Self::Text => "string",
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! int_ref {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        /// Mutable reference to a signed integer field of any width.
        #[derive(Debug)]
        pub enum IntRef<'a> {
            $($variant(&'a mut $ty),)+
        }

        impl IntRef<'_> {
            /// Current value widened to `i64`
            pub fn get(&self) -> i64 {
                match self {
                    $(Self::$variant(v) => **v as i64,)+
                }
            }

            /// Store `value`, failing if it does not fit the field's width.
            pub fn set(&mut self, value: i64) -> Result<(), IntError> {
                match self {
                    $(Self::$variant(v) => {
                        **v = <$ty>::try_from(value).map_err(|source| IntError::Narrowing {
                            type_name: stringify!($ty),
                            source: TryFromIntError::from(source),
                        })?;
                    })+
                }
                Ok(())
            }
        }

        $(
            impl EnvValue for $ty {
                fn field_ref(&mut self) -> FieldRef<'_> {
                    FieldRef::Int(IntRef::$variant(self))
                }
            }
        )+
    };
}

int_ref! {
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    Isize => isize,
}

/// Mutable view of a field, one variant per supported kind.
#[derive(Debug)]
pub enum FieldRef<'a> {
    Bool(&'a mut bool),
    Int(IntRef<'a>),
    Float(&'a mut f64),
    Text(&'a mut String),
    /// Ordered collections (`Vec<T>`, `[T; N]`) are recognized but never
    /// populated.
    Collection,
}

impl FieldRef<'_> {
    /// Declared type used for resolution, `None` for collections.
    pub fn declared_type(&self) -> Option<DeclaredType> {
        match self {
            Self::Bool(_) => Some(DeclaredType::Bool),
            Self::Int(_) => Some(DeclaredType::Int),
            Self::Float(_) => Some(DeclaredType::Float),
            Self::Text(_) => Some(DeclaredType::Text),
            Self::Collection => None,
        }
    }
}

/// Types that can be bound to an environment variable.
///
/// Implemented for `bool`, the signed integers, `f64`, `String`, and the
/// unsupported collections `Vec<T>` and `[T; N]`.
pub trait EnvValue {
    fn field_ref(&mut self) -> FieldRef<'_>;
}

impl EnvValue for bool {
    fn field_ref(&mut self) -> FieldRef<'_> {
        FieldRef::Bool(self)
    }
}

impl EnvValue for f64 {
    fn field_ref(&mut self) -> FieldRef<'_> {
        FieldRef::Float(self)
    }
}

impl EnvValue for String {
    fn field_ref(&mut self) -> FieldRef<'_> {
        FieldRef::Text(self)
    }
}

impl<T> EnvValue for Vec<T> {
    fn field_ref(&mut self) -> FieldRef<'_> {
        FieldRef::Collection
    }
}

impl<T, const N: usize> EnvValue for [T; N] {
    fn field_ref(&mut self) -> FieldRef<'_> {
        FieldRef::Collection
    }
}

/// Receives each field of a [`Configurable`] struct in declaration order.
pub trait FieldVisitor {
    fn visit(&mut self, field: &FieldDescriptor, value: FieldRef<'_>) -> Result<(), EnvTagError>;
}

/// Structs whose fields can be walked by the resolver.
///
/// Usually implemented with `#[derive(EnvTag)]`.
pub trait Configurable {
    /// Visit every field, stopping at the first error the visitor returns.
    fn visit_fields<V: FieldVisitor>(&mut self, visitor: &mut V) -> Result<(), EnvTagError>;
}
