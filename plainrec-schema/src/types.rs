//! Field type model.
//!
//! Every field of a loaded aggregate is classified into the closed
//! [`TypeRef`] variant set. Pass-through variants keep the type exactly as
//! it was written so it can be emitted unchanged.

use std::fmt;
use syn::parse_quote;

use crate::resolve::describe_type;

/// A field of the source aggregate, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name exactly as declared.
    pub name: String,
    /// Classified field type.
    pub ty: TypeRef,
}

impl FieldDescriptor {
    /// Creates a new field descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Classified field type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// Scalar type (numbers, `bool`, `char`, `String`).
    Primitive(PrimitiveType),
    /// Owning or raw pointer to another type.
    Pointer {
        /// Pointer flavour.
        kind: PointerKind,
        /// Type as written.
        ty: syn::Type,
    },
    /// Homogeneous ordered collection.
    Sequence {
        /// Collection flavour.
        kind: SequenceKind,
        /// Type as written.
        ty: syn::Type,
    },
    /// Nullable wrapper with a validity flag.
    NullableWrapper(NullableKind),
    /// Any other named type.
    NamedExternal {
        /// Resolved defining module, `None` for local or prelude types.
        package: Option<String>,
        /// Type name (last path segment).
        name: String,
        /// Type as written.
        ty: syn::Type,
    },
    /// A shape with no plain translation (maps, tuples, references, ...).
    Other(String),
}

impl TypeRef {
    /// Returns the type to emit for this reference, if it has one.
    ///
    /// Nullable wrappers and unsupported shapes return `None`; the wrapper's
    /// plain type is available through [`NullableKind::plain_type`].
    #[must_use]
    pub fn emitted_type(&self) -> Option<syn::Type> {
        match self {
            Self::Primitive(p) => Some(p.syn_type()),
            Self::Pointer { ty, .. }
            | Self::Sequence { ty, .. }
            | Self::NamedExternal { ty, .. } => Some(ty.clone()),
            Self::NullableWrapper(_) | Self::Other(_) => None,
        }
    }

    /// Returns true if values of this type are trivially copyable.
    #[must_use]
    pub const fn is_copy(&self) -> bool {
        match self {
            Self::Primitive(p) => p.is_copy(),
            Self::Pointer { kind, .. } => kind.is_raw(),
            _ => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.rust_type()),
            Self::Pointer { ty, .. }
            | Self::Sequence { ty, .. }
            | Self::NamedExternal { ty, .. } => f.write_str(&describe_type(ty)),
            Self::NullableWrapper(kind) => write!(f, "sql::{}", kind.wrapper_name()),
            Self::Other(description) => f.write_str(description),
        }
    }
}

/// Scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// `bool`.
    Bool,
    /// `char`.
    Char,
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `i128`.
    I128,
    /// `isize`.
    Isize,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `u64`.
    U64,
    /// `u128`.
    U128,
    /// `usize`.
    Usize,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// Owned UTF-8 string.
    String,
    /// UTC timestamp, the plain form of a nullable time.
    Time,
}

impl PrimitiveType {
    /// Parses a primitive from a single-segment Rust type name.
    ///
    /// `Time` is never produced here; it only appears as an unwrapped
    /// nullable time.
    #[must_use]
    pub fn from_rust_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(Self::Bool),
            "char" => Some(Self::Char),
            "i8" => Some(Self::I8),
            "i16" => Some(Self::I16),
            "i32" => Some(Self::I32),
            "i64" => Some(Self::I64),
            "i128" => Some(Self::I128),
            "isize" => Some(Self::Isize),
            "u8" => Some(Self::U8),
            "u16" => Some(Self::U16),
            "u32" => Some(Self::U32),
            "u64" => Some(Self::U64),
            "u128" => Some(Self::U128),
            "usize" => Some(Self::Usize),
            "f32" => Some(Self::F32),
            "f64" => Some(Self::F64),
            "String" => Some(Self::String),
            _ => None,
        }
    }

    /// Returns the Rust type name for this primitive.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
            Self::Time => "chrono::DateTime<chrono::Utc>",
        }
    }

    /// Returns the primitive as a `syn` type.
    #[must_use]
    pub fn syn_type(&self) -> syn::Type {
        match self {
            Self::Bool => parse_quote!(bool),
            Self::Char => parse_quote!(char),
            Self::I8 => parse_quote!(i8),
            Self::I16 => parse_quote!(i16),
            Self::I32 => parse_quote!(i32),
            Self::I64 => parse_quote!(i64),
            Self::I128 => parse_quote!(i128),
            Self::Isize => parse_quote!(isize),
            Self::U8 => parse_quote!(u8),
            Self::U16 => parse_quote!(u16),
            Self::U32 => parse_quote!(u32),
            Self::U64 => parse_quote!(u64),
            Self::U128 => parse_quote!(u128),
            Self::Usize => parse_quote!(usize),
            Self::F32 => parse_quote!(f32),
            Self::F64 => parse_quote!(f64),
            Self::String => parse_quote!(String),
            Self::Time => parse_quote!(chrono::DateTime<chrono::Utc>),
        }
    }

    /// Returns true for everything except `String`.
    #[must_use]
    pub const fn is_copy(&self) -> bool {
        !matches!(self, Self::String)
    }
}

/// Pointer flavours passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// `Box<T>`.
    Box,
    /// `Rc<T>`.
    Rc,
    /// `Arc<T>`.
    Arc,
    /// `*const T`.
    Const,
    /// `*mut T`.
    Mut,
}

impl PointerKind {
    /// Parses a smart pointer from its type name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Box" => Some(Self::Box),
            "Rc" => Some(Self::Rc),
            "Arc" => Some(Self::Arc),
            _ => None,
        }
    }

    /// Returns true for raw pointers.
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Const | Self::Mut)
    }
}

/// Sequence flavours passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// `Vec<T>`.
    Vec,
    /// `[T; N]`.
    Array,
}

/// Kinds of nullable wrapper, one per wrapped scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NullableKind {
    /// `NullTime`.
    Time,
    /// `NullString`.
    String,
    /// `NullBool`.
    Bool,
    /// `NullByte`.
    Byte,
    /// `NullInt16`.
    Int16,
    /// `NullInt32`.
    Int32,
    /// `NullInt64`.
    Int64,
    /// `NullFloat64`.
    Float64,
}

impl NullableKind {
    /// Name of the validity flag on every wrapper.
    pub const VALID_FIELD: &'static str = "valid";

    /// Parses a wrapper from its type name (e.g. `NullString`).
    #[must_use]
    pub fn from_wrapper_name(name: &str) -> Option<Self> {
        match name.strip_prefix("Null")? {
            "Time" => Some(Self::Time),
            "String" => Some(Self::String),
            "Bool" => Some(Self::Bool),
            "Byte" => Some(Self::Byte),
            "Int16" => Some(Self::Int16),
            "Int32" => Some(Self::Int32),
            "Int64" => Some(Self::Int64),
            "Float64" => Some(Self::Float64),
            _ => None,
        }
    }

    /// Returns the wrapper type name.
    #[must_use]
    pub const fn wrapper_name(&self) -> &'static str {
        match self {
            Self::Time => "NullTime",
            Self::String => "NullString",
            Self::Bool => "NullBool",
            Self::Byte => "NullByte",
            Self::Int16 => "NullInt16",
            Self::Int32 => "NullInt32",
            Self::Int64 => "NullInt64",
            Self::Float64 => "NullFloat64",
        }
    }

    /// Returns the name of the field holding the wrapped value, which is the
    /// lowercased kind name.
    #[must_use]
    pub const fn value_field(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
        }
    }

    /// Returns the plain type the wrapper unwraps to.
    #[must_use]
    pub const fn plain_type(&self) -> PrimitiveType {
        match self {
            Self::Time => PrimitiveType::Time,
            Self::String => PrimitiveType::String,
            Self::Bool => PrimitiveType::Bool,
            Self::Byte => PrimitiveType::U8,
            Self::Int16 => PrimitiveType::I16,
            Self::Int32 => PrimitiveType::I32,
            Self::Int64 => PrimitiveType::I64,
            Self::Float64 => PrimitiveType::F64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_from_rust_name() {
        assert_eq!(PrimitiveType::from_rust_name("i32"), Some(PrimitiveType::I32));
        assert_eq!(
            PrimitiveType::from_rust_name("String"),
            Some(PrimitiveType::String)
        );
        assert_eq!(PrimitiveType::from_rust_name("Time"), None);
        assert_eq!(PrimitiveType::from_rust_name("str"), None);
    }

    #[test]
    fn test_primitive_syn_type_matches_name() {
        for prim in [
            PrimitiveType::Bool,
            PrimitiveType::U128,
            PrimitiveType::F64,
            PrimitiveType::String,
        ] {
            assert_eq!(describe_type(&prim.syn_type()), prim.rust_type());
        }
        assert_eq!(
            describe_type(&PrimitiveType::Time.syn_type()),
            "chrono::DateTime<chrono::Utc>"
        );
    }

    #[test]
    fn test_nullable_kind_table() {
        let kind = NullableKind::from_wrapper_name("NullInt32").expect("known wrapper");
        assert_eq!(kind, NullableKind::Int32);
        assert_eq!(kind.value_field(), "int32");
        assert_eq!(kind.plain_type(), PrimitiveType::I32);
        assert_eq!(kind.wrapper_name(), "NullInt32");

        let time = NullableKind::from_wrapper_name("NullTime").expect("known wrapper");
        assert_eq!(time.value_field(), "time");
        assert_eq!(time.plain_type(), PrimitiveType::Time);

        assert_eq!(NullableKind::from_wrapper_name("NullDecimal"), None);
        assert_eq!(NullableKind::from_wrapper_name("String"), None);
    }

    #[test]
    fn test_value_field_is_lowercased_kind() {
        for kind in [
            NullableKind::Time,
            NullableKind::String,
            NullableKind::Bool,
            NullableKind::Byte,
            NullableKind::Int16,
            NullableKind::Int32,
            NullableKind::Int64,
            NullableKind::Float64,
        ] {
            let kind_name = &kind.wrapper_name()["Null".len()..];
            assert_eq!(kind.value_field(), kind_name.to_lowercase());
        }
    }

    #[test]
    fn test_type_ref_copy_and_emitted_type() {
        let prim = TypeRef::Primitive(PrimitiveType::I64);
        assert!(prim.is_copy());
        assert!(prim.emitted_type().is_some());

        let string = TypeRef::Primitive(PrimitiveType::String);
        assert!(!string.is_copy());

        let nullable = TypeRef::NullableWrapper(NullableKind::String);
        assert!(nullable.emitted_type().is_none());
        assert_eq!(nullable.to_string(), "sql::NullString");

        let other = TypeRef::Other("HashMap<String, i32>".to_string());
        assert!(other.emitted_type().is_none());
        assert_eq!(other.to_string(), "HashMap<String, i32>");
    }
}
