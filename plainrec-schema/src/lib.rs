//! # plainrec Schema
//!
//! Type universe loading and the field type model.
//!
//! This crate provides:
//! - Parsing of a module directory into a [`TypeUniverse`]
//! - Lookup of a named aggregate and its ordered field descriptors
//! - The closed [`TypeRef`] model every field type is classified into

pub mod error;
pub mod resolve;
pub mod types;
pub mod universe;

pub use error::LoadError;
pub use resolve::describe_type;
pub use types::{
    FieldDescriptor, NullableKind, PointerKind, PrimitiveType, SequenceKind, TypeRef,
};
pub use universe::{DeclKind, GENERATED_SUFFIX, TypeUniverse};

use std::path::Path;

/// Loads the type universe rooted at `dir` and returns the ordered fields of
/// the aggregate named `type_name`.
///
/// # Errors
/// Returns `LoadError` if the directory cannot be read or parsed, or if the
/// name does not resolve to a named-field struct.
pub fn load_aggregate(dir: &Path, type_name: &str) -> Result<Vec<FieldDescriptor>, LoadError> {
    let universe = TypeUniverse::load(dir)?;
    universe.fields_of(type_name)
}
