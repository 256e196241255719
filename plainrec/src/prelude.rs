//! Prelude module for convenient imports.
//!
//! ```ignore
//! use plainrec::prelude::*;
//! ```

pub use std::path::Path;

// Schema types
pub use plainrec_schema::{
    FieldDescriptor, LoadError, NullableKind, PrimitiveType, TypeRef, TypeUniverse,
};

// Codegen types
pub use plainrec_codegen::{
    CodegenError, GeneratedUnit, Generator, GeneratorConfig, MappedField, UnwrapStatement,
    generate_file, generate_from_dir,
};

// Nullable wrappers
pub use plainrec_sql::{
    NullBool, NullByte, NullFloat64, NullInt16, NullInt32, NullInt64, NullString, NullTime,
};
