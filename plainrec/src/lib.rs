//! # plainrec
//!
//! Plain record generation for aggregates with nullable wrapper fields.
//!
//! Given a struct whose fields use nullable wrappers such as
//! [`sql::NullString`] or [`sql::NullTime`], plainrec generates a plain
//! record with the wrappers resolved to their scalar types, together with a
//! direct constructor, an adapter from the source struct and one accessor
//! per field.
//!
//! ## Quick Start
//!
//! ```ignore
//! use plainrec::prelude::*;
//!
//! let generator = Generator::new(GeneratorConfig::new().derive("Debug"));
//! let written = generator.generate_to(
//!     Path::new("src/model"),
//!     "User",
//!     Path::new("src/model/user.rs"),
//! )?;
//! // written == "src/model/user_gen.rs"
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Type universe loading and the field type model
//! - [`codegen`] - Field mapping, synthesis and emission
//! - [`sql`] - Nullable wrapper types

pub mod cli;
pub mod prelude;

/// Type universe loading and field classification.
pub mod schema {
    pub use plainrec_schema::*;
}

/// Field mapping, record synthesis and emission.
pub mod codegen {
    pub use plainrec_codegen::*;
}

/// Nullable wrapper types.
pub mod sql {
    pub use plainrec_sql::*;
}

// Re-export commonly used items at the crate root
pub use plainrec_codegen::{
    CodegenError, GeneratedUnit, Generator, GeneratorConfig, generate_file, generate_from_dir,
};
pub use plainrec_schema::{FieldDescriptor, LoadError, TypeRef, TypeUniverse};
