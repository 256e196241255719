//! # plainrec Codegen
//!
//! Plain record generation from aggregates with nullable wrapper fields.
//!
//! This crate provides:
//! - The field type mapper (plain type and unwrap logic per field)
//! - Synthesis of the plain record, direct constructor, adapter and accessors
//! - Emission of the generated unit next to a base file

pub mod config;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod mapper;
pub mod rust;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::Generator;
pub use mapper::{MappedField, UnwrapStatement, lower_name};
pub use rust::GeneratedUnit;

use std::path::{Path, PathBuf};

/// Generates the unit for `type_name` declared in the module at `dir`.
///
/// # Arguments
/// * `dir` - Directory holding the module's `*.rs` files
/// * `type_name` - Name of the aggregate
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if loading or mapping fails.
pub fn generate_from_dir(dir: &Path, type_name: &str) -> Result<String, CodegenError> {
    let generator = Generator::default();
    Ok(generator.generate(dir, type_name)?.render())
}

/// Generates the unit for `type_name` and writes it next to `base_file`.
///
/// # Returns
/// The path of the written file.
///
/// # Errors
/// Returns `CodegenError` if any stage fails.
pub fn generate_file(
    dir: &Path,
    type_name: &str,
    base_file: &Path,
) -> Result<PathBuf, CodegenError> {
    Generator::default().generate_to(dir, type_name, base_file)
}
