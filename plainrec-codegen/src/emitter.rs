//! Output unit emission.
//!
//! The generated unit is written next to its base file under a `_gen`
//! suffixed name. Writes land in a temporary file first and are renamed over
//! the destination, so a failed run never leaves a partial unit behind.

use std::io::Write;
use std::path::{Path, PathBuf};

pub use plainrec_schema::GENERATED_SUFFIX;

use crate::error::CodegenError;

/// Derives the output path from a base file name.
///
/// `model/user.rs` becomes `model/user_gen.rs`; a name without an extension
/// just gets the suffix.
#[must_use]
pub fn output_path(base: &Path) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match base.extension() {
        Some(ext) => format!("{stem}{GENERATED_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{GENERATED_SUFFIX}"),
    };
    base.with_file_name(file_name)
}

/// Writes `contents` to `path` atomically.
///
/// # Errors
/// Returns `CodegenError::Write` if the destination directory is missing or
/// the file cannot be written.
pub fn write_unit(path: &Path, contents: &str) -> Result<(), CodegenError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file =
        tempfile::NamedTempFile::new_in(dir).map_err(|e| CodegenError::write(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| CodegenError::write(path, e))?;
    file.as_file()
        .sync_all()
        .map_err(|e| CodegenError::write(path, e))?;
    file.persist(path)
        .map_err(|e| CodegenError::write(path, e.error))?;

    tracing::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
