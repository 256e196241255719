//! Error types for code generation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The aggregate could not be resolved.
    #[error("load error: {0}")]
    Load(#[from] plainrec_schema::LoadError),

    /// A field's type has no plain translation.
    #[error("struct field type not handled: field '{field}' has type '{type_description}'")]
    UnsupportedFieldType {
        /// Original field name.
        field: String,
        /// Field type as written.
        type_description: String,
    },

    /// The output unit could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid generator configuration.
    #[error("invalid configuration: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a write error for `path`.
    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
