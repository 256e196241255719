//! Error types for type universe loading.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for resolving an aggregate from a type universe.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No declaration with the requested name exists.
    #[error("type '{name}' not found")]
    TypeNotFound {
        /// Requested name.
        name: String,
    },

    /// The name resolves to something other than a type declaration.
    #[error("'{name}' is a {kind}, not a named type")]
    NotATypeDeclaration {
        /// Requested name.
        name: String,
        /// Kind of item found.
        kind: &'static str,
    },

    /// The named type is not a struct with named fields.
    #[error("'{name}' is not a struct with named fields ({kind})")]
    NotAnAggregate {
        /// Requested name.
        name: String,
        /// Kind of type found.
        kind: String,
    },

    /// Source file could not be parsed.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying parser error.
        #[source]
        source: syn::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// Creates a type-not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::TypeNotFound { name: name.into() }
    }

    /// Creates a not-an-aggregate error.
    pub fn not_aggregate(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::NotAnAggregate {
            name: name.into(),
            kind: kind.into(),
        }
    }
}
