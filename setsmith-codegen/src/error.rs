//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Tree parsing error.
    #[error("source parse error: {0}")]
    Parse(#[from] setsmith_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unresolvable root structure type.
    ///
    /// The one transform failure that aborts a data file; everything below
    /// the root degrades to placeholders instead.
    #[error("unknown root structure type '{type_name}'")]
    UnknownRootType {
        /// Root type name.
        type_name: String,
    },
}

impl CodegenError {
    /// Creates an unknown root type error.
    pub fn unknown_root(type_name: impl Into<String>) -> Self {
        Self::UnknownRootType {
            type_name: type_name.into(),
        }
    }
}
