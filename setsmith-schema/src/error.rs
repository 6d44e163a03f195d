//! Error types for tree parsing and schema loading.

use thiserror::Error;

/// Error type for XML tree parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Invalid document structure.
    #[error("invalid document structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for per-property schema classification.
///
/// These are recovered at load time: the property is dropped and the owning
/// class is still registered.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Missing required attribute.
    #[error("missing required attribute '{attribute}'")]
    MissingAttribute {
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}'")]
    InvalidAttribute {
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Unrecognized property type.
    #[error("unrecognized property type '{type_name}'")]
    UnknownPropertyType {
        /// Declared type value.
        type_name: String,
    },
}

impl LoadError {
    /// Creates a missing attribute error.
    pub fn missing_attr(attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}
