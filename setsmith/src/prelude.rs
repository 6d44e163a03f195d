//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use setsmith::prelude::*;
//! ```

// Schema types
pub use setsmith_schema::loader::load;
pub use setsmith_schema::registry::{
    ClassDef, EnumDef, InsertOutcome, PropertyDef, PropertyKind, Registry, Structure,
};
pub use setsmith_schema::tree::{XmlNode, parse_document, parse_file};
pub use setsmith_schema::{LoadError, ParseError};

// Codegen types
pub use setsmith_codegen::{
    CodegenError, DataEmitter, DeclarationEmitter, EmitOptions, emit_data_module,
    emit_data_module_from_file, emit_data_module_from_xml, emit_declarations,
};
