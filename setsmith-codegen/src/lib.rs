//! # Setsmith Codegen
//!
//! TypeScript generation from the structure registry.
//!
//! This crate provides:
//! - Type declaration emission (one interface/enum per registered structure)
//! - Data-module emission (one typed constant per set file)
//! - Naming and value-shaping tables shared by both emitters

pub mod error;
pub mod names;
pub mod typescript;

pub use error::CodegenError;
pub use typescript::{DataEmitter, DeclarationEmitter};

use setsmith_schema::registry::Registry;
use setsmith_schema::tree::XmlNode;
use std::path::Path;

/// Formatting options for generated modules.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Emits the type-declarations artifact for a populated registry.
#[must_use]
pub fn emit_declarations(registry: &Registry, options: &EmitOptions) -> String {
    DeclarationEmitter::new(registry, options).emit()
}

/// Emits a data module for one parsed set tree.
///
/// # Arguments
/// * `root_type` - Schema type the set conforms to
/// * `tree` - Parsed set data
/// * `module_name` - Name of the exported constant
///
/// # Errors
/// Returns `CodegenError` if the root type does not resolve.
pub fn emit_data_module(
    registry: &Registry,
    root_type: &str,
    tree: &XmlNode,
    module_name: &str,
    options: &EmitOptions,
) -> Result<String, CodegenError> {
    let mut emitter = DataEmitter::new(registry, options);
    emitter.emit_module(root_type, tree, module_name)
}

/// Emits a data module from raw set XML.
///
/// The root schema type is taken from the document's root element name.
///
/// # Errors
/// Returns `CodegenError` if parsing fails or the root type does not
/// resolve.
pub fn emit_data_module_from_xml(
    registry: &Registry,
    xml: &str,
    module_name: &str,
    options: &EmitOptions,
) -> Result<String, CodegenError> {
    let tree = setsmith_schema::parse_document(xml)?;
    emit_data_module(registry, tree.name(), &tree, module_name, options)
}

/// Emits a data module from a set file.
///
/// The module name is the file stem.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or emission fails.
pub fn emit_data_module_from_file(
    registry: &Registry,
    path: &Path,
    options: &EmitOptions,
) -> Result<String, CodegenError> {
    let tree = setsmith_schema::parse_file(path)?;
    let module_name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("set");
    emit_data_module(registry, tree.name(), &tree, module_name, options)
}
