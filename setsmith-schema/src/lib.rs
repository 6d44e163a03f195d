//! # Setsmith Schema
//!
//! Structure/set XML parsing and the structure registry.
//!
//! This crate provides:
//! - Attribute-merged, order-preserving XML tree parsing
//! - Class, enum and built-in structure definitions
//! - The insertion-ordered structure registry
//! - The schema loader with its drop-and-log recovery policy

pub mod builtins;
pub mod error;
pub mod loader;
pub mod registry;
pub mod tree;

pub use error::{LoadError, ParseError};
pub use loader::load;
pub use registry::{
    BuiltInDef, ClassDef, EnumDef, EnumMember, InsertOutcome, PropertyDef, PropertyKind, Registry,
    Structure, base_name,
};
pub use tree::{XmlNode, parse_document, parse_file};
