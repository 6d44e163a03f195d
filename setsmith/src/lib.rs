//! # Setsmith
//!
//! Generates TypeScript modules from an authoring tool's exported UI object
//! model: "structures" (class/enum schema files) become static type
//! declarations, and "sets" (concrete data files) become typed data-literal
//! modules.
//!
//! ## Quick Start
//!
//! ```
//! use setsmith::prelude::*;
//!
//! let schema = parse_document(
//!     r#"<Class Name="Card">
//!         <Property Name="Title" Type="String"/>
//!         <Property Name="Power" Type="Number"/>
//!     </Class>"#,
//! )
//! .expect("Failed to parse schema");
//! let registry = load([&schema]);
//!
//! let declarations = emit_declarations(&registry, &EmitOptions::default());
//! assert!(declarations.contains("export interface Card {"));
//!
//! let module = emit_data_module_from_xml(
//!     &registry,
//!     r#"<Card Title="Ace" Power="3"/>"#,
//!     "starter",
//!     &EmitOptions::default(),
//! )
//! .expect("Failed to emit module");
//! assert!(module.contains("export const Starter: Card = {"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - XML tree parsing, structure definitions and the registry
//! - [`codegen`] - TypeScript declaration and data-module emission

pub mod prelude;

/// XML tree parsing, structure definitions and the registry.
pub mod schema {
    pub use setsmith_schema::*;
}

/// TypeScript declaration and data-module emission.
pub mod codegen {
    pub use setsmith_codegen::*;
}
