//! Type declaration emission.
//!
//! Walks the populated registry and emits one TypeScript declaration per
//! class and enum. Built-ins map to language primitives and are skipped.

use crate::EmitOptions;
use crate::names::ts_type;
use setsmith_schema::registry::{ClassDef, EnumDef, Registry, Structure};

/// Emitter for the type-declarations artifact.
pub struct DeclarationEmitter<'a> {
    registry: &'a Registry,
    options: &'a EmitOptions,
}

impl<'a> DeclarationEmitter<'a> {
    /// Creates a new declaration emitter.
    #[must_use]
    pub fn new(registry: &'a Registry, options: &'a EmitOptions) -> Self {
        Self { registry, options }
    }

    /// Emits every class and enum declaration, preceded by the fixed
    /// preamble.
    ///
    /// Declaration order mirrors registry insertion order; property order
    /// within a class mirrors its declaration order.
    #[must_use]
    pub fn emit(&self) -> String {
        let mut output = String::new();
        output.push_str("// Generated by setsmith. Do not edit by hand.\n\n");
        output.push_str("import type { ImageHandle } from \"./runtime\";\n\n");
        output.push_str("export type Brush = string;\n");

        for structure in self.registry.structures() {
            match structure {
                Structure::Class(class) => {
                    output.push('\n');
                    self.emit_class(&mut output, class);
                }
                Structure::Enum(enum_def) => {
                    output.push('\n');
                    self.emit_enum(&mut output, enum_def);
                }
                Structure::BuiltIn(_) => {}
            }
        }

        output
    }

    /// Emits a structural interface for a class.
    fn emit_class(&self, output: &mut String, class: &ClassDef) {
        let indent = " ".repeat(self.options.indent);
        output.push_str(&format!("export interface {} {{\n", class.name));
        for property in &class.properties {
            output.push_str(&format!(
                "{}{}: {};\n",
                indent,
                property.name,
                ts_type(&property.kind)
            ));
        }
        output.push_str("}\n");
    }

    /// Emits a string-valued enumeration.
    ///
    /// Member values are the member names; ordinals never surface.
    fn emit_enum(&self, output: &mut String, enum_def: &EnumDef) {
        let indent = " ".repeat(self.options.indent);
        output.push_str(&format!("export enum {} {{\n", enum_def.name));
        for member in &enum_def.members {
            output.push_str(&format!("{}{} = \"{}\",\n", indent, member.name, member.name));
        }
        output.push_str("}\n");
    }
}
