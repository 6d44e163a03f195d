//! Set data transformation.
//!
//! This module recursively re-encodes a parsed set tree into a TypeScript
//! data-literal module, dispatching on the registered kind of every value.
//! Missing data always degrades to a per-kind default, so the emitted
//! literal never omits a declared property.

use crate::EmitOptions;
use crate::error::CodegenError;
use crate::names::{
    collection_element_tag, escape_string, object_type_name, relative_image_path, to_pascal_case,
};
use setsmith_schema::builtins::{DEFAULT_FONT_FAMILY, FONT_FAMILY_ENUM};
use setsmith_schema::registry::{
    ClassDef, EnumDef, PropertyDef, PropertyKind, Registry, Structure, base_name,
};
use setsmith_schema::tree::XmlNode;
use std::collections::BTreeSet;

/// Literal emitted when a command slot carries no data.
const COMMAND_NOT_DEFINED: &str = "() => { console.warn(\"command not defined\"); }";

/// Literal emitted when a command slot carries an unsupported shape.
const COMMAND_NOT_RECOGNIZED: &str = "() => { console.warn(\"command type not recognized\"); }";

/// Emitter for data-literal modules.
///
/// One emitter encodes one set file; it accumulates the type names the
/// literal references so the module can import them.
pub struct DataEmitter<'a> {
    registry: &'a Registry,
    options: &'a EmitOptions,
    used_types: BTreeSet<String>,
}

impl<'a> DataEmitter<'a> {
    /// Creates a new data emitter.
    #[must_use]
    pub fn new(registry: &'a Registry, options: &'a EmitOptions) -> Self {
        Self {
            registry,
            options,
            used_types: BTreeSet::new(),
        }
    }

    /// Emits a data module for one set tree.
    ///
    /// # Arguments
    /// * `root_type` - Schema type the set conforms to
    /// * `tree` - Parsed set data
    /// * `module_name` - Name of the exported constant (PascalCased)
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownRootType` if `root_type` does not
    /// resolve; every nested failure degrades to a placeholder instead.
    pub fn emit_module(
        &mut self,
        root_type: &str,
        tree: &XmlNode,
        module_name: &str,
    ) -> Result<String, CodegenError> {
        if self.registry.get(root_type).is_none() {
            return Err(CodegenError::unknown_root(root_type));
        }

        let annotation = self.root_annotation(root_type);
        let literal = self.encode_value(root_type, tree, 0);
        let constant = to_pascal_case(module_name);

        let mut output = String::new();
        output.push_str("// Generated by setsmith. Do not edit by hand.\n\n");
        let imports = self.imports();
        if !imports.is_empty() {
            output.push_str(&format!(
                "import {{ {} }} from \"./structures\";\n\n",
                imports.join(", ")
            ));
        }
        output.push_str(&format!("export const {constant}: {annotation} = {literal};\n"));

        Ok(output)
    }

    /// Returns the type annotation for the exported constant.
    fn root_annotation(&mut self, root_type: &str) -> String {
        match self.registry.get(root_type) {
            Some(Structure::Class(_) | Structure::Enum(_)) => {
                let name = base_name(root_type).to_string();
                self.used_types.insert(name.clone());
                name
            }
            _ => object_type_name(root_type),
        }
    }

    /// Returns the referenced declaration names, sorted.
    ///
    /// Built-ins and remapped primitives never appear: only names the
    /// declaration emitter actually declares are importable.
    fn imports(&self) -> Vec<String> {
        self.used_types
            .iter()
            .filter(|name| {
                matches!(
                    self.registry.get(name),
                    Some(Structure::Class(_) | Structure::Enum(_))
                )
            })
            .cloned()
            .collect()
    }

    /// Encodes a value of the named structure type.
    ///
    /// An unresolvable name is a hard error for this subtree; the slot
    /// degrades to `undefined` so the surrounding literal stays complete.
    fn encode_value(&mut self, type_name: &str, node: &XmlNode, depth: usize) -> String {
        match self.registry.get(type_name).cloned() {
            Some(Structure::Class(class)) => self.encode_class(&class, node, depth),
            Some(Structure::Enum(enum_def)) => self.encode_enum_node(&enum_def, node),
            Some(Structure::BuiltIn(built_in)) => encode_built_in(&built_in.name, node)
                .unwrap_or_else(|| "undefined".to_string()),
            None => {
                tracing::error!("unknown structure type '{}'", type_name);
                "undefined".to_string()
            }
        }
    }

    /// Encodes a class instance as an object literal.
    fn encode_class(&mut self, class: &ClassDef, node: &XmlNode, depth: usize) -> String {
        let field_indent = self.indent(depth + 1);
        let close_indent = self.indent(depth);

        let mut output = String::from("{\n");
        for property in &class.properties {
            let value = self.encode_property(class, property, node, depth + 1);
            output.push_str(&format!("{field_indent}{}: {value},\n", property.name));
        }
        output.push_str(&close_indent);
        output.push('}');
        output
    }

    /// Encodes one declared property, applying its kind's default policy
    /// when the data is absent.
    fn encode_property(
        &mut self,
        class: &ClassDef,
        property: &PropertyDef,
        node: &XmlNode,
        depth: usize,
    ) -> String {
        match &property.kind {
            PropertyKind::String { .. } => match node.first_scalar(&property.name) {
                Some(value) => format!("\"{}\"", escape_string(value)),
                None => "\"\"".to_string(),
            },
            PropertyKind::Number { .. } => match node.first_scalar(&property.name) {
                Some(raw) => number_token(raw, &class.name, &property.name),
                None => "0".to_string(),
            },
            PropertyKind::Boolean => match node.first_scalar(&property.name) {
                Some(raw) => boolean_token(raw, &class.name, &property.name),
                None => "false".to_string(),
            },
            PropertyKind::Brush => match node.first_scalar(&property.name) {
                Some(value) => format!("\"{}\"", escape_string(value)),
                None => "\"\"".to_string(),
            },
            PropertyKind::Enum { sub_type } => {
                let enum_name = base_name(sub_type).to_string();
                self.used_types.insert(enum_name.clone());
                match node.first_scalar(&property.name) {
                    Some(value) => format!("{enum_name}.{value}"),
                    None => format!("undefined as unknown as {enum_name}"),
                }
            }
            PropertyKind::Font => {
                self.used_types.insert(FONT_FAMILY_ENUM.to_string());
                let family = node
                    .first_scalar(&property.name)
                    .unwrap_or(DEFAULT_FONT_FAMILY);
                format!("{FONT_FAMILY_ENUM}.{family}")
            }
            PropertyKind::Image { source_path_field } => {
                let raw = node
                    .first_scalar(&property.name)
                    .or_else(|| node.first_scalar(source_path_field));
                match raw {
                    Some(raw) => match relative_image_path(raw) {
                        Some(path) => format!("\"{}\"", escape_string(&path)),
                        None => {
                            tracing::warn!(
                                "image source '{}' for '{}.{}' is not resolvable",
                                raw,
                                class.name,
                                property.name
                            );
                            "\"\"".to_string()
                        }
                    },
                    None => "\"\"".to_string(),
                }
            }
            PropertyKind::Object { sub_type } => {
                let wrapper_name = format!("{}.{}", class.name, property.name);
                let inner = node
                    .nodes(&wrapper_name)
                    .first()
                    .and_then(|wrapper| wrapper.child_nodes().next());
                match inner {
                    Some(inner) => self.encode_value(sub_type, inner, depth),
                    None => {
                        let ts_name = object_type_name(sub_type);
                        self.used_types.insert(ts_name.clone());
                        format!("undefined as unknown as {ts_name}")
                    }
                }
            }
            PropertyKind::Collection { sub_type } => {
                self.encode_collection(class, property, sub_type, node, depth)
            }
            PropertyKind::Command => self.encode_command(class, property, node),
        }
    }

    /// Encodes a collection property as an ordered-sequence literal.
    fn encode_collection(
        &mut self,
        class: &ClassDef,
        property: &PropertyDef,
        sub_type: &str,
        node: &XmlNode,
        depth: usize,
    ) -> String {
        let wrapper_name = format!("{}.{}", class.name, property.name);
        let Some(wrapper) = node.nodes(&wrapper_name).first() else {
            return "[]".to_string();
        };

        let tag = collection_element_tag(sub_type);
        let elements = wrapper.nodes(tag);
        if elements.is_empty() {
            tracing::warn!(
                "collection '{}' has no '{}' elements, emitting an empty sequence",
                wrapper_name,
                tag
            );
            return "[]".to_string();
        }

        let element_indent = self.indent(depth + 1);
        let close_indent = self.indent(depth);
        let mut output = String::from("[\n");
        for element in elements {
            let value = self.encode_value(tag, element, depth + 1);
            output.push_str(&format!("{element_indent}{value},\n"));
        }
        output.push_str(&close_indent);
        output.push(']');
        output
    }

    /// Encodes a command property as a callable literal.
    fn encode_command(&mut self, class: &ClassDef, property: &PropertyDef, node: &XmlNode) -> String {
        let wrapper_name = format!("{}.{}", class.name, property.name);
        let Some(wrapper) = node.nodes(&wrapper_name).first() else {
            return COMMAND_NOT_DEFINED.to_string();
        };

        match wrapper.child_nodes().next() {
            Some(command) if command.name() == "MessageCommand" => {
                message_command_literal(command)
            }
            Some(command) => {
                tracing::warn!(
                    "command '{}' has unrecognized shape '{}'",
                    wrapper_name,
                    command.name()
                );
                COMMAND_NOT_RECOGNIZED.to_string()
            }
            None => COMMAND_NOT_DEFINED.to_string(),
        }
    }

    /// Encodes a standalone enum value node.
    fn encode_enum_node(&mut self, enum_def: &EnumDef, node: &XmlNode) -> String {
        self.used_types.insert(enum_def.name.clone());
        match node.text() {
            Some(value) => format!("{}.{}", enum_def.name, value),
            None => {
                tracing::warn!("enum value node '{}' has no content", enum_def.name);
                format!("undefined as unknown as {}", enum_def.name)
            }
        }
    }

    fn indent(&self, depth: usize) -> String {
        " ".repeat(self.options.indent * depth)
    }
}

/// Encodes a built-in value by fixed name.
///
/// Returns `None` for an unknown built-in; the caller degrades the slot.
fn encode_built_in(name: &str, node: &XmlNode) -> Option<String> {
    match name {
        "Single" => Some(number_token(node.text().unwrap_or("0"), name, "value")),
        "Boolean" => Some(boolean_token(node.text().unwrap_or("false"), name, "value")),
        "Color" => Some(node.text().unwrap_or("0").to_string()),
        "String" => Some(format!("\"{}\"", escape_string(node.text().unwrap_or("")))),
        "BitmapImage" => {
            let raw = node.first_scalar("UriSource").unwrap_or("");
            Some(match relative_image_path(raw) {
                Some(path) => format!("\"{}\"", escape_string(&path)),
                None => {
                    tracing::warn!("BitmapImage source '{}' is not resolvable", raw);
                    "\"\"".to_string()
                }
            })
        }
        "SolidColorBrush" => Some(format!(
            "\"{}\"",
            escape_string(node.first_scalar("Color").unwrap_or(""))
        )),
        "MessageCommand" => Some(message_command_literal(node)),
        other => {
            tracing::error!("unknown built-in '{}'", other);
            None
        }
    }
}

/// Builds the callable literal for a message command node.
fn message_command_literal(command: &XmlNode) -> String {
    let message = escape_string(command.first_scalar("Message").unwrap_or(""));
    format!("(payload?: unknown) => {{ console.log(\"{message}\", payload); }}")
}

/// Validates a numeric token, defaulting to `0`.
fn number_token(raw: &str, owner: &str, field: &str) -> String {
    if raw.parse::<f64>().is_ok() {
        raw.to_string()
    } else {
        tracing::warn!(
            "non-numeric value '{}' for '{}.{}', defaulting to 0",
            raw,
            owner,
            field
        );
        "0".to_string()
    }
}

/// Validates a boolean token, defaulting to `false`.
fn boolean_token(raw: &str, owner: &str, field: &str) -> String {
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        "true".to_string()
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        "false".to_string()
    } else {
        tracing::warn!(
            "non-boolean value '{}' for '{}.{}', defaulting to false",
            raw,
            owner,
            field
        );
        "false".to_string()
    }
}
