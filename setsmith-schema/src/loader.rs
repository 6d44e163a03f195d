//! Schema loader.
//!
//! Folds parsed structure sources into a registry. Loading is tolerant:
//! unclassifiable properties are dropped with a logged error while the owning
//! class still registers, and sources that are neither `Class` nor `Enum`
//! are skipped.

use crate::builtins;
use crate::error::LoadError;
use crate::registry::{
    ClassDef, EnumDef, EnumMember, InsertOutcome, PropertyDef, PropertyKind, Registry, Structure,
    base_name,
};
use crate::tree::XmlNode;

/// Field read for an image source when the schema names none.
const DEFAULT_IMAGE_SOURCE_FIELD: &str = "Source";

/// Loads structure sources into a freshly-seeded registry.
///
/// # Arguments
/// * `sources` - Parsed structure trees, one `Class` or `Enum` root each
///
/// # Returns
/// The populated registry. Built-ins are seeded before any source loads so
/// user schemas may reference them immediately.
#[must_use]
pub fn load<'a, I>(sources: I) -> Registry
where
    I: IntoIterator<Item = &'a XmlNode>,
{
    let mut registry = Registry::new();
    builtins::seed(&mut registry);

    for source in sources {
        load_source(&mut registry, source);
    }

    tracing::debug!(
        "registry loaded with {} structures: {}",
        registry.len(),
        registry.names().collect::<Vec<_>>().join(", ")
    );

    registry
}

/// Loads a single structure source into the registry.
pub fn load_source(registry: &mut Registry, source: &XmlNode) {
    let structure = match source.name() {
        "Class" => class_from_node(source).map(Structure::Class),
        "Enum" => enum_from_node(source).map(Structure::Enum),
        other => {
            tracing::error!("unknown structure type '{}', skipping source", other);
            return;
        }
    };

    let Some(structure) = structure else { return };
    let name = structure.name().to_string();
    if registry.insert(structure) == InsertOutcome::Replaced {
        tracing::warn!("structure '{}' defined more than once, keeping the last", name);
    }
}

/// Builds a class definition from a `Class` source.
fn class_from_node(node: &XmlNode) -> Option<ClassDef> {
    let Some(name) = node.first_scalar("Name") else {
        tracing::error!("Class source without a Name attribute, skipping");
        return None;
    };

    let mut class = ClassDef::new(name);
    for property in node.nodes("Property") {
        let Some(property_name) = property.first_scalar("Name") else {
            tracing::error!("dropping unnamed property of class '{}'", class.name);
            continue;
        };
        match classify_property(property) {
            Ok(kind) => class.add_property(PropertyDef::new(property_name, kind)),
            Err(err) => {
                tracing::error!(
                    "dropping property '{}.{}': {}",
                    class.name,
                    property_name,
                    err
                );
            }
        }
    }

    Some(class)
}

/// Builds an enum definition from an `Enum` source.
fn enum_from_node(node: &XmlNode) -> Option<EnumDef> {
    let Some(name) = node.first_scalar("Name") else {
        tracing::error!("Enum source without a Name attribute, skipping");
        return None;
    };

    let mut enum_def = EnumDef::new(name);
    for item in node.nodes("Item") {
        let Some(member_name) = item.first_scalar("Name") else {
            tracing::error!("dropping unnamed item of enum '{}'", enum_def.name);
            continue;
        };
        let ordinal = item.first_scalar("Value").and_then(|v| v.parse().ok());
        let Some(ordinal) = ordinal else {
            tracing::error!(
                "dropping item '{}.{}': missing or non-numeric Value",
                enum_def.name,
                member_name
            );
            continue;
        };
        enum_def.add_member(EnumMember::new(member_name, ordinal));
    }

    Some(enum_def)
}

/// Classifies a property declaration into its kind.
///
/// # Errors
/// Returns `LoadError` for unrecognized `Type` values, missing `SubType`
/// references and malformed numeric attributes.
pub fn classify_property(property: &XmlNode) -> Result<PropertyKind, LoadError> {
    let type_name = property
        .first_scalar("Type")
        .ok_or_else(|| LoadError::missing_attr("Type"))?;

    match type_name {
        "String" => Ok(PropertyKind::String {
            min_words: numeric_attr(property, "StringMinWordCount")?,
            max_words: numeric_attr(property, "StringMaxWordCount")?,
        }),
        "Number" => Ok(PropertyKind::Number {
            min: numeric_attr(property, "NumberMinValue")?,
            max: numeric_attr(property, "NumberMaxValue")?,
            decimal_count: numeric_attr(property, "NumberDecimalCount")?,
        }),
        "Boolean" => Ok(PropertyKind::Boolean),
        "Command" => Ok(PropertyKind::Command),
        "Enum" => Ok(PropertyKind::Enum {
            sub_type: required_sub_type(property)?,
        }),
        "Collection" => Ok(PropertyKind::Collection {
            sub_type: required_sub_type(property)?,
        }),
        "Object" => {
            let sub_type = required_sub_type(property)?;
            let base = base_name(&sub_type).to_string();
            Ok(match base.as_str() {
                "Brush" => PropertyKind::Brush,
                "FontFamily" => PropertyKind::Font,
                "ImageSource" => PropertyKind::Image {
                    source_path_field: property
                        .first_scalar("ImageSourcePath")
                        .unwrap_or(DEFAULT_IMAGE_SOURCE_FIELD)
                        .to_string(),
                },
                _ => PropertyKind::Object { sub_type },
            })
        }
        other => Err(LoadError::UnknownPropertyType {
            type_name: other.to_string(),
        }),
    }
}

/// Reads the required `SubType` attribute.
fn required_sub_type(property: &XmlNode) -> Result<String, LoadError> {
    property
        .first_scalar("SubType")
        .map(str::to_string)
        .ok_or_else(|| LoadError::missing_attr("SubType"))
}

/// Reads an optional numeric attribute, erroring on malformed values.
fn numeric_attr<T: std::str::FromStr>(
    property: &XmlNode,
    attribute: &str,
) -> Result<Option<T>, LoadError> {
    match property.first_scalar(attribute) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| LoadError::invalid_attr(attribute, raw)),
    }
}
