//! TypeScript naming and value-shaping rules.
//!
//! This module holds the fixed tables shared by the declaration emitter and
//! the data transformer: the kind-to-type mapping, the legacy sub-type remap
//! table, the collection tag aliases, string escaping and image path
//! resolution.

use setsmith_schema::builtins::FONT_FAMILY_ENUM;
use setsmith_schema::registry::{PropertyKind, base_name};

/// Callable type for command-valued properties.
pub const CALLABLE_TYPE: &str = "(payload?: unknown) => void";

/// Union accepted for image-valued properties: a relative path or a resolved
/// handle.
pub const IMAGE_UNION: &str = "string | ImageHandle";

/// Union accepted for brush-valued properties.
pub const BRUSH_UNION: &str = "string | Brush";

/// Delimiter separating the package prefix from an image path.
pub const PACK_DELIMITER: char = ';';

/// Internal path prefix stripped from image sources.
pub const INTERNAL_PATH_PREFIX: &str = "component/";

/// Returns the TypeScript type for a property kind.
#[must_use]
pub fn ts_type(kind: &PropertyKind) -> String {
    match kind {
        PropertyKind::String { .. } => "string".to_string(),
        PropertyKind::Number { .. } => "number".to_string(),
        PropertyKind::Boolean => "boolean".to_string(),
        PropertyKind::Command => CALLABLE_TYPE.to_string(),
        PropertyKind::Brush => BRUSH_UNION.to_string(),
        PropertyKind::Font => FONT_FAMILY_ENUM.to_string(),
        PropertyKind::Image { .. } => IMAGE_UNION.to_string(),
        PropertyKind::Object { sub_type } => object_type_name(sub_type),
        PropertyKind::Enum { sub_type } => base_name(sub_type).to_string(),
        PropertyKind::Collection { sub_type } => {
            let element = object_type_name(sub_type);
            if element.contains('|') {
                format!("({element})[]")
            } else {
                format!("{element}[]")
            }
        }
    }
}

/// Resolves a referenced sub-type to its TypeScript name.
///
/// Schema-level aliases remap to primitives or fixed unions; anything else
/// names an emitted declaration.
#[must_use]
pub fn object_type_name(sub_type: &str) -> String {
    match base_name(sub_type) {
        "Single" => "number".to_string(),
        "Bool" | "Boolean" => "boolean".to_string(),
        "String" | "Color" => "string".to_string(),
        "ImageSource" => IMAGE_UNION.to_string(),
        "Brush" => BRUSH_UNION.to_string(),
        "BaseCommand" | "MessageCommand" => CALLABLE_TYPE.to_string(),
        other => other.to_string(),
    }
}

/// Maps a declared collection sub-type to the element tag used in set files.
#[must_use]
pub fn collection_element_tag(sub_type: &str) -> &str {
    match base_name(sub_type) {
        "Brush" => "SolidColorBrush",
        "ImageSource" => "BitmapImage",
        "BaseCommand" => "MessageCommand",
        other => other,
    }
}

/// Escapes string content for a double-quoted TypeScript literal.
///
/// Only double quotes are escaped.
#[must_use]
pub fn escape_string(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Resolves a raw image source to its relative path.
///
/// Splits on the first pack delimiter and strips the internal path prefix
/// from the remainder. Returns `None` when no delimiter is present.
#[must_use]
pub fn relative_image_path(raw: &str) -> Option<String> {
    let (_, rest) = raw.split_once(PACK_DELIMITER)?;
    Some(rest.strip_prefix(INTERNAL_PATH_PREFIX).unwrap_or(rest).to_string())
}

/// Converts a string to a PascalCase identifier, dropping separators.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_type_scalars() {
        let string_kind = PropertyKind::String {
            min_words: None,
            max_words: None,
        };
        let number_kind = PropertyKind::Number {
            min: None,
            max: None,
            decimal_count: None,
        };

        assert_eq!(ts_type(&string_kind), "string");
        assert_eq!(ts_type(&number_kind), "number");
        assert_eq!(ts_type(&PropertyKind::Boolean), "boolean");
        assert_eq!(ts_type(&PropertyKind::Command), "(payload?: unknown) => void");
        assert_eq!(ts_type(&PropertyKind::Font), "FontFamily");
    }

    #[test]
    fn test_ts_type_references() {
        let object = PropertyKind::Object {
            sub_type: "Faces.Face".to_string(),
        };
        let list = PropertyKind::Collection {
            sub_type: "Card".to_string(),
        };
        let brushes = PropertyKind::Collection {
            sub_type: "Brush".to_string(),
        };

        assert_eq!(ts_type(&object), "Face");
        assert_eq!(ts_type(&list), "Card[]");
        assert_eq!(ts_type(&brushes), "(string | Brush)[]");
    }

    #[test]
    fn test_object_type_name_remap() {
        assert_eq!(object_type_name("Single"), "number");
        assert_eq!(object_type_name("Bool"), "boolean");
        assert_eq!(object_type_name("ImageSource"), "string | ImageHandle");
        assert_eq!(object_type_name("Brush"), "string | Brush");
        assert_eq!(object_type_name("BaseCommand"), "(payload?: unknown) => void");
        assert_eq!(object_type_name("Legacy.Single"), "number");
        assert_eq!(object_type_name("Face"), "Face");
    }

    #[test]
    fn test_collection_element_tag_aliases() {
        assert_eq!(collection_element_tag("Brush"), "SolidColorBrush");
        assert_eq!(collection_element_tag("ImageSource"), "BitmapImage");
        assert_eq!(collection_element_tag("BaseCommand"), "MessageCommand");
        assert_eq!(collection_element_tag("Card"), "Card");
    }

    #[test]
    fn test_escape_string_quotes_only() {
        assert_eq!(escape_string(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_string("back\\slash"), "back\\slash");
    }

    #[test]
    fn test_relative_image_path() {
        assert_eq!(
            relative_image_path("pack;component/images/icon.png"),
            Some("images/icon.png".to_string())
        );
        assert_eq!(
            relative_image_path("pack;images/icon.png"),
            Some("images/icon.png".to_string())
        );
        assert_eq!(relative_image_path("images/icon.png"), None);
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("starter_deck"), "StarterDeck");
        assert_eq!(to_pascal_case("starter-deck"), "StarterDeck");
        assert_eq!(to_pascal_case("Starter Deck"), "StarterDeck");
        assert_eq!(to_pascal_case("starter"), "Starter");
    }
}
