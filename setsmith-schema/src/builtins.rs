//! Built-in structure seeding.
//!
//! Built-ins are the primitive and externally-defined sub-types the data
//! transformer encodes directly, without a class or enum definition. They are
//! registered before any user schema loads so user schemas may reference them
//! immediately.

use crate::registry::{BuiltInDef, EnumDef, EnumMember, Registry, Structure};

/// Built-in type names with fixed encoding rules.
pub const BUILT_IN_TYPES: [&str; 7] = [
    "Single",
    "Boolean",
    "String",
    "Color",
    "BitmapImage",
    "SolidColorBrush",
    "MessageCommand",
];

/// Name of the built-in font family enum.
pub const FONT_FAMILY_ENUM: &str = "FontFamily";

/// Canonical font families; ordinals follow list position.
pub const FONT_FAMILIES: [&str; 8] = [
    "Arial", "Calibri", "Cambria", "Consolas", "Georgia", "SegoeUI", "Tahoma", "Verdana",
];

/// Family used when a font property carries no value.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Seeds the registry with every built-in structure.
pub fn seed(registry: &mut Registry) {
    for name in BUILT_IN_TYPES {
        registry.insert(Structure::BuiltIn(BuiltInDef::new(name)));
    }

    let mut families = EnumDef::new(FONT_FAMILY_ENUM);
    for (ordinal, name) in FONT_FAMILIES.iter().enumerate() {
        families.add_member(EnumMember::new(*name, ordinal as i64));
    }
    registry.insert(Structure::Enum(families));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Structure;

    #[test]
    fn test_seed_registers_every_built_in() {
        let mut registry = Registry::new();
        seed(&mut registry);

        for name in BUILT_IN_TYPES {
            assert!(registry.contains(name), "missing built-in {name}");
        }
        assert_eq!(registry.len(), BUILT_IN_TYPES.len() + 1);
    }

    #[test]
    fn test_font_family_members_and_ordinals() {
        let mut registry = Registry::new();
        seed(&mut registry);

        let families = match registry.get(FONT_FAMILY_ENUM) {
            Some(Structure::Enum(e)) => e,
            other => panic!("unexpected entry: {other:?}"),
        };
        assert_eq!(families.members.len(), FONT_FAMILIES.len());
        assert_eq!(families.members[0].name, "Arial");
        assert_eq!(families.members[0].ordinal, 0);
        assert_eq!(families.members[7].name, "Verdana");
        assert_eq!(families.members[7].ordinal, 7);
    }

    #[test]
    fn test_default_family_is_canonical() {
        assert!(FONT_FAMILIES.contains(&DEFAULT_FONT_FAMILY));
    }
}
