//! Structure registry and definitions.
//!
//! This module contains the data structures representing registered schema
//! entries (classes, enums, built-ins) and the registry that maps structure
//! names to their definitions.

use std::collections::HashMap;

/// Registered structure variants.
#[derive(Debug, Clone)]
pub enum Structure {
    /// Class definition with typed properties.
    Class(ClassDef),
    /// Enum definition with ordered members.
    Enum(EnumDef),
    /// Built-in marker entry with fixed encoding rules.
    BuiltIn(BuiltInDef),
}

impl Structure {
    /// Returns the name of the structure.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Class(c) => &c.name,
            Self::Enum(e) => &e.name,
            Self::BuiltIn(b) => &b.name,
        }
    }

    /// Returns true if this is a class definition.
    #[must_use]
    pub const fn is_class(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns true if this is an enum definition.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns true if this is a built-in entry.
    #[must_use]
    pub const fn is_built_in(&self) -> bool {
        matches!(self, Self::BuiltIn(_))
    }
}

/// Property kind dispatch table.
///
/// `sub_type` references another registry entry by name; qualified names
/// (`Outer.Inner`) resolve by their final segment.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    /// Boolean scalar.
    Boolean,
    /// Callable command slot.
    Command,
    /// Opaque color/reference string.
    Brush,
    /// Font family enum member.
    Font,
    /// Text with optional authoring-time word-count bounds.
    String {
        /// Minimum word count hint.
        min_words: Option<u32>,
        /// Maximum word count hint.
        max_words: Option<u32>,
    },
    /// Numeric scalar with optional authoring-time bounds.
    Number {
        /// Minimum value hint.
        min: Option<f64>,
        /// Maximum value hint.
        max: Option<f64>,
        /// Decimal place count hint.
        decimal_count: Option<u32>,
    },
    /// Nested structure of the referenced type.
    Object {
        /// Referenced structure name.
        sub_type: String,
    },
    /// Image reference resolved to a relative path.
    Image {
        /// Data field carrying the image source when the property's own
        /// field is absent.
        source_path_field: String,
    },
    /// Enum member of the referenced type.
    Enum {
        /// Referenced enum name.
        sub_type: String,
    },
    /// Ordered sequence of the referenced element type.
    Collection {
        /// Referenced element type name.
        sub_type: String,
    },
}

/// Class definition.
#[derive(Debug, Clone)]
pub struct ClassDef {
    /// Class name (registry key).
    pub name: String,
    /// Properties in declaration order.
    pub properties: Vec<PropertyDef>,
}

impl ClassDef {
    /// Creates a new class definition with no properties.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Adds a property to the class.
    pub fn add_property(&mut self, property: PropertyDef) {
        self.properties.push(property);
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Property declaration within a class.
#[derive(Debug, Clone)]
pub struct PropertyDef {
    /// Property name.
    pub name: String,
    /// Classified kind.
    pub kind: PropertyKind,
}

impl PropertyDef {
    /// Creates a new property definition.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Enum definition.
#[derive(Debug, Clone)]
pub struct EnumDef {
    /// Enum name (registry key).
    pub name: String,
    /// Members in declaration order.
    pub members: Vec<EnumMember>,
}

impl EnumDef {
    /// Creates a new enum definition with no members.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Adds a member to the enum.
    pub fn add_member(&mut self, member: EnumMember) {
        self.members.push(member);
    }

    /// Looks up a member by name.
    #[must_use]
    pub fn get_member(&self, name: &str) -> Option<&EnumMember> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// Enum member with its numeric ordinal.
///
/// Ordinals order built-in seeding; they never surface in emitted code.
#[derive(Debug, Clone)]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// Numeric ordinal.
    pub ordinal: i64,
}

impl EnumMember {
    /// Creates a new enum member.
    #[must_use]
    pub fn new(name: impl Into<String>, ordinal: i64) -> Self {
        Self {
            name: name.into(),
            ordinal,
        }
    }
}

/// Built-in marker entry.
#[derive(Debug, Clone)]
pub struct BuiltInDef {
    /// Built-in name.
    pub name: String,
}

impl BuiltInDef {
    /// Creates a new built-in entry.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Outcome of a registry insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The name was new.
    Inserted,
    /// An earlier entry with the same name was overwritten (last-write-wins).
    Replaced,
}

/// Returns the final dot-segment of a possibly qualified structure name.
#[must_use]
pub fn base_name(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

/// Name-to-structure table, insertion-ordered.
///
/// Built once per invocation and read-only afterwards; the emitters never
/// mutate it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    structures: Vec<Structure>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a structure, overwriting any earlier entry with the same name.
    ///
    /// A replaced entry keeps its original position in iteration order.
    pub fn insert(&mut self, structure: Structure) -> InsertOutcome {
        let name = structure.name().to_string();
        if let Some(&idx) = self.index.get(&name) {
            self.structures[idx] = structure;
            return InsertOutcome::Replaced;
        }
        self.index.insert(name, self.structures.len());
        self.structures.push(structure);
        InsertOutcome::Inserted
    }

    /// Looks up a structure by the final segment of its name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Structure> {
        self.index
            .get(base_name(name))
            .map(|&idx| &self.structures[idx])
    }

    /// Returns true if a structure with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(base_name(name))
    }

    /// Returns the structures in insertion order.
    #[must_use]
    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    /// Returns the registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.structures.iter().map(Structure::name)
    }

    /// Returns the number of registered structures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("Rarity"), "Rarity");
        assert_eq!(base_name("Cards.Rarity"), "Rarity");
        assert_eq!(base_name("A.B.C"), "C");
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = Registry::new();
        let outcome = registry.insert(Structure::Class(ClassDef::new("Card")));

        assert_eq!(outcome, InsertOutcome::Inserted);
        assert!(registry.contains("Card"));
        assert!(registry.get("Card").is_some());
        assert!(registry.get("Unknown").is_none());
    }

    #[test]
    fn test_lookup_by_final_segment() {
        let mut registry = Registry::new();
        registry.insert(Structure::Enum(EnumDef::new("Rarity")));

        let found = registry.get("Cards.Rarity").expect("Failed to resolve");
        assert_eq!(found.name(), "Rarity");
    }

    #[test]
    fn test_last_write_wins_is_observable() {
        let mut registry = Registry::new();
        registry.insert(Structure::Class(ClassDef::new("Card")));

        let mut replacement = ClassDef::new("Card");
        replacement.add_property(PropertyDef::new("Title", PropertyKind::String {
            min_words: None,
            max_words: None,
        }));
        let outcome = registry.insert(Structure::Class(replacement));

        assert_eq!(outcome, InsertOutcome::Replaced);
        assert_eq!(registry.len(), 1);
        match registry.get("Card") {
            Some(Structure::Class(c)) => assert_eq!(c.properties.len(), 1),
            other => panic!("unexpected entry: {other:?}"),
        }
    }

    #[test]
    fn test_replacement_keeps_insertion_order() {
        let mut registry = Registry::new();
        registry.insert(Structure::Class(ClassDef::new("Card")));
        registry.insert(Structure::Class(ClassDef::new("Deck")));
        registry.insert(Structure::Class(ClassDef::new("Card")));

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["Card", "Deck"]);
    }

    #[test]
    fn test_enum_member_lookup() {
        let mut rarity = EnumDef::new("Rarity");
        rarity.add_member(EnumMember::new("Common", 0));
        rarity.add_member(EnumMember::new("Rare", 1));

        assert_eq!(rarity.get_member("Rare").map(|m| m.ordinal), Some(1));
        assert!(rarity.get_member("Mythic").is_none());
    }

    #[test]
    fn test_class_property_order() {
        let mut card = ClassDef::new("Card");
        card.add_property(PropertyDef::new("Title", PropertyKind::String {
            min_words: None,
            max_words: None,
        }));
        card.add_property(PropertyDef::new("Power", PropertyKind::Number {
            min: None,
            max: None,
            decimal_count: None,
        }));

        let names: Vec<_> = card.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Title", "Power"]);
    }
}
