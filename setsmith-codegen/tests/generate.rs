//! End-to-end generation tests: schema sources in, declarations and data
//! modules out.

use setsmith_codegen::{
    EmitOptions, emit_data_module_from_file, emit_data_module_from_xml, emit_declarations,
};
use setsmith_schema::loader::load;
use setsmith_schema::registry::Registry;
use setsmith_schema::tree::parse_document;
use std::io::Write;

const CARD_SCHEMA: &str = r#"<Class Name="Card">
    <Property Name="Title" Type="String" StringMaxWordCount="4"/>
    <Property Name="Power" Type="Number" NumberMinValue="0" NumberMaxValue="10"/>
    <Property Name="Rare" Type="Boolean"/>
    <Property Name="Rarity" Type="Enum" SubType="Rarity"/>
    <Property Name="TitleFont" Type="Object" SubType="FontFamily"/>
    <Property Name="Icon" Type="Object" SubType="ImageSource"/>
    <Property Name="Background" Type="Object" SubType="Brush"/>
    <Property Name="Colors" Type="Collection" SubType="Brush"/>
    <Property Name="OnPlay" Type="Command"/>
</Class>"#;

const RARITY_SCHEMA: &str = r#"<Enum Name="Rarity">
    <Item Name="Common" Value="0"/>
    <Item Name="Rare" Value="1"/>
    <Item Name="Legendary" Value="4"/>
</Enum>"#;

const STARTER_SET: &str = r##"<Card Title="Ace of Ashes" Power="3" Rare="true"
      Rarity="Legendary" TitleFont="Georgia"
      Icon="pack;component/images/ace.png" Background="#202020">
    <Card.Colors>
        <SolidColorBrush Color="#FF0000"/>
        <SolidColorBrush Color="#00FF00"/>
    </Card.Colors>
    <Card.OnPlay>
        <MessageCommand Message="Ace attacks!"/>
    </Card.OnPlay>
</Card>"##;

fn card_registry() -> Registry {
    let sources = [
        parse_document(CARD_SCHEMA).expect("Failed to parse class schema"),
        parse_document(RARITY_SCHEMA).expect("Failed to parse enum schema"),
    ];
    load(&sources)
}

#[test]
fn test_declarations_cover_every_structure() {
    let registry = card_registry();
    let output = emit_declarations(&registry, &EmitOptions::default());

    assert!(output.contains("export interface Card {"));
    assert!(output.contains("Title: string;"));
    assert!(output.contains("Power: number;"));
    assert!(output.contains("Rare: boolean;"));
    assert!(output.contains("Rarity: Rarity;"));
    assert!(output.contains("TitleFont: FontFamily;"));
    assert!(output.contains("Icon: string | ImageHandle;"));
    assert!(output.contains("Background: string | Brush;"));
    assert!(output.contains("Colors: (string | Brush)[];"));
    assert!(output.contains("OnPlay: (payload?: unknown) => void;"));
    assert!(output.contains("export enum Rarity {"));
    assert!(output.contains("Legendary = \"Legendary\","));
    assert!(output.contains("export enum FontFamily {"));
}

#[test]
fn test_data_module_encodes_every_property() {
    let registry = card_registry();
    let output = emit_data_module_from_xml(
        &registry,
        STARTER_SET,
        "starter",
        &EmitOptions::default(),
    )
    .expect("Failed to emit data module");

    assert!(output.contains("import { Card, FontFamily, Rarity } from \"./structures\";"));
    assert!(output.contains("export const Starter: Card = {"));
    assert!(output.contains("Title: \"Ace of Ashes\","));
    assert!(output.contains("Power: 3,"));
    assert!(output.contains("Rare: true,"));
    assert!(output.contains("Rarity: Rarity.Legendary,"));
    assert!(output.contains("TitleFont: FontFamily.Georgia,"));
    assert!(output.contains("Icon: \"images/ace.png\","));
    assert!(output.contains("Background: \"#202020\","));
    assert!(output.contains("\"#FF0000\","));
    assert!(output.contains(
        "OnPlay: (payload?: unknown) => { console.log(\"Ace attacks!\", payload); },"
    ));
    // A fully-populated set never needs a default or placeholder.
    assert!(!output.contains("undefined"));
    assert!(!output.contains("console.warn"));
}

#[test]
fn test_generation_is_idempotent() {
    let registry = card_registry();
    let options = EmitOptions::default();

    let declarations_a = emit_declarations(&registry, &options);
    let declarations_b = emit_declarations(&registry, &options);
    assert_eq!(declarations_a, declarations_b);

    let module_a = emit_data_module_from_xml(&registry, STARTER_SET, "starter", &options)
        .expect("Failed to emit data module");
    let module_b = emit_data_module_from_xml(&registry, STARTER_SET, "starter", &options)
        .expect("Failed to emit data module");
    assert_eq!(module_a, module_b);
}

#[test]
fn test_data_module_from_file_uses_the_stem() {
    let registry = card_registry();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("starter_deck.xml");
    let mut file = std::fs::File::create(&path).expect("Failed to create set file");
    file.write_all(STARTER_SET.as_bytes())
        .expect("Failed to write set file");

    let output = emit_data_module_from_file(&registry, &path, &EmitOptions::default())
        .expect("Failed to emit data module");

    assert!(output.contains("export const StarterDeck: Card = {"));
}

#[test]
fn test_unknown_root_type_fails_the_file_only() {
    let registry = card_registry();
    let result = emit_data_module_from_xml(
        &registry,
        "<Mystery/>",
        "mystery",
        &EmitOptions::default(),
    );

    assert!(result.is_err());
}
