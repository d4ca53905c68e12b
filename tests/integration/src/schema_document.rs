//! Generated schema document validity
//!
//! Compiles the generated document with a real JSON Schema validator and
//! checks that it accepts well-formed config files and rejects bad ones.

use gamerules_core::{
    DoubleBounds, IntBounds, RuleDescriptor, RuleKind, build_schema_document, compute_fingerprint,
};
use jsonschema::{Draft, Validator};
use serde_json::{Value, json};

fn sample_rules() -> Vec<RuleDescriptor> {
    vec![
        RuleDescriptor {
            name: "doMobSpawning".into(),
            display_name: "Spawn Mobs".into(),
            description: Some("Whether mobs spawn naturally.".into()),
            kind: RuleKind::Boolean { default: true },
        },
        RuleDescriptor {
            name: "randomTickSpeed".into(),
            display_name: "Random Tick Speed".into(),
            description: None,
            kind: RuleKind::Integer {
                default: 3,
                bounds: IntBounds::new(0, None),
            },
        },
        RuleDescriptor {
            name: "entityCrammingFactor".into(),
            display_name: "Entity Cramming Factor".into(),
            description: None,
            kind: RuleKind::Double {
                default: 1.0,
                bounds: DoubleBounds::new(0.0, 64.0),
            },
        },
        RuleDescriptor {
            name: "difficultyMode".into(),
            display_name: "Difficulty Mode".into(),
            description: None,
            kind: RuleKind::Enum {
                default: "NORMAL".into(),
                allowed: vec!["PEACEFUL".into(), "NORMAL".into(), "HARD".into()],
            },
        },
    ]
}

fn compile(schema: &Value) -> Validator {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .expect("generated document must compile as a draft 2020-12 schema")
}

#[test]
fn generated_document_compiles_as_draft_2020_12() {
    let rules = sample_rules();
    let fingerprint = compute_fingerprint(rules.iter().map(|r| r.name.as_str()));
    let document = build_schema_document(&fingerprint, &rules);
    compile(&document);
}

#[test]
fn schema_accepts_a_valid_config_file() {
    let rules = sample_rules();
    let document = build_schema_document("h", &rules);
    let validator = compile(&document);

    let config = json!({
        "$schema": "file:///config/gamerule-defaults/config.schema.json",
        "default_game_rules": {
            "doMobSpawning": false,
            "randomTickSpeed": 12,
            "entityCrammingFactor": 2.5,
            "difficultyMode": "HARD",
        },
        "generate_json_schema": true,
    });
    assert!(validator.is_valid(&config));
}

#[test]
fn schema_rejects_wrong_types_and_out_of_range_values() {
    let rules = sample_rules();
    let document = build_schema_document("h", &rules);
    let validator = compile(&document);

    let wrong_type = json!({
        "default_game_rules": { "doMobSpawning": "yes" },
        "generate_json_schema": true,
    });
    assert!(!validator.is_valid(&wrong_type));

    let below_minimum = json!({
        "default_game_rules": { "randomTickSpeed": -1 },
        "generate_json_schema": true,
    });
    assert!(!validator.is_valid(&below_minimum));

    let unknown_enum_value = json!({
        "default_game_rules": { "difficultyMode": "IMPOSSIBLE" },
        "generate_json_schema": true,
    });
    assert!(!validator.is_valid(&unknown_enum_value));

    let missing_required = json!({
        "default_game_rules": {},
    });
    assert!(!validator.is_valid(&missing_required));
}
