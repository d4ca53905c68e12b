//! End-to-end lifecycle: initialize, override, restart, reset
//!
//! Exercises the complete flow the host drives: engine initialization at
//! startup (config + schema generation), capturing overrides after an
//! interactive edit, and schema regeneration after the rule set changes.

use gamerules_core::{
    ConfigDocument, EngineContext, IntBounds, OverrideMap, RuleDescriptor, RuleKind, RuleProvider,
    RuleValue, StaticRuleProvider, SyncState,
};
use gamerules_fs::{ConfigStore, InstanceLayout};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

fn host_rules() -> StaticRuleProvider {
    StaticRuleProvider::new(vec![
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
    ])
}

fn setup() -> (TempDir, InstanceLayout) {
    let temp = TempDir::new().unwrap();
    let layout = InstanceLayout::new(temp.path().join("gamerule-defaults"));
    (temp, layout)
}

#[test]
fn startup_edit_and_restart() {
    let (_temp, layout) = setup();
    let rules = host_rules();

    // First startup: directory, config, and schema appear
    let mut ctx = EngineContext::initialize(layout.clone(), &rules).unwrap();
    assert_eq!(ctx.sync_report().state, SyncState::Stale);
    assert!(ctx.sync_report().regenerated);
    assert!(layout.config_path().exists());
    assert!(layout.schema_path().exists());

    // User edits rules interactively, host hands over the edited snapshot
    let mut live = rules.baseline();
    live.insert("doMobSpawning".into(), RuleValue::Boolean(false));
    ctx.update_overrides(Some(&live), &rules).unwrap();

    // Restart: overrides survive, schema is already up to date
    let ctx = EngineContext::initialize(layout.clone(), &rules).unwrap();
    assert_eq!(ctx.sync_report().state, SyncState::UpToDate);
    assert!(!ctx.sync_report().regenerated);
    assert_eq!(
        ctx.overrides(),
        &OverrideMap::from([("doMobSpawning".to_string(), RuleValue::Boolean(false))])
    );

    // Persisted config holds exactly the one override
    let persisted: ConfigDocument = ConfigStore::new().load(&layout.config_path()).unwrap();
    assert_eq!(
        persisted.default_game_rules,
        OverrideMap::from([("doMobSpawning".to_string(), RuleValue::Boolean(false))])
    );
    assert_eq!(persisted.schema, layout.schema_uri());
}

#[test]
fn persisted_schema_matches_expected_fragments() {
    let (_temp, layout) = setup();
    EngineContext::initialize(layout.clone(), &host_rules()).unwrap();

    let content = std::fs::read_to_string(layout.schema_path().to_native()).unwrap();
    let document: Value = serde_json::from_str(&content).unwrap();

    let properties = &document["properties"]["default_game_rules"]["properties"];

    assert_eq!(properties["doMobSpawning"]["type"], "boolean");
    assert_eq!(properties["doMobSpawning"]["default"], true);

    assert_eq!(properties["randomTickSpeed"]["type"], "integer");
    assert_eq!(properties["randomTickSpeed"]["default"], 3);
    // min = 0 is a real bound; the max side is unbounded and stays absent
    assert_eq!(properties["randomTickSpeed"]["minimum"], 0);
    assert!(properties["randomTickSpeed"].get("maximum").is_none());
}

#[test]
fn adding_a_rule_regenerates_schema_on_next_startup() {
    let (_temp, layout) = setup();
    let rules = host_rules();
    EngineContext::initialize(layout.clone(), &rules).unwrap();

    let mut descriptors = rules.descriptors();
    descriptors.push(RuleDescriptor {
        name: "keepInventory".into(),
        display_name: "Keep Inventory".into(),
        description: None,
        kind: RuleKind::Boolean { default: false },
    });
    let grown = StaticRuleProvider::new(descriptors);

    let ctx = EngineContext::initialize(layout.clone(), &grown).unwrap();
    assert_eq!(ctx.sync_report().state, SyncState::Stale);
    assert!(ctx.sync_report().regenerated);

    let content = std::fs::read_to_string(layout.schema_path().to_native()).unwrap();
    let document: Value = serde_json::from_str(&content).unwrap();
    assert!(
        document["properties"]["default_game_rules"]["properties"]
            .get("keepInventory")
            .is_some()
    );
}

#[test]
fn reset_clears_overrides_on_disk() {
    let (_temp, layout) = setup();
    let rules = host_rules();
    let mut ctx = EngineContext::initialize(layout.clone(), &rules).unwrap();

    let mut live = rules.baseline();
    live.insert("randomTickSpeed".into(), RuleValue::Integer(20));
    ctx.update_overrides(Some(&live), &rules).unwrap();
    ctx.reset_defaults(&rules).unwrap();

    let persisted: ConfigDocument = ConfigStore::new().load(&layout.config_path()).unwrap();
    assert!(persisted.default_game_rules.is_empty());
}

#[test]
fn generation_disabled_still_runs_best_effort() {
    let (_temp, layout) = setup();
    layout.ensure_dir().unwrap();
    std::fs::write(
        layout.config_path().to_native(),
        r#"{"$schema": "GENERATE_ME_MAYBE", "default_game_rules": {}, "generate_json_schema": false}"#,
    )
    .unwrap();

    let ctx = EngineContext::initialize(layout.clone(), &host_rules()).unwrap();
    assert!(!layout.schema_path().exists());
    // GENERATE_ME_MAYBE with generation off resolves to the empty string
    assert_eq!(ctx.config().schema, "");
}
