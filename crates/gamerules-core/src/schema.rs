//! Schema document builder
//!
//! Renders collected rule metadata into a JSON Schema (draft 2020-12)
//! document. The document embeds the rule-set fingerprint as
//! `gameRulesHash`; the synchronizer reads that field back on the next
//! run to decide staleness, so its name is wire-compatibility-sensitive.

use serde_json::{Value, json};

use crate::rule::{RuleDescriptor, RuleKind};

/// Draft URI emitted in the document's own `$schema` field.
pub const SCHEMA_DRAFT_URI: &str = "https://json-schema.org/draft/2020-12/schema";

/// The field carrying the rule-set fingerprint.
pub const GAME_RULES_HASH_FIELD: &str = "gameRulesHash";

/// Build the full schema document for the given rule set.
///
/// Pure transformation: identical inputs produce an identical document,
/// with object keys in deterministic (sorted) order.
pub fn build_schema_document(fingerprint: &str, rules: &[RuleDescriptor]) -> Value {
    let mut rule_properties = serde_json::Map::new();
    for rule in rules {
        rule_properties.insert(rule.name.clone(), rule_fragment(rule));
    }

    json!({
        "$schema": SCHEMA_DRAFT_URI,
        "title": "Game Rule Defaults Configuration File",
        "description": "Configuration file overriding the host's built-in default game rules.",
        (GAME_RULES_HASH_FIELD): fingerprint,
        "type": "object",
        "properties": {
            "$schema": {
                "type": "string",
                "title": "$schema",
                "description": "Standard schema assignment for this file. Set it to \"GENERATE_ME\" to have the path to the generated schema filled in again.",
            },
            "default_game_rules": {
                "type": "object",
                "title": "Default Game Rules",
                "description": "Rules whose default values override the host's built-in defaults.",
                "properties": rule_properties,
            },
            "generate_json_schema": {
                "type": "boolean",
                "title": "Generate JSON Schema",
                "description": "If enabled, a JSON schema is generated next to this file to aid editing. Disable it to skip generation; the schema file and the \"$schema\" property can then be removed safely.",
            },
        },
        "required": ["default_game_rules", "generate_json_schema"],
    })
}

/// Render one rule's schema fragment, shaped per kind.
///
/// Bounds are emitted only when present; "unbounded" is encoded as the
/// absence of `minimum`/`maximum`, never as a numeric sentinel.
fn rule_fragment(rule: &RuleDescriptor) -> Value {
    let mut fragment = match &rule.kind {
        RuleKind::Boolean { default } => json!({
            "type": "boolean",
            "default": default,
        }),
        RuleKind::Integer { default, bounds } => {
            let mut fragment = json!({
                "type": "integer",
                "default": default,
            });
            if let Some(min) = bounds.min {
                fragment["minimum"] = json!(min);
            }
            if let Some(max) = bounds.max {
                fragment["maximum"] = json!(max);
            }
            fragment
        }
        RuleKind::Double { default, bounds } => {
            let mut fragment = json!({
                "type": "number",
                "default": default,
            });
            if let Some(min) = bounds.min {
                fragment["minimum"] = json!(min);
            }
            if let Some(max) = bounds.max {
                fragment["maximum"] = json!(max);
            }
            fragment
        }
        RuleKind::Enum { default, allowed } => json!({
            "type": "string",
            "default": default,
            "enum": allowed,
        }),
    };

    fragment["title"] = json!(rule.display_name);
    if let Some(description) = &rule.description {
        fragment["description"] = json!(description);
    }
    fragment
}
