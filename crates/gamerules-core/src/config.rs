//! The user-facing configuration document
//!
//! Persisted as pretty-printed JSON (valid JSON5) in the instance
//! directory. The `$schema` field starts as a sentinel that the
//! synchronizer resolves to the canonical on-disk schema URI exactly
//! once; after resolution it is never rewritten automatically, so a
//! user-chosen pointer survives restarts.

use serde::{Deserialize, Serialize};

use gamerules_fs::{ConfigStore, InstanceLayout};

use crate::error::Result;
use crate::rule::OverrideMap;

/// Sentinel: always resolve to the canonical schema URI.
pub const GENERATE_ME: &str = "GENERATE_ME";

/// Sentinel: resolve to the canonical schema URI only while schema
/// generation is enabled, otherwise to the empty string.
pub const GENERATE_ME_MAYBE: &str = "GENERATE_ME_MAYBE";

/// The persisted configuration object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Schema pointer: a sentinel, a resolved URI, or empty.
    #[serde(rename = "$schema", default = "default_schema_pointer")]
    pub schema: String,

    /// Rule-name → override value. Replaced wholesale by the diff
    /// engine, never patched incrementally.
    #[serde(default)]
    pub default_game_rules: OverrideMap,

    /// Whether the schema file should be (re)generated.
    #[serde(default = "default_generate_flag")]
    pub generate_json_schema: bool,
}

fn default_schema_pointer() -> String {
    GENERATE_ME.to_string()
}

fn default_generate_flag() -> bool {
    true
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            schema: default_schema_pointer(),
            default_game_rules: OverrideMap::new(),
            generate_json_schema: default_generate_flag(),
        }
    }
}

impl ConfigDocument {
    /// Load the configuration from the instance directory.
    ///
    /// A missing file yields the defaults (first run). A present but
    /// malformed file fails with a descriptive parse error instead of
    /// being silently replaced; the user hand-edits this file.
    pub fn load(store: &ConfigStore, layout: &InstanceLayout) -> Result<Self> {
        let path = layout.config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Ok(store.load(&path)?)
    }

    /// Persist the configuration atomically.
    pub fn save(&self, store: &ConfigStore, layout: &InstanceLayout) -> Result<()> {
        store.save(&layout.config_path(), self)?;
        Ok(())
    }

    /// Resolve a sentinel schema pointer to its final value.
    ///
    /// Non-sentinel values are left untouched, so resolution happens at
    /// most once over the lifetime of a config file.
    pub fn resolve_schema_pointer(&mut self, layout: &InstanceLayout) {
        match self.schema.as_str() {
            GENERATE_ME => self.schema = layout.schema_uri(),
            GENERATE_ME_MAYBE => {
                self.schema = if self.generate_json_schema {
                    layout.schema_uri()
                } else {
                    String::new()
                };
            }
            _ => {}
        }
    }
}
