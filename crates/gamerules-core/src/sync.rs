//! Schema synchronizer
//!
//! Decides whether the persisted schema document is stale relative to
//! the host's current rule set and regenerates it when it is. The
//! decision compares the fingerprint embedded in the persisted document
//! against one freshly computed from the live rule-name set; a missing
//! file, a missing hash field, or a mismatch all trigger regeneration.
//!
//! Schema generation is a convenience feature, not load-critical: every
//! I/O failure here is logged and folded into the [`SyncReport`], and
//! the previously persisted file (if any) is left untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use gamerules_fs::{InstanceLayout, io};

use crate::config::ConfigDocument;
use crate::error::{Error, Result};
use crate::fingerprint::compute_fingerprint;
use crate::provider::RuleProvider;
use crate::schema::{GAME_RULES_HASH_FIELD, build_schema_document};

/// Staleness of the persisted schema relative to the live rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    /// Persisted fingerprint matches the live rule set; no write occurs.
    UpToDate,
    /// Schema is missing or its fingerprint mismatches; regeneration runs.
    Stale,
}

/// Outcome of one synchronization pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    /// State the synchronizer evaluated before acting
    pub state: SyncState,
    /// Whether a new schema document was written
    pub regenerated: bool,
    /// Actions taken during the pass
    pub actions: Vec<String>,
    /// Non-fatal errors encountered during the pass
    pub errors: Vec<String>,
}

impl SyncReport {
    fn new(state: SyncState) -> Self {
        Self {
            state,
            regenerated: false,
            actions: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// True when the pass completed without swallowed errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Owns the regeneration decision and the schema file on disk.
#[derive(Debug, Clone)]
pub struct SchemaSynchronizer {
    layout: InstanceLayout,
}

impl SchemaSynchronizer {
    pub fn new(layout: InstanceLayout) -> Self {
        Self { layout }
    }

    /// Evaluate staleness against the host's current rule set.
    pub fn evaluate(&self, provider: &dyn RuleProvider) -> SyncState {
        let fingerprint = compute_fingerprint(provider.rule_names());
        self.evaluate_against(&fingerprint)
    }

    /// Run one synchronization pass.
    ///
    /// Resolves the config's schema-pointer sentinel regardless of
    /// staleness. When generation is enabled and the schema is stale,
    /// collects fresh descriptors and writes a new document atomically.
    /// When generation is disabled the pass is a no-op apart from
    /// pointer resolution.
    pub fn prepare(&self, config: &mut ConfigDocument, provider: &dyn RuleProvider) -> SyncReport {
        let fingerprint = compute_fingerprint(provider.rule_names());

        let state = if config.generate_json_schema {
            self.evaluate_against(&fingerprint)
        } else {
            SyncState::UpToDate
        };

        config.resolve_schema_pointer(&self.layout);

        let mut report = SyncReport::new(state);
        if state == SyncState::Stale {
            match self.regenerate(&fingerprint, provider) {
                Ok(()) => {
                    tracing::info!(path = %self.layout.schema_path(), "Generated a new JSON schema");
                    report.regenerated = true;
                    report
                        .actions
                        .push(format!("Wrote {}", self.layout.schema_path()));
                }
                Err(e) => {
                    tracing::warn!("Schema regeneration failed, keeping the previous file: {e}");
                    report.errors.push(e.to_string());
                }
            }
        }
        report
    }

    fn evaluate_against(&self, fingerprint: &str) -> SyncState {
        if !self.layout.schema_path().exists() {
            return SyncState::Stale;
        }
        match self.stored_fingerprint() {
            Ok(Some(stored)) if stored == fingerprint => SyncState::UpToDate,
            Ok(_) => {
                tracing::info!(
                    "The loaded set of game rules doesn't match the current schema's; the schema will be regenerated"
                );
                SyncState::Stale
            }
            Err(e) => {
                tracing::warn!("Could not read the persisted schema, treating it as stale: {e}");
                SyncState::Stale
            }
        }
    }

    /// Extract `gameRulesHash` from the persisted schema document.
    fn stored_fingerprint(&self) -> Result<Option<String>> {
        let path = self.layout.schema_path();
        let content = io::read_text(&path)?;
        let document: Value =
            serde_json::from_str(&content).map_err(|e| Error::SchemaRead {
                path: path.to_native(),
                message: e.to_string(),
            })?;
        Ok(document
            .get(GAME_RULES_HASH_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn regenerate(&self, fingerprint: &str, provider: &dyn RuleProvider) -> Result<()> {
        self.layout.ensure_dir()?;
        let document = build_schema_document(fingerprint, &provider.descriptors());
        let content = serde_json::to_string_pretty(&document)?;
        io::write_text(&self.layout.schema_path(), &content)?;
        Ok(())
    }
}
