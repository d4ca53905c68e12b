//! Engine context: one-shot initialization and override updates
//!
//! The context is the single owner of the in-memory config document.
//! Construction *is* the initialization guard: components receive an
//! `&EngineContext` and therefore cannot observe a pre-init state.

use gamerules_fs::{ConfigStore, InstanceLayout};

use crate::config::ConfigDocument;
use crate::diff::diff_overrides;
use crate::error::Result;
use crate::provider::RuleProvider;
use crate::rule::{OverrideMap, RuleSet};
use crate::sync::{SchemaSynchronizer, SyncReport};

/// Process-wide engine state, constructed once at host startup (or when
/// the client opens its configuration screen).
#[derive(Debug)]
pub struct EngineContext {
    layout: InstanceLayout,
    store: ConfigStore,
    config: ConfigDocument,
    sync_report: SyncReport,
}

impl EngineContext {
    /// Initialize the engine: load (or default) the config, run one
    /// schema synchronization pass, and persist the config.
    ///
    /// # Errors
    ///
    /// Fails when the config file exists but is malformed (it is never
    /// overwritten in that case) or when the config cannot be written
    /// back. Schema-side I/O failures do not fail initialization; they
    /// are collected in [`sync_report`](Self::sync_report).
    pub fn initialize(layout: InstanceLayout, provider: &dyn RuleProvider) -> Result<Self> {
        let store = ConfigStore::new();
        let mut config = ConfigDocument::load(&store, &layout)?;

        let synchronizer = SchemaSynchronizer::new(layout.clone());
        let sync_report = synchronizer.prepare(&mut config, provider);

        config.save(&store, &layout)?;

        Ok(Self {
            layout,
            store,
            config,
            sync_report,
        })
    }

    /// Outcome of the initialization synchronization pass.
    pub fn sync_report(&self) -> &SyncReport {
        &self.sync_report
    }

    /// The current configuration.
    pub fn config(&self) -> &ConfigDocument {
        &self.config
    }

    /// The current override set applied on top of the host defaults.
    pub fn overrides(&self) -> &OverrideMap {
        &self.config.default_game_rules
    }

    /// Replace the override set from an edited live snapshot.
    ///
    /// Diffs the snapshot against a freshly built baseline and persists
    /// the result. Passing `None` clears all overrides.
    pub fn update_overrides(
        &mut self,
        live: Option<&RuleSet>,
        provider: &dyn RuleProvider,
    ) -> Result<()> {
        let baseline = provider.baseline();
        self.config.default_game_rules = diff_overrides(live, &baseline);
        self.config.save(&self.store, &self.layout)
    }

    /// Reset to host defaults, clearing every override.
    pub fn reset_defaults(&mut self, provider: &dyn RuleProvider) -> Result<()> {
        self.update_overrides(None, provider)
    }
}
