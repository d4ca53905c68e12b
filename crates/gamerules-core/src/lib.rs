//! Config/schema synchronization engine for game rule defaults.
//!
//! The host (a game engine with a built-in set of named "game rules")
//! exposes its rules through the [`RuleProvider`] contract. This crate
//! owns everything on top of that:
//!
//! - **Config store**: the user-facing configuration file holding a
//!   schema pointer, a generate flag, and a rule-name → override map.
//! - **Override diff engine**: computes the minimal override map from a
//!   live rule snapshot against a freshly built all-defaults baseline.
//! - **Schema synchronizer**: fingerprints the current rule-name set,
//!   compares it against the hash embedded in the persisted schema, and
//!   regenerates the schema document when the rule set changed.
//! - **Schema document builder**: renders rule metadata into a JSON
//!   Schema (draft 2020-12) document for editor auto-completion.
//!
//! Schema generation is best-effort by design: I/O failures are logged
//! and reported, never raised to the host.

pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod fingerprint;
pub mod provider;
pub mod rule;
pub mod schema;
pub mod sync;

pub use config::{ConfigDocument, GENERATE_ME, GENERATE_ME_MAYBE};
pub use context::EngineContext;
pub use diff::diff_overrides;
pub use error::{Error, Result};
pub use fingerprint::compute_fingerprint;
pub use provider::{RuleProvider, StaticRuleProvider};
pub use rule::{
    DoubleBounds, IntBounds, OverrideMap, RuleDescriptor, RuleKind, RuleSet, RuleValue,
};
pub use schema::build_schema_document;
pub use sync::{SchemaSynchronizer, SyncReport, SyncState};
