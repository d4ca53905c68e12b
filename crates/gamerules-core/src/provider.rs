//! Host adapter contract
//!
//! The engine never reaches into host internals. The host supplies one
//! implementation of [`RuleProvider`] exposing typed metadata for every
//! rule it knows. Display strings arrive already resolved, so a client
//! build (with access to the UI text system) and a dedicated server
//! build differ only in which provider they hand over.

use crate::rule::{RuleDescriptor, RuleSet};

/// Source of rule metadata and default values.
///
/// Implementations must enumerate the complete current rule set on every
/// call; the engine treats each call as a fresh snapshot and caches
/// nothing across passes.
pub trait RuleProvider {
    /// Metadata for every rule currently known to the host.
    fn descriptors(&self) -> Vec<RuleDescriptor>;

    /// Stable names of all known rules, in enumeration order.
    fn rule_names(&self) -> Vec<String> {
        self.descriptors().into_iter().map(|d| d.name).collect()
    }

    /// Freshly constructed all-defaults snapshot.
    ///
    /// Rebuilt per call so the baseline tracks the host's own defaults
    /// even when they change between host versions.
    fn baseline(&self) -> RuleSet {
        self.descriptors()
            .into_iter()
            .map(|d| {
                let value = d.default_value();
                (d.name, value)
            })
            .collect()
    }
}

/// Provider backed by a fixed descriptor list.
///
/// Reference implementation for tests and for hosts whose rule set is
/// known ahead of time.
#[derive(Debug, Clone, Default)]
pub struct StaticRuleProvider {
    descriptors: Vec<RuleDescriptor>,
}

impl StaticRuleProvider {
    pub fn new(descriptors: Vec<RuleDescriptor>) -> Self {
        Self { descriptors }
    }
}

impl RuleProvider for StaticRuleProvider {
    fn descriptors(&self) -> Vec<RuleDescriptor> {
        self.descriptors.clone()
    }
}
