//! Override diff engine
//!
//! Computes the minimal override map between a live rule snapshot and
//! the host's all-defaults baseline. The baseline is rebuilt by the
//! caller on every invocation, so the diff stays correct when the
//! host's own defaults move between versions.

use crate::rule::{OverrideMap, RuleSet};

/// Diff a live snapshot against the all-defaults baseline.
///
/// Includes exactly the rules present in both snapshots whose values
/// differ under kind-appropriate equality. Passing `None` for the live
/// snapshot is the "reset to host defaults" operation and yields an
/// empty map.
pub fn diff_overrides(live: Option<&RuleSet>, baseline: &RuleSet) -> OverrideMap {
    let Some(live) = live else {
        return OverrideMap::new();
    };

    live.iter()
        .filter(|(name, value)| {
            baseline
                .get(name.as_str())
                .is_some_and(|default| default != *value)
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
