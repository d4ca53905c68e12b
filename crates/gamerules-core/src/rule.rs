//! Rule model: values, kinds, and per-rule metadata
//!
//! Game rules form a closed set of four kinds (boolean, integer, double,
//! enum). The kind is a tagged union with kind-specific payload, and all
//! consumers match on it exhaustively, so a new host kind surfaces as a
//! compile error here rather than a silently skipped rule.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A kind-typed rule value as it appears in snapshots and the config file.
///
/// Serialized untagged: booleans as JSON booleans, numbers as numbers,
/// enum values as their canonical name string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Enum(String),
}

impl RuleValue {
    /// Human-readable kind name, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Double(_) => "double",
            Self::Enum(_) => "enum",
        }
    }
}

/// Inclusive bounds of an integer rule. `None` means unbounded on that
/// side and is never encoded as a numeric sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntBounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl IntBounds {
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    pub fn new(min: impl Into<Option<i64>>, max: impl Into<Option<i64>>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Inclusive bounds of a double rule, same `None`-is-unbounded encoding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DoubleBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl DoubleBounds {
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    pub fn new(min: impl Into<Option<f64>>, max: impl Into<Option<f64>>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Kind of a rule, with the default value and kind-specific metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    Boolean {
        default: bool,
    },
    Integer {
        default: i64,
        bounds: IntBounds,
    },
    Double {
        default: f64,
        bounds: DoubleBounds,
    },
    /// Enum rules carry the ordered set of allowed canonical names.
    Enum {
        default: String,
        allowed: Vec<String>,
    },
}

/// Metadata for one rule, produced fresh by the host adapter on each
/// synchronization pass. Never persisted directly; only folded into the
/// generated schema document.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDescriptor {
    /// Stable host-assigned rule name, unique within the rule set.
    pub name: String,
    /// Display string, already resolved by the host adapter.
    pub display_name: String,
    /// Optional longer description; omitted when the host has none.
    pub description: Option<String>,
    pub kind: RuleKind,
}

impl RuleDescriptor {
    /// The host's built-in default as a snapshot value.
    pub fn default_value(&self) -> RuleValue {
        match &self.kind {
            RuleKind::Boolean { default } => RuleValue::Boolean(*default),
            RuleKind::Integer { default, .. } => RuleValue::Integer(*default),
            RuleKind::Double { default, .. } => RuleValue::Double(*default),
            RuleKind::Enum { default, .. } => RuleValue::Enum(default.clone()),
        }
    }
}

/// Snapshot of a rule set: rule name → value.
pub type RuleSet = BTreeMap<String, RuleValue>;

/// Persisted override set: rule name → user-chosen default.
pub type OverrideMap = BTreeMap<String, RuleValue>;
