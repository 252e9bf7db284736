use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_SETTINGS_V1: &str = "branchbouncer.settings.v1";

/// `branchbouncer.toml` schema v1.
///
/// This is a *user-facing* model: it is intentionally permissive so forward-compat is easy.
/// Rule IDs and field/rule compatibility are checked during resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BouncerSettingsV1 {
    /// Optional schema string for tooling (`branchbouncer.settings.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `recommended` (default), `strict` or `open`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Map of rule ID -> settings.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSettings>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleSettings {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Numeric threshold (days, changed lines, or repository count).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,

    /// Comma-separated blocked paths (`protected-paths` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<String>,
}
