//! Settings parsing and preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves settings provided as strings.

#![forbid(unsafe_code)]

mod advisory;
mod model;
mod presets;
mod resolve;

pub use advisory::{Advisory, advisories};
pub use model::{BouncerSettingsV1, RuleSettings, SCHEMA_SETTINGS_V1};
pub use presets::{DEFAULT_PROFILE, preset, profile_names};
pub use resolve::{Overrides, ResolvedSettings};

/// Parse `branchbouncer.toml` (or equivalent) into a typed model.
pub fn parse_settings_toml(input: &str) -> anyhow::Result<BouncerSettingsV1> {
    let cfg: BouncerSettingsV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the rule selection and parameters (preset + settings file + overrides).
pub fn resolve_settings(
    cfg: BouncerSettingsV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedSettings> {
    resolve::resolve_settings(cfg, overrides)
}
