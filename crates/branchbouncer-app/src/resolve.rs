//! Settings text + overrides -> resolved rule selection.

use anyhow::Context;
use branchbouncer_settings::{BouncerSettingsV1, Overrides, ResolvedSettings};

/// Parse settings text (empty string if no file was found) and resolve it against overrides.
pub fn resolve_rules(
    settings_text: &str,
    overrides: Overrides,
) -> anyhow::Result<ResolvedSettings> {
    let cfg = if settings_text.trim().is_empty() {
        BouncerSettingsV1::default()
    } else {
        branchbouncer_settings::parse_settings_toml(settings_text).context("parse settings")?
    };

    branchbouncer_settings::resolve_settings(cfg, overrides).context("resolve settings")
}
