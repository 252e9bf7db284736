use crate::advisory::advisories;
use crate::model::{BouncerSettingsV1, RuleSettings, SCHEMA_SETTINGS_V1};
use crate::presets::{self, DEFAULT_PROFILE, profile_names};
use anyhow::Context;
use branchbouncer_domain::{RuleParameters, RuleSelection};
use branchbouncer_types::RuleFamily;
use branchbouncer_types::explain::all_rule_ids;

/// Command-line level overrides, applied after the settings file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    /// Rule IDs to enable.
    pub enable: Vec<String>,
    /// Rule IDs to disable. Applied after `enable`.
    pub disable: Vec<String>,
    pub account_age_days: Option<i64>,
    pub min_changes: Option<i64>,
    pub min_repos: Option<i64>,
    pub blocked_paths: Option<String>,
}

/// Effective rule selection and parameters handed to the compiler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub profile: String,
    pub selection: RuleSelection,
    pub params: RuleParameters,
}

pub fn resolve_settings(
    cfg: BouncerSettingsV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedSettings> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_SETTINGS_V1
    {
        anyhow::bail!("unsupported settings schema: {schema} (expected {SCHEMA_SETTINGS_V1})");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let mut resolved = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected one of: {})",
            profile_names().join(", ")
        )
    })?;

    // per-rule settings
    for (rule_id, rs) in cfg.rules.iter() {
        let family = parse_rule_id(rule_id)?;
        apply_rule_settings(&mut resolved, family, rs)
            .with_context(|| format!("invalid settings for rule {rule_id}"))?;
    }

    // toggles
    for rule_id in &overrides.enable {
        resolved.selection.set(parse_rule_id(rule_id)?, true);
    }
    for rule_id in &overrides.disable {
        resolved.selection.set(parse_rule_id(rule_id)?, false);
    }

    // parameters
    if let Some(days) = overrides.account_age_days {
        resolved.params.account_age_days = days;
    }
    if let Some(changes) = overrides.min_changes {
        resolved.params.min_changes = changes;
    }
    if let Some(repos) = overrides.min_repos {
        resolved.params.min_repos = repos;
    }
    if let Some(paths) = overrides.blocked_paths {
        resolved.params.blocked_paths = paths;
    }

    for advisory in advisories(&resolved) {
        tracing::warn!(rule = advisory.family.rule_id(), "{}", advisory.message);
    }
    tracing::debug!(
        profile = %resolved.profile,
        enabled = resolved.selection.enabled_count(),
        "resolved settings"
    );

    Ok(resolved)
}

fn parse_rule_id(rule_id: &str) -> anyhow::Result<RuleFamily> {
    RuleFamily::from_rule_id(rule_id).with_context(|| {
        format!(
            "unknown rule: {rule_id} (expected one of: {})",
            all_rule_ids().join(", ")
        )
    })
}

fn apply_rule_settings(
    resolved: &mut ResolvedSettings,
    family: RuleFamily,
    rs: &RuleSettings,
) -> anyhow::Result<()> {
    if let Some(enabled) = rs.enabled {
        resolved.selection.set(family, enabled);
    }
    if let Some(threshold) = rs.threshold {
        if !family.is_threshold() {
            anyhow::bail!("`threshold` is not supported here; use `paths`");
        }
        resolved.params.set_threshold(family, threshold);
    }
    if let Some(paths) = &rs.paths {
        if family.is_threshold() {
            anyhow::bail!("`paths` is only supported by protected-paths; use `threshold`");
        }
        resolved.params.blocked_paths = paths.clone();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_settings_toml;

    #[test]
    fn defaults_to_recommended_profile() {
        let resolved =
            resolve_settings(BouncerSettingsV1::default(), Overrides::default()).unwrap();
        assert_eq!(resolved.profile, "recommended");
        assert!(resolved.selection.account_age);
        assert!(resolved.selection.pr_changes);
        assert!(!resolved.selection.repo_count);
        assert!(!resolved.selection.protected_paths);
    }

    #[test]
    fn settings_file_overrides_preset() {
        let cfg = parse_settings_toml(
            r#"
profile = "open"

[rules.repo-count]
enabled = true
threshold = 10

[rules.protected-paths]
enabled = true
paths = "a.json, b/"
"#,
        )
        .unwrap();

        let resolved = resolve_settings(cfg, Overrides::default()).unwrap();
        assert_eq!(resolved.profile, "open");
        let enabled: Vec<_> = resolved.selection.enabled().collect();
        assert_eq!(
            enabled,
            vec![RuleFamily::RepoCount, RuleFamily::ProtectedPaths]
        );
        assert_eq!(resolved.params.min_repos, 10);
        assert_eq!(resolved.params.blocked_paths, "a.json, b/");
    }

    #[test]
    fn overrides_win_over_settings_file() {
        let cfg = parse_settings_toml(
            r#"
profile = "strict"

[rules.account-age]
threshold = 100
"#,
        )
        .unwrap();
        let overrides = Overrides {
            profile: Some("recommended".to_string()),
            enable: vec!["repo-count".to_string()],
            disable: vec!["pr-changes".to_string()],
            account_age_days: Some(365),
            ..Overrides::default()
        };

        let resolved = resolve_settings(cfg, overrides).unwrap();
        assert_eq!(resolved.profile, "recommended");
        assert_eq!(resolved.params.account_age_days, 365);
        let enabled: Vec<_> = resolved.selection.enabled().collect();
        assert_eq!(enabled, vec![RuleFamily::AccountAge, RuleFamily::RepoCount]);
    }

    #[test]
    fn disable_wins_over_enable_for_same_rule() {
        let overrides = Overrides {
            enable: vec!["protected-paths".to_string()],
            disable: vec!["protected-paths".to_string()],
            ..Overrides::default()
        };
        let resolved = resolve_settings(BouncerSettingsV1::default(), overrides).unwrap();
        assert!(!resolved.selection.protected_paths);
    }

    #[test]
    fn unknown_rule_is_rejected() {
        let cfg = parse_settings_toml("[rules.branch-name]\nenabled = true\n").unwrap();
        let err = resolve_settings(cfg, Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("unknown rule: branch-name"));
    }

    #[test]
    fn unknown_override_rule_is_rejected() {
        let overrides = Overrides {
            enable: vec!["account-age-min".to_string()],
            ..Overrides::default()
        };
        assert!(resolve_settings(BouncerSettingsV1::default(), overrides).is_err());
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let overrides = Overrides {
            profile: Some("paranoid".to_string()),
            ..Overrides::default()
        };
        let err = resolve_settings(BouncerSettingsV1::default(), overrides).unwrap_err();
        assert!(err.to_string().contains("unknown profile: paranoid"));
    }

    #[test]
    fn mismatched_fields_are_rejected() {
        let cfg = parse_settings_toml("[rules.protected-paths]\nthreshold = 3\n").unwrap();
        let err = resolve_settings(cfg, Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("`threshold` is not supported"));

        let cfg = parse_settings_toml("[rules.account-age]\npaths = \"a\"\n").unwrap();
        let err = resolve_settings(cfg, Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("`paths` is only supported"));
    }

    #[test]
    fn unsupported_schema_is_rejected() {
        let cfg = parse_settings_toml("schema = \"branchbouncer.settings.v9\"\n").unwrap();
        assert!(resolve_settings(cfg, Overrides::default()).is_err());

        let cfg = parse_settings_toml("schema = \"branchbouncer.settings.v1\"\n").unwrap();
        assert!(resolve_settings(cfg, Overrides::default()).is_ok());
    }

    #[test]
    fn degenerate_values_are_accepted() {
        let overrides = Overrides {
            enable: vec!["repo-count".to_string(), "protected-paths".to_string()],
            account_age_days: Some(0),
            min_changes: Some(-10),
            min_repos: Some(-1),
            blocked_paths: Some("a, a, ,".to_string()),
            ..Overrides::default()
        };
        let resolved = resolve_settings(BouncerSettingsV1::default(), overrides).unwrap();
        assert_eq!(resolved.params.min_changes, -10);
        assert_eq!(resolved.params.blocked_paths, "a, a, ,");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_settings_toml("rules = 3").is_err());
        assert!(parse_settings_toml("[rules.account-age]\nthreshold = \"x\"\n").is_err());
    }
}
