use crate::resolve::ResolvedSettings;
use branchbouncer_domain::{RuleParameters, RuleSelection};
use branchbouncer_types::RuleFamily;

pub const DEFAULT_PROFILE: &str = "recommended";

/// Preset profiles are opinionated defaults.
///
/// All presets share the same parameter values; they only differ in which rules start enabled.
pub fn preset(profile: &str) -> Option<ResolvedSettings> {
    let selection = match profile {
        "recommended" => RuleSelection::none()
            .with(RuleFamily::AccountAge, true)
            .with(RuleFamily::PrChanges, true),
        "strict" => RuleSelection::all(),
        "open" => RuleSelection::none(),
        _ => return None,
    };

    Some(ResolvedSettings {
        profile: profile.to_string(),
        selection,
        params: default_params(),
    })
}

pub fn profile_names() -> &'static [&'static str] {
    &["recommended", "strict", "open"]
}

fn default_params() -> RuleParameters {
    RuleParameters {
        account_age_days: 730,
        min_changes: 500,
        min_repos: 3,
        blocked_paths: "package.json, .github/workflows/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_profile_resolves() {
        for name in profile_names() {
            let resolved = preset(name).unwrap();
            assert_eq!(resolved.profile, *name);
        }
    }

    #[test]
    fn recommended_enables_account_age_and_pr_changes() {
        let resolved = preset(DEFAULT_PROFILE).unwrap();
        let enabled: Vec<_> = resolved.selection.enabled().collect();
        assert_eq!(enabled, vec![RuleFamily::AccountAge, RuleFamily::PrChanges]);
        assert_eq!(resolved.params.account_age_days, 730);
        assert_eq!(resolved.params.min_changes, 500);
    }

    #[test]
    fn unknown_profile_is_none() {
        assert!(preset("paranoid").is_none());
    }
}
