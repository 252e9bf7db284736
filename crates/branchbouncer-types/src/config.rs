use crate::family::RuleFamily;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The configuration document read by the external rule-evaluation action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigDocument {
    pub rules: Vec<RuleEntry>,
}

/// One enabled rule, tagged by its entry ID.
///
/// Each variant carries exactly the fields its rule family needs. Numeric thresholds are
/// signed so that degenerate values reach the document unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "id")]
pub enum RuleEntry {
    #[serde(rename = "account-age-min", rename_all = "camelCase")]
    AccountAgeMin { min_account_age_days: i64 },

    #[serde(rename = "pr-total-changes-min", rename_all = "camelCase")]
    PrTotalChangesMin { min_total_changes: i64 },

    #[serde(rename = "public-repo-min", rename_all = "camelCase")]
    PublicRepoMin { min_repos: i64 },

    #[serde(rename = "protected-paths", rename_all = "camelCase")]
    ProtectedPaths { blocked_paths: Vec<String> },
}

impl RuleEntry {
    pub fn family(&self) -> RuleFamily {
        match self {
            RuleEntry::AccountAgeMin { .. } => RuleFamily::AccountAge,
            RuleEntry::PrTotalChangesMin { .. } => RuleFamily::PrChanges,
            RuleEntry::PublicRepoMin { .. } => RuleFamily::RepoCount,
            RuleEntry::ProtectedPaths { .. } => RuleFamily::ProtectedPaths,
        }
    }

    pub fn id(&self) -> &'static str {
        self.family().entry_id()
    }
}

impl ConfigDocument {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn families(&self) -> impl Iterator<Item = RuleFamily> + '_ {
        self.rules.iter().map(RuleEntry::family)
    }
}
