use crate::ids;
use std::fmt;

/// One of the four supported protection checks.
///
/// `ALL` is the canonical order: the configuration document always lists enabled entries in
/// this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleFamily {
    AccountAge,
    PrChanges,
    RepoCount,
    ProtectedPaths,
}

impl RuleFamily {
    pub const ALL: [RuleFamily; 4] = [
        RuleFamily::AccountAge,
        RuleFamily::PrChanges,
        RuleFamily::RepoCount,
        RuleFamily::ProtectedPaths,
    ];

    /// ID used for toggling the family (`account-age`).
    pub fn rule_id(self) -> &'static str {
        match self {
            RuleFamily::AccountAge => ids::RULE_ACCOUNT_AGE,
            RuleFamily::PrChanges => ids::RULE_PR_CHANGES,
            RuleFamily::RepoCount => ids::RULE_REPO_COUNT,
            RuleFamily::ProtectedPaths => ids::RULE_PROTECTED_PATHS,
        }
    }

    /// ID written into the configuration document (`account-age-min`).
    pub fn entry_id(self) -> &'static str {
        match self {
            RuleFamily::AccountAge => ids::ENTRY_ACCOUNT_AGE_MIN,
            RuleFamily::PrChanges => ids::ENTRY_PR_TOTAL_CHANGES_MIN,
            RuleFamily::RepoCount => ids::ENTRY_PUBLIC_REPO_MIN,
            RuleFamily::ProtectedPaths => ids::ENTRY_PROTECTED_PATHS,
        }
    }

    pub fn from_rule_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.rule_id() == id)
    }

    pub fn from_entry_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.entry_id() == id)
    }

    /// Accepts either a rule ID or an entry ID.
    pub fn lookup(id: &str) -> Option<Self> {
        Self::from_rule_id(id).or_else(|| Self::from_entry_id(id))
    }

    /// Whether the family is parameterized by a single integer threshold.
    pub fn is_threshold(self) -> bool {
        !matches!(self, RuleFamily::ProtectedPaths)
    }
}

impl fmt::Display for RuleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule_id())
    }
}
