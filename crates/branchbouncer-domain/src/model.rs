use branchbouncer_types::RuleFamily;

/// Which rule families are enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuleSelection {
    pub account_age: bool,
    pub pr_changes: bool,
    pub repo_count: bool,
    pub protected_paths: bool,
}

impl RuleSelection {
    pub fn all() -> Self {
        Self {
            account_age: true,
            pr_changes: true,
            repo_count: true,
            protected_paths: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, family: RuleFamily) -> bool {
        match family {
            RuleFamily::AccountAge => self.account_age,
            RuleFamily::PrChanges => self.pr_changes,
            RuleFamily::RepoCount => self.repo_count,
            RuleFamily::ProtectedPaths => self.protected_paths,
        }
    }

    pub fn set(&mut self, family: RuleFamily, enabled: bool) {
        let flag = match family {
            RuleFamily::AccountAge => &mut self.account_age,
            RuleFamily::PrChanges => &mut self.pr_changes,
            RuleFamily::RepoCount => &mut self.repo_count,
            RuleFamily::ProtectedPaths => &mut self.protected_paths,
        };
        *flag = enabled;
    }

    pub fn with(mut self, family: RuleFamily, enabled: bool) -> Self {
        self.set(family, enabled);
        self
    }

    /// Enabled families in canonical order.
    pub fn enabled(&self) -> impl Iterator<Item = RuleFamily> + '_ {
        RuleFamily::ALL
            .into_iter()
            .filter(move |family| self.is_enabled(*family))
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }
}

/// Tunable values per rule family.
///
/// Values only matter for enabled families; nothing here is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleParameters {
    /// Minimum account age, in days.
    pub account_age_days: i64,
    /// Minimum added+removed lines.
    pub min_changes: i64,
    /// Minimum number of public repositories.
    pub min_repos: i64,
    /// Comma-separated blocked paths, as typed by the user.
    pub blocked_paths: String,
}

impl RuleParameters {
    pub fn blocked_path_list(&self) -> Vec<String> {
        parse_blocked_paths(&self.blocked_paths)
    }

    /// Threshold for a numeric family; `None` for protected paths.
    pub fn threshold(&self, family: RuleFamily) -> Option<i64> {
        match family {
            RuleFamily::AccountAge => Some(self.account_age_days),
            RuleFamily::PrChanges => Some(self.min_changes),
            RuleFamily::RepoCount => Some(self.min_repos),
            RuleFamily::ProtectedPaths => None,
        }
    }

    pub fn set_threshold(&mut self, family: RuleFamily, value: i64) {
        match family {
            RuleFamily::AccountAge => self.account_age_days = value,
            RuleFamily::PrChanges => self.min_changes = value,
            RuleFamily::RepoCount => self.min_repos = value,
            RuleFamily::ProtectedPaths => {}
        }
    }
}

/// Split a comma-separated path list.
///
/// Entries are trimmed and empty entries dropped. Order and duplicates are kept.
pub fn parse_blocked_paths(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}
