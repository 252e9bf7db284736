use crate::model::{RuleParameters, RuleSelection};
use branchbouncer_types::{ConfigDocument, RuleEntry, RuleFamily};

/// Compile a rule selection into the configuration document.
///
/// Entries follow the canonical family order. Parameters of disabled families are ignored.
pub fn compile(selection: &RuleSelection, params: &RuleParameters) -> ConfigDocument {
    let rules = selection
        .enabled()
        .map(|family| entry_for(family, params))
        .collect();

    ConfigDocument { rules }
}

fn entry_for(family: RuleFamily, params: &RuleParameters) -> RuleEntry {
    match family {
        RuleFamily::AccountAge => RuleEntry::AccountAgeMin {
            min_account_age_days: params.account_age_days,
        },
        RuleFamily::PrChanges => RuleEntry::PrTotalChangesMin {
            min_total_changes: params.min_changes,
        },
        RuleFamily::RepoCount => RuleEntry::PublicRepoMin {
            min_repos: params.min_repos,
        },
        RuleFamily::ProtectedPaths => RuleEntry::ProtectedPaths {
            blocked_paths: params.blocked_path_list(),
        },
    }
}
