//! Explain registry for rule families.
//!
//! Maps rule IDs and entry IDs to human-readable explanations with tuning guidance.

use crate::family::RuleFamily;
use crate::ids;

/// Explanation entry for a rule family.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule.
    pub title: &'static str,
    /// What the rule checks on each pull request and why it exists.
    pub description: &'static str,
    /// When the generated check fails a pull request.
    pub on_pull_request: &'static str,
    /// How to pick a parameter value.
    pub guidance: &'static str,
    /// Settings snippet and the entry it compiles to.
    pub example: ExampleConfig,
}

/// A settings snippet and the configuration entry it produces.
#[derive(Debug, Clone)]
pub struct ExampleConfig {
    /// `branchbouncer.toml` fragment enabling the rule.
    pub settings: &'static str,
    /// Resulting `.branchbouncer.yml` entry.
    pub entry: &'static str,
}

/// Look up an explanation by rule ID or entry ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    RuleFamily::lookup(identifier).map(explain_family)
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_ACCOUNT_AGE,
        ids::RULE_PR_CHANGES,
        ids::RULE_REPO_COUNT,
        ids::RULE_PROTECTED_PATHS,
    ]
}

/// List all known entry IDs.
pub fn all_entry_ids() -> &'static [&'static str] {
    &[
        ids::ENTRY_ACCOUNT_AGE_MIN,
        ids::ENTRY_PR_TOTAL_CHANGES_MIN,
        ids::ENTRY_PUBLIC_REPO_MIN,
        ids::ENTRY_PROTECTED_PATHS,
    ]
}

pub fn explain_family(family: RuleFamily) -> Explanation {
    match family {
        RuleFamily::AccountAge => explain_account_age(),
        RuleFamily::PrChanges => explain_pr_changes(),
        RuleFamily::RepoCount => explain_repo_count(),
        RuleFamily::ProtectedPaths => explain_protected_paths(),
    }
}

fn explain_account_age() -> Explanation {
    Explanation {
        title: "Account Age",
        description: "\
Requires pull request authors to have GitHub accounts older than a number of days.

Freshly created accounts are the cheapest way to send spam or throwaway malicious
pull requests. Gating on account age filters most of them out before review.",
        on_pull_request: "\
The check fails when the author's account is younger than `minAccountAgeDays` days.",
        guidance: "\
730 days (about 2 years) is the recommended starting point. Lower it for projects
that want to welcome first-time GitHub users.",
        example: ExampleConfig {
            settings: r#"[rules.account-age]
enabled = true
threshold = 730"#,
            entry: r#"- id: account-age-min
  minAccountAgeDays: 730"#,
        },
    }
}

fn explain_pr_changes() -> Explanation {
    Explanation {
        title: "PR Total Changes",
        description: "\
Checks the size of a pull request, counted as added plus removed lines.

Very small drive-by pull requests (typo farming, whitespace edits) and hidden changes
buried in noise are both easier to spot with a change threshold.",
        on_pull_request: "\
The check fails when added plus removed lines across all files are fewer than
`minTotalChanges`.",
        guidance: "\
500 lines is the default threshold. Pick a value that matches the size of pull
requests your maintainers actually review.",
        example: ExampleConfig {
            settings: r#"[rules.pr-changes]
enabled = true
threshold = 500"#,
            entry: r#"- id: pr-total-changes-min
  minTotalChanges: 500"#,
        },
    }
}

fn explain_repo_count() -> Explanation {
    Explanation {
        title: "Public Repository Count",
        description: "\
Requires pull request authors to own a minimum number of public repositories.

Contributors with some public GitHub activity are less likely to be spam accounts.",
        on_pull_request: "\
The check fails when the author owns fewer than `minRepos` public repositories.",
        guidance: "\
3 repositories is the default. Use 0 or disable the rule for projects that expect
contributions from people who mostly work in private repositories.",
        example: ExampleConfig {
            settings: r#"[rules.repo-count]
enabled = true
threshold = 3"#,
            entry: r#"- id: public-repo-min
  minRepos: 3"#,
        },
    }
}

fn explain_protected_paths() -> Explanation {
    Explanation {
        title: "Protected Paths",
        description: "\
Blocks pull requests that touch critical files or directories.

Workflow definitions, dependency manifests and environment files are common targets
for supply chain attacks through pull requests.",
        on_pull_request: "\
The check fails when any changed file matches an entry of `blockedPaths`. An entry
ending in `/` matches every file below that directory.",
        guidance: "\
List paths as one comma-separated string. Entries are trimmed, empty entries are
dropped and the order is kept. A trailing `/` marks a directory prefix.",
        example: ExampleConfig {
            settings: r#"[rules.protected-paths]
enabled = true
paths = "package.json, .github/workflows/""#,
            entry: r#"- id: protected-paths
  blockedPaths:
  - package.json
  - .github/workflows/"#,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_rule_id() {
        assert!(lookup_explanation(ids::RULE_ACCOUNT_AGE).is_some());
        assert!(lookup_explanation(ids::RULE_PR_CHANGES).is_some());
        assert!(lookup_explanation(ids::RULE_REPO_COUNT).is_some());
        assert!(lookup_explanation(ids::RULE_PROTECTED_PATHS).is_some());
    }

    #[test]
    fn lookup_by_entry_id() {
        assert!(lookup_explanation(ids::ENTRY_ACCOUNT_AGE_MIN).is_some());
        assert!(lookup_explanation(ids::ENTRY_PR_TOTAL_CHANGES_MIN).is_some());
        assert!(lookup_explanation(ids::ENTRY_PUBLIC_REPO_MIN).is_some());
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_explanation("account_age").is_none());
        assert!(lookup_explanation("").is_none());
    }

    #[test]
    fn rule_and_entry_ids_resolve_to_same_title() {
        for (rule, entry) in all_rule_ids().iter().zip(all_entry_ids()) {
            let a = lookup_explanation(rule).unwrap();
            let b = lookup_explanation(entry).unwrap();
            assert_eq!(a.title, b.title);
        }
    }

    #[test]
    fn example_entries_start_with_their_entry_id() {
        for family in RuleFamily::ALL {
            let exp = explain_family(family);
            let expected = format!("- id: {}", family.entry_id());
            assert!(exp.example.entry.starts_with(&expected));
            let section = format!("[rules.{}]", family.rule_id());
            assert!(exp.example.settings.starts_with(&section));
        }
    }
}
