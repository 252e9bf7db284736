use branchbouncer_types::paths::ARTIFACT_PATHS;
use branchbouncer_types::{ConfigDocument, RuleEntry};

/// Human-readable summary of a compiled configuration, for terminal output.
pub fn render_preview(doc: &ConfigDocument) -> String {
    let mut out = String::new();

    out.push_str("BranchBouncer setup\n");
    out.push_str("===================\n\n");

    if doc.rules.is_empty() {
        out.push_str("No rules enabled; the action will accept every pull request.\n\n");
    } else {
        out.push_str(&format!("Rules ({}):\n", doc.rules.len()));
        for entry in &doc.rules {
            out.push_str(&format!("  - {}\n", describe(entry)));
        }
        out.push('\n');
    }

    out.push_str("Files:\n");
    for path in ARTIFACT_PATHS {
        out.push_str(&format!("  - {}\n", path));
    }

    out
}

fn describe(entry: &RuleEntry) -> String {
    match entry {
        RuleEntry::AccountAgeMin {
            min_account_age_days,
        } => format!(
            "{}: account older than {} days (~{} years)",
            entry.id(),
            min_account_age_days,
            approx_years(*min_account_age_days)
        ),
        RuleEntry::PrTotalChangesMin { min_total_changes } => format!(
            "{}: at least {} changed lines",
            entry.id(),
            min_total_changes
        ),
        RuleEntry::PublicRepoMin { min_repos } => {
            format!("{}: at least {} public repos", entry.id(), min_repos)
        }
        RuleEntry::ProtectedPaths { blocked_paths } if blocked_paths.is_empty() => {
            format!("{}: (no paths)", entry.id())
        }
        RuleEntry::ProtectedPaths { blocked_paths } => {
            format!("{}: {}", entry.id(), blocked_paths.join(", "))
        }
    }
}

/// Days to whole years, rounded half away from zero.
fn approx_years(days: i64) -> i64 {
    let years = days as f64 / 365.0;
    years.round() as i64
}
