use crate::resolve::ResolvedSettings;
use branchbouncer_types::RuleFamily;
use std::collections::BTreeSet;

/// A non-fatal remark about a resolved rule value.
///
/// Advisories never block generation: degenerate values are written to the configuration
/// document unchanged and left to the rule-evaluation action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advisory {
    pub family: RuleFamily,
    pub message: String,
}

/// Advisories for enabled rules only. Disabled rules never reach the document.
pub fn advisories(resolved: &ResolvedSettings) -> Vec<Advisory> {
    let mut out = Vec::new();

    for family in resolved.selection.enabled() {
        match family {
            RuleFamily::AccountAge | RuleFamily::PrChanges => {
                if let Some(v) = resolved.params.threshold(family).filter(|v| *v <= 0) {
                    out.push(Advisory {
                        family,
                        message: format!("threshold {v} is not positive"),
                    });
                }
            }
            RuleFamily::RepoCount => {
                if let Some(v) = resolved.params.threshold(family).filter(|v| *v < 0) {
                    out.push(Advisory {
                        family,
                        message: format!("threshold {v} is negative"),
                    });
                }
            }
            RuleFamily::ProtectedPaths => {
                let paths = resolved.params.blocked_path_list();
                if paths.is_empty() {
                    out.push(Advisory {
                        family,
                        message: "no blocked paths; the rule blocks nothing".to_string(),
                    });
                }
                let mut seen = BTreeSet::new();
                for path in &paths {
                    if !seen.insert(path.as_str()) {
                        out.push(Advisory {
                            family,
                            message: format!("duplicate blocked path: {path}"),
                        });
                    }
                }
            }
        }
    }

    out
}
