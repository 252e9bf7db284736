//! The `explain` use case: what a rule does to pull requests and how to configure it.

use branchbouncer_domain::RuleParameters;
use branchbouncer_settings::{DEFAULT_PROFILE, preset, profile_names};
use branchbouncer_types::RuleFamily;
use branchbouncer_types::explain::{self, Explanation};
use branchbouncer_types::paths::CONFIG_PATH;

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// The identifier named a rule (by rule ID or entry ID).
    Found {
        family: RuleFamily,
        explanation: Explanation,
    },
    /// Unknown identifier.
    NotFound { identifier: String },
}

/// Look up a rule by rule ID (`account-age`) or entry ID (`account-age-min`).
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match RuleFamily::lookup(identifier) {
        Some(family) => ExplainOutput::Found {
            family,
            explanation: explain::explain_family(family),
        },
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(family: RuleFamily, exp: &Explanation) -> String {
    let mut out = String::new();

    let entry = family.entry_id();
    let defaults = defaults_line(family);
    out.push_str(&format!("{} ({})\n", exp.title, family.rule_id()));
    out.push_str(&format!("Emits `{entry}` in {CONFIG_PATH}. {defaults}\n\n"));
    out.push_str(exp.description);
    out.push_str("\n\n");

    out.push_str("On a pull request:\n");
    push_indented(&mut out, exp.on_pull_request, 2);
    out.push('\n');

    out.push_str("Choosing a value:\n");
    push_indented(&mut out, exp.guidance, 2);
    out.push('\n');

    out.push_str("In branchbouncer.toml:\n");
    push_indented(&mut out, exp.example.settings, 4);
    out.push('\n');

    out.push_str(&format!("Written to {}:\n", CONFIG_PATH));
    push_indented(&mut out, exp.example.entry, 4);

    out
}

/// Format the "not found" message: every rule with the entry ID it emits.
pub fn format_not_found(identifier: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule or entry id: {}\n\n", identifier));
    out.push_str("Known rules (rule id, entry id):\n");
    for family in RuleFamily::ALL {
        let (rule, entry) = (family.rule_id(), family.entry_id());
        out.push_str(&format!("  {rule:<16} {entry}\n"));
    }

    out
}

/// "Default 730 days; on in the recommended and strict profiles."
fn defaults_line(family: RuleFamily) -> String {
    let value = preset(DEFAULT_PROFILE)
        .map(|resolved| default_value(family, &resolved.params))
        .unwrap_or_default();

    let profiles: Vec<&str> = profile_names()
        .iter()
        .copied()
        .filter(|name| preset(name).is_some_and(|r| r.selection.is_enabled(family)))
        .collect();

    let enabled_in = match profiles.as_slice() {
        [] => "off in every profile".to_string(),
        [one] => format!("on in the {one} profile"),
        many => format!("on in the {} profiles", many.join(" and ")),
    };

    format!("Default {value}; {enabled_in}.")
}

fn default_value(family: RuleFamily, params: &RuleParameters) -> String {
    match (family, params.threshold(family)) {
        (RuleFamily::AccountAge, Some(days)) => format!("{days} days"),
        (RuleFamily::PrChanges, Some(lines)) => format!("{lines} changed lines"),
        (RuleFamily::RepoCount, Some(repos)) => format!("{repos} public repositories"),
        _ => format!("paths \"{}\"", params.blocked_paths),
    }
}

fn push_indented(out: &mut String, text: &str, width: usize) {
    for line in text.lines() {
        if !line.is_empty() {
            out.push_str(&" ".repeat(width));
            out.push_str(line);
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_id_and_entry_id_find_the_same_family() {
        for family in RuleFamily::ALL {
            for id in [family.rule_id(), family.entry_id()] {
                match run_explain(id) {
                    ExplainOutput::Found { family: found, .. } => assert_eq!(found, family),
                    ExplainOutput::NotFound { .. } => panic!("{id} should be known"),
                }
            }
        }
    }

    #[test]
    fn unknown_identifier_is_not_found() {
        match run_explain("not_a_real_rule") {
            ExplainOutput::NotFound { identifier } => assert_eq!(identifier, "not_a_real_rule"),
            ExplainOutput::Found { .. } => panic!("expected NotFound"),
        }
    }

    fn explain_text(family: RuleFamily) -> String {
        format_explanation(family, &explain::explain_family(family))
    }

    #[test]
    fn explanation_shows_effect_defaults_and_snippets() {
        let text = explain_text(RuleFamily::AccountAge);
        let emits = "Emits `account-age-min` in .branchbouncer.yml.";
        let defaults = "Default 730 days; on in the recommended and strict profiles.";

        assert!(text.starts_with("Account Age (account-age)\n"));
        assert!(text.contains(emits), "{text}");
        assert!(text.contains(defaults), "{text}");
        assert!(text.contains("On a pull request:\n  The check fails"));
        assert!(text.contains("    [rules.account-age]\n"));
        assert!(text.contains("    - id: account-age-min\n"));
    }

    #[test]
    fn repo_count_is_only_on_in_strict() {
        let text = explain_text(RuleFamily::RepoCount);
        let defaults = "Default 3 public repositories; on in the strict profile.";
        assert!(text.contains(defaults), "{text}");
    }

    #[test]
    fn protected_paths_default_is_the_path_string() {
        let text = explain_text(RuleFamily::ProtectedPaths);
        let defaults = "Default paths \"package.json, .github/workflows/\"";
        assert!(text.contains(defaults), "{text}");
        assert!(text.contains("      - package.json\n"));
    }

    #[test]
    fn not_found_lists_every_rule_with_its_entry() {
        let text = format_not_found("missing");
        assert!(text.starts_with("Unknown rule or entry id: missing\n"));
        assert!(text.contains("  account-age      account-age-min\n"));
        assert!(text.contains("  protected-paths  protected-paths\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("  ")).count(), 4);
    }
}
