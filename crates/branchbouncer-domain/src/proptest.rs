//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - entry count and canonical ordering of compiled documents
//! - determinism of compilation
//! - blocked path parsing

use crate::compile::compile;
use crate::model::{RuleParameters, RuleSelection, parse_blocked_paths};
use branchbouncer_types::RuleFamily;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_selection() -> impl Strategy<Value = RuleSelection> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(account_age, pr_changes, repo_count, protected_paths)| RuleSelection {
            account_age,
            pr_changes,
            repo_count,
            protected_paths,
        },
    )
}

/// Path-ish segments without commas.
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ ]{0,2}[a-z./_-]{0,12}[ ]{0,2}").unwrap()
}

fn arb_blocked_paths() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 0..6).prop_map(|segments| segments.join(","))
}

fn arb_params() -> impl Strategy<Value = RuleParameters> {
    (
        any::<i64>(),
        any::<i64>(),
        any::<i64>(),
        arb_blocked_paths(),
    )
        .prop_map(
            |(account_age_days, min_changes, min_repos, blocked_paths)| RuleParameters {
                account_age_days,
                min_changes,
                min_repos,
                blocked_paths,
            },
        )
}

/// Toggle sequence: the final state of each flag is what matters, not the order of toggles.
fn arb_toggles() -> impl Strategy<Value = Vec<(usize, bool)>> {
    prop::collection::vec((0usize..4, any::<bool>()), 0..16)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn entry_count_matches_enabled_flags(selection in arb_selection(), params in arb_params()) {
        let doc = compile(&selection, &params);
        prop_assert_eq!(doc.rules.len(), selection.enabled_count());
    }

    #[test]
    fn entries_follow_canonical_family_order(
        toggles in arb_toggles(),
        params in arb_params(),
    ) {
        let mut selection = RuleSelection::none();
        for (idx, enabled) in toggles {
            selection.set(RuleFamily::ALL[idx], enabled);
        }

        let doc = compile(&selection, &params);
        let families: Vec<RuleFamily> = doc.families().collect();
        let mut sorted = families.clone();
        sorted.sort();
        prop_assert_eq!(&families, &sorted);

        let expected: Vec<RuleFamily> = selection.enabled().collect();
        prop_assert_eq!(families, expected);
    }

    #[test]
    fn compile_is_deterministic(selection in arb_selection(), params in arb_params()) {
        prop_assert_eq!(compile(&selection, &params), compile(&selection, &params));
    }

    #[test]
    fn parsed_paths_are_trimmed_and_non_empty(input in arb_blocked_paths()) {
        for path in parse_blocked_paths(&input) {
            prop_assert!(!path.is_empty());
            prop_assert_eq!(path.trim(), path.as_str());
            prop_assert!(!path.contains(','));
        }
    }

    #[test]
    fn parsed_paths_preserve_order(input in arb_blocked_paths()) {
        let expected: Vec<String> = input
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        prop_assert_eq!(parse_blocked_paths(&input), expected);
    }

    #[test]
    fn no_rules_without_flags(params in arb_params()) {
        prop_assert!(compile(&RuleSelection::none(), &params).is_empty());
    }
}
