//! Stable identifiers for rule families and generated rule entries.
//!
//! A rule ID names a family the user toggles (`account-age`). An entry ID is the `id` written
//! into the generated configuration document (`account-age-min`).

// Rule families
pub const RULE_ACCOUNT_AGE: &str = "account-age";
pub const RULE_PR_CHANGES: &str = "pr-changes";
pub const RULE_REPO_COUNT: &str = "repo-count";
pub const RULE_PROTECTED_PATHS: &str = "protected-paths";

// Entries: configuration document `rules[].id`
pub const ENTRY_ACCOUNT_AGE_MIN: &str = "account-age-min";
pub const ENTRY_PR_TOTAL_CHANGES_MIN: &str = "pr-total-changes-min";
pub const ENTRY_PUBLIC_REPO_MIN: &str = "public-repo-min";
pub const ENTRY_PROTECTED_PATHS: &str = "protected-paths";
