//! Canonical names and paths of the generated artifacts.
//!
//! The workflow document embeds `CONFIG_PATH`, and the packager writes the configuration
//! document to the same path. Both sides read it from here.

pub const TOOL_NAME: &str = "branchbouncer";

/// Directory holding the automation platform's files.
pub const AUTOMATION_DIR: &str = ".github";

/// Repo-relative path of the configuration document.
pub const CONFIG_PATH: &str = ".branchbouncer.yml";

/// Repo-relative path of the workflow document.
pub const WORKFLOW_PATH: &str = ".github/workflows/branchbouncer.yml";

/// Every path the generated bundle contains, in write order.
pub const ARTIFACT_PATHS: [&str; 2] = [CONFIG_PATH, WORKFLOW_PATH];

/// Suggested download file stem; the archive format adds the extension.
pub const DOWNLOAD_STEM: &str = "branchbouncer-setup";

/// External action evaluating the rules on each pull request.
pub const ACTION_REF: &str = "SidhantCodes/branchbouncer@v1";

pub const CHECKOUT_ACTION_REF: &str = "actions/checkout@v4";

/// Expression the workflow passes as the action's token input.
pub const GITHUB_TOKEN_EXPR: &str = "${{ secrets.GITHUB_TOKEN }}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_is_dotted_tool_name() {
        assert_eq!(CONFIG_PATH, format!(".{TOOL_NAME}.yml"));
    }

    #[test]
    fn workflow_path_lives_under_automation_dir() {
        assert_eq!(
            WORKFLOW_PATH,
            format!("{AUTOMATION_DIR}/workflows/{TOOL_NAME}.yml")
        );
    }

    #[test]
    fn artifact_paths_are_relative_and_distinct() {
        assert_ne!(ARTIFACT_PATHS[0], ARTIFACT_PATHS[1]);
        for path in ARTIFACT_PATHS {
            assert!(!path.starts_with('/'));
            assert!(!path.ends_with('/'));
        }
    }
}
