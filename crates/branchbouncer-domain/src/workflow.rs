use branchbouncer_types::paths::{ACTION_REF, CHECKOUT_ACTION_REF, CONFIG_PATH, GITHUB_TOKEN_EXPR};
use branchbouncer_types::{
    Access, ActionInputs, Job, Permissions, PullRequestEvent, PullRequestTrigger, Step, Triggers,
    WorkflowDocument,
};
use std::collections::BTreeMap;

pub const WORKFLOW_NAME: &str = "BranchBouncer";
pub const JOB_NAME: &str = "validate-pr";
pub const RUN_STEP_NAME: &str = "Run BranchBouncer";
pub const RUNNER: &str = "ubuntu-latest";

/// Build the workflow that runs the rule-evaluation action on pull requests.
///
/// Constant output; the embedded configuration path is `paths::CONFIG_PATH`.
pub fn template() -> WorkflowDocument {
    let steps = vec![
        Step {
            name: None,
            uses: CHECKOUT_ACTION_REF.to_string(),
            with: None,
        },
        Step {
            name: Some(RUN_STEP_NAME.to_string()),
            uses: ACTION_REF.to_string(),
            with: Some(ActionInputs {
                github_token: GITHUB_TOKEN_EXPR.to_string(),
                config_path: CONFIG_PATH.to_string(),
            }),
        },
    ];

    let mut jobs = BTreeMap::new();
    jobs.insert(
        JOB_NAME.to_string(),
        Job {
            runs_on: RUNNER.to_string(),
            steps,
        },
    );

    WorkflowDocument {
        name: WORKFLOW_NAME.to_string(),
        permissions: Permissions {
            contents: Access::Read,
            pull_requests: Access::Read,
            checks: Access::Write,
        },
        on: Triggers {
            pull_request: PullRequestTrigger {
                types: vec![
                    PullRequestEvent::Opened,
                    PullRequestEvent::Reopened,
                    PullRequestEvent::Synchronize,
                ],
            },
        },
        jobs,
    }
}
