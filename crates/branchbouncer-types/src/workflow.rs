//! Workflow document DTOs.
//!
//! The shape is fixed: a name, permission grants, one pull request trigger and jobs made of
//! steps. Field order here is the order keys are written.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDocument {
    pub name: String,
    pub permissions: Permissions,
    pub on: Triggers,
    pub jobs: BTreeMap<String, Job>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Read,
    Write,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub contents: Access,
    #[serde(rename = "pull-requests")]
    pub pull_requests: Access,
    pub checks: Access,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triggers {
    pub pull_request: PullRequestTrigger,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestTrigger {
    pub types: Vec<PullRequestEvent>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestEvent {
    Opened,
    Reopened,
    Synchronize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "runs-on")]
    pub runs_on: String,
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub uses: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with: Option<ActionInputs>,
}

/// Inputs of the rule-evaluation action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionInputs {
    pub github_token: String,
    pub config_path: String,
}

impl WorkflowDocument {
    /// Configuration path handed to the first step that has action inputs.
    pub fn config_path(&self) -> Option<&str> {
        self.jobs
            .values()
            .flat_map(|job| job.steps.iter())
            .find_map(|step| step.with.as_ref())
            .map(|inputs| inputs.config_path.as_str())
    }
}
