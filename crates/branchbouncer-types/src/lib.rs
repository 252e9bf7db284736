//! Stable DTOs and IDs used across the branchbouncer workspace.
//!
//! This crate is intentionally boring:
//! - rule family IDs and generated entry IDs
//! - canonical artifact paths shared by the templater and the packager
//! - data types for the emitted configuration and workflow documents
//! - explain registry for rule guidance

#![forbid(unsafe_code)]

pub mod config;
pub mod explain;
pub mod family;
pub mod ids;
pub mod paths;
pub mod workflow;

pub use config::{ConfigDocument, RuleEntry};
pub use explain::{ExampleConfig, Explanation, lookup_explanation};
pub use family::RuleFamily;
pub use workflow::{
    Access, ActionInputs, Job, Permissions, PullRequestEvent, PullRequestTrigger, Step, Triggers,
    WorkflowDocument,
};
