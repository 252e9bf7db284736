//! Pure rule compilation (no IO).
//!
//! Input: a rule selection and its parameters, constructed elsewhere.
//! Output: the configuration document and the workflow document that applies it.

#![forbid(unsafe_code)]

pub mod model;

mod compile;
mod workflow;

#[cfg(test)]
mod proptest;

pub use compile::compile;
pub use model::{RuleParameters, RuleSelection, parse_blocked_paths};
pub use workflow::{JOB_NAME, RUN_STEP_NAME, RUNNER, WORKFLOW_NAME, template};
