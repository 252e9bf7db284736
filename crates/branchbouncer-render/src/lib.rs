//! Rendering utilities for the generated artifacts (YAML documents, terminal preview).

#![forbid(unsafe_code)]

mod preview;
mod yaml;

pub use preview::render_preview;
pub use yaml::{render_config_yaml, render_workflow_yaml};
