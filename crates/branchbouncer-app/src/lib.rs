//! Use case orchestration for branchbouncer.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! render and bundle layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod deliver;
mod explain;
mod generate;
mod install;
mod resolve;

pub use deliver::deliver;
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use generate::{
    GenerateInput, GenerateOutput, RenderedDocuments, render_documents, run_generate,
};
pub use install::{InitOutput, RemoveOutput, run_init, run_remove};
pub use resolve::resolve_rules;
