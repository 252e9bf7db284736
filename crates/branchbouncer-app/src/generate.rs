//! The `generate` use case: rule selection -> documents -> archive.

use anyhow::Context;
use branchbouncer_bundle::{Archive, ArchiveFormat};
use branchbouncer_domain::{RuleParameters, RuleSelection, compile, template};
use branchbouncer_render::{render_config_yaml, render_workflow_yaml};
use branchbouncer_types::ConfigDocument;

/// Both documents, compiled and serialized.
#[derive(Clone, Debug)]
pub struct RenderedDocuments {
    pub config: ConfigDocument,
    pub config_yaml: String,
    pub workflow_yaml: String,
}

/// Compile the selection and template the workflow, then serialize both.
pub fn render_documents(
    selection: &RuleSelection,
    params: &RuleParameters,
) -> anyhow::Result<RenderedDocuments> {
    let config = compile(selection, params);
    let config_yaml = render_config_yaml(&config).context("serialize config document")?;
    let workflow_yaml = render_workflow_yaml(&template()).context("serialize workflow document")?;

    Ok(RenderedDocuments {
        config,
        config_yaml,
        workflow_yaml,
    })
}

#[derive(Clone, Debug)]
pub struct GenerateInput<'a> {
    pub selection: &'a RuleSelection,
    pub params: &'a RuleParameters,
    pub format: ArchiveFormat,
}

#[derive(Clone, Debug)]
pub struct GenerateOutput {
    pub documents: RenderedDocuments,
    pub archive: Archive,
}

pub fn run_generate(input: GenerateInput<'_>) -> anyhow::Result<GenerateOutput> {
    let documents = render_documents(input.selection, input.params)?;

    // Both documents exist before packaging starts.
    let archive = branchbouncer_bundle::pack_with(
        input.format,
        &documents.config_yaml,
        &documents.workflow_yaml,
    )
    .context("package setup archive")?;

    tracing::debug!(
        format = %input.format,
        rules = documents.config.rules.len(),
        bytes = archive.len(),
        "generated setup archive"
    );

    Ok(GenerateOutput { documents, archive })
}
