use branchbouncer_types::{ConfigDocument, WorkflowDocument};

/// Plain scalars that YAML 1.1 readers resolve to booleans. serde_yaml only quotes the
/// YAML 1.2 forms, so these are quoted after serialization.
const YAML11_BOOLS: [&str; 8] = ["y", "yes", "n", "no", "true", "false", "on", "off"];

/// Serialize the configuration document.
///
/// Equal documents always render to identical text. Blocked paths that a YAML 1.1 reader
/// would take for booleans (`yes`, `off`, ...) are single-quoted.
pub fn render_config_yaml(doc: &ConfigDocument) -> Result<String, serde_yaml::Error> {
    let text = serde_yaml::to_string(doc)?;
    Ok(quote_yaml11_bools(&text))
}

pub fn render_workflow_yaml(doc: &WorkflowDocument) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(doc)
}

// Rule entries are always mappings (`- id: ...`), so the only plain `- scalar` items in a
// configuration document are blocked paths.
fn quote_yaml11_bools(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        let body = line.strip_suffix('\n').unwrap_or(line);
        let item = body.trim_start();
        let indent = &body[..body.len() - item.len()];

        match item.strip_prefix("- ") {
            Some(scalar) if is_yaml11_bool(scalar) => {
                out.push_str(indent);
                out.push_str("- '");
                out.push_str(scalar);
                out.push('\'');
                if line.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ => out.push_str(line),
        }
    }

    out
}

fn is_yaml11_bool(scalar: &str) -> bool {
    YAML11_BOOLS
        .iter()
        .any(|word| scalar.eq_ignore_ascii_case(word))
}
