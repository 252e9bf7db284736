//! CLI entry point for branchbouncer.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `branchbouncer-app` crate.

use anyhow::Context;
use branchbouncer_app::{
    ExplainOutput, GenerateInput, deliver, format_explanation, format_not_found, render_documents,
    resolve_rules, run_explain, run_generate, run_init, run_remove,
};
use branchbouncer_bundle::ArchiveFormat;
use branchbouncer_render::render_preview;
use branchbouncer_settings::{Overrides, ResolvedSettings};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "branchbouncer",
    version,
    about = "Generate BranchBouncer pull request protection setups"
)]
struct Cli {
    /// Path to the settings TOML. A missing file means preset defaults.
    #[arg(long, global = true, default_value = "branchbouncer.toml")]
    settings: Utf8PathBuf,

    /// Override profile (recommended|strict|open).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Enable a rule (account-age|pr-changes|repo-count|protected-paths). Repeatable.
    #[arg(long, global = true, value_name = "RULE")]
    enable: Vec<String>,

    /// Disable a rule. Repeatable; applied after --enable.
    #[arg(long, global = true, value_name = "RULE")]
    disable: Vec<String>,

    /// Minimum account age in days.
    #[arg(long, global = true, allow_negative_numbers = true)]
    account_age_days: Option<i64>,

    /// Minimum added+removed lines per pull request.
    #[arg(long, global = true, allow_negative_numbers = true)]
    min_changes: Option<i64>,

    /// Minimum number of public repositories.
    #[arg(long, global = true, allow_negative_numbers = true)]
    min_repos: Option<i64>,

    /// Comma-separated blocked paths (e.g. "package.json, .github/workflows/").
    #[arg(long, global = true)]
    blocked_paths: Option<String>,

    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the setup archive and save it to disk.
    Generate {
        /// Directory to write the archive into.
        #[arg(long, default_value = ".")]
        out_dir: Utf8PathBuf,

        /// Archive file name (defaults to branchbouncer-setup.<ext>).
        #[arg(long)]
        name: Option<String>,

        /// Archive format (zip or tar-gz).
        #[arg(long, default_value = "zip")]
        format: ArchiveFormat,
    },

    /// Write the configuration and workflow files directly into a repository.
    Init {
        /// Repository root.
        #[arg(long, default_value = ".")]
        repo_root: Utf8PathBuf,

        /// Overwrite existing files.
        #[arg(long)]
        force: bool,
    },

    /// Remove the generated files from a repository.
    #[command(visible_alias = "rm")]
    RemoveProtection {
        /// Repository root.
        #[arg(long, default_value = ".")]
        repo_root: Utf8PathBuf,
    },

    /// Print the generated documents to stdout.
    Print {
        /// Print only one document.
        #[arg(long, value_enum)]
        only: Option<Document>,
    },

    /// Explain a rule id or entry id with tuning guidance.
    Explain {
        /// The rule (e.g., "account-age") or entry id (e.g., "account-age-min") to explain.
        identifier: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Document {
    Config,
    Workflow,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("branchbouncer error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.cmd {
        Commands::Explain { ref identifier } => cmd_explain(identifier),
        Commands::Generate {
            ref out_dir,
            ref name,
            format,
        } => cmd_generate(&cli, out_dir, name.as_deref(), format),
        Commands::Init {
            ref repo_root,
            force,
        } => cmd_init(&cli, repo_root, force),
        Commands::RemoveProtection { ref repo_root } => cmd_remove(repo_root),
        Commands::Print { only } => cmd_print(&cli, only),
    }
}

fn resolve(cli: &Cli) -> anyhow::Result<ResolvedSettings> {
    let settings_text = read_settings(&cli.settings)?;

    let overrides = Overrides {
        profile: cli.profile.clone(),
        enable: cli.enable.clone(),
        disable: cli.disable.clone(),
        account_age_days: cli.account_age_days,
        min_changes: cli.min_changes,
        min_repos: cli.min_repos,
        blocked_paths: cli.blocked_paths.clone(),
    };

    resolve_rules(&settings_text, overrides).with_context(|| format!("settings: {}", cli.settings))
}

fn read_settings(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        tracing::debug!(path = %path, "no settings file; using preset defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read settings: {}", path))
}

fn cmd_generate(
    cli: &Cli,
    out_dir: &Utf8Path,
    name: Option<&str>,
    format: ArchiveFormat,
) -> anyhow::Result<()> {
    let resolved = resolve(cli)?;
    let output = run_generate(GenerateInput {
        selection: &resolved.selection,
        params: &resolved.params,
        format,
    })?;

    let file_name = name
        .map(str::to_string)
        .unwrap_or_else(|| format.download_name());
    let written = deliver(&output.archive, out_dir, &file_name).context("save archive")?;

    print!("{}", render_preview(&output.documents.config));
    println!("\nArchive: {}", written);
    Ok(())
}

fn cmd_init(cli: &Cli, repo_root: &Utf8Path, force: bool) -> anyhow::Result<()> {
    let resolved = resolve(cli)?;
    let documents = render_documents(&resolved.selection, &resolved.params)?;
    let output = run_init(repo_root, &documents, force)?;

    print!("{}", render_preview(&documents.config));
    println!();
    for path in &output.written {
        println!("wrote {}", relative_to(repo_root, path));
    }
    println!("\nNext: commit both files and push to enable the workflow.");
    Ok(())
}

fn cmd_remove(repo_root: &Utf8Path) -> anyhow::Result<()> {
    let output = run_remove(repo_root)?;

    for path in &output.removed {
        println!("removed {}", relative_to(repo_root, path));
    }
    for path in &output.missing {
        println!("not found {}", relative_to(repo_root, path));
    }
    if !output.removed.is_empty() {
        println!("\nCommit the deletion to turn protection off.");
    }
    Ok(())
}

fn relative_to<'a>(repo_root: &Utf8Path, path: &'a Utf8Path) -> &'a Utf8Path {
    path.strip_prefix(repo_root).unwrap_or(path)
}

fn cmd_print(cli: &Cli, only: Option<Document>) -> anyhow::Result<()> {
    let resolved = resolve(cli)?;
    let documents = render_documents(&resolved.selection, &resolved.params)?;

    match only {
        Some(Document::Config) => print!("{}", documents.config_yaml),
        Some(Document::Workflow) => print!("{}", documents.workflow_yaml),
        None => {
            println!("# {}", branchbouncer_types::paths::CONFIG_PATH);
            print!("{}", documents.config_yaml);
            println!("---");
            println!("# {}", branchbouncer_types::paths::WORKFLOW_PATH);
            print!("{}", documents.workflow_yaml);
        }
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found {
            family,
            explanation,
        } => {
            print!("{}", format_explanation(family, &explanation));
            Ok(())
        }
        ExplainOutput::NotFound { identifier } => {
            eprint!("{}", format_not_found(&identifier));
            std::process::exit(1);
        }
    }
}
