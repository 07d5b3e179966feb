//! Todoist exporter CLI library
//!
//! Flag parsing, kind selection and the export driver used by the
//! `todoist-exporter` binary.

pub mod logging;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use todoist_export_common::{CONFIG_FILENAME, DEFAULT_OUTPUT_DIR, TOKEN_FIELD};
use todoist_export_core::{
    ExportKind, ExportSummary, Exporter, ExporterConfig, RecordSource, TodoistClient,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "todoist-exporter")]
#[command(about = "Export Todoist data to CSV files.")]
#[command(version)]
pub struct Cli {
    /// Export projects
    #[arg(long)]
    pub projects: bool,

    /// Export active tasks
    #[arg(long)]
    pub tasks: bool,

    /// Export completed tasks
    #[arg(long = "completed_tasks", alias = "completed-tasks")]
    pub completed_tasks: bool,

    /// Export labels
    #[arg(long)]
    pub labels: bool,

    /// Export sections
    #[arg(long)]
    pub sections: bool,

    /// Export comments
    #[arg(long)]
    pub comments: bool,

    /// Export all data types
    #[arg(long)]
    pub all: bool,

    /// Directory to save CSV files
    #[arg(
        long = "output_dir",
        alias = "output-dir",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// JSON file holding the API token
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILENAME)]
    pub config: PathBuf,
}

impl Cli {
    /// Whether a kind was requested by its own flag
    #[must_use]
    pub const fn is_flagged(&self, kind: ExportKind) -> bool {
        match kind {
            ExportKind::Projects => self.projects,
            ExportKind::Tasks => self.tasks,
            ExportKind::CompletedTasks => self.completed_tasks,
            ExportKind::Labels => self.labels,
            ExportKind::Sections => self.sections,
            ExportKind::Comments => self.comments,
        }
    }

    /// True when at least one kind flag (not counting `--all`) was given
    #[must_use]
    pub fn has_kind_flags(&self) -> bool {
        ExportKind::ALL.iter().any(|kind| self.is_flagged(*kind))
    }

    /// Kinds to export, in run order.
    ///
    /// `--all`, or no kind flag at all, selects every kind. Flags such as
    /// `--output_dir` or `--verbose` do not count as a selection.
    #[must_use]
    pub fn selected_kinds(&self) -> Vec<ExportKind> {
        if self.all || !self.has_kind_flags() {
            return ExportKind::ALL.to_vec();
        }
        ExportKind::ALL
            .into_iter()
            .filter(|kind| self.is_flagged(*kind))
            .collect()
    }
}

/// Resolve the credential, then export the selected kinds from Todoist.
///
/// Only startup problems are errors: a missing or malformed config file, or
/// an output directory that cannot be created. Failures of individual
/// exports are logged and reported in the returned summary.
///
/// # Errors
/// Returns an error if the credential cannot be resolved or the exporter
/// cannot be set up
pub fn run(cli: &Cli) -> anyhow::Result<ExportSummary> {
    let config = ExporterConfig::from_file(&cli.config).with_context(|| {
        format!(
            "{} file not found or missing {TOKEN_FIELD} entry",
            cli.config.display()
        )
    })?;
    let client = TodoistClient::new(config.credential).context("Failed to create Todoist client")?;
    run_with_source(cli, client)
}

/// Export the selected kinds from an already constructed record source
///
/// # Errors
/// Returns an error if the output directory cannot be created
pub fn run_with_source<S: RecordSource>(cli: &Cli, source: S) -> anyhow::Result<ExportSummary> {
    let exporter = Exporter::new(source, &cli.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            cli.output_dir.display()
        )
    })?;

    if !cli.all && !cli.has_kind_flags() {
        info!("No specific export flags provided, exporting all data.");
    }

    Ok(exporter.export_all(&cli.selected_kinds()))
}
