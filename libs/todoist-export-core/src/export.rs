//! CSV export of Todoist records
//!
//! One export operation per [`ExportKind`]. Each operation fetches the full
//! collection from a [`RecordSource`], flattens it through [`Record`], and
//! writes `<output_dir>/<kind file name>`, replacing any previous file.

use crate::error::Result;
use crate::models::{Comment, Record, Section};
use crate::source::RecordSource;
use std::fmt;
use std::path::{Path, PathBuf};
use todoist_export_common::{
    COMMENTS_FILENAME, COMPLETED_TASKS_FILENAME, LABELS_FILENAME, PROJECTS_FILENAME,
    SECTIONS_FILENAME, TASKS_FILENAME,
};
use tracing::{debug, error, info, instrument};

/// Record kind exported to its own file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    Projects,
    Tasks,
    CompletedTasks,
    Labels,
    Sections,
    Comments,
}

impl ExportKind {
    /// Every kind, in run order
    pub const ALL: [Self; 6] = [
        Self::Projects,
        Self::Tasks,
        Self::CompletedTasks,
        Self::Labels,
        Self::Sections,
        Self::Comments,
    ];

    /// Output file name inside the export directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Projects => PROJECTS_FILENAME,
            Self::Tasks => TASKS_FILENAME,
            Self::CompletedTasks => COMPLETED_TASKS_FILENAME,
            Self::Labels => LABELS_FILENAME,
            Self::Sections => SECTIONS_FILENAME,
            Self::Comments => COMMENTS_FILENAME,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Tasks => "tasks (active)",
            Self::CompletedTasks => "tasks (completed)",
            Self::Labels => "labels",
            Self::Sections => "sections",
            Self::Comments => "comments",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one successful export operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub kind: ExportKind,
    pub path: PathBuf,
    pub rows: usize,
}

/// Outcome of a run over several kinds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub succeeded: Vec<ExportReport>,
    pub failed: Vec<ExportKind>,
}

impl ExportSummary {
    /// True when no operation failed
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Rows written across all successful operations
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.succeeded.iter().map(|r| r.rows).sum()
    }
}

/// Writes Todoist records from a [`RecordSource`] into CSV files
#[derive(Debug)]
pub struct Exporter<S> {
    source: S,
    output_dir: PathBuf,
}

impl<S: RecordSource> Exporter<S> {
    /// Create an exporter writing into `output_dir`, creating it if needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created (for example when
    /// the path names an existing regular file)
    pub fn new(source: S, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;
        info!("Data will be exported to directory: {}", output_dir.display());
        Ok(Self { source, output_dir })
    }

    /// Directory the CSV files are written to
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path of the file written for a kind
    #[must_use]
    pub fn path_for(&self, kind: ExportKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }

    /// The underlying record source
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Export one kind, returning any failure to the caller
    ///
    /// # Errors
    /// Returns an error if fetching the records or writing the file fails
    #[instrument(skip(self))]
    pub fn try_export(&self, kind: ExportKind) -> Result<ExportReport> {
        match kind {
            ExportKind::Projects => self.write(kind, &self.source.get_projects()?),
            ExportKind::Tasks => self.write(kind, &self.source.get_tasks()?),
            ExportKind::CompletedTasks => self.write(kind, &self.source.get_completed_tasks()?),
            ExportKind::Labels => self.write(kind, &self.source.get_labels()?),
            ExportKind::Sections => self.write(kind, &self.collect_sections()?),
            ExportKind::Comments => self.write(kind, &self.collect_comments()?),
        }
    }

    /// Export one kind; failures are logged and swallowed
    pub fn export(&self, kind: ExportKind) -> Option<ExportReport> {
        match self.try_export(kind) {
            Ok(report) => {
                info!(
                    "Exported {} successfully: {} rows to {}",
                    kind,
                    report.rows,
                    report.path.display()
                );
                Some(report)
            }
            Err(e) => {
                error!("Error exporting {kind}: {e}");
                None
            }
        }
    }

    pub fn export_projects(&self) -> Option<ExportReport> {
        self.export(ExportKind::Projects)
    }

    /// Export active tasks, or completed tasks when `completed` is set
    pub fn export_tasks(&self, completed: bool) -> Option<ExportReport> {
        if completed {
            self.export(ExportKind::CompletedTasks)
        } else {
            self.export(ExportKind::Tasks)
        }
    }

    pub fn export_labels(&self) -> Option<ExportReport> {
        self.export(ExportKind::Labels)
    }

    pub fn export_sections(&self) -> Option<ExportReport> {
        self.export(ExportKind::Sections)
    }

    pub fn export_comments(&self) -> Option<ExportReport> {
        self.export(ExportKind::Comments)
    }

    /// Run the requested kinds in [`ExportKind::ALL`] order.
    ///
    /// A failing kind never stops the others.
    pub fn export_all(&self, kinds: &[ExportKind]) -> ExportSummary {
        let mut summary = ExportSummary::default();

        for kind in ExportKind::ALL.into_iter().filter(|k| kinds.contains(k)) {
            match self.export(kind) {
                Some(report) => summary.succeeded.push(report),
                None => summary.failed.push(kind),
            }
        }

        info!(
            "Export finished: {} succeeded, {} failed",
            summary.succeeded.len(),
            summary.failed.len()
        );
        summary
    }

    fn collect_sections(&self) -> Result<Vec<Section>> {
        let projects = self.source.get_projects()?;
        let mut all_sections = Vec::new();
        for project in &projects {
            let sections = self.source.get_sections(&project.id)?;
            debug!("Project {} has {} sections", project.id, sections.len());
            all_sections.extend(sections);
        }
        Ok(all_sections)
    }

    fn collect_comments(&self) -> Result<Vec<Comment>> {
        let tasks = self.source.get_tasks()?;
        let mut all_comments = Vec::new();
        for task in &tasks {
            let comments = self.source.get_comments(&task.id)?;
            debug!("Task {} has {} comments", task.id, comments.len());
            all_comments.extend(comments);
        }
        Ok(all_comments)
    }

    fn write<R: Record>(&self, kind: ExportKind, records: &[R]) -> Result<ExportReport> {
        let path = self.path_for(kind);
        let rows = write_csv(&path, records)?;
        Ok(ExportReport { kind, path, rows })
    }
}

/// Write records as CSV with a header row, replacing any existing file.
///
/// An empty collection produces a header-only file.
///
/// # Errors
/// Returns an error if the file cannot be created or written
pub fn write_csv<R: Record, P: AsRef<Path>>(path: P, records: &[R]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(R::headers())?;
    for record in records {
        writer.write_record(record.row())?;
    }
    writer.flush()?;
    Ok(records.len())
}
