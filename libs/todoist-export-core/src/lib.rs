//! Todoist Export Core - fetch Todoist records and write them as CSV files
//!
//! The library is a thin, synchronous pipeline: a [`RecordSource`] provides
//! projects, tasks, labels, sections and comments; the [`Exporter`] flattens
//! each collection into rows and writes one CSV file per record kind.
//!
//! # Quick Start
//!
//! ```no_run
//! use todoist_export_core::{ExportKind, Exporter, ExporterConfig, TodoistClient};
//!
//! # fn example() -> todoist_export_core::Result<()> {
//! let config = ExporterConfig::load()?;
//! let client = TodoistClient::new(config.credential)?;
//! let exporter = Exporter::new(client, "data")?;
//!
//! let summary = exporter.export_all(&ExportKind::ALL);
//! println!("{} files written", summary.succeeded.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Crate Features
//!
//! - `test-utils`: Enable the in-memory `MockSource` and mock records (for testing only)

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod source;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::TodoistClient;
pub use config::{Credential, ExporterConfig};
pub use error::{ExportError, Result};
pub use export::{write_csv, ExportKind, ExportReport, ExportSummary, Exporter};
pub use models::*;
pub use source::RecordSource;
