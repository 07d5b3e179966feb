//! Todoist Export Common - Shared constants and helpers for the Todoist exporter
//!
//! # Examples
//!
//! ```
//! use todoist_export_common::{truncate_string, CONFIG_FILENAME, PROJECTS_FILENAME};
//!
//! assert_eq!(CONFIG_FILENAME, "config.json");
//! assert_eq!(PROJECTS_FILENAME, "projects.csv");
//! assert_eq!(truncate_string("hello world", 5), "he...");
//! ```

pub mod constants;
pub mod utils;

pub use constants::*;
pub use utils::*;
