//! Constants for the Todoist exporter

/// Configuration file read from the working directory
pub const CONFIG_FILENAME: &str = "config.json";

/// Field of the configuration file that holds the API token
pub const TOKEN_FIELD: &str = "TOKEN";

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Todoist REST API base URL
pub const REST_API_BASE_URL: &str = "https://api.todoist.com/rest/v2";

/// Todoist Sync API base URL (completed tasks live here)
pub const SYNC_API_BASE_URL: &str = "https://api.todoist.com/sync/v9";

/// Maximum page size accepted by the completed tasks endpoint
pub const COMPLETED_PAGE_LIMIT: usize = 200;

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Output file names, one per record kind
pub const PROJECTS_FILENAME: &str = "projects.csv";
pub const TASKS_FILENAME: &str = "tasks.csv";
pub const COMPLETED_TASKS_FILENAME: &str = "tasks_completed.csv";
pub const LABELS_FILENAME: &str = "labels.csv";
pub const SECTIONS_FILENAME: &str = "sections.csv";
pub const COMMENTS_FILENAME: &str = "comments.csv";

/// Separator used when a list field is flattened into one CSV cell
pub const LIST_SEPARATOR: &str = ",";
