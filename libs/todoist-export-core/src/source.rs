//! Read access to Todoist records

use crate::error::Result;
use crate::models::{Comment, CompletedTask, Label, Project, Section, Task};

/// Read-only source of Todoist records.
///
/// [`crate::client::TodoistClient`] talks to the real service; tests use
/// `test_utils::MockSource`.
pub trait RecordSource {
    /// All projects
    ///
    /// # Errors
    /// Returns an error if the records cannot be fetched or decoded
    fn get_projects(&self) -> Result<Vec<Project>>;

    /// All active tasks
    ///
    /// # Errors
    /// Returns an error if the records cannot be fetched or decoded
    fn get_tasks(&self) -> Result<Vec<Task>>;

    /// All completed tasks
    ///
    /// # Errors
    /// Returns an error if the records cannot be fetched or decoded
    fn get_completed_tasks(&self) -> Result<Vec<CompletedTask>>;

    /// All personal labels
    ///
    /// # Errors
    /// Returns an error if the records cannot be fetched or decoded
    fn get_labels(&self) -> Result<Vec<Label>>;

    /// Sections of one project
    ///
    /// # Errors
    /// Returns an error if the records cannot be fetched or decoded
    fn get_sections(&self, project_id: &str) -> Result<Vec<Section>>;

    /// Comments of one task
    ///
    /// # Errors
    /// Returns an error if the records cannot be fetched or decoded
    fn get_comments(&self, task_id: &str) -> Result<Vec<Comment>>;
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn get_projects(&self) -> Result<Vec<Project>> {
        (**self).get_projects()
    }

    fn get_tasks(&self) -> Result<Vec<Task>> {
        (**self).get_tasks()
    }

    fn get_completed_tasks(&self) -> Result<Vec<CompletedTask>> {
        (**self).get_completed_tasks()
    }

    fn get_labels(&self) -> Result<Vec<Label>> {
        (**self).get_labels()
    }

    fn get_sections(&self, project_id: &str) -> Result<Vec<Section>> {
        (**self).get_sections(project_id)
    }

    fn get_comments(&self, task_id: &str) -> Result<Vec<Comment>> {
        (**self).get_comments(task_id)
    }
}
