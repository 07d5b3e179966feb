//! Test utilities and mock data for the Todoist exporter

use crate::error::{ExportError, Result};
use crate::models::{Comment, CompletedTask, Due, Label, Project, Section, Task};
use crate::source::RecordSource;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// A read operation of [`RecordSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceCall {
    Projects,
    Tasks,
    CompletedTasks,
    Labels,
    Sections,
    Comments,
}

/// In-memory [`RecordSource`] with per-operation failure injection.
///
/// Every call is recorded so tests can assert on fetch order and counts.
#[derive(Debug, Default)]
pub struct MockSource {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub completed_tasks: Vec<CompletedTask>,
    pub labels: Vec<Label>,
    /// Sections keyed by project id
    pub sections: HashMap<String, Vec<Section>>,
    /// Comments keyed by task id
    pub comments: HashMap<String, Vec<Comment>>,
    failing: HashSet<SourceCall>,
    failing_parents: HashSet<String>,
    calls: RefCell<Vec<(SourceCall, Option<String>)>>,
}

impl MockSource {
    /// An empty source: every collection is empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A source populated with the standard mock records
    #[must_use]
    pub fn with_mock_data() -> Self {
        let mut sections = HashMap::new();
        sections.insert("123".to_string(), create_mock_sections("123"));
        let mut comments = HashMap::new();
        comments.insert("1".to_string(), create_mock_comments("1"));

        Self {
            projects: create_mock_projects(),
            tasks: create_mock_tasks(),
            completed_tasks: create_mock_completed_tasks(),
            labels: create_mock_labels(),
            sections,
            comments,
            ..Self::default()
        }
    }

    /// Make one operation fail every time it is called
    #[must_use]
    pub fn failing(mut self, call: SourceCall) -> Self {
        self.failing.insert(call);
        self
    }

    /// Make child fetches (sections or comments) fail for one parent id
    #[must_use]
    pub fn failing_for_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.failing_parents.insert(parent_id.into());
        self
    }

    /// Set the sections returned for a project
    #[must_use]
    pub fn with_sections(mut self, project_id: impl Into<String>, sections: Vec<Section>) -> Self {
        self.sections.insert(project_id.into(), sections);
        self
    }

    /// Set the comments returned for a task
    #[must_use]
    pub fn with_comments(mut self, task_id: impl Into<String>, comments: Vec<Comment>) -> Self {
        self.comments.insert(task_id.into(), comments);
        self
    }

    /// Calls made so far, in order, with the parent id for child fetches
    #[must_use]
    pub fn calls(&self) -> Vec<(SourceCall, Option<String>)> {
        self.calls.borrow().clone()
    }

    /// Number of times one operation was called
    #[must_use]
    pub fn call_count(&self, call: SourceCall) -> usize {
        self.calls.borrow().iter().filter(|(c, _)| *c == call).count()
    }

    fn record(&self, call: SourceCall, parent: Option<&str>) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((call, parent.map(ToString::to_string)));

        let parent_fails = parent.is_some_and(|id| self.failing_parents.contains(id));
        if self.failing.contains(&call) || parent_fails {
            return Err(ExportError::network(format!(
                "simulated failure in {call:?}{}",
                parent.map(|id| format!(" for {id}")).unwrap_or_default()
            )));
        }
        Ok(())
    }
}

impl RecordSource for MockSource {
    fn get_projects(&self) -> Result<Vec<Project>> {
        self.record(SourceCall::Projects, None)?;
        Ok(self.projects.clone())
    }

    fn get_tasks(&self) -> Result<Vec<Task>> {
        self.record(SourceCall::Tasks, None)?;
        Ok(self.tasks.clone())
    }

    fn get_completed_tasks(&self) -> Result<Vec<CompletedTask>> {
        self.record(SourceCall::CompletedTasks, None)?;
        Ok(self.completed_tasks.clone())
    }

    fn get_labels(&self) -> Result<Vec<Label>> {
        self.record(SourceCall::Labels, None)?;
        Ok(self.labels.clone())
    }

    fn get_sections(&self, project_id: &str) -> Result<Vec<Section>> {
        self.record(SourceCall::Sections, Some(project_id))?;
        Ok(self.sections.get(project_id).cloned().unwrap_or_default())
    }

    fn get_comments(&self, task_id: &str) -> Result<Vec<Comment>> {
        self.record(SourceCall::Comments, Some(task_id))?;
        Ok(self.comments.get(task_id).cloned().unwrap_or_default())
    }
}

/// Build a project with the given id and name
#[must_use]
pub fn mock_project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        color: "charcoal".to_string(),
        view_style: "list".to_string(),
        url: format!("https://todoist.com/showProject?id={id}"),
        ..Project::default()
    }
}

/// Build an active task in a project
#[must_use]
pub fn mock_task(id: &str, content: &str, project_id: &str) -> Task {
    Task {
        id: id.to_string(),
        project_id: project_id.to_string(),
        content: content.to_string(),
        priority: 1,
        url: format!("https://todoist.com/showTask?id={id}"),
        ..Task::default()
    }
}

/// Build a section of a project
#[must_use]
pub fn mock_section(id: &str, name: &str, project_id: &str) -> Section {
    Section {
        id: id.to_string(),
        project_id: project_id.to_string(),
        name: name.to_string(),
        order: 1,
    }
}

/// Build a comment on a task
#[must_use]
pub fn mock_comment(id: &str, content: &str, task_id: &str) -> Comment {
    Comment {
        id: id.to_string(),
        task_id: Some(task_id.to_string()),
        content: content.to_string(),
        posted_at: "2024-01-15T10:30:00.000000Z".to_string(),
        ..Comment::default()
    }
}

/// One project, "Test Project" with id 123
#[must_use]
pub fn create_mock_projects() -> Vec<Project> {
    vec![mock_project("123", "Test Project")]
}

/// One active task in project 123, with a due date and labels
#[must_use]
pub fn create_mock_tasks() -> Vec<Task> {
    let mut task = mock_task("1", "Test Task", "123");
    task.labels = vec!["Test Label".to_string()];
    task.due = Some(Due {
        date: "2024-01-20".to_string(),
        string: "Jan 20".to_string(),
        ..Due::default()
    });
    vec![task]
}

/// One completed task in project 123
#[must_use]
pub fn create_mock_completed_tasks() -> Vec<CompletedTask> {
    vec![CompletedTask {
        id: "2".to_string(),
        task_id: "2".to_string(),
        project_id: "123".to_string(),
        content: "Completed Task".to_string(),
        completed_at: "2024-01-10T09:00:00.000000Z".to_string(),
        ..CompletedTask::default()
    }]
}

/// One label
#[must_use]
pub fn create_mock_labels() -> Vec<Label> {
    vec![Label {
        id: "1".to_string(),
        name: "Test Label".to_string(),
        color: "red".to_string(),
        ..Label::default()
    }]
}

/// One section in the given project
#[must_use]
pub fn create_mock_sections(project_id: &str) -> Vec<Section> {
    vec![mock_section("1", "Test Section", project_id)]
}

/// One comment on the given task
#[must_use]
pub fn create_mock_comments(task_id: &str) -> Vec<Comment> {
    vec![mock_comment("1", "Test Comment", task_id)]
}
