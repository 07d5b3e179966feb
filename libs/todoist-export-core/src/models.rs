//! Data models for Todoist records
//!
//! Every record kind declares its CSV columns explicitly through [`Record`].
//! Nested values (due dates, durations, attachments) are flattened into
//! prefixed columns so each row is a flat list of scalar cells.

use serde::{Deserialize, Serialize};
use todoist_export_common::{optional_cell, LIST_SEPARATOR};

/// A record that can be written as one CSV row
pub trait Record {
    /// Column names, in output order
    fn headers() -> &'static [&'static str];

    /// Cell values, in the same order as [`Record::headers`]
    fn row(&self) -> Vec<String>;
}

/// Project entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_inbox_project: bool,
    #[serde(default)]
    pub is_team_inbox: bool,
    #[serde(default)]
    pub view_style: String,
    #[serde(default)]
    pub url: String,
}

impl Record for Project {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "color",
            "parent_id",
            "order",
            "comment_count",
            "is_shared",
            "is_favorite",
            "is_inbox_project",
            "is_team_inbox",
            "view_style",
            "url",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.color.clone(),
            optional_cell(self.parent_id.as_ref()),
            self.order.to_string(),
            self.comment_count.to_string(),
            self.is_shared.to_string(),
            self.is_favorite.to_string(),
            self.is_inbox_project.to_string(),
            self.is_team_inbox.to_string(),
            self.view_style.clone(),
            self.url.clone(),
        ]
    }
}

/// Due date attached to a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Due {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub string: String,
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
}

/// Estimated duration of a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDuration {
    pub amount: u32,
    /// Either `minute` or `day`
    pub unit: String,
}

/// Active task entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub order: i64,
    /// 1 (normal) to 4 (urgent)
    #[serde(default)]
    pub priority: u8,
    #[serde(default)]
    pub due: Option<Due>,
    #[serde(default)]
    pub duration: Option<TaskDuration>,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub creator_id: String,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub assigner_id: Option<String>,
    #[serde(default)]
    pub url: String,
}

impl Record for Task {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "project_id",
            "section_id",
            "parent_id",
            "content",
            "description",
            "is_completed",
            "labels",
            "order",
            "priority",
            "due_date",
            "due_string",
            "due_datetime",
            "due_timezone",
            "due_is_recurring",
            "duration_amount",
            "duration_unit",
            "comment_count",
            "created_at",
            "creator_id",
            "assignee_id",
            "assigner_id",
            "url",
        ]
    }

    fn row(&self) -> Vec<String> {
        let due = self.due.as_ref();
        let duration = self.duration.as_ref();
        vec![
            self.id.clone(),
            self.project_id.clone(),
            optional_cell(self.section_id.as_ref()),
            optional_cell(self.parent_id.as_ref()),
            self.content.clone(),
            self.description.clone(),
            self.is_completed.to_string(),
            self.labels.join(LIST_SEPARATOR),
            self.order.to_string(),
            self.priority.to_string(),
            optional_cell(due.map(|d| &d.date)),
            optional_cell(due.map(|d| &d.string)),
            optional_cell(due.and_then(|d| d.datetime.as_ref())),
            optional_cell(due.and_then(|d| d.timezone.as_ref())),
            optional_cell(due.map(|d| &d.is_recurring)),
            optional_cell(duration.map(|d| &d.amount)),
            optional_cell(duration.map(|d| &d.unit)),
            self.comment_count.to_string(),
            self.created_at.clone(),
            self.creator_id.clone(),
            optional_cell(self.assignee_id.as_ref()),
            optional_cell(self.assigner_id.as_ref()),
            self.url.clone(),
        ]
    }
}

/// Completed task entry, as reported by the completed items endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTask {
    pub id: String,
    pub task_id: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub completed_at: String,
    #[serde(default)]
    pub note_count: u32,
}

impl Record for CompletedTask {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "task_id",
            "project_id",
            "section_id",
            "user_id",
            "content",
            "completed_at",
            "note_count",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.task_id.clone(),
            self.project_id.clone(),
            optional_cell(self.section_id.as_ref()),
            self.user_id.clone(),
            self.content.clone(),
            self.completed_at.clone(),
            self.note_count.to_string(),
        ]
    }
}

/// Personal label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Record for Label {
    fn headers() -> &'static [&'static str] {
        &["id", "name", "color", "order", "is_favorite"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.color.clone(),
            self.order.to_string(),
            self.is_favorite.to_string(),
        ]
    }
}

/// Section of a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub order: i64,
}

impl Record for Section {
    fn headers() -> &'static [&'static str] {
        &["id", "project_id", "name", "order"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.project_id.clone(),
            self.name.clone(),
            self.order.to_string(),
        ]
    }
}

/// File attached to a comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
}

/// Comment on a task or project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub posted_at: String,
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

impl Record for Comment {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "task_id",
            "project_id",
            "content",
            "posted_at",
            "attachment_file_name",
            "attachment_file_type",
            "attachment_file_url",
            "attachment_resource_type",
        ]
    }

    fn row(&self) -> Vec<String> {
        let attachment = self.attachment.as_ref();
        vec![
            self.id.clone(),
            optional_cell(self.task_id.as_ref()),
            optional_cell(self.project_id.as_ref()),
            self.content.clone(),
            self.posted_at.clone(),
            optional_cell(attachment.and_then(|a| a.file_name.as_ref())),
            optional_cell(attachment.and_then(|a| a.file_type.as_ref())),
            optional_cell(attachment.and_then(|a| a.file_url.as_ref())),
            optional_cell(attachment.and_then(|a| a.resource_type.as_ref())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        create_mock_comments, create_mock_completed_tasks, create_mock_labels,
        create_mock_projects, create_mock_sections, create_mock_tasks,
    };
    use serde_json::json;

    fn assert_rows_match_headers<R: Record>(records: &[R]) {
        for record in records {
            assert_eq!(record.row().len(), R::headers().len());
        }
    }

    #[test]
    fn test_rows_match_headers_for_every_kind() {
        assert_rows_match_headers(&create_mock_projects());
        assert_rows_match_headers(&create_mock_tasks());
        assert_rows_match_headers(&create_mock_completed_tasks());
        assert_rows_match_headers(&create_mock_labels());
        assert_rows_match_headers(&create_mock_sections("123"));
        assert_rows_match_headers(&create_mock_comments("1"));
        assert_rows_match_headers(&[Task::default(), Task::default()]);
        assert_rows_match_headers(&[Comment::default()]);
    }

    #[test]
    fn test_headers_have_no_duplicates() {
        fn check(headers: &[&str]) {
            for (i, h) in headers.iter().enumerate() {
                assert!(!headers[i + 1..].contains(h), "duplicate column {h}");
            }
        }
        check(Project::headers());
        check(Task::headers());
        check(CompletedTask::headers());
        check(Label::headers());
        check(Section::headers());
        check(Comment::headers());
    }

    #[test]
    fn test_project_deserialize_minimal() {
        let project: Project =
            serde_json::from_value(json!({"id": "123", "name": "Test Project"})).unwrap();

        assert_eq!(project.id, "123");
        assert_eq!(project.name, "Test Project");
        assert!(project.parent_id.is_none());
        assert!(!project.is_favorite);
    }

    #[test]
    fn test_project_missing_id_is_rejected() {
        let result = serde_json::from_value::<Project>(json!({"name": "No id"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_project_row() {
        let project: Project = serde_json::from_value(json!({
            "id": "2203306141",
            "name": "Shopping List",
            "color": "charcoal",
            "parent_id": null,
            "order": 1,
            "comment_count": 10,
            "is_shared": false,
            "is_favorite": true,
            "is_inbox_project": false,
            "is_team_inbox": false,
            "view_style": "list",
            "url": "https://todoist.com/showProject?id=2203306141"
        }))
        .unwrap();

        let row = project.row();
        assert_eq!(row[0], "2203306141");
        assert_eq!(row[1], "Shopping List");
        assert_eq!(row[3], "");
        assert_eq!(row[4], "1");
        assert_eq!(row[7], "true");
    }

    #[test]
    fn test_task_row_flattens_due_and_duration() {
        let task: Task = serde_json::from_value(json!({
            "id": "2995104339",
            "project_id": "2203306141",
            "section_id": "7025",
            "parent_id": null,
            "content": "Buy Milk",
            "description": "",
            "is_completed": false,
            "labels": ["Food", "Shopping"],
            "order": 1,
            "priority": 4,
            "due": {
                "date": "2016-09-01",
                "string": "tomorrow at 12",
                "datetime": "2016-09-01T12:00:00.000000Z",
                "timezone": "Europe/Moscow",
                "is_recurring": false
            },
            "duration": {"amount": 15, "unit": "minute"},
            "comment_count": 0,
            "created_at": "2019-12-11T22:36:50.000000Z",
            "creator_id": "2671355",
            "assignee_id": null,
            "assigner_id": null,
            "url": "https://todoist.com/showTask?id=2995104339"
        }))
        .unwrap();

        let headers = Task::headers();
        let row = task.row();
        let cell = |name: &str| {
            let idx = headers.iter().position(|h| *h == name).unwrap();
            row[idx].clone()
        };

        assert_eq!(cell("labels"), "Food,Shopping");
        assert_eq!(cell("priority"), "4");
        assert_eq!(cell("due_date"), "2016-09-01");
        assert_eq!(cell("due_string"), "tomorrow at 12");
        assert_eq!(cell("due_timezone"), "Europe/Moscow");
        assert_eq!(cell("due_is_recurring"), "false");
        assert_eq!(cell("duration_amount"), "15");
        assert_eq!(cell("duration_unit"), "minute");
        assert_eq!(cell("assignee_id"), "");
    }

    #[test]
    fn test_task_without_due_has_empty_due_cells() {
        let task: Task = serde_json::from_value(json!({
            "id": "1",
            "project_id": "123",
            "content": "Test Task"
        }))
        .unwrap();

        let headers = Task::headers();
        let row = task.row();
        for (header, value) in headers.iter().zip(&row) {
            if header.starts_with("due_") || header.starts_with("duration_") {
                assert!(value.is_empty(), "{header} should be empty");
            }
        }
    }

    #[test]
    fn test_comment_row_with_attachment() {
        let comment: Comment = serde_json::from_value(json!({
            "id": "2992679862",
            "task_id": "2995104339",
            "project_id": null,
            "content": "Need one bottle of milk",
            "posted_at": "2016-09-22T07:00:00.000000Z",
            "attachment": {
                "file_name": "File.pdf",
                "file_type": "application/pdf",
                "file_url": "https://cdn-domain.tld/path/to/file.pdf",
                "resource_type": "file"
            }
        }))
        .unwrap();

        let row = comment.row();
        assert_eq!(row[1], "2995104339");
        assert_eq!(row[2], "");
        assert_eq!(row[5], "File.pdf");
        assert_eq!(row[8], "file");
    }

    #[test]
    fn test_completed_task_deserialize_ignores_extra_fields() {
        let item: CompletedTask = serde_json::from_value(json!({
            "id": "1182",
            "task_id": "2995104339",
            "user_id": "2671355",
            "project_id": "2203306141",
            "section_id": null,
            "content": "Buy Milk",
            "completed_at": "2015-02-17T15:40:41.000000Z",
            "note_count": 0,
            "meta_data": null
        }))
        .unwrap();

        assert_eq!(item.task_id, "2995104339");
        assert_eq!(item.row()[6], "2015-02-17T15:40:41.000000Z");
    }

    #[test]
    fn test_label_and_section_rows() {
        let label = Label {
            id: "2156154810".to_string(),
            name: "Food".to_string(),
            color: "charcoal".to_string(),
            order: 1,
            is_favorite: false,
        };
        assert_eq!(label.row(), vec!["2156154810", "Food", "charcoal", "1", "false"]);

        let section = Section {
            id: "7025".to_string(),
            project_id: "2203306141".to_string(),
            name: "Groceries".to_string(),
            order: 1,
        };
        assert_eq!(section.row(), vec!["7025", "2203306141", "Groceries", "1"]);
    }
}
