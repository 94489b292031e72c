//! Form Drafts
//!
//! Editable state of the project and task forms, independent of the list
//! snapshot they were opened from. A draft becomes a payload only after
//! validation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dates::{is_valid_date_input, to_date_input, today_input};
use crate::error::FormError;
use crate::models::{Project, ProjectStatus, Task, TaskPriority, TaskStatus};

// ========================
// Project
// ========================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
}

/// Body of `POST /projects` and `PUT /projects/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
}

impl ProjectDraft {
    /// Seed from the project being edited, or defaults when creating
    pub fn seed(existing: Option<&Project>) -> Self {
        match existing {
            Some(project) => Self {
                name: project.name.clone(),
                description: project.description.clone(),
                status: project.status,
            },
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<ProjectPayload, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingField("Project name"));
        }
        Ok(ProjectPayload {
            name: name.to_string(),
            description: self.description.clone(),
            status: self.status,
        })
    }
}

// ========================
// Task
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub project_id: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// `YYYY-MM-DD`
    pub due_date: String,
}

/// Body of `POST /tasks` and `PUT /tasks/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub project_id: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: String,
}

impl TaskDraft {
    /// Seed from the task being edited, or defaults when creating:
    /// first available project, today, MEDIUM, TODO.
    pub fn seed(existing: Option<&Task>, projects: &[Project], now: DateTime<Utc>) -> Self {
        match existing {
            Some(task) => Self {
                title: task.title.clone(),
                description: task.description.clone(),
                project_id: task.project_id.clone(),
                priority: task.priority,
                status: task.status,
                due_date: to_date_input(&task.due_date),
            },
            None => Self {
                title: String::new(),
                description: String::new(),
                project_id: projects.first().map(|p| p.id.clone()).unwrap_or_default(),
                priority: TaskPriority::Medium,
                status: TaskStatus::Todo,
                due_date: today_input(now),
            },
        }
    }

    pub fn validate(&self) -> Result<TaskPayload, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingField("Title"));
        }
        if self.project_id.trim().is_empty() {
            return Err(FormError::MissingField("Project"));
        }
        let due_date = self.due_date.trim();
        if due_date.is_empty() {
            return Err(FormError::MissingField("Due date"));
        }
        if !is_valid_date_input(due_date) {
            return Err(FormError::InvalidDate(due_date.to_string()));
        }
        Ok(TaskPayload {
            title: title.to_string(),
            description: self.description.clone(),
            project_id: self.project_id.clone(),
            priority: self.priority,
            status: self.status,
            due_date: due_date.to_string(),
        })
    }
}

/// Label of a form's submit button
pub fn submit_label(submitting: bool, editing: bool, create_label: &'static str) -> &'static str {
    if submitting {
        "Saving..."
    } else if editing {
        "Update"
    } else {
        create_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 14, 9, 30, 0).unwrap()
    }

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            name: format!("Project {}", id),
            description: "scope".to_string(),
            status: ProjectStatus::OnHold,
            tasks: None,
        }
    }

    fn task() -> Task {
        Task {
            id: "t1".to_string(),
            title: "Ship".to_string(),
            description: "release 1.0".to_string(),
            project_id: "p2".to_string(),
            priority: TaskPriority::Urgent,
            status: TaskStatus::InProgress,
            due_date: "2025-03-10T23:00:00.000Z".to_string(),
            assigned_to: None,
        }
    }

    #[test]
    fn test_new_task_defaults() {
        let draft = TaskDraft::seed(None, &[project("p1"), project("p2")], now());
        assert_eq!(draft.project_id, "p1");
        assert_eq!(draft.priority, TaskPriority::Medium);
        assert_eq!(draft.status, TaskStatus::Todo);
        assert_eq!(draft.due_date, "2025-02-14");
        assert!(draft.title.is_empty());
    }

    #[test]
    fn test_new_task_without_projects() {
        let draft = TaskDraft::seed(None, &[], now());
        assert!(draft.project_id.is_empty());
        assert_eq!(
            TaskDraft { title: "x".into(), ..draft }.validate(),
            Err(FormError::MissingField("Project"))
        );
    }

    #[test]
    fn test_edit_task_converts_due_date() {
        let draft = TaskDraft::seed(Some(&task()), &[], now());
        assert_eq!(draft.due_date, "2025-03-10");
        assert_eq!(draft.project_id, "p2");
        assert_eq!(draft.priority, TaskPriority::Urgent);
    }

    #[test]
    fn test_task_validation() {
        let mut draft = TaskDraft::seed(Some(&task()), &[], now());
        assert!(draft.validate().is_ok());

        draft.title = "   ".to_string();
        assert_eq!(draft.validate(), Err(FormError::MissingField("Title")));

        draft.title = "Ship".to_string();
        draft.due_date = String::new();
        assert_eq!(draft.validate(), Err(FormError::MissingField("Due date")));

        draft.due_date = "2025-02-30".to_string();
        assert!(matches!(draft.validate(), Err(FormError::InvalidDate(_))));
    }

    #[test]
    fn test_task_payload_wire_format() {
        let payload = TaskDraft::seed(Some(&task()), &[], now()).validate().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["projectId"], "p2");
        assert_eq!(json["dueDate"], "2025-03-10");
        assert_eq!(json["status"], "IN_PROGRESS");
        assert_eq!(json["priority"], "URGENT");
    }

    #[test]
    fn test_project_draft() {
        let draft = ProjectDraft::seed(Some(&project("p1")));
        assert_eq!(draft.status, ProjectStatus::OnHold);
        assert_eq!(draft.validate().unwrap().name, "Project p1");

        let empty = ProjectDraft::seed(None);
        assert_eq!(empty.status, ProjectStatus::Active);
        assert_eq!(empty.validate(), Err(FormError::MissingField("Project name")));
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(true, true, "Create"), "Saving...");
        assert_eq!(submit_label(false, true, "Create"), "Update");
        assert_eq!(submit_label(false, false, "Create Project"), "Create Project");
    }
}
