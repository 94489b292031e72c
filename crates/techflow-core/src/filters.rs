//! Client-side Filters
//!
//! Predicates applied to already-fetched snapshots. Every function keeps the
//! relative order of the elements it retains.

use crate::models::{Entity, Project, Task, TaskPriority, TaskStatus};

/// Exact-match task filter; `None` leaves the field unconstrained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskFilter {
    /// Build from select values, where `""` means "any"
    pub fn from_selects(status: &str, priority: &str) -> Self {
        Self {
            status: TaskStatus::parse(status),
            priority: TaskPriority::parse(priority),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.status.map_or(true, |status| task.status == status)
            && self.priority.map_or(true, |priority| task.priority == priority)
    }
}

pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
}

/// Case-insensitive containment on project name or status
pub fn filter_projects(projects: &[Project], search: &str) -> Vec<Project> {
    let needle = search.to_lowercase();
    projects
        .iter()
        .filter(|project| {
            project.name.to_lowercase().contains(&needle)
                || project.status.as_str().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Drop the entity with `removed` id from a held snapshot.
///
/// Returns whether anything was removed.
pub fn apply_local_removal<E: Entity>(collection: &mut Vec<E>, removed: &E::Id) -> bool {
    let before = collection.len();
    collection.retain(|entity| entity.id() != removed);
    collection.len() != before
}

/// Display name of a task's project
pub fn project_name<'a>(projects: &'a [Project], project_id: &str) -> &'a str {
    projects
        .iter()
        .find(|project| project.id == project_id)
        .map(|project| project.name.as_str())
        .unwrap_or("Unknown")
}
