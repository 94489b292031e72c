//! View Snapshot Stores
//!
//! Each list view owns one of these stores, created on mount and dropped with
//! the view. Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use techflow_core::filters::apply_local_removal;
use techflow_core::{Project, Task};

/// Snapshot and view state of the Projects view
#[derive(Clone, Debug, Store)]
pub struct ProjectsState {
    pub projects: Vec<Project>,
    pub loading: bool,
    pub search: String,
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            loading: true,
            search: String::new(),
        }
    }
}

/// Snapshot and view state of the Tasks view
#[derive(Clone, Debug, Store)]
pub struct TasksState {
    pub tasks: Vec<Task>,
    /// Needed for project names and the task form
    pub projects: Vec<Project>,
    pub loading: bool,
    /// Select values, `""` means any
    pub status_filter: String,
    pub priority_filter: String,
}

impl Default for TasksState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            projects: Vec::new(),
            loading: true,
            status_filter: String::new(),
            priority_filter: String::new(),
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Remove a deleted project from the held snapshot
pub fn store_remove_project(store: &Store<ProjectsState>, project_id: &str) -> bool {
    apply_local_removal(&mut *store.projects().write(), &project_id.to_string())
}

/// Remove a deleted task from the held snapshot
pub fn store_remove_task(store: &Store<TasksState>, task_id: &str) -> bool {
    apply_local_removal(&mut *store.tasks().write(), &task_id.to_string())
}
