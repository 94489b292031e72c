//! Status and Priority Badges
//!
//! Small presentational pieces shared by the list views.

use leptos::prelude::*;
use techflow_core::{ProjectStatus, TaskPriority, TaskStatus};

/// Accent colour of a task priority
pub fn priority_color(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Urgent => "#ef4444",
        TaskPriority::High => "#f97316",
        TaskPriority::Medium => "#eab308",
        _ => "#3b82f6",
    }
}

pub fn task_status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "badge badge-green",
        TaskStatus::InProgress => "badge badge-blue",
        _ => "badge badge-gray",
    }
}

pub fn project_status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "badge badge-green",
        ProjectStatus::Completed => "badge badge-gray",
        _ => "badge badge-yellow",
    }
}

/// Dashboard counter card
#[component]
pub fn StatCard(
    title: &'static str,
    value: Signal<usize>,
    /// Accent bar class, e.g. "accent-blue"
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class=format!("stat-accent {}", accent)></div>
            <div>
                <p class="stat-title">{title}</p>
                <p class="stat-value">{move || value.get()}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_colors() {
        assert_eq!(priority_color(TaskPriority::Urgent), "#ef4444");
        assert_eq!(priority_color(TaskPriority::Low), "#3b82f6");
        assert_eq!(priority_color(TaskPriority::Unknown), "#3b82f6");
    }

    #[test]
    fn test_status_classes() {
        assert_eq!(task_status_class(TaskStatus::Completed), "badge badge-green");
        assert_eq!(task_status_class(TaskStatus::Todo), "badge badge-gray");
        assert_eq!(project_status_class(ProjectStatus::OnHold), "badge badge-yellow");
    }
}
