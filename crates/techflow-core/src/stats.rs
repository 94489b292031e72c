//! Dashboard Statistics
//!
//! Pure aggregation over a snapshot of tasks and projects.

use chrono::{DateTime, Utc};

use crate::dates::parse_due_date;
use crate::error::DataAnomaly;
use crate::models::{Project, Task, TaskStatus};

/// Number of tasks shown under "Recent Tasks"
pub const RECENT_TASKS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_projects: usize,
    /// TODO or IN_PROGRESS
    pub pending_tasks: usize,
    pub completed_tasks: usize,
    /// Due before `now` and not completed
    pub overdue_tasks: usize,
}

/// Stats plus every anomaly met while computing them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsReport {
    pub stats: DashboardStats,
    pub anomalies: Vec<DataAnomaly>,
}

pub fn compute_dashboard_stats(tasks: &[Task], projects: &[Project], now: DateTime<Utc>) -> StatsReport {
    let mut report = StatsReport {
        stats: DashboardStats {
            total_projects: projects.len(),
            ..Default::default()
        },
        anomalies: Vec::new(),
    };

    for task in tasks {
        if task.status.is_pending() {
            report.stats.pending_tasks += 1;
        } else if task.status == TaskStatus::Completed {
            report.stats.completed_tasks += 1;
        }

        match parse_due_date(&task.due_date) {
            Some(due) => {
                if due < now && task.status != TaskStatus::Completed {
                    report.stats.overdue_tasks += 1;
                }
            }
            None => report.anomalies.push(DataAnomaly::UnparseableDueDate {
                task_id: task.id.clone(),
                raw: task.due_date.clone(),
            }),
        }
    }

    report
}

/// First `n` tasks in snapshot order
pub fn recent_tasks(tasks: &[Task], n: usize) -> Vec<Task> {
    tasks.iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectStatus, TaskPriority};
    use chrono::TimeZone;

    fn make_task(id: &str, status: TaskStatus, due_date: &str) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: String::new(),
            project_id: "p1".to_string(),
            priority: TaskPriority::Medium,
            status,
            due_date: due_date.to_string(),
            assigned_to: None,
        }
    }

    fn make_project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            name: format!("Project {}", id),
            description: String::new(),
            status: ProjectStatus::Active,
            tasks: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_collections() {
        let report = compute_dashboard_stats(&[], &[], now());
        assert_eq!(report.stats, DashboardStats::default());
        assert!(report.anomalies.is_empty());
    }

    #[test]
    fn test_overdue_pending_task() {
        let tasks = vec![make_task("1", TaskStatus::Todo, "2020-01-01")];
        let stats = compute_dashboard_stats(&tasks, &[], now()).stats;
        assert_eq!(stats.overdue_tasks, 1);
        assert_eq!(stats.pending_tasks, 1);
        assert_eq!(stats.completed_tasks, 0);
    }

    #[test]
    fn test_completed_task_is_never_overdue() {
        let tasks = vec![make_task("1", TaskStatus::Completed, "2020-01-01")];
        let stats = compute_dashboard_stats(&tasks, &[], now()).stats;
        assert_eq!(stats.overdue_tasks, 0);
        assert_eq!(stats.completed_tasks, 1);
    }

    #[test]
    fn test_future_due_date_not_overdue() {
        let tasks = vec![make_task("1", TaskStatus::InProgress, "2030-05-01T12:00:00Z")];
        let stats = compute_dashboard_stats(&tasks, &[make_project("a"), make_project("b")], now()).stats;
        assert_eq!(stats.overdue_tasks, 0);
        assert_eq!(stats.pending_tasks, 1);
        assert_eq!(stats.total_projects, 2);
    }

    #[test]
    fn test_unparseable_due_date_is_reported() {
        let tasks = vec![
            make_task("bad", TaskStatus::Todo, "not a date"),
            make_task("ok", TaskStatus::Todo, "2020-01-01"),
        ];
        let report = compute_dashboard_stats(&tasks, &[], now());
        assert_eq!(report.stats.overdue_tasks, 1);
        assert_eq!(report.stats.pending_tasks, 2);
        assert_eq!(
            report.anomalies,
            vec![DataAnomaly::UnparseableDueDate {
                task_id: "bad".to_string(),
                raw: "not a date".to_string(),
            }]
        );
    }

    #[test]
    fn test_pending_plus_completed_bounded_by_total() {
        let tasks = vec![
            make_task("1", TaskStatus::Todo, "2020-01-01"),
            make_task("2", TaskStatus::InProgress, "2026-01-01"),
            make_task("3", TaskStatus::Completed, "2020-01-01"),
            make_task("4", TaskStatus::Unknown, "2020-01-01"),
        ];
        let stats = compute_dashboard_stats(&tasks, &[], now()).stats;
        assert!(stats.pending_tasks + stats.completed_tasks <= tasks.len());
        assert_eq!(stats.pending_tasks + stats.completed_tasks, 3);

        let known = &tasks[..3];
        let stats = compute_dashboard_stats(known, &[], now()).stats;
        assert_eq!(stats.pending_tasks + stats.completed_tasks, known.len());
    }

    #[test]
    fn test_inputs_untouched() {
        let tasks = vec![make_task("1", TaskStatus::Todo, "2020-01-01")];
        let before = tasks.clone();
        let _ = compute_dashboard_stats(&tasks, &[], now());
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_recent_tasks_keeps_order() {
        let tasks: Vec<Task> = (0..8)
            .map(|i| make_task(&i.to_string(), TaskStatus::Todo, "2020-01-01"))
            .collect();
        let recent = recent_tasks(&tasks, RECENT_TASKS);
        let ids: Vec<&str> = recent.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["0", "1", "2", "3", "4"]);
        assert_eq!(recent_tasks(&tasks[..2], RECENT_TASKS).len(), 2);
    }
}
