//! Dashboard View
//!
//! Counters over the first page of tasks and projects, the most recent
//! tasks and shortcuts to the list views.

use leptos::prelude::*;
use leptos::task::spawn_local;
use techflow_core::dates::display_due_date;
use techflow_core::stats::{compute_dashboard_stats, recent_tasks, DashboardStats, RECENT_TASKS};
use techflow_core::Task;

use crate::components::{task_status_class, StatCard};
use crate::context::use_session;
use crate::routes::Route;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let limit = session.config().list_limit;

    let (stats, set_stats) = signal(DashboardStats::default());
    let (recent, set_recent) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match session.api().list_tasks_and_projects(limit).await {
                Ok((tasks, projects)) => {
                    let report = compute_dashboard_stats(&tasks, &projects, chrono::Utc::now());
                    for anomaly in &report.anomalies {
                        tracing::warn!(%anomaly, "skipped task in overdue count");
                    }
                    set_stats.set(report.stats);
                    set_recent.set(recent_tasks(&tasks, RECENT_TASKS));
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to load dashboard data");
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="loading">"Loading dashboard..."</div> }
        >
            <div class="stats-grid">
                <StatCard title="Active Projects" value=Signal::derive(move || stats.get().total_projects) accent="accent-blue"/>
                <StatCard title="Pending Tasks" value=Signal::derive(move || stats.get().pending_tasks) accent="accent-yellow"/>
                <StatCard title="Completed" value=Signal::derive(move || stats.get().completed_tasks) accent="accent-green"/>
                <StatCard title="Overdue" value=Signal::derive(move || stats.get().overdue_tasks) accent="accent-red"/>
            </div>

            <div class="dashboard-columns">
                <section class="card">
                    <h3>"Recent Tasks"</h3>
                    <Show
                        when=move || recent.with(|tasks| !tasks.is_empty())
                        fallback=|| view! { <p class="empty-state">"No tasks yet."</p> }
                    >
                        <ul class="recent-tasks">
                            <For
                                each=move || recent.get()
                                key=|task| task.id.clone()
                                children=move |task| {
                                    let class = if task.priority.is_elevated() {
                                        "recent-task elevated"
                                    } else {
                                        "recent-task"
                                    };
                                    view! {
                                        <li class=class>
                                            <div>
                                                <p class="task-title">{task.title.clone()}</p>
                                                <p class="task-due">{display_due_date(&task.due_date)}</p>
                                            </div>
                                            <span class=task_status_class(task.status)>{task.status.label()}</span>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </section>

                <section class="card quick-actions">
                    <h3>"Quick Actions"</h3>
                    <button class="action-btn" on:click=move |_| session.navigate(Route::Projects)>
                        "Manage projects"
                    </button>
                    <button class="action-btn" on:click=move |_| session.navigate(Route::Tasks)>
                        "Go to tasks"
                    </button>
                </section>
            </div>
        </Show>
    }
}
