//! Tasks View
//!
//! Task cards filtered by status and priority, with create/edit modal and
//! inline delete. Projects are fetched alongside for names and the form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use techflow_core::dates::display_due_date;
use techflow_core::filters::{filter_tasks, project_name, TaskFilter};
use techflow_core::{Task, TaskPriority, TaskStatus};

use crate::components::{priority_color, task_status_class, DeleteConfirmButton, FormMode, Modal, TaskForm};
use crate::context::use_session;
use crate::store::{store_remove_task, TasksState, TasksStateStoreFields};

#[component]
pub fn TasksPage() -> impl IntoView {
    let session = use_session();
    let limit = session.config().list_limit;

    let store = Store::new(TasksState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (form_mode, set_form_mode) = signal::<Option<FormMode<Task>>>(None);

    // Tasks and projects load together; either failing leaves both unchanged
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match session.api().list_tasks_and_projects(limit).await {
                Ok((tasks, projects)) => {
                    tracing::debug!(tasks = tasks.len(), projects = projects.len(), "loaded tasks");
                    store.tasks().set(tasks);
                    store.projects().set(projects);
                }
                Err(e) => tracing::error!(error = %e, "failed to load tasks"),
            }
            store.loading().set(false);
        });
    });

    let visible = Memo::new(move |_| {
        let filter = TaskFilter::from_selects(&store.status_filter().get(), &store.priority_filter().get());
        store.tasks().with(|tasks| filter_tasks(tasks, &filter))
    });

    let delete_task = move |id: String| {
        spawn_local(async move {
            match session.api().delete_task(&id).await {
                Ok(()) => {
                    store_remove_task(&store, &id);
                    tracing::info!(task_id = %id, "task deleted");
                }
                Err(e) => {
                    tracing::error!(task_id = %id, error = %e, "failed to delete task");
                    session.flash(format!("Could not delete the task: {}", e));
                }
            }
        });
    };

    let close_form = Callback::new(move |_: ()| set_form_mode.set(None));
    let on_saved = Callback::new(move |_: ()| {
        set_form_mode.set(None);
        set_reload_trigger.update(|n| *n += 1);
    });

    view! {
        <div class="page-header">
            <h1>"Tasks"</h1>
            <button class="primary-btn" on:click=move |_| set_form_mode.set(Some(FormMode::Create))>
                "New Task"
            </button>
        </div>

        <div class="filters">
            <select
                prop:value=move || store.status_filter().get()
                on:change=move |ev| store.status_filter().set(event_target_value(&ev))
            >
                <option value="">"All statuses"</option>
                {TaskStatus::ALL.iter().map(|status| view! {
                    <option value=status.as_str()>{status.label()}</option>
                }).collect_view()}
            </select>
            <select
                prop:value=move || store.priority_filter().get()
                on:change=move |ev| store.priority_filter().set(event_target_value(&ev))
            >
                <option value="">"All priorities"</option>
                {TaskPriority::ALL.iter().map(|priority| view! {
                    <option value=priority.as_str()>{priority.label()}</option>
                }).collect_view()}
            </select>
        </div>

        <Show
            when=move || !store.loading().get()
            fallback=|| view! { <div class="loading">"Loading tasks..."</div> }
        >
            <Show
                when=move || visible.with(|tasks| !tasks.is_empty())
                fallback=|| view! { <p class="empty-state">"No tasks match the current filters."</p> }
            >
                <div class="card-grid">
                    <For
                        each=move || visible.get()
                        key=|task| (task.id.clone(), task.title.clone(), task.status, task.priority, task.due_date.clone(), task.project_id.clone(), task.description.clone())
                        children=move |task| {
                            let id = task.id.clone();
                            let edit_target = task.clone();
                            let project = store.projects().with(|projects| {
                                project_name(projects, &task.project_id).to_string()
                            });
                            view! {
                                <div
                                    class="card task-card"
                                    style=format!("border-left-color: {}", priority_color(task.priority))
                                >
                                    <div class="card-header">
                                        <h3>{task.title.clone()}</h3>
                                        <span class=task_status_class(task.status)>{task.status.label()}</span>
                                    </div>
                                    <p class="card-description">{task.description.clone()}</p>
                                    <div class="task-meta">
                                        <span class="task-project">{project}</span>
                                        <span class="task-due">{display_due_date(&task.due_date)}</span>
                                        <span class="task-priority" style=format!("color: {}", priority_color(task.priority))>
                                            {task.priority.label()}
                                        </span>
                                    </div>
                                    <div class="card-actions">
                                        <button
                                            class="link-btn"
                                            on:click=move |_| set_form_mode.set(Some(FormMode::Edit(edit_target.clone())))
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            prompt="Delete this task?"
                                            on_confirm=move |_| delete_task(id.clone())
                                        />
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </Show>

        {move || form_mode.get().map(|mode| {
            let title = if mode.is_edit() { "Edit Task" } else { "New Task" };
            let projects = store.projects().get_untracked();
            view! {
                <Modal title=title on_close=close_form>
                    <TaskForm existing=mode.existing().cloned() projects=projects on_success=on_saved/>
                </Modal>
            }
        })}
    }
}
