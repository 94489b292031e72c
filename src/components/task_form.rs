//! Task Form Component
//!
//! Create/edit form for a single task. New tasks default to the first
//! project, today's date, MEDIUM priority and TODO status.

use leptos::prelude::*;
use leptos::task::spawn_local;
use techflow_core::forms::{submit_label, TaskDraft};
use techflow_core::{Project, Task, TaskPriority, TaskStatus};

use crate::context::use_session;

#[component]
pub fn TaskForm(
    existing: Option<Task>,
    /// Choices for the project select
    projects: Vec<Project>,
    #[prop(into)] on_success: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let editing_id = existing.as_ref().map(|t| t.id.clone());
    let is_edit = editing_id.is_some();
    let draft = RwSignal::new(TaskDraft::seed(existing.as_ref(), &projects, chrono::Utc::now()));
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let payload = match draft.with_untracked(|d| d.validate()) {
            Ok(payload) => payload,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_submitting.set(true);

        let editing_id = editing_id.clone();
        spawn_local(async move {
            let api = session.api();
            let result = match &editing_id {
                Some(id) => api.update_task(id, &payload).await,
                None => api.create_task(&payload).await,
            };
            set_submitting.set(false);
            match result {
                Ok(()) => {
                    tracing::info!(title = %payload.title, "task saved");
                    on_success.run(());
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to save task");
                    set_error.set(Some(format!("Could not save the task: {}", e)));
                }
            }
        });
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

            <label>
                "Title"
                <input
                    type="text"
                    required
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
            </label>

            <label>
                "Description"
                <textarea
                    rows="3"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </label>

            <div class="form-row">
                <label>
                    "Project"
                    <select
                        required
                        prop:value=move || draft.with(|d| d.project_id.clone())
                        on:change=move |ev| draft.update(|d| d.project_id = event_target_value(&ev))
                    >
                        <option value="" disabled>"Select..."</option>
                        {projects.into_iter().map(|project| {
                            let id = project.id.clone();
                            view! {
                                <option
                                    value=project.id
                                    selected=move || draft.with(|d| d.project_id == id)
                                >
                                    {project.name}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>

                <label>
                    "Due date"
                    <input
                        type="date"
                        required
                        prop:value=move || draft.with(|d| d.due_date.clone())
                        on:input=move |ev| draft.update(|d| d.due_date = event_target_value(&ev))
                    />
                </label>
            </div>

            <div class="form-row">
                <label>
                    "Priority"
                    <select
                        prop:value=move || draft.with(|d| d.priority.as_str())
                        on:change=move |ev| {
                            let priority = TaskPriority::parse(&event_target_value(&ev)).unwrap_or_default();
                            draft.update(|d| d.priority = priority);
                        }
                    >
                        {TaskPriority::ALL.iter().map(|priority| {
                            let priority = *priority;
                            view! {
                                <option
                                    value=priority.as_str()
                                    selected=move || draft.with(|d| d.priority == priority)
                                >
                                    {priority.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>

                <label>
                    "Status"
                    <select
                        prop:value=move || draft.with(|d| d.status.as_str())
                        on:change=move |ev| {
                            let status = TaskStatus::parse(&event_target_value(&ev)).unwrap_or_default();
                            draft.update(|d| d.status = status);
                        }
                    >
                        {TaskStatus::ALL.iter().map(|status| {
                            let status = *status;
                            view! {
                                <option
                                    value=status.as_str()
                                    selected=move || draft.with(|d| d.status == status)
                                >
                                    {status.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <div class="form-actions">
                <button type="submit" disabled=move || submitting.get()>
                    {move || submit_label(submitting.get(), is_edit, "Create")}
                </button>
            </div>
        </form>
    }
}
