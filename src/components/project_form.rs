//! Project Form Component
//!
//! Create/edit form for a single project. Owns its draft; the caller
//! re-fetches on `on_success`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use techflow_core::forms::{submit_label, ProjectDraft};
use techflow_core::{Project, ProjectStatus};

use crate::context::use_session;

#[component]
pub fn ProjectForm(
    existing: Option<Project>,
    #[prop(into)] on_success: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let editing_id = existing.as_ref().map(|p| p.id.clone());
    let is_edit = editing_id.is_some();
    let draft = RwSignal::new(ProjectDraft::seed(existing.as_ref()));
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
                Some(id) => api.update_project(id, &payload).await,
                None => api.create_project(&payload).await,
            };
            set_submitting.set(false);
            match result {
                Ok(()) => {
                    tracing::info!(name = %payload.name, "project saved");
                    on_success.run(());
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to save project");
                    set_error.set(Some(format!("Could not save the project: {}", e)));
                }
            }
        });
    };

    view! {
        <form class="entity-form" on:submit=on_submit>
            {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

            <label>
                "Project name"
                <input
                    type="text"
                    required
                    placeholder="e.g. Website redesign"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </label>

            <label>
                "Description"
                <textarea
                    rows="3"
                    placeholder="Scope details..."
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </label>

            <label>
                "Status"
                <select
                    prop:value=move || draft.with(|d| d.status.as_str())
                    on:change=move |ev| {
                        let status = ProjectStatus::parse(&event_target_value(&ev)).unwrap_or_default();
                        draft.update(|d| d.status = status);
                    }
                >
                    {ProjectStatus::ALL.iter().map(|status| {
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

            <div class="form-actions">
                <button type="submit" disabled=move || submitting.get()>
                    {move || submit_label(submitting.get(), is_edit, "Create Project")}
                </button>
            </div>
        </form>
    }
}
