//! Projects View
//!
//! Searchable project cards with create/edit modal and inline delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use techflow_core::filters::filter_projects;
use techflow_core::Project;

use crate::components::{project_status_class, DeleteConfirmButton, FormMode, Modal, ProjectForm};
use crate::context::use_session;
use crate::store::{store_remove_project, ProjectsState, ProjectsStateStoreFields};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let session = use_session();
    let limit = session.config().project_limit;

    let store = Store::new(ProjectsState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (form_mode, set_form_mode) = signal::<Option<FormMode<Project>>>(None);

    // Load projects on mount and after every save
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match session.api().list_projects(limit).await {
                Ok(loaded) => {
                    tracing::debug!(count = loaded.len(), "loaded projects");
                    store.projects().set(loaded);
                }
                Err(e) => tracing::error!(error = %e, "failed to load projects"),
            }
            store.loading().set(false);
        });
    });

    let visible = Memo::new(move |_| {
        let search = store.search().get();
        store.projects().with(|projects| filter_projects(projects, &search))
    });

    let delete_project = move |id: String| {
        spawn_local(async move {
            match session.api().delete_project(&id).await {
                Ok(()) => {
                    store_remove_project(&store, &id);
                    tracing::info!(project_id = %id, "project deleted");
                }
                Err(e) => {
                    tracing::error!(project_id = %id, error = %e, "failed to delete project");
                    session.flash(format!("Could not delete the project: {}", e));
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
            <h1>"Projects"</h1>
            <button class="primary-btn" on:click=move |_| set_form_mode.set(Some(FormMode::Create))>
                "New Project"
            </button>
        </div>

        <input
            class="search-input"
            type="search"
            placeholder="Search by name or status..."
            prop:value=move || store.search().get()
            on:input=move |ev| store.search().set(event_target_value(&ev))
        />

        <Show
            when=move || !store.loading().get()
            fallback=|| view! { <div class="loading">"Loading projects..."</div> }
        >
            <Show
                when=move || visible.with(|projects| !projects.is_empty())
                fallback=|| view! { <p class="empty-state">"No projects found."</p> }
            >
                <div class="card-grid">
                    <For
                        each=move || visible.get()
                        key=|project| (project.id.clone(), project.name.clone(), project.status, project.description.clone())
                        children=move |project| {
                            let id = project.id.clone();
                            let edit_target = project.clone();
                            let description = if project.description.trim().is_empty() {
                                "No description".to_string()
                            } else {
                                project.description.clone()
                            };
                            view! {
                                <div class="card project-card">
                                    <div class="card-header">
                                        <h3>{project.name.clone()}</h3>
                                        <span class=project_status_class(project.status)>{project.status.label()}</span>
                                    </div>
                                    <p class="card-description">{description}</p>
                                    <div class="card-actions">
                                        <button
                                            class="link-btn"
                                            on:click=move |_| set_form_mode.set(Some(FormMode::Edit(edit_target.clone())))
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            prompt="Delete this project?"
                                            on_confirm=move |_| delete_project(id.clone())
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
            let title = if mode.is_edit() { "Edit Project" } else { "New Project" };
            view! {
                <Modal title=title on_close=close_form>
                    <ProjectForm existing=mode.existing().cloned() on_success=on_saved/>
                </Modal>
            }
        })}
    }
}
