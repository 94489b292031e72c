//! Team View

use leptos::prelude::*;
use leptos::task::spawn_local;
use techflow_core::TeamMember;

use crate::context::use_session;

#[component]
pub fn TeamPage() -> impl IntoView {
    let session = use_session();

    let (members, set_members) = signal(Vec::<TeamMember>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match session.api().list_team_members().await {
                Ok(loaded) => set_members.set(loaded),
                Err(e) => {
                    tracing::error!(error = %e, "failed to load team members");
                    set_error.set(Some("Could not load team members.".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page-header">
            <h1>"Team"</h1>
            <span class="badge badge-blue">{move || format!("{} members", members.with(|m| m.len()))}</span>
        </div>

        {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="loading">"Loading team..."</div> }
        >
            <Show
                when=move || members.with(|m| !m.is_empty()) || error.with(|e| e.is_some())
                fallback=|| view! { <p class="empty-state">"No team members yet."</p> }
            >
                <div class="card-grid">
                    <For
                        each=move || members.get()
                        key=|member| member.id.clone()
                        children=|member| view! {
                            <div class="card member-card">
                                <div class="avatar">{member.initial()}</div>
                                <div>
                                    <p class="member-name">{member.name.clone()}</p>
                                    <p class="member-email">{member.email.clone()}</p>
                                </div>
                            </div>
                        }
                    />
                </div>
            </Show>
        </Show>
    }
}
