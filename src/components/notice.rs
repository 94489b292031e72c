use leptos::prelude::*;

use crate::context::use_session;

/// Transient app-wide notice, dismissable by hand
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let session = use_session();

    view! {
        {move || session.notice.get().map(|message| view! {
            <div class="notice" role="status">
                <span>{message}</span>
                <button class="notice-close" on:click=move |_| session.notice.set(None)>"×"</button>
            </div>
        })}
    }
}
