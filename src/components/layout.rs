//! Layout Component
//!
//! Sidebar navigation and header around every signed-in view.

use leptos::prelude::*;

use crate::context::use_session;
use crate::routes::Route;

#[component]
pub fn Layout(current: Route, children: Children) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <div class="sidebar-brand">"TechFlow"</div>
                <nav class="sidebar-nav">
                    {Route::NAV.iter().map(|route| {
                        let route = *route;
                        view! {
                            <button
                                class=if route == current { "nav-item active" } else { "nav-item" }
                                on:click=move |_| session.navigate(route)
                            >
                                {route.label()}
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </aside>

            <main class="main-content">
                <header class="main-header">
                    <h2>{move || format!("Hello, {}", session.state.with(|s| s.display_name().to_string()))}</h2>
                    <button class="link-btn danger" on:click=move |_| session.logout()>
                        "Sign out"
                    </button>
                </header>
                <div class="page">
                    {children()}
                </div>
            </main>
        </div>
    }
}
