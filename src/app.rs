//! TechFlow Frontend App
//!
//! Root component: provides the session and switches between views.

use leptos::prelude::*;
use techflow_core::AppConfig;

use crate::components::{Layout, NoticeBanner};
use crate::context::SessionContext;
use crate::pages::{DashboardPage, LoginPage, ProjectsPage, RegisterPage, TasksPage, TeamPage};
use crate::routes::Route;

#[component]
pub fn App() -> impl IntoView {
    let session = SessionContext::new(AppConfig::load());
    provide_context(session);

    // Re-run the guard whenever the session changes under the current route
    let current = Memo::new(move |_| Route::resolve(session.route.get(), session.is_authenticated()));

    view! {
        <NoticeBanner/>
        {move || match current.get() {
            Route::Login => view! { <LoginPage/> }.into_any(),
            Route::Register => view! { <RegisterPage/> }.into_any(),
            route => view! {
                <Layout current=route>
                    {match route {
                        Route::Projects => view! { <ProjectsPage/> }.into_any(),
                        Route::Tasks => view! { <TasksPage/> }.into_any(),
                        Route::Team => view! { <TeamPage/> }.into_any(),
                        _ => view! { <DashboardPage/> }.into_any(),
                    }}
                </Layout>
            }.into_any(),
        }}
    }
}
