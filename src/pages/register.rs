//! Register View

use leptos::prelude::*;
use leptos::task::spawn_local;
use techflow_core::api::RegisterRequest;
use techflow_core::ApiError;

use crate::context::use_session;
use crate::routes::Route;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let name = name.get_untracked().trim().to_string();
        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            set_error.set(Some("All fields are required".to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let request = RegisterRequest {
                name: &name,
                email: &email,
                password: &password,
            };
            let result = session.api().register(&request).await;
            set_submitting.set(false);
            match result {
                Ok(()) => {
                    tracing::info!(email = %email, "account created");
                    session.flash("Account created. Please sign in.");
                    session.navigate(Route::Login);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "registration failed");
                    let message = match e {
                        ApiError::Validation(message) => message,
                        ApiError::Network(_) => "Could not reach the server".to_string(),
                        _ => "Could not create the account".to_string(),
                    };
                    set_error.set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"TechFlow"</h1>
                <p class="auth-subtitle">"Create your account"</p>

                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                <form class="entity-form" on:submit=on_submit>
                    <label>
                        "Name"
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            required
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            required
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already have an account? "
                    <button class="link-btn" on:click=move |_| session.navigate(Route::Login)>
                        "Sign in"
                    </button>
                </p>
            </div>
        </div>
    }
}
