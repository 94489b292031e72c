//! Login View

use leptos::prelude::*;
use leptos::task::spawn_local;
use techflow_core::ApiError;

use crate::context::use_session;
use crate::routes::Route;

/// Message shown for a failed sign-in
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized => "Invalid email or password".to_string(),
        ApiError::Network(_) => "Could not reach the server".to_string(),
        ApiError::Validation(message) => message.clone(),
        _ => "Sign in failed, please try again".to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();
        if email.is_empty() || password.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let result = session.api().login(&email, &password).await;
            set_submitting.set(false);
            match result {
                Ok(auth) => {
                    tracing::info!(user = %auth.user.email, "signed in");
                    session.login(auth);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "sign in failed");
                    set_error.set(Some(login_error_message(&e)));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"TechFlow"</h1>
                <p class="auth-subtitle">"Sign in to your account"</p>

                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                <form class="entity-form" on:submit=on_submit>
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
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "No account yet? "
                    <button class="link-btn" on:click=move |_| session.navigate(Route::Register)>
                        "Create one"
                    </button>
                </p>
            </div>
        </div>
    }
}
