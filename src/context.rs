//! Session Context
//!
//! Explicit session object provided at the root via the Leptos Context API.
//! It owns the current user, the active route and the app-wide notice, and
//! builds the API client every view talks through.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use techflow_core::api::ReqwestTransport;
use techflow_core::{ApiClient, AppConfig, AuthResponse, SessionState};

use crate::routes::Route;
use crate::storage::LocalStorageTokens;

pub type Api = ApiClient<ReqwestTransport, LocalStorageTokens>;

/// App-wide session signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current user and token presence
    pub state: RwSignal<SessionState>,
    /// Active view
    pub route: RwSignal<Route>,
    /// Transient message shown above every view
    pub notice: RwSignal<Option<String>>,
    config: StoredValue<AppConfig>,
}

impl SessionContext {
    /// Restore the session from persisted storage
    pub fn new(config: AppConfig) -> Self {
        let tokens = LocalStorageTokens::new(config.token_storage_key.clone());
        let state = SessionState::restore(&tokens);
        let route = Route::resolve(Route::Dashboard, state.is_authenticated());
        Self {
            state: RwSignal::new(state),
            route: RwSignal::new(route),
            notice: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    fn tokens(&self) -> LocalStorageTokens {
        LocalStorageTokens::new(self.config.with_value(|c| c.token_storage_key.clone()))
    }

    /// Client whose unauthorized responses end this session
    pub fn api(&self) -> Api {
        let session = *self;
        let transport = ReqwestTransport::new(self.config.with_value(|c| c.api_base_url.clone()));
        ApiClient::new(transport, self.tokens()).on_unauthorized(move || session.expire())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated())
    }

    /// Navigate, subject to the route guard
    pub fn navigate(&self, route: Route) {
        let authenticated = self.state.with_untracked(|s| s.is_authenticated());
        self.route.set(Route::resolve(route, authenticated));
    }

    pub fn login(&self, auth: AuthResponse) {
        self.state.set(SessionState::establish(&self.tokens(), auth));
        self.navigate(Route::Dashboard);
    }

    pub fn logout(&self) {
        self.state.set(SessionState::teardown(&self.tokens()));
        tracing::info!("signed out");
        self.navigate(Route::Login);
    }

    /// Unauthorized response: drop the session and send the user to Login
    fn expire(&self) {
        if !self.state.with_untracked(|s| s.is_authenticated()) {
            return;
        }
        self.logout();
        self.flash("Your session has expired, please sign in again");
    }

    /// Show a notice that disappears after the configured delay
    pub fn flash(&self, message: impl Into<String>) {
        let message = message.into();
        let notice = self.notice;
        let delay = self.config.with_value(|c| c.notice_ms);
        notice.set(Some(message.clone()));
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            // Only clear our own message
            if notice.try_get_untracked().flatten().as_deref() == Some(message.as_str()) {
                notice.set(None);
            }
        });
    }
}

/// Get the session from context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
