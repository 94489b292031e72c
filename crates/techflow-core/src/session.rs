//! Session State
//!
//! The token lives in a [`TokenStore`] so it survives reloads; the user is
//! only known after a login in this page lifetime.

use std::sync::{Arc, Mutex};

use crate::models::{AuthResponse, User};

/// Persistent slot for the bearer token
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory store, for tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// Current user and whether a token is held
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub has_token: bool,
}

impl SessionState {
    /// Restore from persisted storage on startup
    pub fn restore(store: &impl TokenStore) -> Self {
        let has_token = store.load().is_some_and(|token| !token.is_empty());
        tracing::debug!(has_token, "session restored");
        Self { user: None, has_token }
    }

    /// Persist the token of a successful login
    pub fn establish(store: &impl TokenStore, auth: AuthResponse) -> Self {
        store.save(&auth.token);
        tracing::info!(user = %auth.user.email, "signed in");
        Self { user: Some(auth.user), has_token: true }
    }

    /// Forget the token and user
    pub fn teardown(store: &impl TokenStore) -> Self {
        store.clear();
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.has_token
    }

    /// Name shown in the header
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("User")
    }
}
