//! Browser Token Storage
//!
//! `localStorage` slot holding the bearer token across reloads.

use techflow_core::TokenStore;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("no window object")]
    NoWindow,
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("localStorage rejected the write")]
    WriteRejected,
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::NoWindow)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

#[derive(Debug, Clone)]
pub struct LocalStorageTokens {
    key: String,
}

impl LocalStorageTokens {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn try_save(&self, token: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(&self.key, token)
            .map_err(|_| StorageError::WriteRejected)
    }

    fn try_clear(&self) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(&self.key)
            .map_err(|_| StorageError::WriteRejected)
    }
}

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        local_storage().ok()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Err(e) = self.try_save(token) {
            warn!(error = %e, "token not persisted");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.try_clear() {
            warn!(error = %e, "token not cleared");
        }
    }
}
