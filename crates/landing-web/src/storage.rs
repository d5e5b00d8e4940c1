//! Browser localStorage Store

use landing_core::{KeyValueStore, LandingError, Result};

/// `localStorage`-backed implementation of the persistence seam
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backing() -> Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| LandingError::Storage("localStorage unavailable".into()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::backing()?
            .get_item(key)
            .map_err(|_| LandingError::Storage(format!("failed to read '{key}'")))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::backing()?
            .set_item(key, value)
            .map_err(|_| LandingError::Storage(format!("failed to write '{key}'")))
    }
}
