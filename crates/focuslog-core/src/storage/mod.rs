pub mod database;
pub mod memory;
pub mod prefs;

pub use database::Database;
pub use memory::MemoryStore;
pub use prefs::{Preferences, Theme, CLOCK_ONLY_KEY, THEME_KEY};

use std::path::PathBuf;

use crate::error::StoreError;

/// Opaque string key-value persistence.
///
/// The core only requires get/set/remove semantics; key names are stable
/// within one installation. Implementations: [`Database`] (on-disk) and
/// [`MemoryStore`] (tests and embedded hosts).
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Returns `~/.config/focuslog[-dev]/` based on FOCUSLOG_ENV.
///
/// Set FOCUSLOG_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSLOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focuslog-dev")
    } else {
        base_dir.join("focuslog")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
