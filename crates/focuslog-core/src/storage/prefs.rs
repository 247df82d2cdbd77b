//! User preference strings.
//!
//! Preferences live in the same key-value store as the history, one string
//! per key. Reads fail soft to the defaults (dark theme, clock-only mode
//! off); only writes surface errors.

use serde::{Deserialize, Serialize};

use super::KvStore;
use crate::error::StoreError;

pub const THEME_KEY: &str = "theme_preference";
pub const CLOCK_ONLY_KEY: &str = "clock_only_mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Typed wrapper over the preference keys.
#[derive(Debug)]
pub struct Preferences<S: KvStore> {
    store: S,
}

impl<S: KvStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn theme(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_default(),
            _ => Theme::default(),
        }
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    pub fn clock_only_mode(&self) -> bool {
        matches!(self.store.get(CLOCK_ONLY_KEY), Ok(Some(v)) if v == "true")
    }

    pub fn set_clock_only_mode(&self, enabled: bool) -> Result<(), StoreError> {
        self.store
            .set(CLOCK_ONLY_KEY, if enabled { "true" } else { "false" })
    }
}
