//! Best-effort persistence of `UserPreferences`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page reads preferences once at mount and writes them once per
//! completed subject selection. Storage may be missing (SSR) or may fail
//! (quota, disabled storage), so nothing here returns an error: reads degrade
//! to `None`, writes degrade to a logged no-op.
//!
//! TRADE-OFFS
//! ==========
//! A failed save is not retried. The worst case is the user picking subjects
//! again on the next visit.

#[cfg(test)]
#[path = "preference_store_test.rs"]
mod preference_store_test;

use super::storage::{BrowserStorage, KeyValueStore, StorageError};
use crate::state::preferences::UserPreferences;

/// Storage key holding the JSON preference record.
pub const PREFERENCES_KEY: &str = "scifeed_preferences";

/// Preference persistence over any `KeyValueStore`.
#[derive(Clone, Debug, Default)]
pub struct PreferenceStore<S> {
    storage: S,
}

impl PreferenceStore<BrowserStorage> {
    /// Store backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the saved record. `None` if storage is missing, nothing was
    /// saved, or the payload is malformed.
    pub fn load(&self) -> Option<UserPreferences> {
        let raw = match self.storage.get(PREFERENCES_KEY) {
            Ok(Some(raw)) if !is_blank_payload(&raw) => raw,
            Ok(_) => return None,
            Err(e) => {
                report("loading", &e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(preferences) => Some(preferences),
            Err(e) => {
                leptos::logging::error!("Error loading preferences: {e}");
                None
            }
        }
    }

    /// Overwrite the saved record. Failures are logged and swallowed.
    pub fn save(&self, preferences: &UserPreferences) {
        let raw = match serde_json::to_string(preferences) {
            Ok(raw) => raw,
            Err(e) => {
                leptos::logging::error!("Error saving preferences: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(PREFERENCES_KEY, &raw) {
            report("saving", &e);
        }
    }

    /// Remove the saved record. Safe to call when nothing is stored.
    pub fn clear(&self) {
        if let Err(e) = self.storage.delete(PREFERENCES_KEY) {
            report("clearing", &e);
        }
    }

    /// True when a saved record exists and has its onboarding flag set.
    pub fn has_completed_onboarding(&self) -> bool {
        self.load().is_some_and(|p| p.has_onboarded)
    }
}

/// Empty or JSON `null` payloads mean "nothing saved", not corruption.
fn is_blank_payload(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || raw == "null"
}

fn report(action: &str, err: &StorageError) {
    // Missing storage is the normal SSR path, not a failure.
    if matches!(err, StorageError::Unavailable) {
        return;
    }
    leptos::logging::error!("Error {action} preferences: {err}");
}
