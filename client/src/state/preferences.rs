//! Persisted user preferences and home-route view resolution.
//!
//! DESIGN
//! ======
//! `UserPreferences` is the single record written to client storage. The
//! home page never inspects it directly; it asks `resolve_home_view` which
//! screen to show, keeping the onboarding rules in one testable place.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

use super::subjects::SubjectPreference;

/// The persisted preference record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub subjects: Vec<SubjectPreference>,
    pub has_onboarded: bool,
}

impl UserPreferences {
    /// Record produced when the user finishes subject selection.
    #[must_use]
    pub fn onboarded(subjects: Vec<SubjectPreference>) -> Self {
        Self { subjects, has_onboarded: true }
    }

    /// Whether the feed can be shown: onboarded with at least one subject.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.has_onboarded && !self.subjects.is_empty()
    }

    /// Subject ids in stored order, for interest tags.
    #[must_use]
    pub fn subject_ids(&self) -> Vec<String> {
        self.subjects.iter().map(|p| p.subject.clone()).collect()
    }
}

/// Which screen the home route renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HomeView {
    /// Persisted preferences have not been read yet.
    Loading,
    /// Subject selection, seeded with any previously chosen subjects.
    Onboarding { initial: Vec<SubjectPreference> },
    /// Feed placeholder tagged with the chosen subject ids.
    Feed { interests: Vec<String> },
}

/// Decide the home screen from the load flag and current preferences.
#[must_use]
pub fn resolve_home_view(loading: bool, preferences: Option<&UserPreferences>) -> HomeView {
    if loading {
        return HomeView::Loading;
    }
    match preferences {
        Some(prefs) if prefs.is_configured() => HomeView::Feed { interests: prefs.subject_ids() },
        other => HomeView::Onboarding { initial: other.map(|p| p.subjects.clone()).unwrap_or_default() },
    }
}
