//! Subject selection state machine and derived card view data.
//!
//! DESIGN
//! ======
//! `SelectionState` owns the only mutable onboarding state (selected ids and
//! the expanded card). Everything the selection screen renders is computed
//! by pure functions over a snapshot of it, so the component only wires
//! clicks to `toggle` and the Continue button to `complete`.
//!
//! The selected ids keep insertion order; re-selecting an id appends it.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use super::subjects::{RESEARCH_SUBJECTS, SubjectCategory, SubjectPreference, find_subject};

/// Subcategory labels shown on a selected card before collapsing to "+N more".
pub const SUBCATEGORY_PREVIEW_LIMIT: usize = 3;

/// Selected subject ids plus the (currently never set) expanded card id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Vec<String>,
    expanded: Option<String>,
}

impl SelectionState {
    /// Seed from previously saved preferences, dropping duplicates and ids
    /// that are no longer in the catalog.
    #[must_use]
    pub fn new(initial: &[SubjectPreference]) -> Self {
        let mut state = Self::default();
        for pref in initial {
            if find_subject(&pref.subject).is_some() && !state.is_selected(&pref.subject) {
                state.selected.push(pref.subject.clone());
            }
        }
        state
    }

    /// Flip membership of `subject_id`. Ids outside the catalog are ignored.
    pub fn toggle(&mut self, subject_id: &str) {
        if self.is_selected(subject_id) {
            self.selected.retain(|id| id != subject_id);
            if self.expanded.as_deref() == Some(subject_id) {
                self.expanded = None;
            }
        } else if find_subject(subject_id).is_some() {
            self.selected.push(subject_id.to_owned());
        }
    }

    #[must_use]
    pub fn is_selected(&self, subject_id: &str) -> bool {
        self.selected.iter().any(|id| id == subject_id)
    }

    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Continue is enabled only with at least one subject selected.
    #[must_use]
    pub fn can_complete(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Finalize the selection, or `None` while nothing is selected.
    ///
    /// Does not reset state; the caller replaces the selection screen.
    #[must_use]
    pub fn complete(&self) -> Option<Vec<SubjectPreference>> {
        if !self.can_complete() {
            return None;
        }
        Some(self.selected.iter().map(SubjectPreference::new).collect())
    }
}

// =============================================================================
// DERIVED VIEW DATA
// =============================================================================

/// Truncated subcategory list for a selected card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubcategoryPreview {
    pub shown: Vec<&'static str>,
    pub remaining: usize,
}

impl SubcategoryPreview {
    /// Shown labels joined for display, e.g. `"Optics, Algebra, Logic"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.shown.join(", ")
    }

    /// `"+N more"` when labels were cut off.
    #[must_use]
    pub fn more_label(&self) -> Option<String> {
        (self.remaining > 0).then(|| format!("+{} more", self.remaining))
    }
}

/// Everything one subject card renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectCardView {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub selected: bool,
    /// Present only for selected subjects that declare subcategories.
    pub preview: Option<SubcategoryPreview>,
}

/// Preview of a category's subcategories, `None` when it declares none.
#[must_use]
pub fn subcategory_preview(category: &SubjectCategory) -> Option<SubcategoryPreview> {
    let labels = category.subcategories.filter(|labels| !labels.is_empty())?;
    Some(SubcategoryPreview {
        shown: labels.iter().take(SUBCATEGORY_PREVIEW_LIMIT).copied().collect(),
        remaining: labels.len().saturating_sub(SUBCATEGORY_PREVIEW_LIMIT),
    })
}

/// Card view data for every catalog entry, in catalog order.
#[must_use]
pub fn subject_cards(state: &SelectionState) -> Vec<SubjectCardView> {
    RESEARCH_SUBJECTS
        .iter()
        .map(|category| {
            let selected = state.is_selected(category.id);
            SubjectCardView {
                id: category.id,
                name: category.name,
                description: category.description,
                selected,
                preview: if selected { subcategory_preview(category) } else { None },
            }
        })
        .collect()
}

/// Footer text above the Continue button.
#[must_use]
pub fn selection_summary(count: usize) -> String {
    match count {
        0 => "Select at least one subject to continue".to_owned(),
        1 => "1 subject selected".to_owned(),
        n => format!("{n} subjects selected"),
    }
}
