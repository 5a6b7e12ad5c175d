use super::*;

fn ids(state: &SelectionState) -> Vec<&str> {
    state.selected().iter().map(String::as_str).collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn default_state_is_empty_and_cannot_complete() {
    let state = SelectionState::default();
    assert_eq!(state.selected_count(), 0);
    assert_eq!(state.expanded(), None);
    assert!(!state.can_complete());
    assert_eq!(state.complete(), None);
}

#[test]
fn new_seeds_from_initial_preferences() {
    let state = SelectionState::new(&[SubjectPreference::new("chemistry"), SubjectPreference::new("cs")]);
    assert_eq!(ids(&state), ["chemistry", "cs"]);
    assert!(state.can_complete());
}

#[test]
fn new_drops_duplicates_and_unknown_ids() {
    let state = SelectionState::new(&[
        SubjectPreference::new("cs"),
        SubjectPreference::new("alchemy"),
        SubjectPreference::new("cs"),
    ]);
    assert_eq!(ids(&state), ["cs"]);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_adds_then_removes() {
    let mut state = SelectionState::default();
    state.toggle("physics");
    assert!(state.is_selected("physics"));
    state.toggle("physics");
    assert!(!state.is_selected("physics"));
    assert_eq!(state, SelectionState::default());
}

#[test]
fn toggle_sequence_applies_symmetric_difference() {
    let mut state = SelectionState::default();
    for id in ["cs", "physics", "cs", "biology", "economics", "physics", "cs"] {
        state.toggle(id);
    }
    assert_eq!(ids(&state), ["biology", "economics", "cs"]);
}

#[test]
fn toggle_ignores_ids_outside_catalog() {
    let mut state = SelectionState::default();
    state.toggle("alchemy");
    assert_eq!(state.selected_count(), 0);
}

#[test]
fn deselecting_expanded_subject_clears_expansion() {
    let mut state = SelectionState { selected: vec!["cs".to_owned(), "physics".to_owned()], expanded: Some("cs".to_owned()) };
    state.toggle("cs");
    assert_eq!(state.expanded(), None);
    assert_eq!(ids(&state), ["physics"]);
}

#[test]
fn toggling_other_subjects_keeps_expansion() {
    let mut state = SelectionState { selected: vec!["cs".to_owned(), "physics".to_owned()], expanded: Some("cs".to_owned()) };
    state.toggle("physics");
    state.toggle("biology");
    state.toggle("physics");
    assert_eq!(state.expanded(), Some("cs"));
}

#[test]
fn selecting_never_sets_expansion() {
    let mut state = SelectionState::default();
    state.toggle("cs");
    assert_eq!(state.expanded(), None);
}

// =============================================================
// Complete
// =============================================================

#[test]
fn complete_emits_one_record_per_selected_subject() {
    let mut state = SelectionState::default();
    state.toggle("physics");
    state.toggle("biology");

    let prefs = state.complete().unwrap();
    assert_eq!(prefs, vec![SubjectPreference::new("physics"), SubjectPreference::new("biology")]);
    assert!(prefs.iter().all(|p| p.subcategories.is_none()));
}

#[test]
fn complete_covers_whole_catalog_without_duplicates() {
    let mut state = SelectionState::default();
    for subject in &RESEARCH_SUBJECTS {
        state.toggle(subject.id);
    }
    let prefs = state.complete().unwrap();
    assert_eq!(prefs.len(), RESEARCH_SUBJECTS.len());
    let unique: std::collections::HashSet<&str> = prefs.iter().map(|p| p.subject.as_str()).collect();
    assert_eq!(unique.len(), prefs.len());
    assert!(prefs.iter().all(|p| find_subject(&p.subject).is_some()));
}

#[test]
fn complete_leaves_state_untouched() {
    let mut state = SelectionState::default();
    state.toggle("cs");
    let before = state.clone();
    let _ = state.complete();
    assert_eq!(state, before);
}

// =============================================================
// Derived view data
// =============================================================

#[test]
fn preview_truncates_to_three_with_remaining_count() {
    let cs = find_subject("cs").unwrap();
    let preview = subcategory_preview(cs).unwrap();
    assert_eq!(preview.shown, ["Artificial Intelligence", "Machine Learning", "Computer Vision"]);
    assert_eq!(preview.remaining, 7);
    assert_eq!(preview.label(), "Artificial Intelligence, Machine Learning, Computer Vision");
    assert_eq!(preview.more_label().as_deref(), Some("+7 more"));
}

#[test]
fn preview_of_short_list_has_no_more_label() {
    let short = SubjectCategory { id: "x", name: "X", description: "", subcategories: Some(&["A", "B"]) };
    let preview = subcategory_preview(&short).unwrap();
    assert_eq!(preview.label(), "A, B");
    assert_eq!(preview.remaining, 0);
    assert_eq!(preview.more_label(), None);
}

#[test]
fn preview_absent_without_subcategories() {
    let bare = SubjectCategory { id: "x", name: "X", description: "", subcategories: None };
    assert_eq!(subcategory_preview(&bare), None);
    let empty = SubjectCategory { subcategories: Some(&[]), ..bare };
    assert_eq!(subcategory_preview(&empty), None);
}

#[test]
fn cards_follow_catalog_order_and_preview_only_selected() {
    let mut state = SelectionState::default();
    state.toggle("social");

    let cards = subject_cards(&state);
    assert_eq!(cards.len(), RESEARCH_SUBJECTS.len());
    assert_eq!(cards[0].id, "cs");
    assert!(!cards[0].selected);
    assert!(cards[0].preview.is_none());

    let social = cards.iter().find(|c| c.id == "social").unwrap();
    assert!(social.selected);
    assert_eq!(social.preview.as_ref().and_then(SubcategoryPreview::more_label).as_deref(), Some("+2 more"));
}

#[test]
fn summary_prompts_at_zero_and_pluralizes() {
    assert_eq!(selection_summary(0), "Select at least one subject to continue");
    assert_eq!(selection_summary(1), "1 subject selected");
    assert_eq!(selection_summary(2), "2 subjects selected");
    assert_eq!(selection_summary(9), "9 subjects selected");
}
