use super::*;

fn prefs(ids: &[&str], has_onboarded: bool) -> UserPreferences {
    UserPreferences { subjects: ids.iter().map(|id| SubjectPreference::new(*id)).collect(), has_onboarded }
}

// =============================================================
// UserPreferences
// =============================================================

#[test]
fn default_preferences_are_not_configured() {
    let p = UserPreferences::default();
    assert!(p.subjects.is_empty());
    assert!(!p.has_onboarded);
    assert!(!p.is_configured());
}

#[test]
fn onboarded_sets_flag_and_keeps_order() {
    let p = UserPreferences::onboarded(vec![SubjectPreference::new("physics"), SubjectPreference::new("cs")]);
    assert!(p.has_onboarded);
    assert_eq!(p.subject_ids(), vec!["physics".to_owned(), "cs".to_owned()]);
}

#[test]
fn onboarded_with_no_subjects_is_not_configured() {
    assert!(!UserPreferences::onboarded(Vec::new()).is_configured());
}

#[test]
fn serializes_with_camel_case_flag() {
    let json = serde_json::to_value(prefs(&["cs"], true)).unwrap();
    assert_eq!(json, serde_json::json!({ "subjects": [{ "subject": "cs" }], "hasOnboarded": true }));
}

#[test]
fn missing_flag_fails_to_parse() {
    assert!(serde_json::from_str::<UserPreferences>(r#"{"subjects":[]}"#).is_err());
}

// =============================================================
// resolve_home_view
// =============================================================

#[test]
fn loading_wins_over_everything() {
    assert_eq!(resolve_home_view(true, Some(&prefs(&["cs"], true))), HomeView::Loading);
    assert_eq!(resolve_home_view(true, None), HomeView::Loading);
}

#[test]
fn no_preferences_shows_empty_onboarding() {
    assert_eq!(resolve_home_view(false, None), HomeView::Onboarding { initial: Vec::new() });
}

#[test]
fn configured_preferences_show_feed_tags() {
    assert_eq!(
        resolve_home_view(false, Some(&prefs(&["cs"], true))),
        HomeView::Feed { interests: vec!["cs".to_owned()] }
    );
}

#[test]
fn not_onboarded_reopens_selection_with_saved_subjects() {
    assert_eq!(
        resolve_home_view(false, Some(&prefs(&["biology"], false))),
        HomeView::Onboarding { initial: vec![SubjectPreference::new("biology")] }
    );
}

#[test]
fn onboarded_but_empty_falls_back_to_onboarding() {
    assert_eq!(
        resolve_home_view(false, Some(&prefs(&[], true))),
        HomeView::Onboarding { initial: Vec::new() }
    );
}
