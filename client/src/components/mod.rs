//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the onboarding surfaces; pages own persistence and
//! decide which components to show.

pub mod subject_card;
pub mod subject_selection;
