//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (catalog, persisted record, onboarding
//! selection) so components depend on small focused models.

pub mod preferences;
pub mod selection;
pub mod subjects;
