//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod bookmarks;
pub mod home;
pub mod not_found;
pub mod paper;
