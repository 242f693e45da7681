//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; access control happens before a
//! page renders, in `components::guards`.

pub mod dashboard;
pub mod login;
pub mod section;
pub mod unauthorized;
