//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session` persistence, `permissions`, the
//! `auth` phase machine, console `sections`, `ui` chrome) so guards and pages
//! depend on small focused models.

pub mod auth;
pub mod permissions;
pub mod sections;
pub mod session;
pub mod ui;
