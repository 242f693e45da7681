//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render decisions computed elsewhere (`util::auth`) and read
//! shared state from context; they do not talk to storage on their own except
//! through the session repository.

pub mod app_shell;
pub mod guards;
pub mod sidebar;
