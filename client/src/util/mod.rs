//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold pure logic pulled out of components (access
//! decisions, list rendering) so it can be unit tested without a browser.

pub mod auth;
pub mod table;
