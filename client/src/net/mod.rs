//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds requests and classifies replies, `transport` is the seam that
//! actually sends them, `types` defines the login wire schema and `error`
//! the closed error enums shared by both.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
