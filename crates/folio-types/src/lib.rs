//! Foundation types for folio.
//!
//! Shared by every folio crate: the error enum, platform-agnostic input
//! events, and the frontend configuration.

pub mod config;
pub mod error;
pub mod input;
