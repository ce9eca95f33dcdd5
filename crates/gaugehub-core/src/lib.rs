//! gaugehub core: error taxonomy, validation rules, and JSON wire models.
//!
//! This crate defines the contracts shared by the registry server and any
//! client tooling. It carries no transport or runtime dependencies so it can
//! be reused outside the HTTP service.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every malformed name or value surfaces as `GaugeHubError` instead.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod validate;

/// Shared result type.
pub use error::{GaugeHubError, Result};
