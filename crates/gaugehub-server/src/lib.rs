//! gaugehub server library entry.
//!
//! Wires the metric registry, agent directory, CRUD API, and exposition
//! endpoint into one server. Consumed by the binary (`main.rs`) and by
//! integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod registry;
pub mod router;
