//! Top-level facade crate for gaugehub.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use gaugehub_core::*;
}

pub mod server {
    pub use gaugehub_server::*;
}
