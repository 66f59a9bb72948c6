//! Top-level facade crate for AUBus.
//!
//! Re-exports the core protocol types and the server library so users can
//! depend on a single crate.

pub mod core {
    pub use aubus_core::*;
}

pub mod server {
    pub use aubus_server::*;
}
