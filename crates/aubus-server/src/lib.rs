//! AUBus server library entry.
//!
//! This crate wires the TCP transport, the dispatcher, and the built-in
//! services into a cohesive JSON Lines server stack. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod config;
pub mod dispatch;
pub mod services;
pub mod transport;
