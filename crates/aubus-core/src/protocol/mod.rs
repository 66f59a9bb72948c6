//! Wire protocol (JSON Lines).
//!
//! One message per newline-terminated line of UTF-8 text, both directions.
//! This module hosts the envelope types, the line codec, and the correlation
//! id validator.
//!
//! All parsers are panic-free: malformed input is reported as `BusError`
//! instead of panicking, keeping the server resilient to hostile traffic.

pub mod codec;
pub mod envelope;
pub mod uuid;
