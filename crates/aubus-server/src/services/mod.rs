//! Built-in message services.
//!
//! Future message kinds (REGISTER, LOGIN, RIDE_REQUEST, ...) plug in here as
//! additional `MessageHandler` implementations.

pub mod ping;

pub use ping::PingService;

use std::sync::Arc;

use aubus_core::error::Result;

use crate::dispatch::Dispatcher;

/// Register every built-in service on the dispatcher.
pub fn register_builtin(dispatcher: &Dispatcher) -> Result<()> {
    dispatcher.register(Arc::new(PingService::new()))
}
