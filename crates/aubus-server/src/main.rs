//! AUBus server binary.
//!
//! Accepts concurrent TCP clients speaking newline-delimited JSON envelopes
//! (`{"type": ..., "id": ..., "payload": {...}}`) and answers PING with
//! PONG. Future phases add REGISTER, LOGIN, RIDE_REQUEST, etc. as
//! additional dispatch entries.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use aubus_server::config::{self, ServerConfig};
use aubus_server::dispatch::Dispatcher;
use aubus_server::services;
use aubus_server::transport;

/// AUBus minimal JSON Lines server.
#[derive(Debug, Parser)]
#[command(name = "aubus-server")]
struct Args {
    /// Host/IP to bind.
    #[arg(long, default_value = config::DEFAULT_HOST)]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Logging level (DEBUG, INFO, WARNING, ERROR).
    #[arg(long, default_value = config::DEFAULT_LOG)]
    log: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let cfg = ServerConfig {
        host: args.host,
        port: args.port,
        log: args.log,
    };

    // RUST_LOG wins when set; otherwise the --log flag decides.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_directive()));
    fmt().with_env_filter(filter).init();

    cfg.validate().expect("invalid server configuration");

    let dispatcher = Arc::new(Dispatcher::new());
    services::register_builtin(&dispatcher).expect("service registration failed");

    transport::serve(&cfg.host, cfg.port, dispatcher)
        .await
        .expect("server failed");
}
