//! Listener/acceptor.
//!
//! Binds with SO_REUSEADDR and a bounded backlog, then accepts forever.
//! Each accepted connection runs on its own spawned task and the accept loop
//! immediately re-arms; it never waits on a worker. Shutdown stops the
//! accept loop only: in-flight workers are not joined, process exit
//! reclaims them.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::{TcpListener, TcpSocket};

use aubus_core::error::{BusError, Result};

use crate::config::ServerConfig;
use crate::dispatch::Dispatcher;
use crate::transport::conn::Connection;

/// Max queued connections while the acceptor is busy.
const BACKLOG: u32 = 10;

/// Bound listening socket plus the dispatcher shared with every worker.
pub struct Server {
    listener: TcpListener,
    dispatcher: Arc<Dispatcher>,
}

impl Server {
    /// Bind the listening address. Failure here is startup-fatal.
    pub async fn bind(cfg: &ServerConfig, dispatcher: Arc<Dispatcher>) -> Result<Self> {
        let addr = cfg.socket_addr()?;
        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4(),
            SocketAddr::V6(_) => TcpSocket::new_v6(),
        }
        .map_err(|e| BusError::Internal(format!("socket create failed: {e}")))?;

        // Allow immediate restart of the server after crash/restart.
        socket
            .set_reuseaddr(true)
            .map_err(|e| BusError::Internal(format!("set_reuseaddr failed: {e}")))?;
        socket
            .bind(addr)
            .map_err(|e| BusError::Internal(format!("bind {addr} failed: {e}")))?;
        let listener = socket
            .listen(BACKLOG)
            .map_err(|e| BusError::Internal(format!("listen on {addr} failed: {e}")))?;

        Ok(Self {
            listener,
            dispatcher,
        })
    }

    /// Address actually bound (resolves port 0).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .map_err(|e| BusError::Internal(format!("local_addr failed: {e}")))
    }

    /// Accept forever.
    pub async fn run(self) -> Result<()> {
        self.run_until(std::future::pending::<()>()).await
    }

    /// Accept until `shutdown` resolves.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => {
                            let dispatcher = Arc::clone(&self.dispatcher);
                            // Fire-and-forget: the worker owns the socket
                            // from here on.
                            tokio::spawn(async move {
                                Connection::new(stream, peer, dispatcher).run().await;
                            });
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "accept failed");
                        }
                    }
                }
                _ = &mut shutdown => {
                    tracing::info!("shutdown signal received, no longer accepting");
                    break;
                }
            }
        }
        Ok(())
    }
}

/// Bind `host:port` and serve until the process is interrupted.
pub async fn serve(host: &str, port: u16, dispatcher: Arc<Dispatcher>) -> Result<()> {
    let cfg = ServerConfig {
        host: host.to_owned(),
        port,
        ..ServerConfig::default()
    };
    let server = Server::bind(&cfg, dispatcher).await?;
    if let Ok(addr) = server.local_addr() {
        tracing::info!(%addr, "listening");
    }
    server.run_until(shutdown_signal()).await
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
