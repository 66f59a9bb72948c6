//! Per-connection worker.
//!
//! Owns one accepted socket end-to-end: every line the framer yields is
//! decoded, dispatched, and answered before the next one is read. A bad
//! line never ends the session; only stream-level faults do, and those are
//! normal lifecycle, not escalated errors.

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

use aubus_core::error::ErrorCode;
use aubus_core::protocol::{codec, envelope::Response};

use crate::dispatch::Dispatcher;
use crate::transport::framer::LineFramer;

/// Ephemeral state for one accepted connection.
pub struct Connection {
    peer: SocketAddr,
    framer: LineFramer<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    dispatcher: Arc<Dispatcher>,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, dispatcher: Arc<Dispatcher>) -> Self {
        let (read_half, writer) = stream.into_split();
        Self {
            peer,
            framer: LineFramer::new(read_half),
            writer,
            dispatcher,
        }
    }

    /// Run the request/response loop until the peer goes away.
    ///
    /// Responses are written strictly in request order. The socket is
    /// released exactly once when both halves drop at the end of this call;
    /// close failures are swallowed by drop.
    pub async fn run(mut self) {
        tracing::info!(peer = %self.peer, "client connected");
        let mut lines = 0u64;
        let mut errors = 0u64;

        loop {
            let line = match self.framer.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    // Reset / broken pipe: the peer went away mid-read.
                    tracing::info!(peer = %self.peer, error = %e, "client reset");
                    break;
                }
            };

            if line.is_empty() {
                tracing::debug!(peer = %self.peer, "blank line ignored");
                continue;
            }
            lines += 1;

            let response = match codec::decode(&line) {
                Ok(envelope) => self.dispatcher.dispatch(envelope).await,
                Err(e) => {
                    tracing::warn!(peer = %self.peer, error = %e, "bad json");
                    Response::error(ErrorCode::BadJson, "Invalid JSON line", Value::Null)
                }
            };
            if response.msg_type == "ERROR" {
                errors += 1;
            }

            let encoded = match codec::encode(&response) {
                Ok(encoded) => encoded,
                Err(e) => {
                    tracing::error!(peer = %self.peer, error = %e, "encode failed");
                    continue;
                }
            };
            if let Err(e) = self.writer.write_all(encoded.as_bytes()).await {
                tracing::info!(peer = %self.peer, error = %e, "client reset during write");
                break;
            }
            tracing::debug!(peer = %self.peer, response = %response.msg_type, "reply sent");
        }

        tracing::info!(peer = %self.peer, lines, errors, "client disconnected");
    }
}
