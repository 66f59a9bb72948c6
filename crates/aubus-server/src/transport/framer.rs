//! Newline framing over a byte stream.
//!
//! Reassembles complete `\n`-terminated lines out of bounded reads, buffering
//! partial data across reads. A line is emitted only once its terminating
//! newline has been observed; on clean end-of-stream any unterminated
//! trailing bytes are discarded.

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

/// How much to pull from the socket per read.
const RECV_BUFSIZE: usize = 4096;

/// Incremental line reassembly over one connection's read half.
pub struct LineFramer<R> {
    reader: R,
    buf: BytesMut,
    eof: bool,
}

impl<R: AsyncRead + Unpin> LineFramer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: BytesMut::with_capacity(RECV_BUFSIZE),
            eof: false,
        }
    }

    /// Next complete line, with the trailing `\r` and surrounding whitespace
    /// stripped.
    ///
    /// `Ok(None)` means clean end-of-stream. Read errors propagate to the
    /// caller. Bytes that are not valid UTF-8 are replaced with U+FFFD
    /// rather than aborting the stream.
    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        loop {
            // Drain buffered lines before asking the socket for more.
            if let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
                let line = self.buf.split_to(pos + 1);
                let text = String::from_utf8_lossy(&line[..pos]);
                return Ok(Some(text.trim_end_matches('\r').trim().to_owned()));
            }
            if self.eof {
                return Ok(None);
            }

            self.buf.reserve(RECV_BUFSIZE);
            let n = self.reader.read_buf(&mut self.buf).await?;
            if n == 0 {
                self.eof = true;
                // Unterminated trailing bytes are dropped, not emitted.
                self.buf.clear();
                return Ok(None);
            }
        }
    }
}
