//! MessageReader — one newline-terminated line at a time.

use relay_protocol::RelayError;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Buffered line reader over a client's read half.
///
/// Generic over the underlying stream so tests can drive it with an
/// in-memory duplex pipe.
pub struct MessageReader<R> {
    inner: BufReader<R>,
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> MessageReader<R> {
    pub fn new(stream: R) -> Self {
        Self {
            inner: BufReader::new(stream),
            buf: Vec::new(),
        }
    }

    /// Read the next line, stripped of its terminator.
    ///
    /// Suspends the calling worker until a full line arrives. Returns
    /// `EndOfStream` on a clean close and `Transport` on any other I/O
    /// error. A bare `\n` is a valid zero-length message. Bytes after
    /// the last newline when the stream then ends are discarded.
    pub async fn next_line(&mut self) -> Result<String, RelayError> {
        self.buf.clear();
        match self.inner.read_until(b'\n', &mut self.buf).await {
            Ok(0) => Err(RelayError::EndOfStream),
            Ok(_) => {
                if self.buf.last() != Some(&b'\n') {
                    // Stream ended mid-line; drop the partial tail.
                    return Err(RelayError::EndOfStream);
                }
                self.buf.pop();
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                Ok(String::from_utf8_lossy(&self.buf).into_owned())
            }
            Err(e) => Err(RelayError::Transport(e)),
        }
    }
}
