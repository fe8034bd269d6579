//! Relay error taxonomy.

use std::net::SocketAddr;

use thiserror::Error;

/// Everything that can go wrong reading from or delivering to a client.
///
/// `EndOfStream` is the one expected variant: it signals a graceful
/// disconnect and drives the leave path rather than a failure.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The peer closed its side of the connection cleanly.
    #[error("end of stream")]
    EndOfStream,

    /// Any other read or write failure on the transport.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// Delivery failed because the recipient's writer is gone.
    #[error("delivery to {peer} failed: connection is gone")]
    PeerGone { peer: SocketAddr },
}

impl RelayError {
    /// True for the graceful-disconnect variant.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }
}
