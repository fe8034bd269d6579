//! Broadcaster — fan one client's message out to every other client.

use std::net::SocketAddr;
use std::sync::Arc;

use relay_protocol::{RelayError, frame};
use tracing::debug;

use crate::registry::ClientRegistry;

/// Delivers framed lines to every registered client except the sender.
#[derive(Clone)]
pub struct Broadcaster {
    registry: Arc<ClientRegistry>,
}

impl Broadcaster {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self { registry }
    }

    /// Send `"<sender> >> <payload>\n"` to every other client.
    ///
    /// Works from a point-in-time snapshot of the registry; clients that
    /// join mid-call are not owed this message. Delivery stops at the
    /// first failed recipient and that failure is returned; the failed
    /// recipient's own worker is responsible for deregistering it.
    pub fn broadcast(&self, sender: SocketAddr, payload: &str) -> Result<(), RelayError> {
        let line = frame::render(&sender.to_string(), payload);
        for peer in self.registry.snapshot() {
            if peer.addr() == sender {
                continue;
            }
            peer.enqueue(line.clone())?;
            debug!("{sender} >> {payload} (to {})", peer.addr());
        }
        Ok(())
    }
}
