//! ClientRegistry — the shared set of live connections.

use std::collections::HashMap;
use std::net::SocketAddr;

use parking_lot::RwLock;
use relay_protocol::RelayError;
use tokio::sync::mpsc;

/// The registry's view of one connected client: its peer address and a
/// sender into the outbound queue drained by that client's writer task.
/// The read half of the connection stays with the worker.
#[derive(Debug, Clone)]
pub struct ClientHandle {
    addr: SocketAddr,
    outbound_tx: mpsc::UnboundedSender<String>,
}

impl ClientHandle {
    pub fn new(addr: SocketAddr, outbound_tx: mpsc::UnboundedSender<String>) -> Self {
        Self { addr, outbound_tx }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Queue one framed line for delivery. Fails only when the writer
    /// task has already exited and the queue is closed.
    pub fn enqueue(&self, frame: String) -> Result<(), RelayError> {
        self.outbound_tx
            .send(frame)
            .map_err(|_| RelayError::PeerGone { peer: self.addr })
    }
}

/// Live connections keyed by peer address.
///
/// Workers add themselves on start and remove themselves on disconnect;
/// the broadcaster iterates a cloned snapshot. The lock is synchronous
/// and never held across an await or any I/O.
pub struct ClientRegistry {
    clients: RwLock<HashMap<SocketAddr, ClientHandle>>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a client. Each worker registers its own connection exactly
    /// once, so no address is ever inserted twice.
    pub fn add(&self, handle: ClientHandle) {
        self.clients.write().insert(handle.addr(), handle);
    }

    /// Remove a client. A no-op when the address is absent.
    pub fn remove(&self, addr: SocketAddr) {
        self.clients.write().remove(&addr);
    }

    /// Clone out the current set of clients. The snapshot is safe to
    /// iterate while other workers keep mutating the registry; it may be
    /// stale by the time it is used.
    pub fn snapshot(&self) -> Vec<ClientHandle> {
        self.clients.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.clients.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.read().is_empty()
    }

    pub fn contains(&self, addr: SocketAddr) -> bool {
        self.clients.read().contains_key(&addr)
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}
