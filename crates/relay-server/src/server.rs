//! Accept loop and server configuration.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::broadcast::Broadcaster;
use crate::registry::ClientRegistry;
use crate::worker;

/// Relay server configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Address to listen on (port 0 for OS-assigned).
    pub addr: String,
    /// Maximum concurrent clients; `None` for unlimited.
    pub max_clients: Option<usize>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:7575".into(),
            max_clients: None,
        }
    }
}

/// The relay server: a TCP listener plus the registry shared by all
/// connection workers.
pub struct RelayServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    registry: Arc<ClientRegistry>,
    broadcaster: Broadcaster,
    max_clients: Option<usize>,
}

impl RelayServer {
    /// Bind the listener. The registry starts empty.
    pub async fn bind(config: RelayConfig) -> io::Result<Self> {
        let listener = TcpListener::bind(&config.addr).await?;
        let local_addr = listener.local_addr()?;
        let registry = Arc::new(ClientRegistry::new());
        let broadcaster = Broadcaster::new(registry.clone());

        Ok(Self {
            listener,
            local_addr,
            registry,
            broadcaster,
            max_clients: config.max_clients,
        })
    }

    /// The actual bound address (relevant when binding port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Shared registry, for observability and tests.
    pub fn registry(&self) -> Arc<ClientRegistry> {
        self.registry.clone()
    }

    /// Accept connections forever, one worker task per client.
    ///
    /// An accept error is fatal and propagates to the caller; there is no
    /// retry policy. Individual client failures never reach this loop.
    pub async fn run(self) -> io::Result<()> {
        info!("relay listening on {}", self.local_addr);
        loop {
            let (stream, addr) = self.listener.accept().await?;

            if let Some(max) = self.max_clients {
                if self.registry.len() >= max {
                    warn!("rejecting {addr}: client limit reached ({max})");
                    // Dropping the stream closes the socket.
                    continue;
                }
            }

            info!("client connected: {addr}");
            tokio::spawn(worker::run_client(
                stream,
                addr,
                self.registry.clone(),
                self.broadcaster.clone(),
            ));
        }
    }
}
