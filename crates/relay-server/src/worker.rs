//! Connection worker — one task driving a client's whole lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use relay_protocol::{RelayError, frame};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::broadcast::Broadcaster;
use crate::reader::MessageReader;
use crate::registry::{ClientHandle, ClientRegistry};

/// Drive one client from join to leave.
///
/// Registers the connection, announces the join, then relays each
/// received line until the stream ends. Every exit, graceful or not,
/// goes through the leave path so the registry never retains a dead
/// connection. A fatal error here terminates this worker only.
pub async fn run_client(
    stream: TcpStream,
    addr: SocketAddr,
    registry: Arc<ClientRegistry>,
    broadcaster: Broadcaster,
) {
    let (read_half, write_half) = stream.into_split();

    let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
    tokio::spawn(write_outbound(addr, write_half, outbound_rx));

    registry.add(ClientHandle::new(addr, outbound_tx));
    info!("{addr} joined");

    if let Err(e) = broadcaster.broadcast(addr, frame::JOIN_NOTICE) {
        warn!("{addr} join announcement failed: {e}");
        leave(addr, &registry, &broadcaster);
        return;
    }

    let mut reader = MessageReader::new(read_half);
    loop {
        debug!("{addr} waiting");
        match reader.next_line().await {
            Ok(msg) => {
                debug!("{addr} << {msg}");
                if let Err(e) = broadcaster.broadcast(addr, &msg) {
                    warn!("{addr} relay failed: {e}");
                    break;
                }
            }
            Err(RelayError::EndOfStream) => {
                info!("{addr} EOF");
                break;
            }
            Err(e) => {
                warn!("{addr} read failed: {e}");
                break;
            }
        }
    }

    leave(addr, &registry, &broadcaster);
}

/// Deregister and announce the departure. Dropping the registry's handle
/// closes the outbound queue, letting the writer task drain and exit.
fn leave(addr: SocketAddr, registry: &ClientRegistry, broadcaster: &Broadcaster) {
    registry.remove(addr);
    if let Err(e) = broadcaster.broadcast(addr, frame::LEAVE_NOTICE) {
        warn!("{addr} leave announcement failed: {e}");
    }
    info!("{addr} left");
}

/// Single writer for one connection: drains the outbound queue in order,
/// so frames from concurrent broadcasts never interleave mid-line.
async fn write_outbound(
    addr: SocketAddr,
    mut write_half: OwnedWriteHalf,
    mut outbound_rx: mpsc::UnboundedReceiver<String>,
) {
    while let Some(line) = outbound_rx.recv().await {
        if let Err(e) = write_half.write_all(line.as_bytes()).await {
            warn!("write to {addr} failed: {e}");
            break;
        }
    }
}
