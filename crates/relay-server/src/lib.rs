//! Relay server core — connection registry, broadcast fan-out, and
//! per-connection workers.
//!
//! The accept loop hands each connection to a worker task. Workers share
//! the `ClientRegistry` and deliver through the `Broadcaster`, which
//! queues frames onto each recipient's single writer task.

pub mod broadcast;
pub mod reader;
pub mod registry;
pub mod server;
pub mod worker;

pub use broadcast::Broadcaster;
pub use reader::MessageReader;
pub use registry::{ClientHandle, ClientRegistry};
pub use server::{RelayConfig, RelayServer};
