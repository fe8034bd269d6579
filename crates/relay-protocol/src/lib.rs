//! Relay protocol types.
//!
//! Single source of truth for the wire format (line framing, the join and
//! leave notice literals) and the error taxonomy shared by the server and
//! its tests.

pub mod error;
pub mod frame;

pub use error::RelayError;
pub use frame::{FRAME_SEPARATOR, JOIN_NOTICE, LEAVE_NOTICE};
