//! Wire format for relayed lines.
//!
//! Every frame a client receives is a single text line:
//! `<sender-address> >> <payload>\n`. The payload is either another
//! client's message or one of the notice literals below.

/// Separator between the sender address and the payload.
pub const FRAME_SEPARATOR: &str = " >> ";

/// Payload broadcast once, immediately after a client connects.
pub const JOIN_NOTICE: &str = "JOINED";

/// Payload broadcast once, after a client's stream ends.
pub const LEAVE_NOTICE: &str = "LEAVED";

/// Render one outbound frame, newline included.
pub fn render(sender: &str, payload: &str) -> String {
    format!("{sender}{FRAME_SEPARATOR}{payload}\n")
}

/// Split a received frame into `(sender, payload)`.
///
/// Accepts the line with or without its trailing terminator. Returns
/// `None` when the separator is missing. The payload keeps any further
/// separator occurrences; only the first one delimits the sender.
pub fn parse(line: &str) -> Option<(&str, &str)> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.split_once(FRAME_SEPARATOR)
}
