//! Protocol layer tests — frame rendering, frame parsing, error taxonomy.

#[cfg(test)]
mod tests {
    use relay_protocol::RelayError;
    use relay_protocol::frame;

    // ─────────────────────────────────────────────────────────────────────
    // Frame rendering
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn render_frames_sender_and_payload() {
        let line = frame::render("10.0.0.1:4242", "hello");
        assert_eq!(line, "10.0.0.1:4242 >> hello\n");
    }

    #[test]
    fn render_empty_payload_keeps_frame() {
        // A zero-length message still gets the full frame, not a bare line.
        let line = frame::render("10.0.0.1:4242", "");
        assert_eq!(line, "10.0.0.1:4242 >> \n");
    }

    #[test]
    fn render_join_notice() {
        let line = frame::render("127.0.0.1:5000", frame::JOIN_NOTICE);
        assert_eq!(line, "127.0.0.1:5000 >> JOINED\n");
    }

    #[test]
    fn render_leave_notice() {
        let line = frame::render("127.0.0.1:5000", frame::LEAVE_NOTICE);
        assert_eq!(line, "127.0.0.1:5000 >> LEAVED\n");
    }

    // ─────────────────────────────────────────────────────────────────────
    // Frame parsing
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn parse_roundtrip() {
        let line = frame::render("192.168.1.9:1234", "what's up");
        let (sender, payload) = frame::parse(&line).unwrap();
        assert_eq!(sender, "192.168.1.9:1234");
        assert_eq!(payload, "what's up");
    }

    #[test]
    fn parse_accepts_line_without_newline() {
        let (sender, payload) = frame::parse("1.2.3.4:5 >> hi").unwrap();
        assert_eq!(sender, "1.2.3.4:5");
        assert_eq!(payload, "hi");
    }

    #[test]
    fn parse_strips_crlf() {
        let (_, payload) = frame::parse("1.2.3.4:5 >> hi\r\n").unwrap();
        assert_eq!(payload, "hi");
    }

    #[test]
    fn parse_empty_payload() {
        let (sender, payload) = frame::parse("1.2.3.4:5 >> \n").unwrap();
        assert_eq!(sender, "1.2.3.4:5");
        assert_eq!(payload, "");
    }

    #[test]
    fn parse_splits_at_first_separator_only() {
        // A payload may itself contain the separator text.
        let (sender, payload) = frame::parse("1.2.3.4:5 >> a >> b").unwrap();
        assert_eq!(sender, "1.2.3.4:5");
        assert_eq!(payload, "a >> b");
    }

    #[test]
    fn parse_without_separator_is_none() {
        assert!(frame::parse("no separator here\n").is_none());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Error taxonomy
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn end_of_stream_is_distinct_from_transport() {
        let eof = RelayError::EndOfStream;
        let io = RelayError::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset",
        ));
        assert!(eof.is_end_of_stream());
        assert!(!io.is_end_of_stream());
    }

    #[test]
    fn transport_error_wraps_io_error() {
        let err: RelayError = std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe",
        )
        .into();
        assert!(matches!(err, RelayError::Transport(_)));
        assert!(err.to_string().starts_with("transport error:"));
    }

    #[test]
    fn peer_gone_names_the_peer() {
        let err = RelayError::PeerGone {
            peer: "127.0.0.1:9999".parse().unwrap(),
        };
        assert!(err.to_string().contains("127.0.0.1:9999"));
    }
}
