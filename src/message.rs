//! Fixed-width wire record shared by every peer on the subnet.
//!
//! A datagram is exactly [`RECORD_LEN`] bytes: a 50-byte sender name field
//! followed by a 1000-byte text field. Each field holds a NUL-terminated
//! string; the remainder is zero. There is no length prefix, version tag,
//! or checksum, and the layout must not change or peers stop
//! interoperating.

/// Width of the sender name field, terminator included.
pub const NAME_CAPACITY: usize = 50;

/// Width of the message text field, terminator included.
pub const TEXT_CAPACITY: usize = 1000;

/// Size of one encoded record and therefore of every outgoing datagram.
pub const RECORD_LEN: usize = NAME_CAPACITY + TEXT_CAPACITY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub name: String,
    pub text: String,
}

/// Encodes a message into one fixed-size record.
///
/// Each string is copied into its field and silently truncated to the
/// field width minus the terminator; overflow is never an error.
pub fn encode(message: &ChatMessage) -> [u8; RECORD_LEN] {
    let mut record = [0u8; RECORD_LEN];
    write_field(&mut record[..NAME_CAPACITY], message.name.as_bytes());
    write_field(&mut record[NAME_CAPACITY..], message.text.as_bytes());
    record
}

/// Decodes a received payload, however short.
///
/// Undersized datagrams are accepted: missing bytes read as zero, so both
/// fields come back empty rather than failing. Truncation on the sending
/// side can split a multi-byte character, so invalid UTF-8 is replaced
/// lossily.
pub fn decode(payload: &[u8]) -> ChatMessage {
    let mut record = [0u8; RECORD_LEN];
    let len = payload.len().min(RECORD_LEN);
    record[..len].copy_from_slice(&payload[..len]);

    ChatMessage {
        name: read_field(&record[..NAME_CAPACITY]),
        text: read_field(&record[NAME_CAPACITY..]),
    }
}

fn write_field(field: &mut [u8], content: &[u8]) {
    // Keep the final byte as the terminator no matter how long the input is.
    let len = content.len().min(field.len() - 1);
    field[..len].copy_from_slice(&content[..len]);
}

fn read_field(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_preserves_name_and_text() {
        let message = ChatMessage {
            name: "alice".into(),
            text: "hello".into(),
        };

        let record = encode(&message);
        assert_eq!(record.len(), RECORD_LEN);
        assert_eq!(decode(&record), message);
    }

    #[test]
    fn text_field_starts_at_fixed_offset() {
        let record = encode(&ChatMessage {
            name: "bob".into(),
            text: "hi".into(),
        });

        assert_eq!(&record[..3], b"bob");
        assert_eq!(record[3], 0);
        assert_eq!(&record[NAME_CAPACITY..NAME_CAPACITY + 2], b"hi");
        assert_eq!(record[NAME_CAPACITY + 2], 0);
    }

    #[test]
    fn overlong_fields_are_truncated_not_rejected() {
        let message = ChatMessage {
            name: "a".repeat(60),
            text: "b".repeat(1200),
        };

        let decoded = decode(&encode(&message));
        assert_eq!(decoded.name, "a".repeat(NAME_CAPACITY - 1));
        assert_eq!(decoded.text, "b".repeat(TEXT_CAPACITY - 1));
    }

    #[test]
    fn undersized_payload_decodes_leniently() {
        let decoded = decode(b"alice\0");
        assert_eq!(decoded.name, "alice");
        assert_eq!(decoded.text, "");

        let empty = decode(&[]);
        assert_eq!(empty.name, "");
        assert_eq!(empty.text, "");
    }

    #[test]
    fn field_without_terminator_fills_the_whole_buffer() {
        let record = [b'x'; RECORD_LEN];
        let decoded = decode(&record);
        assert_eq!(decoded.name, "x".repeat(NAME_CAPACITY));
        assert_eq!(decoded.text, "x".repeat(TEXT_CAPACITY));
    }
}
