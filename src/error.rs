//! Error types for the CQL frame decoder.

use thiserror::Error;

/// Result type alias for decoder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for CQL frame decoding.
#[derive(Error, Debug)]
pub enum Error {
    /// A primitive read ran off the end of the buffer.
    ///
    /// This must never happen under the frame assembler's discipline (it only
    /// decodes a body once `body_length` octets are available); if observed it
    /// indicates a bug in the assembler or a corrupted frame length.
    #[error("short read: need {needed} bytes, have {available}")]
    ShortRead { needed: usize, available: usize },

    /// The version octet's high bit was not set — this is a request frame,
    /// not a response frame.
    #[error("unsupported frame type: version byte {version:#x} is not a response")]
    UnsupportedFrameType { version: u8 },

    /// The opcode is not one of the five response opcodes.
    #[error("unsupported operation: opcode {opcode:#x}")]
    UnsupportedOperation { opcode: u8 },

    /// The `Result` body carried an unknown `kind` discriminant.
    #[error("unsupported result kind: {kind:#x}")]
    UnsupportedResultKind { kind: i32 },

    /// A column-type discriminant was unknown, or reserved-unsupported (counter,
    /// text-as-column-type).
    #[error("unsupported column type: {code:#06x}")]
    UnsupportedColumnType { code: u16 },

    /// An `Event` body carried an unknown event type tag.
    #[error("unsupported event type: {event_type}")]
    UnsupportedEventType { event_type: String },

    /// A string field was not valid UTF-8.
    #[error("invalid UTF-8 in string field: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Generic protocol violation not covered by a more specific variant.
    #[error("protocol error: {message}")]
    Protocol { message: String },
}

impl Error {
    /// Create a protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}
