//! The `Error` response body and its code-discriminated detail payloads.

use crate::error::Result;
use crate::protocol::buffer::ReadBuffer;
use crate::protocol::consistency::Consistency;
use crate::protocol::constants::*;
use bytes::Bytes;

/// Additional fields carried by specific protocol-reported error codes.
///
/// These are not decoder errors: a server can legitimately report
/// `Unavailable` or `WriteTimeout` as a successfully decoded response value.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetails {
    Unavailable {
        consistency: Consistency,
        required: i32,
        alive: i32,
    },
    WriteTimeout {
        consistency: Consistency,
        received: i32,
        blockfor: i32,
        write_type: String,
    },
    ReadTimeout {
        consistency: Consistency,
        received: i32,
        blockfor: i32,
        data_present: bool,
    },
    AlreadyExists {
        keyspace: String,
        table: String,
    },
    Unprepared {
        id: Bytes,
    },
}

/// The `Error` response body.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub code: i32,
    pub message: String,
    pub details: Option<ErrorDetails>,
}

impl ErrorBody {
    pub fn decode(buf: &mut ReadBuffer) -> Result<Self> {
        let code = buf.read_int()?;
        let message = buf.read_string()?;
        let details = match code {
            ERROR_CODE_UNAVAILABLE => Some(ErrorDetails::Unavailable {
                consistency: buf.read_consistency()?,
                required: buf.read_int()?,
                alive: buf.read_int()?,
            }),
            ERROR_CODE_WRITE_TIMEOUT => Some(ErrorDetails::WriteTimeout {
                consistency: buf.read_consistency()?,
                received: buf.read_int()?,
                blockfor: buf.read_int()?,
                write_type: buf.read_string()?,
            }),
            ERROR_CODE_READ_TIMEOUT => Some(ErrorDetails::ReadTimeout {
                consistency: buf.read_consistency()?,
                received: buf.read_int()?,
                blockfor: buf.read_int()?,
                data_present: buf.read_byte()? != 0,
            }),
            ERROR_CODE_ALREADY_EXISTS => Some(ErrorDetails::AlreadyExists {
                keyspace: buf.read_string()?,
                table: buf.read_string()?,
            }),
            ERROR_CODE_UNPREPARED => Some(ErrorDetails::Unprepared {
                id: buf.read_short_bytes()?,
            }),
            _ => None,
        };
        Ok(Self {
            code,
            message,
            details,
        })
    }
}
