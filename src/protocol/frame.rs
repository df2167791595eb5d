//! The incremental frame assembler: accumulates header and body octets from
//! a byte stream and decodes a complete response.

use crate::error::{Error, Result};
use crate::protocol::body::{ErrorBody, EventBody, ResultBody};
use crate::protocol::buffer::ReadBuffer;
use crate::protocol::constants::*;
use bytes::{Buf, Bytes, BytesMut};
use std::collections::HashMap;

/// The decoded body of a response frame, keyed by opcode.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Error(ErrorBody),
    Ready,
    Supported { options: HashMap<String, Vec<String>> },
    Result(ResultBody),
    Event(EventBody),
}

#[derive(Debug, Clone, Copy)]
struct Header {
    version: u8,
    #[allow(dead_code)]
    flags: u8,
    stream_id: i8,
    opcode: u8,
    body_length: u32,
}

enum State {
    AwaitHeader,
    AwaitBody(Header),
    Complete { header: Header, body: ResponseBody },
}

/// An incrementally-assembled response frame.
///
/// Bytes are appended with [`Frame::push_bytes`] as they arrive from the
/// transport; the frame transitions from awaiting its 8-octet header to
/// awaiting its body, and becomes [`Frame::is_complete`] once `body_length`
/// octets have been collected and the body has been decoded.
pub struct Frame {
    state: State,
    buf: BytesMut,
}

impl Frame {
    /// Header length in octets; a fixed protocol constant.
    pub const HEADER_LENGTH: usize = HEADER_LENGTH;

    /// Begin assembling a new frame.
    pub fn new() -> Self {
        Self {
            state: State::AwaitHeader,
            buf: BytesMut::new(),
        }
    }

    /// Append bytes from the transport, advancing the assembler's state.
    ///
    /// Any bytes beyond this frame's body are left untouched in the internal
    /// buffer; callers should construct a new `Frame` and re-append the
    /// residual via [`Frame::take_residual`] once this frame completes.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.buf.extend_from_slice(bytes);

        if let State::AwaitHeader = self.state {
            if self.buf.len() >= Self::HEADER_LENGTH {
                let header = Self::parse_header(&self.buf[..Self::HEADER_LENGTH])?;
                self.buf.advance(Self::HEADER_LENGTH);
                tracing::trace!(stream_id = header.stream_id, opcode = header.opcode, "frame header parsed");
                self.state = State::AwaitBody(header);
            }
        }

        if let State::AwaitBody(header) = &self.state {
            let header = *header;
            if self.buf.len() >= header.body_length as usize {
                let body_bytes = self.buf.split_to(header.body_length as usize).freeze();
                let body = Self::decode_body(header, body_bytes).map_err(|e| {
                    tracing::warn!(stream_id = header.stream_id, opcode = header.opcode, error = %e, "frame decode failed");
                    e
                })?;
                tracing::debug!(stream_id = header.stream_id, opcode = header.opcode, "frame body complete");
                self.state = State::Complete { header, body };
            }
        }

        Ok(())
    }

    fn parse_header(bytes: &[u8]) -> Result<Header> {
        let version_octet = bytes[0];
        if version_octet & VERSION_RESPONSE_FLAG == 0 {
            return Err(Error::UnsupportedFrameType {
                version: version_octet,
            });
        }
        let version = version_octet & !VERSION_RESPONSE_FLAG;
        let flags = bytes[1];
        let stream_id = bytes[2] as i8;
        let opcode = bytes[3];
        let body_length = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        Ok(Header {
            version,
            flags,
            stream_id,
            opcode,
            body_length,
        })
    }

    fn decode_body(header: Header, body: Bytes) -> Result<ResponseBody> {
        let mut buf = ReadBuffer::new(body);
        Ok(match header.opcode {
            OPCODE_ERROR => ResponseBody::Error(ErrorBody::decode(&mut buf)?),
            OPCODE_READY => ResponseBody::Ready,
            OPCODE_SUPPORTED => ResponseBody::Supported {
                options: buf.read_string_multimap()?,
            },
            OPCODE_RESULT => ResponseBody::Result(ResultBody::decode(&mut buf)?),
            OPCODE_EVENT => ResponseBody::Event(EventBody::decode(&mut buf)?),
            other => return Err(Error::UnsupportedOperation { opcode: other }),
        })
    }

    /// Whether this frame's header and body have both been fully decoded.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, State::Complete { .. })
    }

    /// The decoded response body, once complete.
    pub fn body(&self) -> Option<&ResponseBody> {
        match &self.state {
            State::Complete { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The protocol version (high bit masked off), once the header is known.
    pub fn version(&self) -> Option<u8> {
        self.header().map(|h| h.version)
    }

    /// The client-chosen correlation token, once the header is known.
    pub fn stream_id(&self) -> Option<i8> {
        self.header().map(|h| h.stream_id)
    }

    /// The declared body length in octets, once the header is known.
    pub fn body_length(&self) -> Option<u32> {
        self.header().map(|h| h.body_length)
    }

    fn header(&self) -> Option<Header> {
        match self.state {
            State::AwaitBody(h) => Some(h),
            State::Complete { header, .. } => Some(header),
            State::AwaitHeader => None,
        }
    }

    /// Any bytes appended past this frame's body, belonging to the frame
    /// that follows it on the wire. Only meaningful once complete.
    pub fn take_residual(&mut self) -> Bytes {
        self.buf.split().freeze()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
