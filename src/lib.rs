//! A decoder for the CQL binary protocol (v1) response frame stream.
//!
//! Feed bytes to a [`Frame`] as they arrive from a transport; once the
//! frame's header and body are both available it decodes into a typed
//! [`ResponseBody`]. The decoder performs no I/O itself — it only consumes
//! byte slices and produces owned response values.
//!
//! # Example
//!
//! ```
//! use cql_codec::{Frame, ResponseBody};
//!
//! let ready = [0x81, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00];
//! let mut frame = Frame::new();
//! frame.push_bytes(&ready).unwrap();
//! assert!(frame.is_complete());
//! assert_eq!(frame.body(), Some(&ResponseBody::Ready));
//! ```

pub mod error;
pub mod protocol;

pub use error::{Error, Result};
pub use protocol::{
    ColumnSpec, ColumnType, Consistency, ErrorBody, ErrorDetails, EventBody, Frame, HostDistance,
    ReadBuffer, ResponseBody, ResultBody, Row, Value,
};
