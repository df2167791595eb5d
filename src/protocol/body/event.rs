//! The `Event` response body: asynchronous cluster notifications.

use crate::error::{Error, Result};
use crate::protocol::buffer::ReadBuffer;
use std::net::IpAddr;

/// The `Event` response body.
#[derive(Debug, Clone, PartialEq)]
pub enum EventBody {
    SchemaChange {
        change: String,
        keyspace: String,
        table: String,
    },
    StatusChange {
        change: String,
        address: IpAddr,
        port: i32,
    },
    TopologyChange {
        change: String,
        address: IpAddr,
        port: i32,
    },
}

impl EventBody {
    pub fn decode(buf: &mut ReadBuffer) -> Result<Self> {
        let event_type = buf.read_string()?;
        match event_type.as_str() {
            "SCHEMA_CHANGE" => Ok(Self::SchemaChange {
                change: buf.read_string()?,
                keyspace: buf.read_string()?,
                table: buf.read_string()?,
            }),
            "STATUS_CHANGE" => {
                let change = buf.read_string()?;
                let (address, port) = buf.read_inet()?;
                Ok(Self::StatusChange {
                    change,
                    address,
                    port,
                })
            }
            "TOPOLOGY_CHANGE" => {
                let change = buf.read_string()?;
                let (address, port) = buf.read_inet()?;
                Ok(Self::TopologyChange {
                    change,
                    address,
                    port,
                })
            }
            other => Err(Error::UnsupportedEventType {
                event_type: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn decodes_schema_change() {
        let mut bytes = vec![];
        bytes.extend_from_slice(&[0x00, 0x0d]);
        bytes.extend_from_slice(b"SCHEMA_CHANGE");
        bytes.extend_from_slice(&[0x00, 0x07]);
        bytes.extend_from_slice(b"CREATED");
        bytes.extend_from_slice(&[0x00, 0x02]);
        bytes.extend_from_slice(b"ks");
        bytes.extend_from_slice(&[0x00, 0x01]);
        bytes.extend_from_slice(b"t");
        let mut buf = ReadBuffer::new(Bytes::from(bytes));
        let body = EventBody::decode(&mut buf).unwrap();
        assert_eq!(
            body,
            EventBody::SchemaChange {
                change: "CREATED".to_owned(),
                keyspace: "ks".to_owned(),
                table: "t".to_owned(),
            }
        );
    }

    #[test]
    fn rejects_unknown_event_type() {
        let mut bytes = vec![0x00, 0x03];
        bytes.extend_from_slice(b"FOO");
        let mut buf = ReadBuffer::new(Bytes::from(bytes));
        assert!(EventBody::decode(&mut buf).is_err());
    }
}
