//! The `Value` ADT and the `(bytes, ColumnType) -> Value` decoder.

use crate::error::{Error, Result};
use crate::protocol::buffer::ReadBuffer;
use crate::protocol::column_type::ColumnType;
use crate::protocol::decode::{decode_decimal, decode_timestamp, decode_varint};
use bigdecimal::BigDecimal;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use std::net::IpAddr;
use uuid::Uuid;

/// A decoded CQL value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Bigint(i64),
    Blob(Bytes),
    Boolean(bool),
    Decimal(BigDecimal),
    Double(f64),
    Float(f32),
    Int(i32),
    Instant(DateTime<Utc>),
    Uuid(Uuid),
    Varint(BigInt),
    Inet(IpAddr),
    /// Order-preserving; see `ColumnType::List`.
    List(Vec<Value>),
    /// Wire order, last duplicate key wins; see `ColumnType::Map`.
    Map(Vec<(Value, Value)>),
    /// Wire order; no ordering guarantee is made by the protocol.
    Set(Vec<Value>),
}

impl Value {
    /// Decode a byte run against its declared column type. A `None` run
    /// (negative length prefix on the wire) always yields [`Value::Null`].
    pub fn decode(bytes: Option<&[u8]>, column_type: &ColumnType) -> Result<Self> {
        let Some(bytes) = bytes else {
            return Ok(Value::Null);
        };
        Ok(match column_type {
            ColumnType::Ascii | ColumnType::Varchar => {
                Value::Text(std::str::from_utf8(bytes)?.to_owned())
            }
            ColumnType::Bigint => Value::Bigint(decode_bigint(bytes)?),
            ColumnType::Blob => Value::Blob(Bytes::copy_from_slice(bytes)),
            ColumnType::Boolean => Value::Boolean(bytes.first() == Some(&0x01)),
            ColumnType::Decimal => Value::Decimal(decode_decimal(bytes)?),
            ColumnType::Double => Value::Double(f64::from_be_bytes(fixed(bytes)?)),
            ColumnType::Float => Value::Float(f32::from_be_bytes(fixed(bytes)?)),
            ColumnType::Int => Value::Int(i32::from_be_bytes(fixed(bytes)?)),
            ColumnType::Timestamp => Value::Instant(decode_timestamp(bytes)?),
            ColumnType::Uuid | ColumnType::Timeuuid => {
                Value::Uuid(Uuid::from_slice(bytes).map_err(|e| Error::protocol(e.to_string()))?)
            }
            ColumnType::Varint => Value::Varint(decode_varint(bytes)?),
            ColumnType::Inet => Value::Inet(decode_inet(bytes)?),
            ColumnType::List(inner) => Value::List(decode_elements(bytes, inner)?),
            ColumnType::Set(inner) => Value::Set(decode_elements(bytes, inner)?),
            ColumnType::Map(key_ty, value_ty) => Value::Map(decode_map(bytes, key_ty, value_ty)?),
        })
    }
}

fn fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| {
        Error::protocol(format!(
            "expected {N}-byte value, got {} bytes",
            bytes.len()
        ))
    })
}

fn decode_bigint(bytes: &[u8]) -> Result<i64> {
    let b: [u8; 8] = fixed(bytes)?;
    let high = i32::from_be_bytes([b[0], b[1], b[2], b[3]]);
    let low = i32::from_be_bytes([b[4], b[5], b[6], b[7]]);
    Ok(((high as i64) << 32) | (low as u32 as i64))
}

fn decode_inet(bytes: &[u8]) -> Result<IpAddr> {
    match bytes.len() {
        4 => Ok(IpAddr::from(<[u8; 4]>::try_from(bytes).unwrap())),
        16 => Ok(IpAddr::from(<[u8; 16]>::try_from(bytes).unwrap())),
        other => Err(Error::protocol(format!(
            "inet value must be 4 or 16 bytes, got {other}"
        ))),
    }
}

fn decode_elements(bytes: &[u8], element_type: &ColumnType) -> Result<Vec<Value>> {
    let mut buf = ReadBuffer::new(Bytes::copy_from_slice(bytes));
    let count = buf.read_short()? as usize;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let run = buf.read_element_bytes()?;
        out.push(Value::decode(run.as_deref(), element_type)?);
    }
    Ok(out)
}

fn decode_map(
    bytes: &[u8],
    key_type: &ColumnType,
    value_type: &ColumnType,
) -> Result<Vec<(Value, Value)>> {
    let mut buf = ReadBuffer::new(Bytes::copy_from_slice(bytes));
    let count = buf.read_short()? as usize;
    let mut out: Vec<(Value, Value)> = Vec::with_capacity(count);
    for _ in 0..count {
        let key_run = buf.read_element_bytes()?;
        let key = Value::decode(key_run.as_deref(), key_type)?;
        let value_run = buf.read_element_bytes()?;
        let value = Value::decode(value_run.as_deref(), value_type)?;
        if let Some(slot) = out.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            out.push((key, value));
        }
    }
    Ok(out)
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Bigint(v) => write!(f, "{v}"),
            Value::Blob(b) => write!(f, "0x{}", hex(b)),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Instant(v) => write!(f, "{v}"),
            Value::Uuid(v) => write!(f, "{v}"),
            Value::Varint(v) => write!(f, "{v}"),
            Value::Inet(v) => write!(f, "{v}"),
            Value::List(items) | Value::Set(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_null_regardless_of_type() {
        assert_eq!(Value::decode(None, &ColumnType::Int).unwrap(), Value::Null);
    }

    #[test]
    fn decodes_int() {
        let bytes = 42i32.to_be_bytes();
        assert_eq!(
            Value::decode(Some(&bytes), &ColumnType::Int).unwrap(),
            Value::Int(42)
        );
    }

    #[test]
    fn decodes_varchar() {
        assert_eq!(
            Value::decode(Some(b"hi"), &ColumnType::Varchar).unwrap(),
            Value::Text("hi".to_owned())
        );
    }

    #[test]
    fn decodes_boolean_strict_true() {
        assert_eq!(
            Value::decode(Some(&[0x01]), &ColumnType::Boolean).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            Value::decode(Some(&[0x02]), &ColumnType::Boolean).unwrap(),
            Value::Boolean(false)
        );
    }

    #[test]
    fn decodes_nested_map_of_varchar_to_list_of_int() {
        // {"xs" -> [1, 2], "ys" -> []}
        // Map/List element runs use a signed 16-bit length prefix (protocol
        // v1), distinct from the signed 32-bit `[bytes]` prefix used for the
        // outer cell value.
        let mut bytes = vec![0x00, 0x02];
        bytes.extend_from_slice(&[0x00, 0x02]);
        bytes.extend_from_slice(b"xs");
        let mut xs_list = vec![0x00, 0x02];
        for v in [1i32, 2i32] {
            xs_list.extend_from_slice(&[0x00, 0x04]);
            xs_list.extend_from_slice(&v.to_be_bytes());
        }
        bytes.extend_from_slice(&(xs_list.len() as i16).to_be_bytes());
        bytes.extend_from_slice(&xs_list);

        bytes.extend_from_slice(&[0x00, 0x02]);
        bytes.extend_from_slice(b"ys");
        let ys_list = vec![0x00, 0x00];
        bytes.extend_from_slice(&(ys_list.len() as i16).to_be_bytes());
        bytes.extend_from_slice(&ys_list);

        let ty = ColumnType::Map(
            Box::new(ColumnType::Varchar),
            Box::new(ColumnType::List(Box::new(ColumnType::Int))),
        );
        let value = Value::decode(Some(&bytes), &ty).unwrap();
        match value {
            Value::Map(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].0, Value::Text("xs".to_owned()));
                assert_eq!(
                    entries[0].1,
                    Value::List(vec![Value::Int(1), Value::Int(2)])
                );
                assert_eq!(entries[1].0, Value::Text("ys".to_owned()));
                assert_eq!(entries[1].1, Value::List(vec![]));
            }
            other => panic!("expected map, got {other:?}"),
        }
    }

    #[test]
    fn decodes_bigint_from_two_words() {
        let mut bytes = vec![];
        bytes.extend_from_slice(&0i32.to_be_bytes());
        bytes.extend_from_slice(&1i32.to_be_bytes());
        assert_eq!(
            Value::decode(Some(&bytes), &ColumnType::Bigint).unwrap(),
            Value::Bigint(1)
        );
    }
}
