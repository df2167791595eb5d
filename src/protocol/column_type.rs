//! The recursive `ColumnType` tag tree.

use crate::error::{Error, Result};
use crate::protocol::buffer::ReadBuffer;
use crate::protocol::constants::*;

/// Identifies how a column's byte run should be decoded into a [`Value`](crate::protocol::value::Value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    Ascii,
    Bigint,
    Blob,
    Boolean,
    Decimal,
    Double,
    Float,
    Int,
    Timestamp,
    Uuid,
    Varchar,
    Varint,
    Timeuuid,
    Inet,
    List(Box<ColumnType>),
    Map(Box<ColumnType>, Box<ColumnType>),
    Set(Box<ColumnType>),
}

impl ColumnType {
    /// Read a `[option]` discriminant and, for collection types, recurse into
    /// the nested type descriptor(s).
    pub fn decode(buf: &mut ReadBuffer) -> Result<Self> {
        let code = buf.read_short()?;
        Ok(match code {
            COLUMN_TYPE_ASCII => Self::Ascii,
            COLUMN_TYPE_BIGINT => Self::Bigint,
            COLUMN_TYPE_BLOB => Self::Blob,
            COLUMN_TYPE_BOOLEAN => Self::Boolean,
            COLUMN_TYPE_DECIMAL => Self::Decimal,
            COLUMN_TYPE_DOUBLE => Self::Double,
            COLUMN_TYPE_FLOAT => Self::Float,
            COLUMN_TYPE_INT => Self::Int,
            COLUMN_TYPE_TIMESTAMP => Self::Timestamp,
            COLUMN_TYPE_UUID => Self::Uuid,
            COLUMN_TYPE_VARCHAR => Self::Varchar,
            COLUMN_TYPE_VARINT => Self::Varint,
            COLUMN_TYPE_TIMEUUID => Self::Timeuuid,
            COLUMN_TYPE_INET => Self::Inet,
            COLUMN_TYPE_LIST => Self::List(Box::new(Self::decode(buf)?)),
            COLUMN_TYPE_MAP => {
                let key = Self::decode(buf)?;
                let value = Self::decode(buf)?;
                Self::Map(Box::new(key), Box::new(value))
            }
            COLUMN_TYPE_SET => Self::Set(Box::new(Self::decode(buf)?)),
            // Reserved: counter and text-as-column-type are never reachable here.
            other => {
                return Err(Error::UnsupportedColumnType { code: other });
            }
        })
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascii => write!(f, "ascii"),
            Self::Bigint => write!(f, "bigint"),
            Self::Blob => write!(f, "blob"),
            Self::Boolean => write!(f, "boolean"),
            Self::Decimal => write!(f, "decimal"),
            Self::Double => write!(f, "double"),
            Self::Float => write!(f, "float"),
            Self::Int => write!(f, "int"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::Uuid => write!(f, "uuid"),
            Self::Varchar => write!(f, "varchar"),
            Self::Varint => write!(f, "varint"),
            Self::Timeuuid => write!(f, "timeuuid"),
            Self::Inet => write!(f, "inet"),
            Self::List(inner) => write!(f, "list<{inner}>"),
            Self::Map(k, v) => write!(f, "map<{k}, {v}>"),
            Self::Set(inner) => write!(f, "set<{inner}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn decodes_primitive() {
        let mut b = ReadBuffer::new(Bytes::from_static(&[0x00, 0x09]));
        assert_eq!(ColumnType::decode(&mut b).unwrap(), ColumnType::Int);
    }

    #[test]
    fn decodes_nested_map_of_varchar_to_list_of_int() {
        let mut b = ReadBuffer::new(Bytes::from_static(&[
            0x00, 0x21, 0x00, 0x0d, 0x00, 0x20, 0x00, 0x09,
        ]));
        let ty = ColumnType::decode(&mut b).unwrap();
        assert_eq!(
            ty,
            ColumnType::Map(Box::new(ColumnType::Varchar), Box::new(ColumnType::List(Box::new(ColumnType::Int))))
        );
    }

    #[test]
    fn rejects_reserved_counter_code() {
        let mut b = ReadBuffer::new(Bytes::from_static(&[0x00, 0x05]));
        let err = ColumnType::decode(&mut b).unwrap_err();
        assert!(matches!(err, Error::UnsupportedColumnType { code: 0x0005 }));
    }

    #[test]
    fn rejects_unknown_code() {
        let mut b = ReadBuffer::new(Bytes::from_static(&[0xab, 0xcd]));
        assert!(ColumnType::decode(&mut b).is_err());
    }
}
