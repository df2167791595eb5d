//! The `Result` response body and its five result-kind variants.

use crate::error::{Error, Result};
use crate::protocol::buffer::ReadBuffer;
use crate::protocol::column_type::ColumnType;
use crate::protocol::constants::*;
use crate::protocol::value::Value;
use bytes::Bytes;
use std::sync::Arc;

/// Metadata describing one column of a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub keyspace: String,
    pub table: String,
    pub column: String,
    pub column_type: ColumnType,
}

/// One row of a `Rows` result, sharing its column metadata with every other
/// row in the same result set.
///
/// Modeled as a `Vec` rather than a map: `Value` carries `f64`/`f32` and is
/// not `Hash`/`Eq`, so a hash map keyed by value isn't an option, and keying
/// by column name would duplicate the metadata in every row. Lookup by name
/// falls back to linear scan, which is fine for the handful of columns a
/// typical result set carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<Value>,
    columns: Arc<[ColumnSpec]>,
}

impl Row {
    fn new(values: Vec<Value>, columns: Arc<[ColumnSpec]>) -> Self {
        Self { values, columns }
    }

    /// Number of columns in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether this row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a positional index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Value by column name, matched case-insensitively. Where a result set
    /// carries duplicate column names, the *last* matching column wins.
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .enumerate()
            .rev()
            .find(|(_, spec)| spec.column.eq_ignore_ascii_case(name))
            .map(|(i, _)| &self.values[i])
    }

    /// The column metadata shared by every row of this result set.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Iterate over this row's values in column order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }
}

/// The `Result` response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultBody {
    Void,
    Rows {
        metadata: Vec<ColumnSpec>,
        rows: Vec<Row>,
    },
    SetKeyspace {
        keyspace: String,
    },
    Prepared {
        id: Bytes,
        metadata: Vec<ColumnSpec>,
    },
    SchemaChange {
        change: String,
        keyspace: String,
        table: String,
    },
}

impl ResultBody {
    pub fn decode(buf: &mut ReadBuffer) -> Result<Self> {
        let kind = buf.read_int()?;
        Ok(match kind {
            RESULT_KIND_VOID => Self::Void,
            RESULT_KIND_ROWS => {
                let metadata = decode_metadata(buf)?;
                let rows = decode_rows(buf, &metadata)?;
                Self::Rows { metadata, rows }
            }
            RESULT_KIND_SET_KEYSPACE => Self::SetKeyspace {
                keyspace: buf.read_string()?,
            },
            RESULT_KIND_PREPARED => {
                let id = buf.read_short_bytes()?;
                let metadata = decode_metadata(buf)?;
                Self::Prepared { id, metadata }
            }
            RESULT_KIND_SCHEMA_CHANGE => Self::SchemaChange {
                change: buf.read_string()?,
                keyspace: buf.read_string()?,
                table: buf.read_string()?,
            },
            other => return Err(Error::UnsupportedResultKind { kind: other }),
        })
    }
}

fn decode_metadata(buf: &mut ReadBuffer) -> Result<Vec<ColumnSpec>> {
    let flags = buf.read_int()?;
    let columns_count = buf.read_int()?;
    let global_spec = flags & ROWS_FLAG_GLOBAL_TABLES_SPEC != 0;

    let global = if global_spec {
        Some((buf.read_string()?, buf.read_string()?))
    } else {
        None
    };

    let mut specs = Vec::with_capacity(columns_count.max(0) as usize);
    for _ in 0..columns_count {
        let (keyspace, table) = match &global {
            Some((ks, table)) => (ks.clone(), table.clone()),
            None => (buf.read_string()?, buf.read_string()?),
        };
        let column = buf.read_string()?;
        let column_type = ColumnType::decode(buf)?;
        specs.push(ColumnSpec {
            keyspace,
            table,
            column,
            column_type,
        });
    }
    Ok(specs)
}

fn decode_rows(buf: &mut ReadBuffer, metadata: &[ColumnSpec]) -> Result<Vec<Row>> {
    let rows_count = buf.read_int()?;
    let columns: Arc<[ColumnSpec]> = Arc::from(metadata.to_vec());
    let mut rows = Vec::with_capacity(rows_count.max(0) as usize);
    for _ in 0..rows_count {
        let mut values = Vec::with_capacity(metadata.len());
        for spec in metadata {
            let run = buf.read_bytes()?;
            values.push(Value::decode(run.as_deref(), &spec.column_type)?);
        }
        rows.push(Row::new(values, Arc::clone(&columns)));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::column_type::ColumnType;

    fn rows_body_bytes() -> Vec<u8> {
        let mut b = vec![];
        b.extend_from_slice(&RESULT_KIND_ROWS.to_be_bytes());
        b.extend_from_slice(&1i32.to_be_bytes()); // flags: global table spec
        b.extend_from_slice(&1i32.to_be_bytes()); // columns_count
        b.extend_from_slice(&[0x00, 0x02]);
        b.extend_from_slice(b"ks");
        b.extend_from_slice(&[0x00, 0x01]);
        b.extend_from_slice(b"t");
        b.extend_from_slice(&[0x00, 0x01]);
        b.extend_from_slice(b"n");
        b.extend_from_slice(&COLUMN_TYPE_INT.to_be_bytes());
        b.extend_from_slice(&2i32.to_be_bytes()); // rows_count
        b.extend_from_slice(&[0x00, 0x00, 0x00, 0x04]);
        b.extend_from_slice(&42i32.to_be_bytes());
        b.extend_from_slice(&[0xff, 0xff, 0xff, 0xff]);
        b
    }

    #[test]
    fn decodes_rows_with_global_table_spec_and_null() {
        let bytes = Bytes::from(rows_body_bytes());
        let mut buf = ReadBuffer::new(bytes);
        let body = ResultBody::decode(&mut buf).unwrap();
        match body {
            ResultBody::Rows { metadata, rows } => {
                assert_eq!(metadata.len(), 1);
                assert_eq!(metadata[0].keyspace, "ks");
                assert_eq!(metadata[0].column_type, ColumnType::Int);
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].get(0), Some(&Value::Int(42)));
                assert_eq!(rows[1].get(0), Some(&Value::Null));
                assert_eq!(rows[0].get_by_name("N"), Some(&Value::Int(42)));
            }
            other => panic!("expected Rows, got {other:?}"),
        }
    }

    #[test]
    fn decodes_void() {
        let bytes = Bytes::from(RESULT_KIND_VOID.to_be_bytes().to_vec());
        let mut buf = ReadBuffer::new(bytes);
        assert_eq!(ResultBody::decode(&mut buf).unwrap(), ResultBody::Void);
    }

    #[test]
    fn rejects_unknown_kind() {
        let bytes = Bytes::from(99i32.to_be_bytes().to_vec());
        let mut buf = ReadBuffer::new(bytes);
        assert!(ResultBody::decode(&mut buf).is_err());
    }
}
