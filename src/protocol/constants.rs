//! CQL binary protocol (v1) constants.
//!
//! These constants are derived from the Apache Cassandra CQL binary protocol
//! v1 specification.

// Frame header layout.
pub const HEADER_LENGTH: usize = 8;

/// High bit of the version octet marks a response frame.
pub const VERSION_RESPONSE_FLAG: u8 = 0x80;

// Response opcodes.
pub const OPCODE_ERROR: u8 = 0x00;
pub const OPCODE_READY: u8 = 0x02;
pub const OPCODE_SUPPORTED: u8 = 0x06;
pub const OPCODE_RESULT: u8 = 0x08;
pub const OPCODE_EVENT: u8 = 0x0c;

// Result kinds.
pub const RESULT_KIND_VOID: i32 = 0x0001;
pub const RESULT_KIND_ROWS: i32 = 0x0002;
pub const RESULT_KIND_SET_KEYSPACE: i32 = 0x0003;
pub const RESULT_KIND_PREPARED: i32 = 0x0004;
pub const RESULT_KIND_SCHEMA_CHANGE: i32 = 0x0005;

/// Rows metadata flag: a single keyspace/table pair applies to every column.
pub const ROWS_FLAG_GLOBAL_TABLES_SPEC: i32 = 0x0001;

// Column type codes (wire discriminants for `read_option!`).
pub const COLUMN_TYPE_CUSTOM: u16 = 0x0000;
pub const COLUMN_TYPE_ASCII: u16 = 0x0001;
pub const COLUMN_TYPE_BIGINT: u16 = 0x0002;
pub const COLUMN_TYPE_BLOB: u16 = 0x0003;
pub const COLUMN_TYPE_BOOLEAN: u16 = 0x0004;
/// Reserved: counter is a value-decode tag only, never a column-type discriminant here.
pub const COLUMN_TYPE_COUNTER: u16 = 0x0005;
pub const COLUMN_TYPE_DECIMAL: u16 = 0x0006;
pub const COLUMN_TYPE_DOUBLE: u16 = 0x0007;
pub const COLUMN_TYPE_FLOAT: u16 = 0x0008;
pub const COLUMN_TYPE_INT: u16 = 0x0009;
/// Reserved: `text` aliases `varchar` at the value layer but is never emitted
/// as a column-type discriminant on the wire.
pub const COLUMN_TYPE_TEXT: u16 = 0x000a;
pub const COLUMN_TYPE_TIMESTAMP: u16 = 0x000b;
pub const COLUMN_TYPE_UUID: u16 = 0x000c;
pub const COLUMN_TYPE_VARCHAR: u16 = 0x000d;
pub const COLUMN_TYPE_VARINT: u16 = 0x000e;
pub const COLUMN_TYPE_TIMEUUID: u16 = 0x000f;
pub const COLUMN_TYPE_INET: u16 = 0x0010;
pub const COLUMN_TYPE_LIST: u16 = 0x0020;
pub const COLUMN_TYPE_MAP: u16 = 0x0021;
pub const COLUMN_TYPE_SET: u16 = 0x0022;

// Error codes (payloads of `ErrorResponse`).
pub const ERROR_CODE_UNAVAILABLE: i32 = 0x1000;
pub const ERROR_CODE_WRITE_TIMEOUT: i32 = 0x1100;
pub const ERROR_CODE_READ_TIMEOUT: i32 = 0x1200;
pub const ERROR_CODE_ALREADY_EXISTS: i32 = 0x2400;
pub const ERROR_CODE_UNPREPARED: i32 = 0x2500;

// Consistency levels.
pub const CONSISTENCY_ANY: u16 = 0x0000;
pub const CONSISTENCY_ONE: u16 = 0x0001;
pub const CONSISTENCY_TWO: u16 = 0x0002;
pub const CONSISTENCY_THREE: u16 = 0x0003;
pub const CONSISTENCY_QUORUM: u16 = 0x0004;
pub const CONSISTENCY_ALL: u16 = 0x0005;
pub const CONSISTENCY_LOCAL_QUORUM: u16 = 0x0006;
pub const CONSISTENCY_EACH_QUORUM: u16 = 0x0007;
pub const CONSISTENCY_SERIAL: u16 = 0x0008;
pub const CONSISTENCY_LOCAL_SERIAL: u16 = 0x0009;
pub const CONSISTENCY_LOCAL_ONE: u16 = 0x000a;
