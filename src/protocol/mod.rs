//! CQL binary protocol (v1) response-frame decoder.

pub mod body;
pub mod buffer;
pub mod column_type;
pub mod consistency;
pub mod constants;
pub mod decode;
pub mod frame;
pub mod host_distance;
pub mod value;

pub use body::{ColumnSpec, ErrorBody, ErrorDetails, EventBody, ResultBody, Row};
pub use buffer::ReadBuffer;
pub use column_type::ColumnType;
pub use consistency::Consistency;
pub use frame::{Frame, ResponseBody};
pub use host_distance::HostDistance;
pub use value::Value;
