//! Response body variants, one module per opcode-specific payload.

mod error;
mod event;
mod result;

pub use error::{ErrorBody, ErrorDetails};
pub use event::EventBody;
pub use result::{ColumnSpec, ResultBody, Row};
