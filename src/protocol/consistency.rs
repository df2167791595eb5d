//! Consistency levels, as carried in several `ErrorDetails` payloads.

use crate::error::{Error, Result};
use crate::protocol::buffer::ReadBuffer;
use crate::protocol::constants::*;

/// A CQL consistency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    Any,
    One,
    Two,
    Three,
    Quorum,
    All,
    LocalQuorum,
    EachQuorum,
    Serial,
    LocalSerial,
    LocalOne,
}

impl Consistency {
    fn from_code(code: u16) -> Result<Self> {
        Ok(match code {
            CONSISTENCY_ANY => Self::Any,
            CONSISTENCY_ONE => Self::One,
            CONSISTENCY_TWO => Self::Two,
            CONSISTENCY_THREE => Self::Three,
            CONSISTENCY_QUORUM => Self::Quorum,
            CONSISTENCY_ALL => Self::All,
            CONSISTENCY_LOCAL_QUORUM => Self::LocalQuorum,
            CONSISTENCY_EACH_QUORUM => Self::EachQuorum,
            CONSISTENCY_SERIAL => Self::Serial,
            CONSISTENCY_LOCAL_SERIAL => Self::LocalSerial,
            CONSISTENCY_LOCAL_ONE => Self::LocalOne,
            other => return Err(Error::protocol(format!("unknown consistency level: {other:#06x}"))),
        })
    }
}

impl ReadBuffer {
    /// `[consistency]`: a `[short]` mapped to a named consistency level.
    pub fn read_consistency(&mut self) -> Result<Consistency> {
        let code = self.read_short()?;
        Consistency::from_code(code)
    }
}

impl std::fmt::Display for Consistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Any => "ANY",
            Self::One => "ONE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Quorum => "QUORUM",
            Self::All => "ALL",
            Self::LocalQuorum => "LOCAL_QUORUM",
            Self::EachQuorum => "EACH_QUORUM",
            Self::Serial => "SERIAL",
            Self::LocalSerial => "LOCAL_SERIAL",
            Self::LocalOne => "LOCAL_ONE",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn decodes_quorum() {
        let mut b = ReadBuffer::new(Bytes::from_static(&[0x00, 0x04]));
        assert_eq!(b.read_consistency().unwrap(), Consistency::Quorum);
    }

    #[test]
    fn rejects_unknown_level() {
        let mut b = ReadBuffer::new(Bytes::from_static(&[0xff, 0xff]));
        assert!(b.read_consistency().is_err());
    }
}
