//! Buffer utilities for reading CQL protocol primitives out of a frame body.

use crate::error::{Error, Result};
use bytes::Bytes;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// A cursor over a frame body, offering the primitive reads the CQL wire
/// format is built from.
pub struct ReadBuffer {
    data: Bytes,
    pos: usize,
}

impl ReadBuffer {
    /// Create a new read buffer over `data`.
    pub fn new(data: Bytes) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes remaining after the cursor.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn require(&self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(Error::ShortRead {
                needed: n,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    fn take(&mut self, n: usize) -> Result<Bytes> {
        self.require(n)?;
        let out = self.data.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(out)
    }

    /// `[byte]`: a single unsigned octet.
    pub fn read_byte(&mut self) -> Result<u8> {
        let b = self.take(1)?;
        Ok(b[0])
    }

    /// `[short]`: a two-byte unsigned integer, big-endian.
    pub fn read_short(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// `[int]`: a four-byte signed integer, big-endian.
    pub fn read_int(&mut self) -> Result<i32> {
        let b = self.take(4)?;
        Ok(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// `[string]`: a `[short]` byte length followed by that many UTF-8 bytes.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_short()? as usize;
        let b = self.take(len)?;
        Ok(std::str::from_utf8(&b)?.to_owned())
    }

    /// `[long string]`: an `[int]` byte length followed by that many UTF-8 bytes.
    pub fn read_long_string(&mut self) -> Result<String> {
        let len = self.read_int()?;
        let len = usize::try_from(len).map_err(|_| {
            Error::protocol(format!("negative long string length: {len}"))
        })?;
        let b = self.take(len)?;
        Ok(std::str::from_utf8(&b)?.to_owned())
    }

    /// `[bytes]`: an `[int]` byte length followed by that many bytes, where a
    /// negative length denotes `null`.
    pub fn read_bytes(&mut self) -> Result<Option<Bytes>> {
        let len = self.read_int()?;
        if len < 0 {
            return Ok(None);
        }
        Ok(Some(self.take(len as usize)?))
    }

    /// `[short bytes]`: a `[short]` byte length followed by that many bytes.
    pub fn read_short_bytes(&mut self) -> Result<Bytes> {
        let len = self.read_short()? as usize;
        self.take(len)
    }

    /// A collection element run: a signed 16-bit byte length followed by
    /// that many bytes, where a negative length denotes a null element.
    ///
    /// Distinct from `[bytes]` (a signed 32-bit length): protocol v1 prefixes
    /// List/Map/Set elements with a narrower, 2-byte length, widened to
    /// 4 bytes only in later protocol versions.
    pub fn read_element_bytes(&mut self) -> Result<Option<Bytes>> {
        let len = self.read_short()? as i16;
        if len < 0 {
            return Ok(None);
        }
        Ok(Some(self.take(len as usize)?))
    }

    /// `[inet]`: a one-byte address length (4 or 16), that many address
    /// octets, then an `[int]` port number.
    pub fn read_inet(&mut self) -> Result<(IpAddr, i32)> {
        let len = self.read_byte()?;
        let addr = match len {
            4 => {
                let b = self.take(4)?;
                IpAddr::V4(Ipv4Addr::new(b[0], b[1], b[2], b[3]))
            }
            16 => {
                let b = self.take(16)?;
                let mut octets = [0u8; 16];
                octets.copy_from_slice(&b);
                IpAddr::V6(Ipv6Addr::from(octets))
            }
            other => {
                return Err(Error::protocol(format!(
                    "invalid inet address length: {other}"
                )))
            }
        };
        let port = self.read_int()?;
        Ok((addr, port))
    }

    /// `[string multimap]`: a `[short]` count of `[string]` keys, each paired
    /// with a `[string list]` of values.
    pub fn read_string_multimap(&mut self) -> Result<HashMap<String, Vec<String>>> {
        let count = self.read_short()? as usize;
        let mut map = HashMap::with_capacity(count);
        for _ in 0..count {
            let key = self.read_string()?;
            let n = self.read_short()? as usize;
            let mut values = Vec::with_capacity(n);
            for _ in 0..n {
                values.push(self.read_string()?);
            }
            map.insert(key, values);
        }
        Ok(map)
    }
}
