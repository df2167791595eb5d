//! Decoding for the `timestamp` CQL type: milliseconds since the Unix epoch,
//! carried as two big-endian `i32` words.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};

/// Decode an 8-byte big-endian millisecond count into an instant.
pub fn decode_timestamp(bytes: &[u8]) -> Result<DateTime<Utc>> {
    if bytes.len() != 8 {
        return Err(Error::protocol(format!(
            "timestamp byte run must be 8 bytes, got {}",
            bytes.len()
        )));
    }
    let high = i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let low = i32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    let millis = ((high as i64) << 32) | (low as u32 as i64);
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| Error::protocol(format!("timestamp out of range: {millis} ms")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_epoch() {
        let bytes = [0u8; 8];
        let ts = decode_timestamp(&bytes).unwrap();
        assert_eq!(ts.timestamp_millis(), 0);
    }

    #[test]
    fn decodes_positive_millis() {
        let millis: i64 = 1_700_000_000_000;
        let bytes = millis.to_be_bytes();
        let ts = decode_timestamp(&bytes).unwrap();
        assert_eq!(ts.timestamp_millis(), millis);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(decode_timestamp(&[0u8; 4]).is_err());
    }
}
