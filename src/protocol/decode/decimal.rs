//! Decoding for the `decimal` CQL type: an `i32` scale followed by a varint
//! unscaled value, denoting `unscaled * 10^(-scale)`.

use crate::error::{Error, Result};
use crate::protocol::decode::varint::decode_varint;
use bigdecimal::BigDecimal;

/// Decode a CQL `decimal` byte run into a [`BigDecimal`].
pub fn decode_decimal(bytes: &[u8]) -> Result<BigDecimal> {
    if bytes.len() < 4 {
        return Err(Error::protocol(format!(
            "decimal byte run too short for scale prefix: {} bytes",
            bytes.len()
        )));
    }
    let scale = i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let unscaled = decode_varint(&bytes[4..])?;
    Ok(BigDecimal::new(unscaled, scale as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn decodes_scale_zero_as_integer() {
        let mut bytes = vec![0x00, 0x00, 0x00, 0x00];
        bytes.push(0x2a);
        let d = decode_decimal(&bytes).unwrap();
        assert_eq!(d, BigDecimal::from_str("42").unwrap());
    }

    #[test]
    fn decodes_positive_scale() {
        let mut bytes = vec![0x00, 0x00, 0x00, 0x02];
        bytes.push(0x7b);
        let d = decode_decimal(&bytes).unwrap();
        assert_eq!(d, BigDecimal::from_str("1.23").unwrap());
    }

    #[test]
    fn decodes_negative_unscaled_value() {
        let mut bytes = vec![0x00, 0x00, 0x00, 0x01];
        bytes.push(0xf6);
        let d = decode_decimal(&bytes).unwrap();
        assert_eq!(d, BigDecimal::from_str("-1.0").unwrap());
    }

    #[test]
    fn rejects_truncated_input() {
        assert!(decode_decimal(&[0x00, 0x00]).is_err());
    }
}
