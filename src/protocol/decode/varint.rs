//! Decoding for the `varint` CQL type: an arbitrary-precision, two's-complement
//! big-endian integer.

use crate::error::{Error, Result};
use num_bigint::BigInt;

/// Decode a big-endian two's-complement byte run into a [`BigInt`].
///
/// The sign is taken from the top bit of the first octet, matching the wire
/// convention rather than an unsigned interpretation.
pub fn decode_varint(bytes: &[u8]) -> Result<BigInt> {
    if bytes.is_empty() {
        return Err(Error::protocol("varint of zero length is not permitted"));
    }
    Ok(BigInt::from_signed_bytes_be(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_positive() {
        assert_eq!(decode_varint(&[0x00, 0x01]).unwrap(), BigInt::from(1));
    }

    #[test]
    fn decodes_negative_from_sign_bit() {
        assert_eq!(decode_varint(&[0xff]).unwrap(), BigInt::from(-1));
    }

    #[test]
    fn decodes_zero() {
        assert_eq!(decode_varint(&[0x00]).unwrap(), BigInt::from(0));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(decode_varint(&[]).is_err());
    }

    #[test]
    fn decodes_large_magnitude() {
        let bytes = [0x01, 0x00, 0x00, 0x00, 0x00, 0x00];
        let value = decode_varint(&bytes).unwrap();
        assert_eq!(value, BigInt::from(0x01_0000_0000_0000u64));
    }
}
