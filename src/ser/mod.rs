//! Little-endian framing helpers shared by the commitment layers.
//!
//! Every field element committed to a Merkle leaf serializes as 4 bytes
//! little-endian; multi-value payloads concatenate the elements in order.
//! Variable-length segments are length-prefixed with a `u32` so a payload
//! has exactly one encoding.

use crate::field::FieldElement;

/// Serializes a slice of field elements as concatenated 4-byte LE words.
pub fn felts_to_bytes(values: &[FieldElement]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * 4);
    for value in values {
        out.extend_from_slice(&value.to_bytes());
    }
    out
}

/// Appends a `u32` length prefix followed by the payload.
pub fn push_framed(out: &mut Vec<u8>, payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
}

/// Appends a `u32` little-endian word.
pub fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Appends a `u64` little-endian word.
pub fn push_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn felts_serialize_little_endian() {
        let values = [FieldElement::new(1), FieldElement::new(0x0102_0304)];
        let bytes = felts_to_bytes(&values);
        assert_eq!(bytes, vec![1, 0, 0, 0, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn framing_prefixes_length() {
        let mut out = Vec::new();
        push_framed(&mut out, b"abc");
        assert_eq!(out, vec![3, 0, 0, 0, b'a', b'b', b'c']);
    }
}
