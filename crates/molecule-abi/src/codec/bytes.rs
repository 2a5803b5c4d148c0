//! Dynamic byte strings: `[len: u32 LE][payload; len]`.

use crate::codec::primitives::{slot_value, ByteView, Writer};
use crate::codec::{View, WireKind};
use crate::error::{DecodeError, EncodeError};
use crate::limits::HEADER_SLOT_SIZE;

/// View over a length-prefixed byte string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bytes<'a> {
    view: ByteView<'a>,
}

impl<'a> Bytes<'a> {
    /// Returns the declared payload length.
    pub fn len(&self) -> usize {
        self.view.read_slot(0).unwrap_or(0)
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the payload without its length prefix.
    pub fn raw(&self) -> &'a [u8] {
        self.view
            .as_slice()
            .get(HEADER_SLOT_SIZE..)
            .unwrap_or_default()
    }

    /// Reads payload byte `index`.
    pub fn byte_at(&self, index: usize) -> Result<u8, DecodeError> {
        self.view.byte_at(HEADER_SLOT_SIZE + index)
    }
}

impl<'a> View<'a> for Bytes<'a> {
    const KIND: WireKind = WireKind::Bytes;

    fn new_unchecked(view: ByteView<'a>) -> Self {
        Self { view }
    }

    fn as_view(&self) -> ByteView<'a> {
        self.view
    }

    fn verify(view: ByteView<'_>, _compatible: bool) -> Result<(), DecodeError> {
        if view.len() < HEADER_SLOT_SIZE {
            return Err(DecodeError::TooShort {
                required: HEADER_SLOT_SIZE,
                actual: view.len(),
            });
        }
        let expected = view
            .read_slot(0)?
            .checked_add(HEADER_SLOT_SIZE)
            .ok_or(DecodeError::LengthMismatch {
                expected: usize::MAX,
                actual: view.len(),
            })?;
        if expected != view.len() {
            return Err(DecodeError::LengthMismatch {
                expected,
                actual: view.len(),
            });
        }
        Ok(())
    }
}

/// Serializes a payload as a length-prefixed byte string.
pub fn serialize_bytes(payload: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let len = slot_value(payload.len(), "bytes")?;
    let mut writer = Writer::with_capacity(HEADER_SLOT_SIZE + payload.len());
    writer.write_u32_le(len);
    writer.write_bytes(payload);
    Ok(writer.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_layout() {
        let encoded = serialize_bytes(b"uint256").unwrap();
        assert_eq!(&encoded[..4], &[7, 0, 0, 0]);
        assert_eq!(&encoded[4..], b"uint256");

        let bytes = Bytes::from_slice(&encoded).unwrap();
        assert_eq!(bytes.len(), 7);
        assert_eq!(bytes.raw(), b"uint256");
        assert_eq!(bytes.byte_at(0).unwrap(), b'u');
        assert!(bytes.byte_at(7).is_err());
    }

    #[test]
    fn test_empty_payload() {
        let encoded = serialize_bytes(&[]).unwrap();
        assert_eq!(encoded, vec![0, 0, 0, 0]);

        let bytes = Bytes::from_slice(&encoded).unwrap();
        assert!(bytes.is_empty());
        assert!(bytes.raw().is_empty());
    }

    #[test]
    fn test_rejects_bad_lengths() {
        assert!(matches!(
            Bytes::from_slice(&[1, 0, 0]),
            Err(DecodeError::TooShort { required: 4, actual: 3 })
        ));
        // Declares 2 bytes, carries 1.
        assert!(matches!(
            Bytes::from_slice(&[2, 0, 0, 0, 9]),
            Err(DecodeError::LengthMismatch { expected: 6, actual: 5 })
        ));
        // Declares 0 bytes, carries a trailing byte.
        assert!(matches!(
            Bytes::from_slice(&[0, 0, 0, 0, 9]),
            Err(DecodeError::LengthMismatch { expected: 4, actual: 5 })
        ));
    }
}
