//! Optional values.
//!
//! Absent encodes as an empty region; present encodes as exactly the inner
//! type's encoding, with no tag byte.

use std::marker::PhantomData;

use crate::codec::bytes::Bytes;
use crate::codec::fixed::{Byte, Uint32};
use crate::codec::primitives::ByteView;
use crate::codec::{View, WireKind};
use crate::error::{DecodeError, EncodeError};

/// View over zero-or-one `V`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opt<'a, V> {
    view: ByteView<'a>,
    _marker: PhantomData<V>,
}

/// Optional single byte (length 0 or 1).
pub type ByteOpt<'a> = Opt<'a, Byte<'a>>;
/// Optional byte string.
pub type BytesOpt<'a> = Opt<'a, Bytes<'a>>;
/// Optional 4-byte integer.
pub type Uint32Opt<'a> = Opt<'a, Uint32<'a>>;

impl<'a, V: View<'a>> Opt<'a, V> {
    /// Returns true if a value is present.
    pub fn has_value(&self) -> bool {
        !self.view.is_empty()
    }

    /// Returns the inner view if present.
    pub fn value(&self) -> Option<V> {
        self.has_value().then(|| V::new_unchecked(self.view))
    }
}

impl<'a> Opt<'a, Byte<'a>> {
    /// Returns the byte if present.
    pub fn byte(&self) -> Result<Option<u8>, DecodeError> {
        self.value().map(|b| b.get()).transpose()
    }
}

impl<'a> Opt<'a, Uint32<'a>> {
    /// Returns the little-endian integer if present.
    pub fn to_le_u32(&self) -> Result<Option<u32>, DecodeError> {
        self.value().map(|v| v.to_le_u32()).transpose()
    }
}

impl<'a> Opt<'a, Bytes<'a>> {
    /// Returns the payload if present.
    pub fn raw(&self) -> Option<&'a [u8]> {
        self.value().map(|b| b.raw())
    }
}

impl<'a, V: View<'a>> View<'a> for Opt<'a, V> {
    const KIND: WireKind = WireKind::Option;

    fn new_unchecked(view: ByteView<'a>) -> Self {
        Self {
            view,
            _marker: PhantomData,
        }
    }

    fn as_view(&self) -> ByteView<'a> {
        self.view
    }

    fn verify(view: ByteView<'_>, compatible: bool) -> Result<(), DecodeError> {
        if view.is_empty() {
            return Ok(());
        }
        V::verify(view, compatible)
    }
}

/// Serializes an optional value.
///
/// `None` becomes an empty region; `Some` becomes exactly what `serialize`
/// produces for the inner value.
pub fn serialize_option<T: ?Sized>(
    value: Option<&T>,
    serialize: impl FnOnce(&T) -> Result<Vec<u8>, EncodeError>,
) -> Result<Vec<u8>, EncodeError> {
    match value {
        Some(inner) => serialize(inner),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::bytes::serialize_bytes;

    #[test]
    fn test_absent() {
        let encoded = serialize_option::<[u8]>(None, serialize_bytes).unwrap();
        assert!(encoded.is_empty());

        let opt = BytesOpt::from_slice(&encoded).unwrap();
        assert!(!opt.has_value());
        assert!(opt.value().is_none());
        assert!(opt.raw().is_none());
    }

    #[test]
    fn test_present_is_inner_encoding() {
        let inner = serialize_bytes(b"abc").unwrap();
        let encoded = serialize_option(Some(&b"abc"[..]), serialize_bytes).unwrap();
        assert_eq!(encoded, inner);

        let opt = BytesOpt::from_slice(&encoded).unwrap();
        assert!(opt.has_value());
        assert_eq!(opt.raw(), Some(&b"abc"[..]));
    }

    #[test]
    fn test_present_value_validated() {
        assert!(matches!(
            BytesOpt::from_slice(&[5, 0, 0, 0, 1]),
            Err(DecodeError::LengthMismatch { expected: 9, actual: 5 })
        ));
    }

    #[test]
    fn test_byte_opt() {
        let opt = ByteOpt::from_slice(&[0]).unwrap();
        assert_eq!(opt.byte().unwrap(), Some(0));

        let opt = ByteOpt::from_slice(&[]).unwrap();
        assert_eq!(opt.byte().unwrap(), None);

        assert!(matches!(
            ByteOpt::from_slice(&[1, 2]),
            Err(DecodeError::LengthMismatch { expected: 1, actual: 2 })
        ));
    }

    #[test]
    fn test_uint32_opt() {
        let data = 21000u32.to_le_bytes();
        let opt = Uint32Opt::from_slice(&data).unwrap();
        assert_eq!(opt.to_le_u32().unwrap(), Some(21000));
        assert!(Uint32Opt::from_slice(&[1, 2]).is_err());
    }
}
