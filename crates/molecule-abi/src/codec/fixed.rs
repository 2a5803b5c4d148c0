//! Fixed-size wire types.
//!
//! A fixed type is exactly `SIZE` raw bytes with no header. Validation is a
//! length comparison and nothing else.

use crate::codec::primitives::ByteView;
use crate::codec::{FixedView, View, WireKind};
use crate::error::{DecodeError, EncodeError};

/// Checks that a region is exactly `size` bytes.
pub(crate) fn verify_fixed(view: ByteView<'_>, size: usize) -> Result<(), DecodeError> {
    if view.len() != size {
        return Err(DecodeError::LengthMismatch {
            expected: size,
            actual: view.len(),
        });
    }
    Ok(())
}

/// Serializes a fixed-size value from a byte slice.
///
/// The result is the input bytes unchanged; the length must be exactly `N`.
pub fn serialize_fixed<const N: usize>(value: &[u8]) -> Result<Vec<u8>, EncodeError> {
    if value.len() != N {
        return Err(EncodeError::InvalidInput {
            expected: N,
            actual: value.len(),
        });
    }
    Ok(value.to_vec())
}

macro_rules! fixed_type {
    ($(#[$meta:meta])* $name:ident, $size:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<'a> {
            view: ByteView<'a>,
        }

        impl<'a> $name<'a> {
            /// Returns the raw bytes.
            pub fn raw(&self) -> &'a [u8] {
                self.view.as_slice()
            }

            /// Reads the byte at `index`.
            pub fn byte_at(&self, index: usize) -> Result<u8, DecodeError> {
                self.view.byte_at(index)
            }

            /// Copies the bytes into an array.
            pub fn to_array(&self) -> Result<[u8; $size], DecodeError> {
                self.view.read_array(0)
            }
        }

        impl<'a> View<'a> for $name<'a> {
            const KIND: WireKind = WireKind::Fixed { size: $size };

            fn new_unchecked(view: ByteView<'a>) -> Self {
                Self { view }
            }

            fn as_view(&self) -> ByteView<'a> {
                self.view
            }

            fn verify(view: ByteView<'_>, _compatible: bool) -> Result<(), DecodeError> {
                verify_fixed(view, $size)
            }
        }

        impl<'a> FixedView<'a> for $name<'a> {
            const SIZE: usize = $size;
        }
    };
}

macro_rules! scalar_accessors {
    ($name:ident, $ty:ty, $be:ident, $le:ident, $read_be:ident, $read_le:ident) => {
        impl<'a> $name<'a> {
            /// Interprets the bytes as a big-endian integer.
            pub fn $be(&self) -> Result<$ty, DecodeError> {
                self.view.$read_be(0)
            }

            /// Interprets the bytes as a little-endian integer.
            pub fn $le(&self) -> Result<$ty, DecodeError> {
                self.view.$read_le(0)
            }
        }
    };
}

fixed_type!(
    /// A single byte. Used for flags and discriminants.
    Byte, 1
);
fixed_type!(
    /// A 2-byte unsigned integer.
    Uint16, 2
);
fixed_type!(
    /// A 4-byte unsigned integer.
    Uint32, 4
);
fixed_type!(
    /// An 8-byte unsigned integer.
    Uint64, 8
);
fixed_type!(
    /// A 16-byte unsigned integer.
    Uint128, 16
);
fixed_type!(
    /// A 32-byte unsigned integer, exposed as raw bytes.
    Uint256, 32
);
fixed_type!(
    /// A 20-byte array (account addresses).
    Byte20, 20
);
fixed_type!(
    /// A 32-byte array (hashes).
    Byte32, 32
);

scalar_accessors!(Uint16, u16, to_be_u16, to_le_u16, read_u16_be, read_u16_le);
scalar_accessors!(Uint32, u32, to_be_u32, to_le_u32, read_u32_be, read_u32_le);
scalar_accessors!(Uint64, u64, to_be_u64, to_le_u64, read_u64_be, read_u64_le);
scalar_accessors!(Uint128, u128, to_be_u128, to_le_u128, read_u128_be, read_u128_le);

impl<'a> Byte<'a> {
    /// Returns the byte value.
    pub fn get(&self) -> Result<u8, DecodeError> {
        self.view.byte_at(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length_required() {
        assert!(Uint32::from_slice(&[1, 2, 3, 4]).is_ok());
        assert!(matches!(
            Uint32::from_slice(&[1, 2, 3]),
            Err(DecodeError::LengthMismatch { expected: 4, actual: 3 })
        ));
        assert!(matches!(
            Byte32::from_slice(&[0u8; 33]),
            Err(DecodeError::LengthMismatch { expected: 32, actual: 33 })
        ));
        assert!(Byte::from_slice(&[]).is_err());
    }

    #[test]
    fn test_scalar_interpretation() {
        let data = [0x12u8, 0x34];
        let value = Uint16::from_slice(&data).unwrap();
        assert_eq!(value.to_be_u16().unwrap(), 0x1234);
        assert_eq!(value.to_le_u16().unwrap(), 0x3412);
        assert_eq!(value.byte_at(1).unwrap(), 0x34);
        assert!(value.byte_at(2).is_err());

        let data = 7u64.to_le_bytes();
        let value = Uint64::from_slice(&data).unwrap();
        assert_eq!(value.to_le_u64().unwrap(), 7);
        assert_eq!(value.to_be_u64().unwrap(), 7u64 << 56);
    }

    #[test]
    fn test_raw_access() {
        let data = [0xabu8; 20];
        let value = Byte20::from_slice(&data).unwrap();
        assert_eq!(value.raw(), &data);
        assert_eq!(value.to_array().unwrap(), data);
        assert_eq!(Byte20::KIND.fixed_size(), Some(20));
        assert_eq!(<Uint256<'_> as FixedView<'_>>::SIZE, 32);
    }

    #[test]
    fn test_serialize_fixed() {
        assert_eq!(serialize_fixed::<4>(&[1, 2, 3, 4]).unwrap(), vec![1, 2, 3, 4]);
        assert!(matches!(
            serialize_fixed::<2>(&[1, 2, 3]),
            Err(EncodeError::InvalidInput { expected: 2, actual: 3 })
        ));
    }
}
