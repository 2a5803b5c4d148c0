//! Molecule encoding engine.
//!
//! Every wire type belongs to one of the categories in [`WireKind`]. Decoding
//! produces zero-copy views implementing [`View`]; encoding goes through the
//! `serialize_*` functions, which build one fresh region per call.

pub mod bytes;
pub mod fixed;
pub mod option;
pub mod primitives;
pub mod table;
pub mod vector;

pub use bytes::{serialize_bytes, Bytes};
pub use fixed::{
    serialize_fixed, Byte, Byte20, Byte32, Uint128, Uint16, Uint256, Uint32, Uint64,
};
pub use option::{serialize_option, ByteOpt, BytesOpt, Opt, Uint32Opt};
pub use primitives::{ByteView, Writer};
pub use table::{serialize_table, verify_and_extract_offsets, DecodeOptions, TableView};
pub use vector::{
    serialize_bytes_vec, serialize_dynvec, serialize_fixvec, Byte32Vec, BytesVec, DynVec, FixVec,
};

use crate::error::{DecodeError, EncodeError};

/// Wire-format category of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireKind {
    /// Exactly `size` raw bytes.
    Fixed { size: usize },
    /// Empty for absent, the inner encoding for present.
    Option,
    /// 4-byte length prefix followed by the payload.
    Bytes,
    /// 4-byte item count followed by items of `item_size` bytes.
    FixVec { item_size: usize },
    /// Offset table over items of one dynamic type.
    DynVec,
    /// Offset table over `fields` heterogeneous fields.
    Table { fields: usize },
}

impl WireKind {
    /// Returns the encoded size if it is the same for every value.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            WireKind::Fixed { size } => Some(*size),
            _ => None,
        }
    }
}

/// A typed, zero-copy view over one encoded value.
///
/// A view is only a borrowed region plus the knowledge of how to interpret
/// it. [`View::from_slice`] validates before wrapping; [`View::new_unchecked`]
/// skips validation and must only be used on regions an enclosing view has
/// already verified.
pub trait View<'a>: Copy + Sized {
    /// Wire category of this type.
    const KIND: WireKind;

    /// Wraps a region without validating it.
    fn new_unchecked(view: ByteView<'a>) -> Self;

    /// Returns the wrapped region.
    fn as_view(&self) -> ByteView<'a>;

    /// Checks that `view` is a valid encoding of this type.
    ///
    /// `compatible` allows tables to carry fields beyond the declared ones.
    fn verify(view: ByteView<'_>, compatible: bool) -> Result<(), DecodeError>;

    /// Validates `data` with the default options and wraps it.
    fn from_slice(data: &'a [u8]) -> Result<Self, DecodeError> {
        Self::from_slice_with_options(data, DecodeOptions::default())
    }

    /// Validates `data` with the given options and wraps it.
    fn from_slice_with_options(
        data: &'a [u8],
        options: DecodeOptions,
    ) -> Result<Self, DecodeError> {
        let view = ByteView::new(data);
        Self::verify(view, options.compatible)?;
        Ok(Self::new_unchecked(view))
    }

    /// Re-runs validation over the wrapped region.
    fn validate(&self, compatible: bool) -> Result<(), DecodeError> {
        Self::verify(self.as_view(), compatible)
    }

    /// Returns the encoded bytes.
    fn as_slice(&self) -> &'a [u8] {
        self.as_view().as_slice()
    }
}

/// A view whose encoding always has the same length.
pub trait FixedView<'a>: View<'a> {
    /// Encoded size in bytes.
    const SIZE: usize;
}

/// Types that serialize to a canonical molecule encoding.
pub trait Encode {
    /// Serializes `self` into one freshly allocated region.
    fn encode(&self) -> Result<Vec<u8>, EncodeError>;
}

impl<const N: usize> Encode for [u8; N] {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(self.to_vec())
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        serialize_option(self.as_ref(), T::encode)
    }
}
