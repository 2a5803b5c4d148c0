//! Vector wire types.
//!
//! [`FixVec`] holds items of one fixed size: `[count: u32 LE][item]...`.
//! [`DynVec`] holds items of one dynamic type behind an offset table, the
//! same header layout records use.

use std::marker::PhantomData;

use crate::codec::bytes::{serialize_bytes, Bytes};
use crate::codec::fixed::Byte32;
use crate::codec::primitives::{slot_value, ByteView, Writer};
use crate::codec::table::{serialize_table, verify_and_extract_offsets, TableView};
use crate::codec::{FixedView, View, WireKind};
use crate::error::{DecodeError, EncodeError};
use crate::limits::HEADER_SLOT_SIZE;

// =============================================================================
// FIXED-STRIDE VECTORS
// =============================================================================

/// View over a vector of fixed-size items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixVec<'a, V> {
    view: ByteView<'a>,
    _marker: PhantomData<V>,
}

/// Vector of 32-byte hashes.
pub type Byte32Vec<'a> = FixVec<'a, Byte32<'a>>;

impl<'a, V: FixedView<'a>> FixVec<'a, V> {
    /// Returns the declared item count.
    pub fn len(&self) -> usize {
        self.view.read_slot(0).unwrap_or(0)
    }

    /// Returns true if there are no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns item `index`.
    pub fn get(&self, index: usize) -> Result<V, DecodeError> {
        let len = self.len();
        if index >= len {
            return Err(DecodeError::OutOfBounds {
                offset: HEADER_SLOT_SIZE + index * V::SIZE,
                len: V::SIZE,
                available: self.view.len(),
            });
        }
        let start = HEADER_SLOT_SIZE + index * V::SIZE;
        self.view
            .slice(start, start + V::SIZE)
            .map(V::new_unchecked)
    }

    /// Iterates over the items.
    pub fn iter(&self) -> impl Iterator<Item = Result<V, DecodeError>> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}

impl<'a, V: FixedView<'a>> View<'a> for FixVec<'a, V> {
    const KIND: WireKind = WireKind::FixVec { item_size: V::SIZE };

    fn new_unchecked(view: ByteView<'a>) -> Self {
        Self {
            view,
            _marker: PhantomData,
        }
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
        let count = view.read_slot(0)?;
        let expected = count
            .checked_mul(V::SIZE)
            .and_then(|n| n.checked_add(HEADER_SLOT_SIZE))
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
        // Items are fixed-size, so the length check above covers them.
        Ok(())
    }
}

/// Serializes a vector of `N`-byte items.
pub fn serialize_fixvec<const N: usize>(items: &[[u8; N]]) -> Result<Vec<u8>, EncodeError> {
    let count = slot_value(items.len(), "fixvec")?;
    let total = items
        .len()
        .checked_mul(N)
        .and_then(|n| n.checked_add(HEADER_SLOT_SIZE))
        .ok_or(EncodeError::LengthExceedsLimit {
            field: "fixvec",
            len: usize::MAX,
            max: crate::limits::MAX_REGION_SIZE,
        })?;
    slot_value(total, "fixvec")?;

    let mut writer = Writer::with_capacity(total);
    writer.write_u32_le(count);
    for item in items {
        writer.write_bytes(item);
    }
    Ok(writer.into_bytes())
}

// =============================================================================
// DYNAMIC VECTORS
// =============================================================================

/// View over a vector of dynamic-size items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynVec<'a, V> {
    view: ByteView<'a>,
    _marker: PhantomData<V>,
}

/// Vector of byte strings.
pub type BytesVec<'a> = DynVec<'a, Bytes<'a>>;

impl<'a, V: View<'a>> DynVec<'a, V> {
    fn table(&self) -> TableView<'a> {
        TableView::new(self.view)
    }

    /// Returns the item count.
    pub fn len(&self) -> usize {
        self.table().field_count()
    }

    /// Returns true if there are no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns item `index`.
    pub fn get(&self, index: usize) -> Result<V, DecodeError> {
        self.table().field_as(index)
    }

    /// Iterates over the items.
    pub fn iter(&self) -> impl Iterator<Item = Result<V, DecodeError>> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}

impl<'a, V: View<'a>> View<'a> for DynVec<'a, V> {
    const KIND: WireKind = WireKind::DynVec;

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
        let offsets = verify_and_extract_offsets(view, 0, true)?;
        for pair in offsets.windows(2) {
            V::verify(view.slice(pair[0], pair[1])?, compatible)?;
        }
        Ok(())
    }
}

/// Serializes a vector of dynamic items.
///
/// Each item is serialized independently, then the results are assembled
/// by [`serialize_table`].
pub fn serialize_dynvec<T>(
    items: &[T],
    serialize: impl Fn(&T) -> Result<Vec<u8>, EncodeError>,
) -> Result<Vec<u8>, EncodeError> {
    let encoded = items
        .iter()
        .map(serialize)
        .collect::<Result<Vec<_>, _>>()?;
    serialize_table(&encoded)
}

/// Serializes a vector of byte strings.
pub fn serialize_bytes_vec<T: AsRef<[u8]>>(items: &[T]) -> Result<Vec<u8>, EncodeError> {
    serialize_dynvec(items, |item| serialize_bytes(item.as_ref()))
}
