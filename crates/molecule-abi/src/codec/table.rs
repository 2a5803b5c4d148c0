//! Offset-table engine shared by dynamic vectors and records.
//!
//! Layout of a table with `n` fields:
//!
//! ```text
//! [total_len: u32 LE][offset_0: u32 LE]...[offset_{n-1}: u32 LE][field_0]...[field_{n-1}]
//! ```
//!
//! The first offset is also the header size, so the field count is
//! `offset_0 / 4 - 1`. An empty table is the four bytes `04 00 00 00`.

use crate::codec::primitives::{slot_value, ByteView, Writer};
use crate::codec::View;
use crate::error::{DecodeError, EncodeError};
use crate::limits::{HEADER_SLOT_SIZE, MIN_POPULATED_TABLE_SIZE, MIN_TABLE_SIZE};
use crate::logging::trace;

// =============================================================================
// OPTIONS
// =============================================================================

/// Options controlling how records are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Accept records carrying fields beyond the declared ones.
    ///
    /// Enabled by default so readers built against an older schema accept
    /// data written with a newer one. When disabled, a record must carry
    /// exactly its declared field count. Vectors are open-ended and ignore
    /// this flag for their own header; it still applies to records nested
    /// inside them.
    pub compatible: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::compatible()
    }
}

impl DecodeOptions {
    /// Creates default (compatible) decoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options tolerating extra trailing fields.
    pub fn compatible() -> Self {
        Self { compatible: true }
    }

    /// Creates options requiring exact record arity.
    pub fn strict() -> Self {
        Self { compatible: false }
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Validates a table header and returns its field boundaries.
///
/// The result holds `count + 1` values: boundary `i` to `i + 1` is the span
/// of field `i`, and the last value is the region length. `min_count` is
/// the number of fields the schema declares. Without `compatible`, a table
/// carrying more than `min_count` fields is rejected.
pub fn verify_and_extract_offsets(
    view: ByteView<'_>,
    min_count: usize,
    compatible: bool,
) -> Result<Vec<usize>, DecodeError> {
    if view.len() < MIN_TABLE_SIZE {
        return Err(DecodeError::TooShort {
            required: MIN_TABLE_SIZE,
            actual: view.len(),
        });
    }

    let total = view.read_slot(0)?;
    if total != view.len() {
        return Err(DecodeError::LengthMismatch {
            expected: total,
            actual: view.len(),
        });
    }

    if total == MIN_TABLE_SIZE {
        if min_count > 0 {
            return Err(DecodeError::FieldCountTooLow {
                required: min_count,
                actual: 0,
            });
        }
        return Ok(vec![total]);
    }

    if total < MIN_POPULATED_TABLE_SIZE {
        return Err(DecodeError::TooShort {
            required: MIN_POPULATED_TABLE_SIZE,
            actual: total,
        });
    }

    let first_offset = view.read_slot(HEADER_SLOT_SIZE)?;
    if first_offset % HEADER_SLOT_SIZE != 0 {
        return Err(DecodeError::InvalidOffset {
            offset: first_offset,
            reason: "first offset is not a multiple of 4",
        });
    }
    if first_offset < MIN_POPULATED_TABLE_SIZE {
        return Err(DecodeError::InvalidOffset {
            offset: first_offset,
            reason: "first offset is smaller than the minimal header",
        });
    }

    let count = first_offset / HEADER_SLOT_SIZE - 1;
    if count < min_count {
        return Err(DecodeError::FieldCountTooLow {
            required: min_count,
            actual: count,
        });
    }
    if !compatible && count > min_count {
        return Err(DecodeError::FieldCountMismatch {
            expected: min_count,
            actual: count,
        });
    }

    if total < first_offset {
        return Err(DecodeError::InvalidOffset {
            offset: first_offset,
            reason: "first offset is larger than the total length",
        });
    }

    let mut offsets = Vec::with_capacity(count + 1);
    for i in 0..count {
        offsets.push(view.read_slot(HEADER_SLOT_SIZE * (i + 1))?);
    }
    offsets.push(total);

    for (index, pair) in offsets.windows(2).enumerate() {
        if pair[0] > pair[1] {
            return Err(DecodeError::OffsetOutOfOrder {
                index,
                offset: pair[0],
                next: pair[1],
            });
        }
    }

    trace!(count, total, compatible, "extracted table offsets");
    Ok(offsets)
}

/// Field addressing over a table header.
///
/// Reads header slots on demand instead of materializing the boundary list.
/// On a region that passed [`verify_and_extract_offsets`] every lookup
/// succeeds; on an unchecked region lookups are bounds-checked and fail
/// rather than panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView<'a> {
    view: ByteView<'a>,
}

impl<'a> TableView<'a> {
    /// Wraps a table region.
    pub fn new(view: ByteView<'a>) -> Self {
        Self { view }
    }

    /// Returns the number of fields (or items) the header declares.
    pub fn field_count(&self) -> usize {
        if self.view.len() < MIN_POPULATED_TABLE_SIZE {
            return 0;
        }
        match self.view.read_slot(HEADER_SLOT_SIZE) {
            Ok(first_offset) => (first_offset / HEADER_SLOT_SIZE).saturating_sub(1),
            Err(_) => 0,
        }
    }

    /// Returns the start offset of field `index`.
    pub fn field_start(&self, index: usize) -> Result<usize, DecodeError> {
        self.view.read_slot(HEADER_SLOT_SIZE * (index + 1))
    }

    /// Returns the region of field `index`.
    ///
    /// A field ends where the next one starts; the last field present in
    /// the header ends at the region end.
    pub fn field(&self, index: usize) -> Result<ByteView<'a>, DecodeError> {
        let count = self.field_count();
        if index >= count {
            return Err(DecodeError::OutOfBounds {
                offset: HEADER_SLOT_SIZE * (index + 1),
                len: HEADER_SLOT_SIZE,
                available: HEADER_SLOT_SIZE * (count + 1),
            });
        }
        let start = self.field_start(index)?;
        let end = if index + 1 < count {
            self.field_start(index + 1)?
        } else {
            self.view.len()
        };
        self.view.slice(start, end)
    }

    /// Returns field `index` wrapped as `V`, without validating it.
    pub fn field_as<V: View<'a>>(&self, index: usize) -> Result<V, DecodeError> {
        self.field(index).map(V::new_unchecked)
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Builds a table from already-serialized fields.
///
/// Writes the total length, one offset per field, then the field bytes in
/// order. The result is exactly `4 * (n + 1) + sum(len)` bytes.
pub fn serialize_table<T: AsRef<[u8]>>(fields: &[T]) -> Result<Vec<u8>, EncodeError> {
    let header_size = HEADER_SLOT_SIZE * (fields.len() + 1);
    let total = fields
        .iter()
        .try_fold(header_size, |acc, field| acc.checked_add(field.as_ref().len()))
        .ok_or(EncodeError::LengthExceedsLimit {
            field: "table",
            len: usize::MAX,
            max: crate::limits::MAX_REGION_SIZE,
        })?;
    slot_value(total, "table")?;

    let mut writer = Writer::with_capacity(total);
    writer.write_slot(total, "table")?;
    let mut offset = header_size;
    for field in fields {
        writer.write_slot(offset, "table")?;
        offset += field.as_ref().len();
    }
    for field in fields {
        writer.write_bytes(field.as_ref());
    }
    Ok(writer.into_bytes())
}
