//! Byte-level primitives for the molecule format.
//!
//! [`ByteView`] is the read side: a borrowed, length-checked window over an
//! encoded region. [`Writer`] is the write side used by every serializer.

use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_REGION_SIZE;

// =============================================================================
// DECODING
// =============================================================================

/// Borrowed view over a contiguous encoded region.
///
/// Views never copy or mutate the bytes they wrap. Sub-views created with
/// [`ByteView::slice`] borrow from the same backing buffer, so nested fields
/// can be addressed at any depth without reallocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteView<'a> {
    data: &'a [u8],
}

impl<'a> ByteView<'a> {
    /// Creates a view over a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Returns the region length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the region is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying bytes.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Reads the byte at `index`.
    #[inline]
    pub fn byte_at(&self, index: usize) -> Result<u8, DecodeError> {
        self.data.get(index).copied().ok_or(DecodeError::OutOfBounds {
            offset: index,
            len: 1,
            available: self.data.len(),
        })
    }

    /// Returns the sub-view `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> Result<ByteView<'a>, DecodeError> {
        if start > end {
            return Err(DecodeError::InvalidOffset {
                offset: start,
                reason: "span starts after it ends",
            });
        }
        self.data
            .get(start..end)
            .map(ByteView::new)
            .ok_or(DecodeError::OutOfBounds {
                offset: start,
                len: end - start,
                available: self.data.len(),
            })
    }

    /// Reads `N` bytes starting at `offset`.
    #[inline]
    pub fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], DecodeError> {
        let bytes = offset
            .checked_add(N)
            .and_then(|end| self.data.get(offset..end))
            .ok_or(DecodeError::OutOfBounds {
                offset,
                len: N,
                available: self.data.len(),
            })?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads a little-endian u16 at `offset`.
    pub fn read_u16_le(&self, offset: usize) -> Result<u16, DecodeError> {
        self.read_array(offset).map(u16::from_le_bytes)
    }

    /// Reads a big-endian u16 at `offset`.
    pub fn read_u16_be(&self, offset: usize) -> Result<u16, DecodeError> {
        self.read_array(offset).map(u16::from_be_bytes)
    }

    /// Reads a little-endian u32 at `offset`.
    #[inline]
    pub fn read_u32_le(&self, offset: usize) -> Result<u32, DecodeError> {
        self.read_array(offset).map(u32::from_le_bytes)
    }

    /// Reads a big-endian u32 at `offset`.
    pub fn read_u32_be(&self, offset: usize) -> Result<u32, DecodeError> {
        self.read_array(offset).map(u32::from_be_bytes)
    }

    /// Reads a little-endian u64 at `offset`.
    pub fn read_u64_le(&self, offset: usize) -> Result<u64, DecodeError> {
        self.read_array(offset).map(u64::from_le_bytes)
    }

    /// Reads a big-endian u64 at `offset`.
    pub fn read_u64_be(&self, offset: usize) -> Result<u64, DecodeError> {
        self.read_array(offset).map(u64::from_be_bytes)
    }

    /// Reads a little-endian u128 at `offset`.
    pub fn read_u128_le(&self, offset: usize) -> Result<u128, DecodeError> {
        self.read_array(offset).map(u128::from_le_bytes)
    }

    /// Reads a big-endian u128 at `offset`.
    pub fn read_u128_be(&self, offset: usize) -> Result<u128, DecodeError> {
        self.read_array(offset).map(u128::from_be_bytes)
    }

    /// Reads a 4-byte little-endian length or offset slot as `usize`.
    #[inline]
    pub fn read_slot(&self, offset: usize) -> Result<usize, DecodeError> {
        self.read_u32_le(offset).map(|v| v as usize)
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteView<'a> {
    fn from(data: &'a [u8; N]) -> Self {
        Self::new(data)
    }
}

impl<'a> From<&'a Vec<u8>> for ByteView<'a> {
    fn from(data: &'a Vec<u8>) -> Self {
        Self::new(data)
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a little-endian u32.
    #[inline]
    pub fn write_u32_le(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a length or offset as a 4-byte little-endian slot.
    #[inline]
    pub fn write_slot(&mut self, value: usize, field: &'static str) -> Result<(), EncodeError> {
        self.write_u32_le(slot_value(value, field)?);
        Ok(())
    }
}

/// Converts a length or offset to its 4-byte header representation.
pub(crate) fn slot_value(value: usize, field: &'static str) -> Result<u32, EncodeError> {
    u32::try_from(value).map_err(|_| EncodeError::LengthExceedsLimit {
        field,
        len: value,
        max: MAX_REGION_SIZE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_reads() {
        let data = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let view = ByteView::new(&data);

        assert_eq!(view.len(), 8);
        assert_eq!(view.byte_at(3).unwrap(), 0x04);
        assert_eq!(view.read_u16_le(0).unwrap(), 0x0201);
        assert_eq!(view.read_u16_be(0).unwrap(), 0x0102);
        assert_eq!(view.read_u32_le(4).unwrap(), 0x0807_0605);
        assert_eq!(view.read_u32_be(4).unwrap(), 0x0506_0708);
        assert_eq!(view.read_u64_le(0).unwrap(), 0x0807_0605_0403_0201);
        assert_eq!(view.read_u64_be(0).unwrap(), 0x0102_0304_0506_0708);
    }

    #[test]
    fn test_u128_reads() {
        let mut data = [0u8; 16];
        data[0] = 1;
        let view = ByteView::new(&data);
        assert_eq!(view.read_u128_le(0).unwrap(), 1);
        assert_eq!(view.read_u128_be(0).unwrap(), 1u128 << 120);
    }

    #[test]
    fn test_out_of_bounds() {
        let data = [0u8; 4];
        let view = ByteView::new(&data);

        assert!(matches!(
            view.byte_at(4),
            Err(DecodeError::OutOfBounds { offset: 4, len: 1, available: 4 })
        ));
        assert!(matches!(
            view.read_u32_le(1),
            Err(DecodeError::OutOfBounds { offset: 1, len: 4, available: 4 })
        ));
        assert!(matches!(
            view.read_u64_le(usize::MAX),
            Err(DecodeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_slice_borrows_same_buffer() {
        let data = [10u8, 11, 12, 13, 14];
        let view = ByteView::new(&data);

        let sub = view.slice(1, 4).unwrap();
        assert_eq!(sub.as_slice(), &[11, 12, 13]);
        assert!(std::ptr::eq(sub.as_slice().as_ptr(), data[1..].as_ptr()));

        assert!(view.slice(3, 6).is_err());
        assert!(matches!(
            view.slice(4, 2),
            Err(DecodeError::InvalidOffset { offset: 4, .. })
        ));
        assert!(view.slice(5, 5).unwrap().is_empty());
    }

    #[test]
    fn test_writer_slots() {
        let mut writer = Writer::with_capacity(9);
        writer.write_slot(9, "total").unwrap();
        writer.write_u32_le(0xdead_beef);
        writer.write_byte(7);

        assert_eq!(writer.len(), 9);
        assert_eq!(
            writer.into_bytes(),
            vec![9, 0, 0, 0, 0xef, 0xbe, 0xad, 0xde, 7]
        );
    }

    #[test]
    fn test_slot_overflow() {
        let result = slot_value(MAX_REGION_SIZE + 1, "total");
        assert!(matches!(
            result,
            Err(EncodeError::LengthExceedsLimit { field: "total", .. })
        ));
    }
}
