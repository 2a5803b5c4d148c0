//! Layout constants and size limits for the molecule wire format.

/// Size of one header slot (total length or field offset), in bytes.
pub const HEADER_SLOT_SIZE: usize = 4;

/// Size of an empty table or vector: the total-length slot alone.
pub const MIN_TABLE_SIZE: usize = HEADER_SLOT_SIZE;

/// Smallest table that carries at least one field offset.
pub const MIN_POPULATED_TABLE_SIZE: usize = 2 * HEADER_SLOT_SIZE;

/// Largest region the 4-byte little-endian length header can describe.
pub const MAX_REGION_SIZE: usize = u32::MAX as usize;
