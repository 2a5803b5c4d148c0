//! Error types for molecule encoding and decoding.

use thiserror::Error;

/// Error codes grouping the decode rejections by the rule they violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Region length disagrees with its shape
    Length,
    /// E002: Malformed offset table
    Header,
    /// E003: Field or item count violates the schema
    Arity,
    /// E004: Read outside the region
    Bounds,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::Length => "E001",
            ErrorCode::Header => "E002",
            ErrorCode::Arity => "E003",
            ErrorCode::Bounds => "E004",
        }
    }
}

/// Error during validation of an encoded region.
///
/// Every variant rejects the whole input. Failures inside a nested field are
/// returned as-is, so the caller sees the exact rule that was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    // === E001: Length ===
    #[error("[E001] region too short: need at least {required} bytes, found {actual}")]
    TooShort { required: usize, actual: usize },

    #[error("[E001] length mismatch: expected {expected} bytes, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    // === E002: Header ===
    #[error("[E002] invalid offset {offset}: {reason}")]
    InvalidOffset { offset: usize, reason: &'static str },

    #[error("[E002] offset {index} ({offset}) is larger than offset {next_index} ({next})", next_index = .index + 1)]
    OffsetOutOfOrder {
        index: usize,
        offset: usize,
        next: usize,
    },

    // === E003: Arity ===
    #[error("[E003] field count not enough: required {required}, found {actual}")]
    FieldCountTooLow { required: usize, actual: usize },

    #[error("[E003] field count is more than required: expected {expected}, found {actual}")]
    FieldCountMismatch { expected: usize, actual: usize },

    // === E004: Bounds ===
    #[error("[E004] read of {len} bytes at offset {offset} exceeds region of {available} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::TooShort { .. } | DecodeError::LengthMismatch { .. } => ErrorCode::Length,
            DecodeError::InvalidOffset { .. } | DecodeError::OffsetOutOfOrder { .. } => {
                ErrorCode::Header
            }
            DecodeError::FieldCountTooLow { .. } | DecodeError::FieldCountMismatch { .. } => {
                ErrorCode::Arity
            }
            DecodeError::OutOfBounds { .. } => ErrorCode::Bounds,
        }
    }
}

/// Error during serialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("invalid input: expected {expected} bytes, found {actual}")]
    InvalidInput { expected: usize, actual: usize },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },
}
