//! Zero-copy codec for the molecule binary table format.
//!
//! This crate encodes structured values into a canonical, self-describing
//! byte layout and reads that layout back through typed views that borrow
//! from the input instead of parsing it into a tree.
//!
//! # Quick Start
//!
//! ```rust
//! use molecule_abi::{decode_abi_item, encode_abi_item, AbiInput, AbiItemBuilder};
//!
//! let item = AbiItemBuilder::new(0)
//!     .name("transfer")
//!     .input(AbiInput::new("to", "address"))
//!     .input(AbiInput::new("amount", "uint256"))
//!     .gas(21_000)
//!     .build();
//!
//! let bytes = encode_abi_item(&item).unwrap();
//! let view = decode_abi_item(&bytes).unwrap();
//!
//! assert_eq!(view.name().unwrap().raw(), Some(&b"transfer"[..]));
//! assert_eq!(view.gas().unwrap().to_le_u32().unwrap(), Some(21_000));
//! assert_eq!(view.to_model().unwrap(), item);
//! ```
//!
//! # Modules
//!
//! - [`codec`]: The engine: byte views, the offset-table validator and
//!   builder, and the generic fixed / option / bytes / vector types
//! - [`schema`]: Contract ABI records built on the engine
//! - [`model`]: Owned values the schema encodes from and decodes into
//! - [`error`]: Error types
//! - [`limits`]: Layout constants
//!
//! # Wire Format
//!
//! All lengths and offsets are 4-byte little-endian integers.
//!
//! - Fixed types: exactly `N` raw bytes
//! - Options: empty for absent, the inner encoding for present
//! - Byte strings: `[len][payload]`
//! - Fixed vectors: `[count][item]...`
//! - Dynamic vectors and tables: `[total_len][offset]...[item]...`
//!
//! # Security
//!
//! Decoding is meant for untrusted input. A view is only handed out after
//! the whole region, nested fields included, has been validated; any
//! violation rejects the input with the exact rule that failed.

pub mod codec;
pub mod error;
pub mod limits;
pub(crate) mod logging;
pub mod model;
pub mod schema;

// Re-export commonly used types at crate root
pub use codec::{DecodeOptions, Encode, FixedView, View, WireKind};
pub use error::{DecodeError, EncodeError, ErrorCode};
pub use model::{AbiInput, AbiItem, AbiItemBuilder, AbiOutput};
pub use schema::{
    decode_abi_input, decode_abi_input_with_options, decode_abi_item,
    decode_abi_item_with_options, decode_abi_output, decode_abi_output_with_options,
    encode_abi_input, encode_abi_item, encode_abi_output, AbiInputView, AbiItemView,
    AbiOutputView,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
