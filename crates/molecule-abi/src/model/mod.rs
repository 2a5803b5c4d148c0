//! Owned values for the contract ABI schema.
//!
//! These are the inputs to encoding and the result of
//! `to_model()` on a decoded view.

pub mod abi;
pub mod builder;

pub use abi::{AbiInput, AbiItem, AbiOutput};
pub use builder::AbiItemBuilder;
