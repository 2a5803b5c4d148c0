//! Contract ABI schema built on the molecule engine.
//!
//! Three records ([`AbiInputView`], [`AbiOutputView`], [`AbiItemView`]) plus
//! their vector and option forms. Each record validates through
//! [`verify_and_extract_offsets`](crate::codec::verify_and_extract_offsets)
//! and then checks every declared field against its own type.

pub mod input;
pub mod item;
pub mod output;

pub use input::{serialize_abi_inputs, AbiInputView, AbiInputsOptView, AbiInputsView};
pub use item::AbiItemView;
pub use output::{serialize_abi_outputs, AbiOutputView, AbiOutputsOptView, AbiOutputsView};

use crate::codec::{DecodeOptions, Encode, View};
use crate::error::{DecodeError, EncodeError};
use crate::logging::debug;
use crate::model::{AbiInput, AbiItem, AbiOutput};

#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
fn decode_logged<'a, V: View<'a>>(
    input: &'a [u8],
    options: DecodeOptions,
    record: &'static str,
) -> Result<V, DecodeError> {
    V::from_slice_with_options(input, options).inspect_err(|err| {
        debug!(
            record,
            len = input.len(),
            compatible = options.compatible,
            error = %err,
            "rejected input"
        );
    })
}

// =============================================================================
// ABI ITEM
// =============================================================================

/// Decodes an `AbiItem` with the default (compatible) options.
pub fn decode_abi_item(input: &[u8]) -> Result<AbiItemView<'_>, DecodeError> {
    decode_abi_item_with_options(input, DecodeOptions::default())
}

/// Decodes an `AbiItem` with the given options.
pub fn decode_abi_item_with_options(
    input: &[u8],
    options: DecodeOptions,
) -> Result<AbiItemView<'_>, DecodeError> {
    decode_logged(input, options, "AbiItem")
}

/// Encodes an `AbiItem`.
pub fn encode_abi_item(item: &AbiItem) -> Result<Vec<u8>, EncodeError> {
    item.encode()
}

// =============================================================================
// ABI INPUT / OUTPUT
// =============================================================================

/// Decodes an `AbiInput` with the default (compatible) options.
pub fn decode_abi_input(input: &[u8]) -> Result<AbiInputView<'_>, DecodeError> {
    decode_abi_input_with_options(input, DecodeOptions::default())
}

/// Decodes an `AbiInput` with the given options.
pub fn decode_abi_input_with_options(
    input: &[u8],
    options: DecodeOptions,
) -> Result<AbiInputView<'_>, DecodeError> {
    decode_logged(input, options, "AbiInput")
}

/// Encodes an `AbiInput`.
pub fn encode_abi_input(value: &AbiInput) -> Result<Vec<u8>, EncodeError> {
    value.encode()
}

/// Decodes an `AbiOutput` with the default (compatible) options.
pub fn decode_abi_output(input: &[u8]) -> Result<AbiOutputView<'_>, DecodeError> {
    decode_abi_output_with_options(input, DecodeOptions::default())
}

/// Decodes an `AbiOutput` with the given options.
pub fn decode_abi_output_with_options(
    input: &[u8],
    options: DecodeOptions,
) -> Result<AbiOutputView<'_>, DecodeError> {
    decode_logged(input, options, "AbiOutput")
}

/// Encodes an `AbiOutput`.
pub fn encode_abi_output(value: &AbiOutput) -> Result<Vec<u8>, EncodeError> {
    value.encode()
}
