//! `AbiOutput` record and its vector forms.
//!
//! ```text
//! table AbiOutput {
//!     name:          Bytes,
//!     type:          Bytes,
//!     components:    BytesOpt,
//!     internalType:  BytesOpt,
//! }
//! vector AbiOutputs <AbiOutput>;
//! option AbiOutputsOpt (AbiOutputs);
//! ```

use crate::codec::{
    serialize_bytes, serialize_dynvec, serialize_option, serialize_table,
    verify_and_extract_offsets, ByteView, Bytes, BytesOpt, DynVec, Encode, Opt, TableView, View,
    WireKind,
};
use crate::error::{DecodeError, EncodeError};
use crate::model::AbiOutput;

/// View over an encoded `AbiOutput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbiOutputView<'a> {
    view: ByteView<'a>,
}

/// Vector of outputs.
pub type AbiOutputsView<'a> = DynVec<'a, AbiOutputView<'a>>;
/// Optional vector of outputs.
pub type AbiOutputsOptView<'a> = Opt<'a, AbiOutputsView<'a>>;

impl<'a> AbiOutputView<'a> {
    /// Number of fields this schema declares.
    pub const FIELD_COUNT: usize = 4;

    fn table(&self) -> TableView<'a> {
        TableView::new(self.view)
    }

    pub fn name(&self) -> Result<Bytes<'a>, DecodeError> {
        self.table().field_as(0)
    }

    pub fn ty(&self) -> Result<Bytes<'a>, DecodeError> {
        self.table().field_as(1)
    }

    pub fn components(&self) -> Result<BytesOpt<'a>, DecodeError> {
        self.table().field_as(2)
    }

    pub fn internal_type(&self) -> Result<BytesOpt<'a>, DecodeError> {
        self.table().field_as(3)
    }

    /// Returns the number of fields actually present, declared or not.
    pub fn field_count(&self) -> usize {
        self.table().field_count()
    }

    /// Returns true if the record carries fields from a newer schema.
    pub fn has_extra_fields(&self) -> bool {
        self.field_count() > Self::FIELD_COUNT
    }

    /// Copies the declared fields into an owned value.
    pub fn to_model(&self) -> Result<AbiOutput, DecodeError> {
        Ok(AbiOutput {
            name: self.name()?.raw().to_vec(),
            ty: self.ty()?.raw().to_vec(),
            components: self.components()?.raw().map(<[u8]>::to_vec),
            internal_type: self.internal_type()?.raw().map(<[u8]>::to_vec),
        })
    }
}

impl<'a> View<'a> for AbiOutputView<'a> {
    const KIND: WireKind = WireKind::Table {
        fields: Self::FIELD_COUNT,
    };

    fn new_unchecked(view: ByteView<'a>) -> Self {
        Self { view }
    }

    fn as_view(&self) -> ByteView<'a> {
        self.view
    }

    fn verify(view: ByteView<'_>, compatible: bool) -> Result<(), DecodeError> {
        let offsets = verify_and_extract_offsets(view, Self::FIELD_COUNT, compatible)?;
        let field = |i: usize| view.slice(offsets[i], offsets[i + 1]);
        Bytes::verify(field(0)?, compatible)?;
        Bytes::verify(field(1)?, compatible)?;
        BytesOpt::verify(field(2)?, compatible)?;
        BytesOpt::verify(field(3)?, compatible)?;
        Ok(())
    }
}

impl<'a> AbiOutputsView<'a> {
    /// Copies every output into owned values.
    pub fn to_model(&self) -> Result<Vec<AbiOutput>, DecodeError> {
        self.iter().map(|output| output?.to_model()).collect()
    }
}

impl Encode for AbiOutput {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let fields = [
            serialize_bytes(&self.name)?,
            serialize_bytes(&self.ty)?,
            serialize_option(self.components.as_deref(), serialize_bytes)?,
            serialize_option(self.internal_type.as_deref(), serialize_bytes)?,
        ];
        serialize_table(&fields)
    }
}

/// Serializes a vector of outputs.
pub fn serialize_abi_outputs(outputs: &[AbiOutput]) -> Result<Vec<u8>, EncodeError> {
    serialize_dynvec(outputs, AbiOutput::encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_roundtrip() {
        let output = AbiOutput::new("", "uint256").with_internal_type("uint256");
        let encoded = output.encode().unwrap();

        let view = AbiOutputView::from_slice(&encoded).unwrap();
        assert!(view.name().unwrap().is_empty());
        assert_eq!(view.ty().unwrap().raw(), b"uint256");
        assert!(!view.components().unwrap().has_value());
        assert_eq!(view.internal_type().unwrap().raw(), Some(&b"uint256"[..]));
        assert!(!view.has_extra_fields());
        assert_eq!(view.to_model().unwrap(), output);
    }

    #[test]
    fn test_input_shaped_table_is_not_an_output() {
        // An AbiInput carries 5 fields; read as an output, its third field
        // (a ByteOpt) lands where a BytesOpt is expected.
        let input = crate::model::AbiInput::new("a", "bool").with_indexed(1);
        let encoded = input.encode().unwrap();
        assert!(matches!(
            AbiOutputView::from_slice(&encoded),
            Err(DecodeError::TooShort { required: 4, actual: 1 })
        ));
    }

    #[test]
    fn test_outputs_vector() {
        let outputs = vec![
            AbiOutput::new("ok", "bool"),
            AbiOutput::new("data", "bytes").with_components(vec![1, 2, 3]),
        ];
        let encoded = serialize_abi_outputs(&outputs).unwrap();

        let view = AbiOutputsView::from_slice(&encoded).unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view.to_model().unwrap(), outputs);
    }

    #[test]
    fn test_empty_outputs_vector() {
        let encoded = serialize_abi_outputs(&[]).unwrap();
        let view = AbiOutputsView::from_slice(&encoded).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.to_model().unwrap(), vec![]);
    }
}
