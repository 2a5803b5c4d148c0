//! `AbiItem` record.
//!
//! ```text
//! table AbiItem {
//!     anonymous:        ByteOpt,
//!     constant:         ByteOpt,
//!     inputs:           AbiInputsOpt,
//!     name:             BytesOpt,
//!     outputs:          AbiOutputsOpt,
//!     payable:          ByteOpt,
//!     stateMutability:  ByteOpt,
//!     type:             byte,
//!     gas:              Uint32Opt,
//! }
//! ```
//!
//! `type` is a bare byte stored inline in the table, so its span must be
//! exactly one byte.

use crate::codec::{
    serialize_bytes, serialize_option, serialize_table, verify_and_extract_offsets, Byte,
    ByteOpt, ByteView, BytesOpt, Encode, TableView, Uint32Opt, View, WireKind,
};
use crate::error::{DecodeError, EncodeError};
use crate::model::AbiItem;
use crate::schema::input::{serialize_abi_inputs, AbiInputsOptView};
use crate::schema::output::{serialize_abi_outputs, AbiOutputsOptView};

/// View over an encoded `AbiItem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbiItemView<'a> {
    view: ByteView<'a>,
}

impl<'a> AbiItemView<'a> {
    /// Number of fields this schema declares.
    pub const FIELD_COUNT: usize = 9;

    fn table(&self) -> TableView<'a> {
        TableView::new(self.view)
    }

    pub fn anonymous(&self) -> Result<ByteOpt<'a>, DecodeError> {
        self.table().field_as(0)
    }

    pub fn constant(&self) -> Result<ByteOpt<'a>, DecodeError> {
        self.table().field_as(1)
    }

    pub fn inputs(&self) -> Result<AbiInputsOptView<'a>, DecodeError> {
        self.table().field_as(2)
    }

    pub fn name(&self) -> Result<BytesOpt<'a>, DecodeError> {
        self.table().field_as(3)
    }

    pub fn outputs(&self) -> Result<AbiOutputsOptView<'a>, DecodeError> {
        self.table().field_as(4)
    }

    pub fn payable(&self) -> Result<ByteOpt<'a>, DecodeError> {
        self.table().field_as(5)
    }

    pub fn state_mutability(&self) -> Result<ByteOpt<'a>, DecodeError> {
        self.table().field_as(6)
    }

    /// Returns the entry kind discriminant.
    pub fn ty(&self) -> Result<u8, DecodeError> {
        self.table().field_as::<Byte<'a>>(7)?.get()
    }

    pub fn gas(&self) -> Result<Uint32Opt<'a>, DecodeError> {
        self.table().field_as(8)
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
    pub fn to_model(&self) -> Result<AbiItem, DecodeError> {
        Ok(AbiItem {
            anonymous: self.anonymous()?.byte()?,
            constant: self.constant()?.byte()?,
            inputs: self.inputs()?.value().map(|v| v.to_model()).transpose()?,
            name: self.name()?.raw().map(<[u8]>::to_vec),
            outputs: self.outputs()?.value().map(|v| v.to_model()).transpose()?,
            payable: self.payable()?.byte()?,
            state_mutability: self.state_mutability()?.byte()?,
            ty: self.ty()?,
            gas: self.gas()?.to_le_u32()?,
        })
    }
}

impl<'a> View<'a> for AbiItemView<'a> {
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
        ByteOpt::verify(field(0)?, compatible)?;
        ByteOpt::verify(field(1)?, compatible)?;
        AbiInputsOptView::verify(field(2)?, compatible)?;
        BytesOpt::verify(field(3)?, compatible)?;
        AbiOutputsOptView::verify(field(4)?, compatible)?;
        ByteOpt::verify(field(5)?, compatible)?;
        ByteOpt::verify(field(6)?, compatible)?;
        Byte::verify(field(7)?, compatible)?;
        Uint32Opt::verify(field(8)?, compatible)?;
        Ok(())
    }
}

impl Encode for AbiItem {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let byte = |b: &u8| -> Result<Vec<u8>, EncodeError> { Ok(vec![*b]) };
        let fields = [
            serialize_option(self.anonymous.as_ref(), byte)?,
            serialize_option(self.constant.as_ref(), byte)?,
            serialize_option(self.inputs.as_deref(), serialize_abi_inputs)?,
            serialize_option(self.name.as_deref(), serialize_bytes)?,
            serialize_option(self.outputs.as_deref(), serialize_abi_outputs)?,
            serialize_option(self.payable.as_ref(), byte)?,
            serialize_option(self.state_mutability.as_ref(), byte)?,
            vec![self.ty],
            serialize_option(self.gas.as_ref(), |g| Ok(g.to_le_bytes().to_vec()))?,
        ];
        serialize_table(&fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DecodeOptions;
    use crate::model::{AbiInput, AbiItemBuilder, AbiOutput};

    fn transfer() -> AbiItem {
        AbiItemBuilder::new(0)
            .name("transfer")
            .input(AbiInput::new("to", "address").with_internal_type("address"))
            .input(AbiInput::new("amount", "uint256"))
            .output(AbiOutput::new("", "bool"))
            .payable(0)
            .state_mutability(2)
            .gas(21_000)
            .build()
    }

    #[test]
    fn test_item_roundtrip() {
        let item = transfer();
        let encoded = item.encode().unwrap();

        let view = AbiItemView::from_slice(&encoded).unwrap();
        assert_eq!(view.ty().unwrap(), 0);
        assert_eq!(view.name().unwrap().raw(), Some(&b"transfer"[..]));
        assert!(!view.anonymous().unwrap().has_value());
        assert_eq!(view.payable().unwrap().byte().unwrap(), Some(0));
        assert_eq!(view.gas().unwrap().to_le_u32().unwrap(), Some(21_000));

        let inputs = view.inputs().unwrap().value().unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs.get(0).unwrap().ty().unwrap().raw(), b"address");

        assert_eq!(view.to_model().unwrap(), item);
    }

    #[test]
    fn test_minimal_item() {
        let item = AbiItem::new(3);
        let encoded = item.encode().unwrap();
        // 10 header slots plus the inline type byte.
        assert_eq!(encoded.len(), 41);

        let view = AbiItemView::from_slice(&encoded).unwrap();
        assert_eq!(view.ty().unwrap(), 3);
        assert!(!view.inputs().unwrap().has_value());
        assert!(!view.gas().unwrap().has_value());
        assert_eq!(view.to_model().unwrap(), item);
    }

    #[test]
    fn test_empty_inputs_differ_from_absent() {
        let item = AbiItemBuilder::new(0).inputs([]).build();
        let encoded = item.encode().unwrap();

        let view = AbiItemView::from_slice(&encoded).unwrap();
        let inputs = view.inputs().unwrap();
        assert!(inputs.has_value());
        assert!(inputs.value().unwrap().is_empty());
        assert_eq!(view.to_model().unwrap().inputs, Some(vec![]));
    }

    fn raw_fields(item: &AbiItem) -> Vec<Vec<u8>> {
        let encoded = item.encode().unwrap();
        let view = ByteView::new(&encoded);
        let offsets = verify_and_extract_offsets(view, 9, false).unwrap();
        offsets
            .windows(2)
            .map(|w| encoded[w[0]..w[1]].to_vec())
            .collect()
    }

    #[test]
    fn test_type_must_be_one_byte() {
        let mut fields = raw_fields(&AbiItem::new(1));
        fields[7] = vec![1, 2];
        let encoded = serialize_table(&fields).unwrap();
        assert!(matches!(
            AbiItemView::from_slice(&encoded),
            Err(DecodeError::LengthMismatch { expected: 1, actual: 2 })
        ));

        fields[7] = vec![];
        let encoded = serialize_table(&fields).unwrap();
        assert!(matches!(
            AbiItemView::from_slice(&encoded),
            Err(DecodeError::LengthMismatch { expected: 1, actual: 0 })
        ));
    }

    #[test]
    fn test_nested_input_error_propagates() {
        let mut fields = raw_fields(&AbiItem::new(0));
        // A one-item input vector whose item is an empty table.
        fields[2] = serialize_table(&[vec![4u8, 0, 0, 0]]).unwrap();
        let encoded = serialize_table(&fields).unwrap();
        assert!(matches!(
            AbiItemView::from_slice(&encoded),
            Err(DecodeError::FieldCountTooLow { required: 5, actual: 0 })
        ));
    }

    #[test]
    fn test_strict_applies_to_nested_records() {
        let mut input_fields: Vec<Vec<u8>> = vec![
            serialize_bytes(b"a").unwrap(),
            serialize_bytes(b"bool").unwrap(),
            vec![],
            vec![],
            vec![],
        ];
        input_fields.push(vec![0xff]);
        let input = serialize_table(&input_fields).unwrap();

        let mut fields = raw_fields(&AbiItem::new(0));
        fields[2] = serialize_table(&[input]).unwrap();
        let encoded = serialize_table(&fields).unwrap();

        let view = AbiItemView::from_slice(&encoded).unwrap();
        let nested = view.inputs().unwrap().value().unwrap().get(0).unwrap();
        assert!(nested.has_extra_fields());
        assert!(matches!(
            AbiItemView::from_slice_with_options(&encoded, DecodeOptions::strict()),
            Err(DecodeError::FieldCountMismatch { expected: 5, actual: 6 })
        ));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let encoded = transfer().encode().unwrap();
        let before = encoded.clone();
        let view = AbiItemView::from_slice(&encoded).unwrap();
        view.validate(true).unwrap();
        view.validate(false).unwrap();
        assert_eq!(encoded, before);
    }
}
