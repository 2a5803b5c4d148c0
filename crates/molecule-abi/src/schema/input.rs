//! `AbiInput` record and its vector forms.
//!
//! ```text
//! table AbiInput {
//!     name:          Bytes,
//!     type:          Bytes,
//!     indexed:       ByteOpt,
//!     components:    BytesOpt,
//!     internalType:  BytesOpt,
//! }
//! vector AbiInputs <AbiInput>;
//! option AbiInputsOpt (AbiInputs);
//! ```

use crate::codec::{
    serialize_bytes, serialize_dynvec, serialize_option, serialize_table,
    verify_and_extract_offsets, ByteOpt, ByteView, Bytes, BytesOpt, DynVec, Encode, Opt,
    TableView, View, WireKind,
};
use crate::error::{DecodeError, EncodeError};
use crate::model::AbiInput;

/// View over an encoded `AbiInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbiInputView<'a> {
    view: ByteView<'a>,
}

/// Vector of inputs.
pub type AbiInputsView<'a> = DynVec<'a, AbiInputView<'a>>;
/// Optional vector of inputs.
pub type AbiInputsOptView<'a> = Opt<'a, AbiInputsView<'a>>;

impl<'a> AbiInputView<'a> {
    /// Number of fields this schema declares.
    pub const FIELD_COUNT: usize = 5;

    fn table(&self) -> TableView<'a> {
        TableView::new(self.view)
    }

    pub fn name(&self) -> Result<Bytes<'a>, DecodeError> {
        self.table().field_as(0)
    }

    pub fn ty(&self) -> Result<Bytes<'a>, DecodeError> {
        self.table().field_as(1)
    }

    pub fn indexed(&self) -> Result<ByteOpt<'a>, DecodeError> {
        self.table().field_as(2)
    }

    pub fn components(&self) -> Result<BytesOpt<'a>, DecodeError> {
        self.table().field_as(3)
    }

    pub fn internal_type(&self) -> Result<BytesOpt<'a>, DecodeError> {
        self.table().field_as(4)
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
    pub fn to_model(&self) -> Result<AbiInput, DecodeError> {
        Ok(AbiInput {
            name: self.name()?.raw().to_vec(),
            ty: self.ty()?.raw().to_vec(),
            indexed: self.indexed()?.byte()?,
            components: self.components()?.raw().map(<[u8]>::to_vec),
            internal_type: self.internal_type()?.raw().map(<[u8]>::to_vec),
        })
    }
}

impl<'a> View<'a> for AbiInputView<'a> {
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
        ByteOpt::verify(field(2)?, compatible)?;
        BytesOpt::verify(field(3)?, compatible)?;
        BytesOpt::verify(field(4)?, compatible)?;
        Ok(())
    }
}

impl<'a> AbiInputsView<'a> {
    /// Copies every input into owned values.
    pub fn to_model(&self) -> Result<Vec<AbiInput>, DecodeError> {
        self.iter().map(|input| input?.to_model()).collect()
    }
}

impl Encode for AbiInput {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let fields = [
            serialize_bytes(&self.name)?,
            serialize_bytes(&self.ty)?,
            serialize_option(self.indexed.as_ref(), |b| Ok(vec![*b]))?,
            serialize_option(self.components.as_deref(), serialize_bytes)?,
            serialize_option(self.internal_type.as_deref(), serialize_bytes)?,
        ];
        serialize_table(&fields)
    }
}

/// Serializes a vector of inputs.
pub fn serialize_abi_inputs(inputs: &[AbiInput]) -> Result<Vec<u8>, EncodeError> {
    serialize_dynvec(inputs, AbiInput::encode)
}
