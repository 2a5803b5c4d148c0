//! Owned contract ABI descriptors.
//!
//! Byte-string fields hold raw bytes as they appear on the wire; the codec
//! does not interpret them as UTF-8.

/// One parameter of a function, event or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AbiInput {
    /// Parameter name.
    pub name: Vec<u8>,
    /// Canonical type, e.g. `uint256`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: Vec<u8>,
    /// Event topic flag.
    pub indexed: Option<u8>,
    /// Encoded tuple components.
    pub components: Option<Vec<u8>>,
    /// Source-level type name.
    pub internal_type: Option<Vec<u8>>,
}

impl AbiInput {
    /// Creates an input with the given name and type.
    pub fn new(name: impl Into<Vec<u8>>, ty: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Sets the indexed flag.
    pub fn with_indexed(mut self, indexed: u8) -> Self {
        self.indexed = Some(indexed);
        self
    }

    /// Sets the tuple components.
    pub fn with_components(mut self, components: impl Into<Vec<u8>>) -> Self {
        self.components = Some(components.into());
        self
    }

    /// Sets the internal type name.
    pub fn with_internal_type(mut self, internal_type: impl Into<Vec<u8>>) -> Self {
        self.internal_type = Some(internal_type.into());
        self
    }
}

/// One return value of a function.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AbiOutput {
    /// Return value name.
    pub name: Vec<u8>,
    /// Canonical type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: Vec<u8>,
    /// Encoded tuple components.
    pub components: Option<Vec<u8>>,
    /// Source-level type name.
    pub internal_type: Option<Vec<u8>>,
}

impl AbiOutput {
    /// Creates an output with the given name and type.
    pub fn new(name: impl Into<Vec<u8>>, ty: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Sets the tuple components.
    pub fn with_components(mut self, components: impl Into<Vec<u8>>) -> Self {
        self.components = Some(components.into());
        self
    }

    /// Sets the internal type name.
    pub fn with_internal_type(mut self, internal_type: impl Into<Vec<u8>>) -> Self {
        self.internal_type = Some(internal_type.into());
        self
    }
}

/// One entry of a contract ABI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AbiItem {
    pub anonymous: Option<u8>,
    pub constant: Option<u8>,
    pub inputs: Option<Vec<AbiInput>>,
    pub name: Option<Vec<u8>>,
    pub outputs: Option<Vec<AbiOutput>>,
    pub payable: Option<u8>,
    pub state_mutability: Option<u8>,
    /// Entry kind discriminant. Always present, always one byte.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: u8,
    pub gas: Option<u32>,
}

impl AbiItem {
    /// Creates an item of the given kind with every optional field absent.
    pub fn new(ty: u8) -> Self {
        Self {
            ty,
            ..Self::default()
        }
    }
}
