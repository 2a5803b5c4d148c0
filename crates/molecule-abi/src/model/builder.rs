//! Builder API for ergonomic AbiItem construction.
//!
//! # Example
//!
//! ```rust
//! use molecule_abi::model::{AbiInput, AbiItemBuilder, AbiOutput};
//!
//! let item = AbiItemBuilder::new(0)
//!     .name("balanceOf")
//!     .input(AbiInput::new("owner", "address"))
//!     .output(AbiOutput::new("", "uint256"))
//!     .state_mutability(1)
//!     .build();
//!
//! assert_eq!(item.inputs.as_ref().map(Vec::len), Some(1));
//! ```

use crate::model::{AbiInput, AbiItem, AbiOutput};

/// Builder for constructing an AbiItem.
#[derive(Debug, Clone)]
pub struct AbiItemBuilder {
    item: AbiItem,
}

impl AbiItemBuilder {
    /// Creates a builder for an item of the given kind.
    pub fn new(ty: u8) -> Self {
        Self {
            item: AbiItem::new(ty),
        }
    }

    /// Sets the item name.
    pub fn name(mut self, name: impl Into<Vec<u8>>) -> Self {
        self.item.name = Some(name.into());
        self
    }

    /// Appends an input, creating the input list if absent.
    pub fn input(mut self, input: AbiInput) -> Self {
        self.item.inputs.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// Sets the inputs at once. An empty iterator yields a present, empty list.
    pub fn inputs(mut self, inputs: impl IntoIterator<Item = AbiInput>) -> Self {
        self.item
            .inputs
            .get_or_insert_with(Vec::new)
            .extend(inputs);
        self
    }

    /// Appends an output, creating the output list if absent.
    pub fn output(mut self, output: AbiOutput) -> Self {
        self.item.outputs.get_or_insert_with(Vec::new).push(output);
        self
    }

    /// Sets the outputs at once. An empty iterator yields a present, empty list.
    pub fn outputs(mut self, outputs: impl IntoIterator<Item = AbiOutput>) -> Self {
        self.item
            .outputs
            .get_or_insert_with(Vec::new)
            .extend(outputs);
        self
    }

    /// Sets the anonymous flag.
    pub fn anonymous(mut self, anonymous: u8) -> Self {
        self.item.anonymous = Some(anonymous);
        self
    }

    /// Sets the constant flag.
    pub fn constant(mut self, constant: u8) -> Self {
        self.item.constant = Some(constant);
        self
    }

    /// Sets the payable flag.
    pub fn payable(mut self, payable: u8) -> Self {
        self.item.payable = Some(payable);
        self
    }

    /// Sets the state mutability code.
    pub fn state_mutability(mut self, state_mutability: u8) -> Self {
        self.item.state_mutability = Some(state_mutability);
        self
    }

    /// Sets the gas limit.
    pub fn gas(mut self, gas: u32) -> Self {
        self.item.gas = Some(gas);
        self
    }

    /// Consumes the builder and returns the item.
    pub fn build(self) -> AbiItem {
        self.item
    }
}
