#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ParamType, Result};

/// One parameter of a declarative type list, shaped like a JSON ABI input.
///
/// `ty` is the base form (`uint256`, `bytes32`, `tuple[]`, ...). `components`
/// is present iff the unsuffixed base is `tuple`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Parameter name; not part of the encoding.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    /// Base form with optional array suffixes.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: String,
    /// Tuple components, in order.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub components: Option<Vec<TypeDescriptor>>,
}

impl TypeDescriptor {
    /// A non-tuple descriptor.
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
            components: None,
        }
    }

    /// A tuple descriptor; `ty` is `tuple` plus any array suffixes.
    pub fn tuple(ty: impl Into<String>, components: Vec<TypeDescriptor>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
            components: Some(components),
        }
    }

    /// Attach a parameter name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parse into a [`ParamType`].
    pub fn param_type(&self) -> Result<ParamType> {
        ParamType::from_descriptor(self)
    }
}

/// A callable's name and ordered input list.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionDescriptor {
    /// Callable name
    pub name: String,
    /// Ordered inputs
    #[cfg_attr(feature = "serde", serde(default))]
    pub inputs: Vec<TypeDescriptor>,
}

impl FunctionDescriptor {
    /// Build a descriptor from a name and inputs.
    pub fn new(name: impl Into<String>, inputs: Vec<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            inputs,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_json_abi_inputs() {
        let json = r#"{
            "name": "executeBatch",
            "inputs": [{
                "name": "calls",
                "type": "tuple[]",
                "internalType": "struct Call[]",
                "components": [
                    {"name": "target", "type": "address"},
                    {"name": "value", "type": "uint256"},
                    {"name": "data", "type": "bytes"}
                ]
            }]
        }"#;
        let descriptor: FunctionDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.name, "executeBatch");
        assert_eq!(descriptor.inputs[0].ty, "tuple[]");
        assert_eq!(descriptor.inputs[0].components.as_ref().unwrap().len(), 3);
        assert_eq!(
            descriptor.inputs[0].param_type().unwrap().to_string(),
            "(address,uint256,bytes)[]"
        );
    }
}
