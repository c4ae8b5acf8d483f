//! Callable descriptor with a named cache of encoded results.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    encode, selector, util, Bytes, FunctionDescriptor, ParamType, Result, Selector, Token,
};

/// One callable: its name, parameter types, the last argument buffer it
/// encoded, and labelled hex snapshots of earlier results.
///
/// `encode`, `save` and `delete` mutate the descriptor and need exclusive
/// access; [`Function::calldata`] does not touch the cache and can be shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    name: String,
    inputs: Vec<ParamType>,
    last: Option<Bytes>,
    saved: BTreeMap<String, String>,
}

impl Function {
    /// A callable with already-parsed parameter types.
    pub fn new(name: impl Into<String>, inputs: Vec<ParamType>) -> Self {
        Function {
            name: name.into(),
            inputs,
            last: None,
            saved: BTreeMap::new(),
        }
    }

    /// Parses every input descriptor. Fails on the first malformed one.
    pub fn from_descriptor(descriptor: &FunctionDescriptor) -> Result<Self> {
        let inputs = descriptor
            .inputs
            .iter()
            .map(ParamType::from_descriptor)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(descriptor.name.clone(), inputs))
    }

    /// Callable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter types, in order.
    pub fn inputs(&self) -> &[ParamType] {
        &self.inputs
    }

    /// Canonical signature, e.g. `transfer(address,uint256)`.
    pub fn signature(&self) -> String {
        selector::signature(&self.name, &self.inputs)
    }

    /// 4-byte selector of the canonical signature.
    pub fn selector(&self) -> Selector {
        Selector::for_function(&self.name, &self.inputs)
    }

    /// Encodes the argument area without recording anything.
    pub fn calldata(&self, args: &[Token]) -> Result<Bytes> {
        encode(&self.inputs, args)
    }

    /// Encodes the argument area, remembers the buffer, and returns it as hex.
    pub fn encode(&mut self, args: &[Token]) -> Result<String> {
        let encoded = self.calldata(args)?;
        let hex = util::to_word_hex(&encoded);
        self.last = Some(encoded);
        Ok(hex)
    }

    /// Like [`Function::encode`], prefixed with the selector.
    pub fn encode_with_selector(&mut self, args: &[Token]) -> Result<String> {
        let body = self.encode(args)?;
        Ok(format!("{}{}", self.selector(), util::strip_0x(&body)))
    }

    /// Converts JSON arguments against the declared types, then encodes them.
    #[cfg(feature = "serde")]
    pub fn encode_json(&mut self, args: &[serde_json::Value]) -> Result<String> {
        let tokens = Token::from_json_args(args, &self.inputs)?;
        self.encode(&tokens)
    }

    /// The most recently encoded argument buffer.
    pub fn last_encoded(&self) -> Option<&[u8]> {
        self.last.as_deref()
    }

    /// Snapshots the last encoded buffer under `label`, replacing any earlier
    /// entry. Saves `0x` when nothing has been encoded yet.
    pub fn save(&mut self, label: impl Into<String>) -> &str {
        let label = label.into();
        let hex = util::to_word_hex(self.last.as_deref().unwrap_or_default());
        debug!(function = %self.name, %label, "saving encoded call data");
        self.saved.insert(label.clone(), hex);
        &self.saved[&label]
    }

    /// A saved snapshot.
    pub fn saved(&self, label: &str) -> Option<&str> {
        self.saved.get(label).map(String::as_str)
    }

    /// All snapshots, ordered by label.
    pub fn saved_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.saved.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Removes a snapshot, returning it.
    pub fn delete(&mut self, label: &str) -> Option<String> {
        let removed = self.saved.remove(label);
        debug!(function = %self.name, label, found = removed.is_some(), "deleting saved call data");
        removed
    }

    /// Dump of the last encoded buffer, one 32-byte word per line, under a
    /// `label` heading.
    pub fn format_words(&self, label: &str) -> String {
        let body = util::format_words(self.last.as_deref().unwrap_or_default());
        format!("== {label} (32-byte words) ==\n{body}")
    }
}
