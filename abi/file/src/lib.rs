//! Descriptor sets: the callables of a contract, loaded from a JSON ABI
//! document and looked up by name.

use std::{collections::BTreeMap, fs::File, io::Read, path::Path};

use calldata_abi_enc::{Function, FunctionDescriptor, Token, TypeDescriptor};
use serde::Deserialize;
use tracing::{debug, warn};

mod error;
pub use error::{AbiFileError, Result};

/// One entry of a JSON ABI array. Anything beyond these fields is ignored.
#[derive(Debug, Deserialize)]
struct AbiEntry {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    inputs: Vec<TypeDescriptor>,
}

/// Callables keyed by name.
///
/// Overloads are not distinguished: when a name is defined twice, the later
/// definition replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractAbi {
    functions: BTreeMap<String, Function>,
}

impl ContractAbi {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON ABI array.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<AbiEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Reads and parses a JSON ABI array.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: Vec<AbiEntry> = serde_json::from_reader(reader)?;
        Self::from_entries(entries)
    }

    /// Opens and parses a JSON ABI file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading contract abi");
        Self::from_reader(File::open(path)?)
    }

    /// Builds a set from already-deserialized descriptors.
    pub fn from_descriptors<I>(descriptors: I) -> Result<Self>
    where
        I: IntoIterator<Item = FunctionDescriptor>,
    {
        let mut abi = Self::new();
        for descriptor in descriptors {
            abi.insert(Function::from_descriptor(&descriptor)?);
        }
        Ok(abi)
    }

    fn from_entries(entries: Vec<AbiEntry>) -> Result<Self> {
        let mut abi = Self::new();
        let mut skipped = 0;
        for (index, entry) in entries.into_iter().enumerate() {
            match entry.kind.as_deref() {
                None | Some("function") => {}
                Some(_) => {
                    skipped += 1;
                    continue;
                }
            }
            let name = entry.name.ok_or(AbiFileError::MissingName(index))?;
            let descriptor = FunctionDescriptor::new(name, entry.inputs);
            abi.insert(Function::from_descriptor(&descriptor)?);
        }
        debug!(functions = abi.len(), skipped, "loaded contract abi");
        Ok(abi)
    }

    /// Adds a callable, returning the one it replaced.
    pub fn insert(&mut self, function: Function) -> Option<Function> {
        let replaced = self.functions.insert(function.name().to_owned(), function);
        if let Some(previous) = &replaced {
            warn!(
                name = previous.name(),
                replaced = %previous.signature(),
                "callable redefined, keeping the later definition"
            );
        }
        replaced
    }

    /// Looks up a callable.
    pub fn function(&self, name: &str) -> Result<&Function> {
        self.functions
            .get(name)
            .ok_or_else(|| AbiFileError::UnknownFunction(name.to_owned()))
    }

    /// Looks up a callable for encoding.
    pub fn function_mut(&mut self, name: &str) -> Result<&mut Function> {
        self.functions
            .get_mut(name)
            .ok_or_else(|| AbiFileError::UnknownFunction(name.to_owned()))
    }

    /// Encodes the argument area of `name`.
    pub fn encode(&mut self, name: &str, args: &[Token]) -> Result<String> {
        Ok(self.function_mut(name)?.encode(args)?)
    }

    /// Encodes a full invocation of `name`: selector, then arguments.
    pub fn encode_with_selector(&mut self, name: &str, args: &[Token]) -> Result<String> {
        Ok(self.function_mut(name)?.encode_with_selector(args)?)
    }

    /// Encodes the argument area of `name` from JSON values.
    pub fn encode_json(&mut self, name: &str, args: &[serde_json::Value]) -> Result<String> {
        Ok(self.function_mut(name)?.encode_json(args)?)
    }

    /// Number of callables.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the set has no callables.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Callables ordered by name.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.values()
    }
}
