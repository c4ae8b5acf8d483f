//! Canonical signatures and 4-byte function selectors.

use core::fmt;

use crate::{keccak256, util, ParamType};

/// Canonical signature: `name(type1,type2,...)`, tuples expanded to their
/// parenthesized component lists with array suffixes kept.
pub fn signature(name: &str, params: &[ParamType]) -> String {
    let types = params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{name}({types})")
}

/// First four bytes of the keccak-256 of a canonical signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(pub [u8; 4]);

impl Selector {
    /// Hash a canonical signature string.
    pub fn from_signature(signature: &str) -> Self {
        let hash = keccak256(signature.as_bytes());
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&hash[..4]);
        Selector(selector)
    }

    /// Selector of `name` applied to `params`.
    pub fn for_function(name: &str, params: &[ParamType]) -> Self {
        Self::from_signature(&signature(name, params))
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for Selector {
    /// `0x` followed by 8 lowercase hex characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&util::to_hex(self.0))
    }
}

impl From<Selector> for [u8; 4] {
    fn from(selector: Selector) -> Self {
        selector.0
    }
}
