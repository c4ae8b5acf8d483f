// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ABI encoding errors.

/// ABI encoding result type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// ABI encoding errors. Every error aborts the whole encode; no partial
/// buffer is ever returned.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unknown or malformed type string.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// A `tuple` type without a component list.
    #[error("tuple type `{0}` requires components")]
    ComponentsRequired(String),

    /// A fixed-size array value with the wrong number of elements.
    #[error("array length mismatch: expected {expected}, got {got}")]
    ArrayLengthMismatch {
        /// Declared length
        expected: usize,
        /// Supplied length
        got: usize,
    },

    /// A `bytesN` value that is not exactly N bytes, or N outside 1..=32.
    #[error("invalid byte length: {0}")]
    InvalidByteLength(String),

    /// Malformed hex or string input.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// A dynamic type reached an encoder that only handles static types.
    #[error("dynamic type `{0}` in static context")]
    DynamicInStaticContext(String),

    /// A number outside the range that can be represented exactly.
    #[error("unsafe numeric input: {0}")]
    UnsafeNumeric(String),

    /// An integer wider than its declared `uint<N>`/`int<N>`.
    #[error("value {value} does not fit in {ty}")]
    IntegerOverflow {
        /// Declared type
        ty: String,
        /// Rendered value
        value: String,
    },

    /// The value's shape does not match its declared type.
    #[error("expected a `{expected}` value, found {found}")]
    TypeMismatch {
        /// Declared type
        expected: String,
        /// Kind of the supplied value
        found: &'static str,
    },

    /// An argument list or tuple value with the wrong number of entries.
    #[error("expected {expected} values, got {got}")]
    ArityMismatch {
        /// Declared parameter count
        expected: usize,
        /// Supplied value count
        got: usize,
    },

    /// Type nesting deeper than [`crate::MAX_TYPE_DEPTH`].
    #[error("type nesting exceeds the depth limit of {0}")]
    DepthLimit(usize),
}

impl Error {
    pub(crate) fn mismatch(expected: impl ToString, found: &'static str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found,
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidEncoding(err.to_string())
    }
}
