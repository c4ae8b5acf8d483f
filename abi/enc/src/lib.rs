#![allow(clippy::module_inception)]
#![warn(missing_docs)]

//! Call-data encoder for contract ABI function invocations.
//!
//! Arguments are described by [`ParamType`]s and carried as [`Token`]s. The
//! [`encode`] composer lays them out as a head of one slot per parameter
//! followed by a tail of dynamic payloads, and [`Selector`] derives the 4-byte
//! prefix from the canonical signature.

use calldata_primitives::{B160, B256};

mod classify;

mod static_enc;
pub use static_enc::encode_static;

mod dynamic_enc;
pub use dynamic_enc::{encode_dynamic, encode_tuple};

mod encoder;
pub use encoder::{encode, encode_hex, encode_with_selector};

mod errors;
pub use errors::{Error, Result};

mod function;
pub use function::Function;

#[cfg(feature = "serde")]
mod json;

mod param_type;
pub use param_type::{
    FunctionDescriptor, ParamType, TypeDescriptor, MAX_FIXED_ARRAY_LEN, MAX_TYPE_DEPTH,
};

mod selector;
pub use selector::{signature, Selector};

mod token;
pub use token::Token;

mod tokenize;
pub use tokenize::Tokenize;

pub mod util;

pub use calldata_primitives::{keccak256, I256, U256};

/// EVM Word
pub type Word = B256;
/// EVM Address
pub type Address = B160;
/// Dynamic Byte array
pub type Bytes = Vec<u8>;
