//! Fundamental types shared by the call-data encoder: 32-byte words, 20-byte
//! addresses, 256-bit integers, and the keccak hashing service.

mod bits;
pub use bits::{B160, B256};

mod signed;
pub use signed::{I256, ParseSignedError};

mod hash;
pub use hash::keccak256;

pub use ruint::aliases::U256;
