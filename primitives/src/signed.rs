use core::{fmt, str::FromStr};

use crate::U256;

/// Error returned when parsing an [`I256`] from a decimal or hex string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseSignedError {
    /// Nothing left to parse after the sign and radix prefix.
    #[error("no digits")]
    Empty,
    /// The digits did not parse as an unsigned magnitude.
    #[error("{0}")]
    Digits(#[from] ruint::ParseError),
    /// The magnitude is outside the signed 256-bit range.
    #[error("value outside the int256 range")]
    Overflow,
}

/// Signed 256-bit integer stored as its two's complement word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct I256(U256);

impl I256 {
    /// Zero
    pub const ZERO: Self = Self(U256::ZERO);

    /// Build from a sign and a magnitude. Returns `None` when the magnitude
    /// exceeds `2^255 - 1` (positive) or `2^255` (negative).
    pub fn from_sign_and_abs(negative: bool, abs: U256) -> Option<Self> {
        let limit = U256::from(1u8) << 255usize;
        if negative {
            if abs > limit {
                return None;
            }
            Some(Self(abs.wrapping_neg()))
        } else {
            if abs >= limit {
                return None;
            }
            Some(Self(abs))
        }
    }

    /// Whether the sign bit is set.
    pub fn is_negative(&self) -> bool {
        self.0.bit(255)
    }

    /// Magnitude as an unsigned word; `-2^255` maps to `2^255`.
    pub fn unsigned_abs(&self) -> U256 {
        if self.is_negative() {
            self.0.wrapping_neg()
        } else {
            self.0
        }
    }

    /// Whether the value is representable as an `int<bits>`.
    pub fn fits_width(&self, bits: usize) -> bool {
        if bits == 0 {
            return false;
        }
        if bits >= 256 {
            return true;
        }
        let abs = self.unsigned_abs();
        if self.is_negative() {
            abs <= U256::from(1u8) << (bits - 1)
        } else {
            abs.bit_len() < bits
        }
    }

    /// Big-endian two's complement bytes, sign-extended to the full word.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes::<32>()
    }
}

impl FromStr for I256 {
    type Err = ParseSignedError;

    /// Accepts an optional leading `-` followed by decimal digits or a
    /// `0x`-prefixed hex magnitude.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (radix, digits) = match digits.strip_prefix("0x") {
            Some(hex) => (16, hex),
            None => (10, digits),
        };
        if digits.is_empty() {
            return Err(ParseSignedError::Empty);
        }
        let abs = U256::from_str_radix(digits, radix)?;
        Self::from_sign_and_abs(negative, abs).ok_or(ParseSignedError::Overflow)
    }
}

macro_rules! impl_from_signed {
    ($($ity:ty),+) => {
        $(
            impl From<$ity> for I256 {
                fn from(value: $ity) -> Self {
                    let abs = U256::from(value.unsigned_abs());
                    if value < 0 {
                        Self(abs.wrapping_neg())
                    } else {
                        Self(abs)
                    }
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
