// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Call arguments.

use core::fmt;

use crate::{util, Address, Error, ParamType, Result, I256, U256};

/// One call argument. Encoding is driven by the declared [`ParamType`]; the
/// token only has to have a matching shape.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Address, right-aligned in its word.
    Address(Address),
    /// `bytesN`: exactly N raw bytes, left-aligned in its word.
    FixedBytes(Vec<u8>),
    /// `bytes`
    Bytes(Vec<u8>),
    /// `int<N>`
    Int(I256),
    /// `uint<N>`
    Uint(U256),
    /// `bool`
    Bool(bool),
    /// `string`
    String(String),
    /// `T[]` or `T[k]`
    Array(Vec<Token>),
    /// Tuple
    Tuple(Vec<Token>),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Address(address) => write!(f, "{address:#x}"),
            Token::FixedBytes(bytes) | Token::Bytes(bytes) => f.write_str(&util::to_hex(bytes)),
            Token::Int(int) => write!(f, "{int}"),
            Token::Uint(uint) => write!(f, "{uint}"),
            Token::Bool(b) => write!(f, "{b}"),
            Token::String(s) => write!(f, "{s:?}"),
            Token::Array(tokens) => {
                f.write_str("[")?;
                write_joined(f, tokens)?;
                f.write_str("]")
            }
            Token::Tuple(tokens) => {
                f.write_str("(")?;
                write_joined(f, tokens)?;
                f.write_str(")")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter, tokens: &[Token]) -> fmt::Result {
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{token}")?;
    }
    Ok(())
}

impl Token {
    /// `bytes` from a hex string, with or without `0x`.
    pub fn bytes_from_hex(s: &str) -> Result<Self> {
        util::decode_hex(s).map(Token::Bytes)
    }

    /// `bytesN` from a hex string, with or without `0x`.
    pub fn fixed_bytes_from_hex(s: &str) -> Result<Self> {
        util::decode_hex(s).map(Token::FixedBytes)
    }

    /// Short name of the token's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Address(_) => "address",
            Token::FixedBytes(_) => "fixed bytes",
            Token::Bytes(_) => "bytes",
            Token::Int(_) => "int",
            Token::Uint(_) => "uint",
            Token::Bool(_) => "bool",
            Token::String(_) => "string",
            Token::Array(_) => "array",
            Token::Tuple(_) => "tuple",
        }
    }

    /// Return the elements of an array token
    pub fn as_array(&self) -> Option<&[Token]> {
        match self {
            Token::Array(tokens) => Some(tokens),
            _ => None,
        }
    }

    /// Return the components of a tuple token
    pub fn as_tuple(&self) -> Option<&[Token]> {
        match self {
            Token::Tuple(tokens) => Some(tokens),
            _ => None,
        }
    }

    /// Check whether the token's shape matches the given parameter type.
    ///
    /// Integer widths are not checked here; the encoder rejects values that
    /// do not fit.
    pub fn type_check(&self, param_type: &ParamType) -> bool {
        match param_type {
            ParamType::Address => matches!(self, Self::Address(_)),
            ParamType::Bytes => matches!(self, Self::Bytes(_)),
            ParamType::Int(_) => matches!(self, Self::Int(_)),
            ParamType::Uint(_) => matches!(self, Self::Uint(_)),
            ParamType::Bool => matches!(self, Self::Bool(_)),
            ParamType::String => matches!(self, Self::String(_)),
            ParamType::FixedBytes(len) => {
                matches!(self, Self::FixedBytes(bytes) if bytes.len() == *len)
            }
            ParamType::Array(inner) => match self {
                Self::Array(tokens) => tokens.iter().all(|t| t.type_check(inner)),
                _ => false,
            },
            ParamType::FixedArray(inner, len) => match self {
                Self::Array(tokens) => {
                    tokens.len() == *len && tokens.iter().all(|t| t.type_check(inner))
                }
                _ => false,
            },
            ParamType::Tuple(components) => match self {
                Self::Tuple(tokens) => {
                    tokens.len() == components.len()
                        && tokens
                            .iter()
                            .zip(components.iter())
                            .all(|(t, p)| t.type_check(p))
                }
                _ => false,
            },
        }
    }

    /// Check if all the types of the tokens match the given parameter types.
    pub fn types_check(tokens: &[Token], param_types: &[ParamType]) -> bool {
        param_types.len() == tokens.len()
            && param_types
                .iter()
                .zip(tokens)
                .all(|(param_type, token)| token.type_check(param_type))
    }

    pub(crate) fn expect_array(&self, param: &ParamType) -> Result<&[Token]> {
        self.as_array()
            .ok_or_else(|| Error::mismatch(param, self.kind()))
    }

    pub(crate) fn expect_tuple(&self, param: &ParamType) -> Result<&[Token]> {
        self.as_tuple()
            .ok_or_else(|| Error::mismatch(param, self.kind()))
    }
}

#[cfg(test)]
mod tests {
    use calldata_primitives::B160;

    use crate::{Error, ParamType, Token, I256, U256};

    macro_rules! assert_type_check {
        ($left:expr, $right:expr,) => {
            assert!(Token::types_check($left.as_slice(), &$right.as_slice()))
        };
        ($left:expr, $right:expr) => {
            assert_type_check!($left, $right,)
        };
    }

    macro_rules! assert_not_type_check {
        ($left:expr, $right:expr,) => {
            assert!(!Token::types_check($left.as_slice(), &$right.as_slice()))
        };
        ($left:expr, $right:expr) => {
            assert_not_type_check!($left, $right,)
        };
    }

    #[test]
    fn test_type_check() {
        assert_type_check!(
            vec![Token::Uint(U256::from(1u8)), Token::Bool(false)],
            vec![ParamType::Uint(256), ParamType::Bool],
        );
        assert_type_check!(
            vec![Token::Int(I256::from(-1i8)), Token::Address(B160::zero())],
            vec![ParamType::Int(8), ParamType::Address],
        );

        assert_not_type_check!(
            vec![Token::Uint(U256::ZERO)],
            vec![ParamType::Uint(32), ParamType::Bool],
        );
        assert_not_type_check!(
            vec![Token::Uint(U256::ZERO), Token::Bool(true)],
            vec![ParamType::Uint(32)],
        );
        assert_not_type_check!(
            vec![Token::Uint(U256::ZERO)],
            vec![ParamType::Int(256)],
        );

        assert_type_check!(
            vec![Token::Array(vec![Token::Bool(true), Token::Bool(false)])],
            vec![ParamType::Array(Box::new(ParamType::Bool))],
        );
        assert_not_type_check!(
            vec![Token::Array(vec![Token::Bool(true), Token::Uint(U256::ZERO)])],
            vec![ParamType::Array(Box::new(ParamType::Bool))],
        );

        assert_type_check!(
            vec![Token::Array(vec![Token::Bool(true), Token::Bool(false)])],
            vec![ParamType::FixedArray(Box::new(ParamType::Bool), 2)],
        );
        assert_not_type_check!(
            vec![Token::Array(vec![Token::Bool(true), Token::Bool(false)])],
            vec![ParamType::FixedArray(Box::new(ParamType::Bool), 3)],
        );

        assert_type_check!(
            vec![Token::FixedBytes(vec![0u8; 4])],
            vec![ParamType::FixedBytes(4)],
        );
        assert_not_type_check!(
            vec![Token::FixedBytes(vec![0u8; 3])],
            vec![ParamType::FixedBytes(4)],
        );

        assert_type_check!(
            vec![Token::Tuple(vec![
                Token::Uint(U256::from(5u8)),
                Token::String("ab".into())
            ])],
            vec![ParamType::Tuple(vec![ParamType::Uint(256), ParamType::String])],
        );
        assert_not_type_check!(
            vec![Token::Tuple(vec![Token::Uint(U256::from(5u8))])],
            vec![ParamType::Tuple(vec![ParamType::Uint(256), ParamType::String])],
        );
    }

    #[test]
    fn test_display() {
        let token = Token::Tuple(vec![
            Token::Uint(U256::from(5u8)),
            Token::Int(I256::from(-3i8)),
            Token::String("ab".into()),
            Token::Array(vec![Token::Bool(true), Token::Bytes(vec![0x12, 0x34])]),
        ]);
        assert_eq!(token.to_string(), r#"(5,-3,"ab",[true,0x1234])"#);
        assert_eq!(
            Token::Address(B160([0x11u8; 20])).to_string(),
            "0x1111111111111111111111111111111111111111"
        );
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(
            Token::bytes_from_hex("0x4200").unwrap(),
            Token::Bytes(vec![0x42, 0x00])
        );
        assert_eq!(Token::bytes_from_hex("0x").unwrap(), Token::Bytes(vec![]));
        assert!(matches!(
            Token::fixed_bytes_from_hex("0x4"),
            Err(Error::InvalidEncoding(_))
        ));
    }
}
