// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Static value encoder.

use crate::{Bytes, Error, ParamType, Result, Token, Word};

/// Encodes a static value in place: one word for elementary types, the
/// concatenation of component words for static tuples and fixed arrays.
///
/// The output is always `param.static_size_in_words() * 32` bytes long.
pub fn encode_static(token: &Token, param: &ParamType) -> Result<Bytes> {
    let mut out = Vec::new();
    encode_static_append(&mut out, token, param)?;
    Ok(out)
}

fn encode_static_append(out: &mut Vec<u8>, token: &Token, param: &ParamType) -> Result<()> {
    match param {
        ParamType::Tuple(components) => {
            if param.is_dynamic() {
                return Err(Error::DynamicInStaticContext(param.to_string()));
            }
            let tokens = token.expect_tuple(param)?;
            if tokens.len() != components.len() {
                return Err(Error::ArityMismatch {
                    expected: components.len(),
                    got: tokens.len(),
                });
            }
            for (token, component) in tokens.iter().zip(components) {
                encode_static_append(out, token, component)?;
            }
        }
        ParamType::FixedArray(inner, len) => {
            if inner.is_dynamic() {
                return Err(Error::DynamicInStaticContext(param.to_string()));
            }
            let tokens = token.expect_array(param)?;
            if tokens.len() != *len {
                return Err(Error::ArrayLengthMismatch {
                    expected: *len,
                    got: tokens.len(),
                });
            }
            for token in tokens {
                encode_static_append(out, token, inner)?;
            }
        }
        _ => out.extend_from_slice(encode_word(token, param)?.as_bytes()),
    }
    Ok(())
}

/// Encodes an elementary static value into a single word.
fn encode_word(token: &Token, param: &ParamType) -> Result<Word> {
    match (param, token) {
        (ParamType::Uint(bits), Token::Uint(value)) => {
            if value.bit_len() > *bits {
                return Err(Error::IntegerOverflow {
                    ty: param.to_string(),
                    value: value.to_string(),
                });
            }
            Ok(Word::from(value.to_be_bytes::<32>()))
        }
        (ParamType::Int(bits), Token::Int(value)) => {
            if !value.fits_width(*bits) {
                return Err(Error::IntegerOverflow {
                    ty: param.to_string(),
                    value: value.to_string(),
                });
            }
            Ok(Word::from(value.to_be_bytes()))
        }
        (ParamType::Bool, Token::Bool(value)) => {
            let mut word = Word::zero();
            word.0[31] = *value as u8;
            Ok(word)
        }
        (ParamType::Address, Token::Address(address)) => Ok(Word::from(*address)),
        (ParamType::FixedBytes(size), Token::FixedBytes(bytes)) => {
            if !(1..=32).contains(size) {
                return Err(Error::InvalidByteLength(format!(
                    "bytes{size}: size must be between 1 and 32"
                )));
            }
            if bytes.len() != *size {
                return Err(Error::InvalidByteLength(format!(
                    "expected {size} bytes, got {}",
                    bytes.len()
                )));
            }
            // left-aligned, unlike numeric values
            let mut word = Word::zero();
            word[..*size].copy_from_slice(bytes);
            Ok(word)
        }
        (
            ParamType::Uint(_)
            | ParamType::Int(_)
            | ParamType::Bool
            | ParamType::Address
            | ParamType::FixedBytes(_),
            token,
        ) => Err(Error::mismatch(param, token.kind())),
        _ => Err(Error::UnsupportedType(format!(
            "`{param}` is not supported by the static encoder"
        ))),
    }
}
