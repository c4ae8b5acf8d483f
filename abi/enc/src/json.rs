//! Loosely typed JSON arguments.

use calldata_primitives::ParseSignedError;
use serde_json::Value;

use crate::{
    util::{self, MAX_SAFE_INTEGER},
    Address, Error, ParamType, Result, Token, I256, U256,
};

impl Token {
    /// Converts a JSON value into a token of the given type.
    ///
    /// Integers come in as JSON numbers within the safe integer range, or as
    /// decimal / `0x` hex strings (a leading `-` for `int<N>`). Addresses are
    /// integers or hex strings that fit in 160 bits. `bytes` and `bytesN` are
    /// `0x` hex strings; `bytes` also takes `""` or `0` as empty. Arrays and
    /// tuples are JSON arrays.
    pub fn from_json(value: &Value, param: &ParamType) -> Result<Token> {
        match param {
            ParamType::Bool => match value {
                Value::Bool(b) => Ok(Token::Bool(*b)),
                other => Err(Error::mismatch(param, json_kind(other))),
            },
            ParamType::String => match value {
                Value::String(s) => Ok(Token::String(s.clone())),
                other => Err(Error::mismatch(param, json_kind(other))),
            },
            ParamType::Uint(_) => json_uint(value, param).map(Token::Uint),
            ParamType::Int(_) => json_int(value, param).map(Token::Int),
            ParamType::Address => {
                let raw = json_uint(value, param)?;
                if raw.bit_len() > 160 {
                    return Err(Error::IntegerOverflow {
                        ty: param.to_string(),
                        value: raw.to_string(),
                    });
                }
                let word = raw.to_be_bytes::<32>();
                Ok(Token::Address(Address::from_slice(&word[12..])))
            }
            ParamType::Bytes => match value {
                Value::String(s) if s.is_empty() => Ok(Token::Bytes(vec![])),
                Value::Number(n) if n.as_u64() == Some(0) => Ok(Token::Bytes(vec![])),
                Value::String(s) => json_hex(s).map(Token::Bytes),
                other => Err(Error::mismatch(param, json_kind(other))),
            },
            ParamType::FixedBytes(_) => match value {
                Value::String(s) => json_hex(s).map(Token::FixedBytes),
                other => Err(Error::mismatch(param, json_kind(other))),
            },
            ParamType::Array(inner) => {
                let items = json_array(value, param)?;
                items
                    .iter()
                    .map(|item| Token::from_json(item, inner))
                    .collect::<Result<_>>()
                    .map(Token::Array)
            }
            ParamType::FixedArray(inner, len) => {
                let items = json_array(value, param)?;
                if items.len() != *len {
                    return Err(Error::ArrayLengthMismatch {
                        expected: *len,
                        got: items.len(),
                    });
                }
                items
                    .iter()
                    .map(|item| Token::from_json(item, inner))
                    .collect::<Result<_>>()
                    .map(Token::Array)
            }
            ParamType::Tuple(components) => {
                let items = json_array(value, param)?;
                if items.len() != components.len() {
                    return Err(Error::ArityMismatch {
                        expected: components.len(),
                        got: items.len(),
                    });
                }
                items
                    .iter()
                    .zip(components)
                    .map(|(item, component)| Token::from_json(item, component))
                    .collect::<Result<_>>()
                    .map(Token::Tuple)
            }
        }
    }

    /// Converts a JSON argument list against the declared parameter types.
    pub fn from_json_args(values: &[Value], params: &[ParamType]) -> Result<Vec<Token>> {
        if values.len() != params.len() {
            return Err(Error::ArityMismatch {
                expected: params.len(),
                got: values.len(),
            });
        }
        values
            .iter()
            .zip(params)
            .map(|(value, param)| Token::from_json(value, param))
            .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn json_array<'a>(value: &'a Value, param: &ParamType) -> Result<&'a [Value]> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(Error::mismatch(param, json_kind(other))),
    }
}

fn json_hex(s: &str) -> Result<Vec<u8>> {
    if !s.starts_with("0x") && !s.starts_with("0X") {
        return Err(Error::InvalidEncoding(format!("expected 0x-prefixed hex, got {s:?}")));
    }
    util::decode_hex(s)
}

/// A JSON number as a signed integer, refusing anything a double cannot hold
/// exactly.
fn json_number(value: &Value) -> Result<i128> {
    let n = match value {
        Value::Number(n) => n,
        other => return Err(Error::mismatch("number", json_kind(other))),
    };
    if let Some(v) = n.as_u64() {
        return Ok(v as i128);
    }
    if let Some(v) = n.as_i64() {
        return Ok(v as i128);
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER as f64 => Ok(f as i128),
        _ => Err(Error::UnsafeNumeric(format!("{n} is not a safe integer"))),
    }
}

fn json_uint(value: &Value, param: &ParamType) -> Result<U256> {
    match value {
        Value::Number(_) => {
            let n = json_number(value)?;
            u128::try_from(n)
                .map(U256::from)
                .map_err(|_| Error::IntegerOverflow {
                    ty: param.to_string(),
                    value: n.to_string(),
                })
        }
        Value::String(s) => {
            let (radix, digits) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(hex) => (16, hex),
                None => (10, s.as_str()),
            };
            if digits.is_empty() {
                return Err(Error::InvalidEncoding(format!("{s:?}: no digits")));
            }
            U256::from_str_radix(digits, radix)
                .map_err(|e| Error::InvalidEncoding(format!("{s:?}: {e}")))
        }
        other => Err(Error::mismatch(param, json_kind(other))),
    }
}

fn json_int(value: &Value, param: &ParamType) -> Result<I256> {
    match value {
        Value::Number(_) => Ok(I256::from(json_number(value)?)),
        Value::String(s) => s.parse::<I256>().map_err(|e| match e {
            ParseSignedError::Overflow => Error::IntegerOverflow {
                ty: param.to_string(),
                value: s.clone(),
            },
            other => Error::InvalidEncoding(format!("{s:?}: {other}")),
        }),
        other => Err(Error::mismatch(param, json_kind(other))),
    }
}
