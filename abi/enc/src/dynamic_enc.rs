// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Dynamic value encoder.

use tracing::trace;

use crate::{
    classify::total_head_len,
    encode_static,
    util::{pad_right, pad_usize},
    Bytes, Error, ParamType, Result, Token,
};

/// Encodes a value whose length depends on its content.
///
/// - `string`/`bytes`: length word, then the content right-padded to a word
///   boundary. Empty content is the length word alone.
/// - `T[]`: element count word, then the elements laid out as a head/tail
///   sequence whose offsets start after the count word.
/// - `T[k]`: the k elements as a head/tail sequence, no count word.
/// - tuples: see [`encode_tuple`].
pub fn encode_dynamic(token: &Token, param: &ParamType) -> Result<Bytes> {
    match param {
        ParamType::String => match token {
            Token::String(s) => Ok(encode_packed(s.as_bytes())),
            other => Err(Error::mismatch(param, other.kind())),
        },
        ParamType::Bytes => match token {
            Token::Bytes(bytes) => Ok(encode_packed(bytes)),
            other => Err(Error::mismatch(param, other.kind())),
        },
        ParamType::Array(inner) => {
            let tokens = token.expect_array(param)?;
            let mut out = pad_usize(tokens.len()).as_bytes().to_vec();
            out.extend(encode_head_tail(tokens.iter().map(|t| (inner.as_ref(), t)))?);
            Ok(out)
        }
        ParamType::FixedArray(inner, len) => {
            let tokens = token.expect_array(param)?;
            if tokens.len() != *len {
                return Err(Error::ArrayLengthMismatch {
                    expected: *len,
                    got: tokens.len(),
                });
            }
            if inner.is_dynamic() {
                encode_head_tail(tokens.iter().map(|t| (inner.as_ref(), t)))
            } else {
                encode_static(token, param)
            }
        }
        ParamType::Tuple(components) => encode_tuple(token.expect_tuple(param)?, components),
        _ => Err(Error::UnsupportedType(format!(
            "`{param}` is not supported by the dynamic encoder"
        ))),
    }
}

/// Encodes tuple components as a head followed by a tail.
///
/// Static components sit in the head in full; each dynamic component puts an
/// offset word in the head, measured from the start of the tuple's own
/// encoding, and its payload in the tail.
pub fn encode_tuple(tokens: &[Token], components: &[ParamType]) -> Result<Bytes> {
    if tokens.len() != components.len() {
        return Err(Error::ArityMismatch {
            expected: components.len(),
            got: tokens.len(),
        });
    }
    encode_head_tail(components.iter().zip(tokens))
}

fn encode_head_tail<'a, I>(fields: I) -> Result<Bytes>
where
    I: Iterator<Item = (&'a ParamType, &'a Token)> + Clone,
{
    let head_len = total_head_len(fields.clone().map(|(param, _)| param))?;

    let mut head = Vec::new();
    let mut tail = Vec::new();
    for (param, token) in fields {
        if param.is_dynamic() {
            head.extend_from_slice(pad_usize(head_len + tail.len()).as_bytes());
            tail.extend(encode_dynamic(token, param)?);
        } else {
            head.extend(encode_static(token, param)?);
        }
    }
    trace!(head = head.len(), tail = tail.len(), "encoded head/tail sequence");

    head.extend(tail);
    Ok(head)
}

fn encode_packed(bytes: &[u8]) -> Bytes {
    let mut out = pad_usize(bytes.len()).as_bytes().to_vec();
    out.extend(pad_right(bytes));
    out
}

#[cfg(test)]
mod tests {
    use calldata_primitives::B160;
    use hex_literal::hex;

    use crate::{encode_dynamic, encode_tuple, Error, ParamType, Token, U256};

    fn uint(value: u64) -> Token {
        Token::Uint(U256::from(value))
    }

    fn array(inner: ParamType) -> ParamType {
        ParamType::Array(Box::new(inner))
    }

    #[test]
    fn encode_string() {
        let encoded =
            encode_dynamic(&Token::String("gavofyork".into()), &ParamType::String).unwrap();
        let expected = hex!(
            "
			0000000000000000000000000000000000000000000000000000000000000009
			6761766f66796f726b0000000000000000000000000000000000000000000000
		"
        );
        assert_eq!(encoded, expected);
    }

    #[test]
    fn encode_empty_string_is_one_word() {
        let encoded = encode_dynamic(&Token::String(String::new()), &ParamType::String).unwrap();
        assert_eq!(encoded, [0u8; 32]);
        let encoded = encode_dynamic(&Token::Bytes(vec![]), &ParamType::Bytes).unwrap();
        assert_eq!(encoded, [0u8; 32]);
    }

    #[test]
    fn encode_bytes_spanning_two_words() {
        let bytes = Token::Bytes(
            hex!(
                "
			1000000000000000000000000000000000000000000000000000000000000000
			10
		"
            )
            .to_vec(),
        );
        let encoded = encode_dynamic(&bytes, &ParamType::Bytes).unwrap();
        let expected = hex!(
            "
			0000000000000000000000000000000000000000000000000000000000000021
			1000000000000000000000000000000000000000000000000000000000000000
			1000000000000000000000000000000000000000000000000000000000000000
		"
        );
        assert_eq!(encoded, expected);
    }

    #[test]
    fn encode_dynamic_array_of_uints() {
        let encoded = encode_dynamic(
            &Token::Array(vec![uint(1), uint(2), uint(3)]),
            &array(ParamType::Uint(256)),
        )
        .unwrap();
        let expected = hex!(
            "
			0000000000000000000000000000000000000000000000000000000000000003
			0000000000000000000000000000000000000000000000000000000000000001
			0000000000000000000000000000000000000000000000000000000000000002
			0000000000000000000000000000000000000000000000000000000000000003
		"
        );
        assert_eq!(encoded, expected);
    }

    #[test]
    fn encode_dynamic_array_of_strings() {
        let encoded = encode_dynamic(
            &Token::Array(vec![Token::String("a".into()), Token::String("bc".into())]),
            &array(ParamType::String),
        )
        .unwrap();
        let expected = hex!(
            "
			0000000000000000000000000000000000000000000000000000000000000002
			0000000000000000000000000000000000000000000000000000000000000040
			0000000000000000000000000000000000000000000000000000000000000080
			0000000000000000000000000000000000000000000000000000000000000001
			6100000000000000000000000000000000000000000000000000000000000000
			0000000000000000000000000000000000000000000000000000000000000002
			6263000000000000000000000000000000000000000000000000000000000000
		"
        );
        assert_eq!(encoded, expected);
    }

    #[test]
    fn encode_dynamic_array_of_static_tuples() {
        let encoded = encode_dynamic(
            &Token::Array(vec![
                Token::Tuple(vec![uint(1), Token::Bool(true)]),
                Token::Tuple(vec![uint(2), Token::Bool(false)]),
            ]),
            &array(ParamType::Tuple(vec![ParamType::Uint(256), ParamType::Bool])),
        )
        .unwrap();
        let expected = hex!(
            "
			0000000000000000000000000000000000000000000000000000000000000002
			0000000000000000000000000000000000000000000000000000000000000001
			0000000000000000000000000000000000000000000000000000000000000001
			0000000000000000000000000000000000000000000000000000000000000002
			0000000000000000000000000000000000000000000000000000000000000000
		"
        );
        assert_eq!(encoded, expected);
    }

    #[test]
    fn encode_fixed_array_of_strings_uses_offsets() {
        let encoded = encode_dynamic(
            &Token::Array(vec![Token::String("ab".into()), Token::String(String::new())]),
            &ParamType::FixedArray(Box::new(ParamType::String), 2),
        )
        .unwrap();
        let expected = hex!(
            "
			0000000000000000000000000000000000000000000000000000000000000040
			0000000000000000000000000000000000000000000000000000000000000080
			0000000000000000000000000000000000000000000000000000000000000002
			6162000000000000000000000000000000000000000000000000000000000000
			0000000000000000000000000000000000000000000000000000000000000000
		"
        );
        assert_eq!(encoded, expected);
    }

    #[test]
    fn encode_fixed_array_of_static_elements_is_inline() {
        let encoded = encode_dynamic(
            &Token::Array(vec![
                Token::Address(B160([0x11u8; 20])),
                Token::Address(B160([0x22u8; 20])),
            ]),
            &ParamType::FixedArray(Box::new(ParamType::Address), 2),
        )
        .unwrap();
        let expected = hex!(
            "
			0000000000000000000000001111111111111111111111111111111111111111
			0000000000000000000000002222222222222222222222222222222222222222
		"
        );
        assert_eq!(encoded, expected);
    }

    #[test]
    fn encode_tuple_with_string() {
        let encoded = encode_tuple(
            &[uint(5), Token::String("ab".into())],
            &[ParamType::Uint(256), ParamType::String],
        )
        .unwrap();
        let expected = hex!(
            "
			0000000000000000000000000000000000000000000000000000000000000005
			0000000000000000000000000000000000000000000000000000000000000040
			0000000000000000000000000000000000000000000000000000000000000002
			6162000000000000000000000000000000000000000000000000000000000000
		"
        );
        assert_eq!(encoded, expected);
    }

    #[test]
    fn dynamic_errors() {
        assert_eq!(
            encode_dynamic(
                &Token::Array(vec![Token::String("a".into())]),
                &ParamType::FixedArray(Box::new(ParamType::String), 2)
            ),
            Err(Error::ArrayLengthMismatch {
                expected: 2,
                got: 1
            })
        );
        assert!(matches!(
            encode_dynamic(&uint(1), &ParamType::Uint(256)),
            Err(Error::UnsupportedType(_))
        ));
        assert!(matches!(
            encode_dynamic(&Token::Bytes(vec![1]), &ParamType::String),
            Err(Error::TypeMismatch { found: "bytes", .. })
        ));
        assert_eq!(
            encode_tuple(&[uint(5)], &[ParamType::Uint(256), ParamType::String]),
            Err(Error::ArityMismatch {
                expected: 2,
                got: 1
            })
        );
        // an error deep inside a nested value aborts the whole encode
        assert!(matches!(
            encode_dynamic(
                &Token::Array(vec![Token::Tuple(vec![uint(300), Token::String("x".into())])]),
                &array(ParamType::Tuple(vec![ParamType::Uint(8), ParamType::String]))
            ),
            Err(Error::IntegerOverflow { .. })
        ));
    }
}
