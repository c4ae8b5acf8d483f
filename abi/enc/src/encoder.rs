// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Top-level call-data composer.

use tracing::trace;

use crate::{
    classify::total_head_len,
    encode_dynamic, encode_static,
    util::{pad_usize, to_word_hex},
    Bytes, Error, ParamType, Result, Selector, Token,
};

/// Encodes an argument list against its declared parameter types.
///
/// The head holds one slot per parameter: a single offset word for dynamic
/// parameters, the full in-place encoding for static ones. Offsets count from
/// the start of the argument area, and dynamic payloads follow the head in
/// parameter order.
pub fn encode(params: &[ParamType], tokens: &[Token]) -> Result<Bytes> {
    if params.len() != tokens.len() {
        return Err(Error::ArityMismatch {
            expected: params.len(),
            got: tokens.len(),
        });
    }

    // head grows with the encoded values, never sized from declared lengths
    let head_len = total_head_len(params)?;
    let mut head = Vec::new();
    let mut tail = Vec::new();

    for (param, token) in params.iter().zip(tokens) {
        if param.is_dynamic() {
            head.extend_from_slice(pad_usize(head_len + tail.len()).as_bytes());
            tail.extend(encode_dynamic(token, param)?);
        } else {
            head.extend(encode_static(token, param)?);
        }
    }
    trace!(params = params.len(), head = head.len(), tail = tail.len(), "encoded call data");

    head.extend(tail);
    Ok(head)
}

/// [`encode`], rendered as `0x`-prefixed lowercase hex.
pub fn encode_hex(params: &[ParamType], tokens: &[Token]) -> Result<String> {
    encode(params, tokens).map(|bytes| to_word_hex(&bytes))
}

/// Full invocation payload: the selector followed by the encoded arguments.
pub fn encode_with_selector(
    selector: Selector,
    params: &[ParamType],
    tokens: &[Token],
) -> Result<Bytes> {
    let encoded = encode(params, tokens)?;
    let mut out = Vec::with_capacity(4 + encoded.len());
    out.extend_from_slice(selector.as_bytes());
    out.extend(encoded);
    Ok(out)
}
