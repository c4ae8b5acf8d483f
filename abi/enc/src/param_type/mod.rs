// Copyright 2015-2020 Parity Technologies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Function and event param types.

use core::{fmt, str::FromStr};

use crate::{Error, Result};

mod descriptor;
pub use descriptor::{FunctionDescriptor, TypeDescriptor};

/// Deepest array/tuple nesting accepted when parsing a type.
pub const MAX_TYPE_DEPTH: usize = 32;

/// Largest `K` accepted in a `T[K]` suffix.
pub const MAX_FIXED_ARRAY_LEN: usize = u32::MAX as usize;

/// Function and event param types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Address.
    Address,
    /// Bytes.
    Bytes,
    /// Signed integer of the given bit width.
    Int(usize),
    /// Unsigned integer of the given bit width.
    Uint(usize),
    /// Boolean.
    Bool,
    /// String.
    String,
    /// Array of unknown size.
    Array(Box<ParamType>),
    /// Vector of bytes with fixed size.
    FixedBytes(usize),
    /// Array with fixed size.
    FixedArray(Box<ParamType>, usize),
    /// Tuple containing different types
    Tuple(Vec<ParamType>),
}

impl ParamType {
    /// Parse a descriptor: array suffixes are stripped from the end first, so
    /// `uint8[2][]` is a dynamic array of `uint8[2]`.
    pub fn from_descriptor(descriptor: &TypeDescriptor) -> Result<Self> {
        parse_descriptor(&descriptor.ty, descriptor.components.as_deref(), 0)
    }

    /// Parse a canonical type string such as `(uint256,string)[]`.
    pub fn parse(ty: &str) -> Result<Self> {
        parse_canonical(ty, 0)
    }
}

impl FromStr for ParamType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ParamType {
    /// Canonical form, as hashed into selectors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => f.write_str("address"),
            ParamType::Bytes => f.write_str("bytes"),
            ParamType::Int(bits) => write!(f, "int{bits}"),
            ParamType::Uint(bits) => write!(f, "uint{bits}"),
            ParamType::Bool => f.write_str("bool"),
            ParamType::String => f.write_str("string"),
            ParamType::Array(inner) => write!(f, "{inner}[]"),
            ParamType::FixedBytes(len) => write!(f, "bytes{len}"),
            ParamType::FixedArray(inner, len) => write!(f, "{inner}[{len}]"),
            ParamType::Tuple(components) => {
                f.write_str("(")?;
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{component}")?;
                }
                f.write_str(")")
            }
        }
    }
}

fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_TYPE_DEPTH {
        return Err(Error::DepthLimit(MAX_TYPE_DEPTH));
    }
    Ok(())
}

/// Splits `T[k]` / `T[]` into the element type string and the optional length.
fn split_array_suffix(ty: &str) -> Result<Option<(&str, Option<usize>)>> {
    let Some(stripped) = ty.strip_suffix(']') else {
        return Ok(None);
    };
    let open = stripped
        .rfind('[')
        .ok_or_else(|| Error::UnsupportedType(ty.to_string()))?;
    let (elem, len) = (&stripped[..open], &stripped[open + 1..]);
    if elem.is_empty() {
        return Err(Error::UnsupportedType(ty.to_string()));
    }
    if len.is_empty() {
        return Ok(Some((elem, None)));
    }
    match parse_decimal(len) {
        Some(len) if len > 0 && len <= MAX_FIXED_ARRAY_LEN => Ok(Some((elem, Some(len)))),
        _ => Err(Error::UnsupportedType(ty.to_string())),
    }
}

fn wrap_array(inner: ParamType, len: Option<usize>) -> ParamType {
    match len {
        Some(len) => ParamType::FixedArray(Box::new(inner), len),
        None => ParamType::Array(Box::new(inner)),
    }
}

fn parse_descriptor(
    ty: &str,
    components: Option<&[TypeDescriptor]>,
    depth: usize,
) -> Result<ParamType> {
    check_depth(depth)?;

    if let Some((elem, len)) = split_array_suffix(ty)? {
        let inner = parse_descriptor(elem, components, depth + 1)?;
        return Ok(wrap_array(inner, len));
    }

    if ty == "tuple" {
        let components = components.ok_or_else(|| Error::ComponentsRequired(ty.to_string()))?;
        return components
            .iter()
            .map(|c| parse_descriptor(&c.ty, c.components.as_deref(), depth + 1))
            .collect::<Result<Vec<_>>>()
            .map(ParamType::Tuple);
    }

    if components.map_or(false, |c| !c.is_empty()) {
        return Err(Error::UnsupportedType(format!(
            "`{ty}` does not take components"
        )));
    }
    parse_elementary(ty)
}

fn parse_canonical(ty: &str, depth: usize) -> Result<ParamType> {
    check_depth(depth)?;
    let ty = ty.trim();

    if let Some((elem, len)) = split_array_suffix(ty)? {
        let inner = parse_canonical(elem, depth + 1)?;
        return Ok(wrap_array(inner, len));
    }

    if let Some(inner) = ty.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        return split_top_level(inner)
            .ok_or_else(|| Error::UnsupportedType(ty.to_string()))?
            .into_iter()
            .map(|component| parse_canonical(component, depth + 1))
            .collect::<Result<Vec<_>>>()
            .map(ParamType::Tuple);
    }

    if ty == "tuple" {
        return Err(Error::ComponentsRequired(ty.to_string()));
    }
    parse_elementary(ty)
}

/// Splits a tuple body at commas that are not nested in parentheses. Returns
/// `None` on unbalanced parentheses.
fn split_top_level(body: &str) -> Option<Vec<&str>> {
    if body.trim().is_empty() {
        return Some(Vec::new());
    }
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    parts.push(&body[start..]);
    Some(parts)
}

fn parse_decimal(digits: &str) -> Option<usize> {
    let canonical = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !(digits.len() > 1 && digits.starts_with('0'));
    if canonical {
        digits.parse().ok()
    } else {
        None
    }
}

fn parse_int_width(ty: &str, digits: &str) -> Result<usize> {
    if digits.is_empty() {
        return Ok(256);
    }
    match parse_decimal(digits) {
        Some(bits) if bits > 0 && bits <= 256 && bits % 8 == 0 => Ok(bits),
        _ => Err(Error::UnsupportedType(ty.to_string())),
    }
}

fn parse_elementary(ty: &str) -> Result<ParamType> {
    match ty {
        "address" => return Ok(ParamType::Address),
        "bool" => return Ok(ParamType::Bool),
        "string" => return Ok(ParamType::String),
        "bytes" => return Ok(ParamType::Bytes),
        _ => {}
    }

    if let Some(digits) = ty.strip_prefix("uint") {
        return parse_int_width(ty, digits).map(ParamType::Uint);
    }
    if let Some(digits) = ty.strip_prefix("int") {
        return parse_int_width(ty, digits).map(ParamType::Int);
    }
    if let Some(digits) = ty.strip_prefix("bytes") {
        return match parse_decimal(digits) {
            Some(len) if (1..=32).contains(&len) => Ok(ParamType::FixedBytes(len)),
            Some(len) => Err(Error::InvalidByteLength(format!(
                "bytes{len}: size must be between 1 and 32"
            ))),
            None => Err(Error::UnsupportedType(ty.to_string())),
        };
    }

    Err(Error::UnsupportedType(ty.to_string()))
}
