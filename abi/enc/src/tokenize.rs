use calldata_primitives::{B160, I256, U256};

use crate::{encode, util, Bytes, ParamType, Result, Selector, Token};

/// Convert a Rust value into a call argument
pub trait Tokenize {
    /// Convert to a token
    fn to_token(&self) -> Token;

    /// ABI encode as the single argument of type `param`
    fn encode_as(&self, param: &ParamType) -> Result<Bytes> {
        encode(core::slice::from_ref(param), &[self.to_token()])
    }

    /// Hex encode as the single argument of type `param`
    fn encode_hex_as(&self, param: &ParamType) -> Result<String> {
        self.encode_as(param).map(util::to_hex)
    }

    /// ABI encode with a selector
    fn encode_with_selector(&self, selector: Selector, param: &ParamType) -> Result<Bytes> {
        let mut out = Vec::from(selector.0);
        out.extend(self.encode_as(param)?);
        Ok(out)
    }
}

macro_rules! impl_tokenize_ints {
    ($($int:ty, $uint:ty;)+) => {$(
        impl Tokenize for $int {
            fn to_token(&self) -> Token {
                Token::Int(I256::from(*self))
            }
        }

        impl Tokenize for $uint {
            fn to_token(&self) -> Token {
                Token::Uint(U256::from(*self))
            }
        }
    )+};
}

impl_tokenize_ints! {
    i8, u8;
    i16, u16;
    i32, u32;
    i64, u64;
    i128, u128;
    isize, usize;
}

impl Tokenize for bool {
    fn to_token(&self) -> Token {
        Token::Bool(*self)
    }
}

impl Tokenize for &str {
    fn to_token(&self) -> Token {
        Token::String(self.to_string())
    }
}

impl Tokenize for String {
    fn to_token(&self) -> Token {
        Token::String(self.clone())
    }
}

impl Tokenize for B160 {
    fn to_token(&self) -> Token {
        Token::Address(*self)
    }
}

impl Tokenize for U256 {
    fn to_token(&self) -> Token {
        Token::Uint(*self)
    }
}

impl Tokenize for I256 {
    fn to_token(&self) -> Token {
        Token::Int(*self)
    }
}

impl Tokenize for Token {
    fn to_token(&self) -> Token {
        self.clone()
    }
}

impl<T: Tokenize> Tokenize for Vec<T> {
    fn to_token(&self) -> Token {
        Token::Array(self.iter().map(Tokenize::to_token).collect())
    }
}

impl<T: Tokenize, const N: usize> Tokenize for [T; N] {
    fn to_token(&self) -> Token {
        Token::Array(self.iter().map(Tokenize::to_token).collect())
    }
}

macro_rules! impl_tokenize_tuple {
    ($($ty:ident),+) => {
        impl<$($ty: Tokenize,)+> Tokenize for ($($ty,)+) {
            #[allow(non_snake_case)]
            fn to_token(&self) -> Token {
                let ($($ty,)+) = self;
                Token::Tuple(vec![$($ty.to_token(),)+])
            }
        }
    };
}

impl_tokenize_tuple!(A);
impl_tokenize_tuple!(A, B);
impl_tokenize_tuple!(A, B, C);
impl_tokenize_tuple!(A, B, C, D);
impl_tokenize_tuple!(A, B, C, D, E);
impl_tokenize_tuple!(A, B, C, D, E, F);
impl_tokenize_tuple!(A, B, C, D, E, F, G);
impl_tokenize_tuple!(A, B, C, D, E, F, G, H);
impl_tokenize_tuple!(A, B, C, D, E, F, G, H, I);
impl_tokenize_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_tokenize_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_tokenize_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
