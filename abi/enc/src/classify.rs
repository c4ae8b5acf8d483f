//! Static/dynamic classification and static word counts.

use crate::{Error, ParamType, Result};

impl ParamType {
    /// Whether the encoding length depends on the value.
    ///
    /// `string`, `bytes` and `T[]` are dynamic; `T[k]` and tuples are dynamic
    /// iff any element type is.
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            ParamType::Tuple(components) => components.iter().any(ParamType::is_dynamic),
            _ => false,
        }
    }

    /// Number of words a static type occupies in place.
    ///
    /// Fails with [`Error::UnsupportedType`] when the count does not fit in a
    /// `usize`.
    pub fn static_size_in_words(&self) -> Result<usize> {
        if self.is_dynamic() {
            return Err(Error::DynamicInStaticContext(self.to_string()));
        }
        self.word_count().ok_or_else(|| self.too_large())
    }

    /// Bytes the type occupies in its enclosing head: one offset word when
    /// dynamic, otherwise the full static encoding.
    pub(crate) fn head_len(&self) -> Result<usize> {
        if self.is_dynamic() {
            return Ok(32);
        }
        self.word_count()
            .and_then(|words| words.checked_mul(32))
            .ok_or_else(|| self.too_large())
    }

    // only meaningful for static types
    fn word_count(&self) -> Option<usize> {
        match self {
            ParamType::Tuple(components) => components
                .iter()
                .try_fold(0usize, |sum, c| sum.checked_add(c.word_count()?)),
            ParamType::FixedArray(inner, len) => len.checked_mul(inner.word_count()?),
            _ => Some(1),
        }
    }

    fn too_large(&self) -> Error {
        Error::UnsupportedType(format!("`{self}` is too large to encode"))
    }
}

/// Sums the head sizes of a parameter sequence.
pub(crate) fn total_head_len<'a, I>(params: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a ParamType>,
{
    params.into_iter().try_fold(0usize, |sum, param| {
        sum.checked_add(param.head_len()?)
            .ok_or_else(|| Error::UnsupportedType("argument list is too large to encode".into()))
    })
}
