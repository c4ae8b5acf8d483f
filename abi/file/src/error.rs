/// Loading or lookup failure for a descriptor set.
#[derive(thiserror::Error, Debug)]
pub enum AbiFileError {
    /// Malformed JSON, or JSON that is not an ABI array
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The document could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A descriptor could not be parsed, or arguments failed to encode
    #[error(transparent)]
    Abi(#[from] calldata_abi_enc::Error),

    /// A function entry without a name, by position in the document
    #[error("function entry {0} has no name")]
    MissingName(usize),

    /// No callable with this name
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
}

/// Descriptor set result
pub type Result<T, E = AbiFileError> = core::result::Result<T, E>;
