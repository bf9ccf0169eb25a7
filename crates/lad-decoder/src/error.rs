use lad_types::error::TypeError;

/// Errors from decoding a single account buffer.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── BufferTooLarge           ← buffer exceeds the configured limit
///   ├── EmptyBuffer              ← no type tag to dispatch on
///   ├── UnsupportedAccountType   ← tag is unknown
///   └── Type(TypeError)          ← from lad-types record decoding
/// ```
///
/// Batch decoding never returns these directly. It flattens them into
/// [`ParseError`](crate::ParseError) entries and keeps going, except for
/// the two "nothing to decode" cases, which it skips silently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("buffer exceeds limit: {len} bytes, limit {limit}")]
    BufferTooLarge { len: usize, limit: usize },

    #[error("empty account buffer")]
    EmptyBuffer,

    /// The leading tag names no known account type.
    #[error("unsupported account type tag {tag}")]
    UnsupportedAccountType { tag: u8 },

    #[error(transparent)]
    Type(#[from] TypeError),
}

impl DecodeError {
    /// Whether batch decoding skips this buffer instead of recording it.
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::EmptyBuffer | Self::UnsupportedAccountType { .. })
    }
}
