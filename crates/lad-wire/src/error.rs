use crate::discriminator::Discriminator;

/// Errors raised while reading raw account bytes.
///
/// Every variant is fatal to the decode that produced it. Callers that
/// want to keep going past a bad buffer (batch dispatch) collect these
/// per record rather than recovering locally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A strict read needed more bytes than remain in the buffer.
    ///
    /// `offset` is where the read was attempted, `needed` the byte
    /// width of that read. The cursor did not move.
    #[error("insufficient data at offset {offset}: needed {needed} bytes")]
    InsufficientData { offset: usize, needed: usize },

    /// A length-prefixed string body was not valid UTF-8.
    #[error("invalid UTF-8 in string body at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// The leading 8 bytes of a fixed-layout account named a different type.
    #[error("invalid discriminator: got {got}, want {want}")]
    InvalidDiscriminator { got: Discriminator, want: Discriminator },

    /// The body after the discriminator is shorter than the record's
    /// fixed size. Longer bodies are fine.
    #[error("account data too short: have {have} bytes, need at least {need}")]
    AccountTooShort { have: usize, need: usize },

    /// A fixed-layout reader consumed a different number of bytes than
    /// its declared size. Indicates a broken layout table, not bad input.
    #[error("{record} byte coverage: consumed {consumed}, declared {declared}")]
    LayoutMismatch {
        record: &'static str,
        consumed: usize,
        declared: usize,
    },
}
