use lad_decoder::DecodeError;
use lad_types::TypeError;
use lad_wire::Pubkey;

/// Errors from fetching and decoding accounts.
///
/// ```text
///   ClientError
///   ├── NotFound             ← source has no account at this address
///   ├── LedgerNotConfigured  ← ledger record requested without a source
///   ├── Derivation           ← address derivation oracle failed
///   ├── Source               ← collaborator I/O failure, stringified
///   ├── InvalidAccount       ← one account of a bulk fetch failed to decode
///   └── Decode(DecodeError)  ← single-account decode failure
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("account {id} not found")]
    NotFound { id: Pubkey },

    #[error("ledger record source not configured")]
    LedgerNotConfigured,

    #[error("address derivation failed: {0}")]
    Derivation(String),

    #[error("account source: {0}")]
    Source(String),

    #[error("decoding account {id}: {source}")]
    InvalidAccount {
        id: Pubkey,
        #[source]
        source: DecodeError,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<TypeError> for ClientError {
    fn from(e: TypeError) -> Self {
        Self::Decode(DecodeError::Type(e))
    }
}
