use lad_wire::WireError;

/// Errors raised while decoding a typed record.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                                  │
/// │   ├── wraps WireError for every byte-level failure      │
/// │   ├── RecordTooShort for ledger records under header    │
/// │   └── CountTooLarge for element counts past the limit   │
/// └─────────────────────────────────────────────────────────┘
/// ```
///
/// Unknown enum values are not errors; they resolve to a fallback
/// variant inside the record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
  /// A ledger record was not longer than its fixed record header.
  #[error("ledger record too short: {have} bytes, header is {header}")]
  RecordTooShort { have: usize, header: usize },

  /// An element count read defaultingly exceeds what a decoder will
  /// materialize.
  #[error("{field} count {count} exceeds limit {limit}")]
  CountTooLarge {
    field: &'static str,
    count: u32,
    limit: u32,
  },

  #[error(transparent)]
  Wire(#[from] WireError),
}
