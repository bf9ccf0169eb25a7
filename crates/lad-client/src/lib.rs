#![warn(clippy::pedantic)]

//! Async account clients over pluggable fetch and derivation backends.
//!
//! Decoding itself is synchronous and lives in the lower crates. This
//! crate only wires collaborators together and logs what it fetched.

pub mod config;
pub mod error;
pub mod revdist;
pub mod serviceability;
pub mod source;

pub use config::{ClientConfig, Environment};
pub use error::ClientError;
pub use revdist::RevDistClient;
pub use serviceability::ServiceabilityClient;
pub use source::{
    AccountSource, AddressDeriver, InMemorySource, LedgerRecordSource, NoLedger, Sha256Deriver,
};
