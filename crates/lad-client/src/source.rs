//! Collaborator interfaces the clients are built on.
//!
//! None of these are implemented against a real network here. Callers
//! plug in their RPC layer; tests use [`InMemorySource`] and
//! [`Sha256Deriver`].

use std::collections::BTreeMap;
use std::future::Future;

use lad_wire::Pubkey;
use sha2::{Digest, Sha256};

use crate::error::ClientError;

/// Fetches raw account data.
pub trait AccountSource: Send + Sync {
    /// `Ok(None)` when no account exists at `id`.
    fn fetch(
        &self,
        id: &Pubkey,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, ClientError>> + Send;

    /// Every account owned by `program_id` whose data starts with
    /// `filter`. An empty filter matches all of them.
    fn fetch_by_tag(
        &self,
        program_id: &Pubkey,
        filter: &[u8],
    ) -> impl Future<Output = Result<Vec<(Pubkey, Vec<u8>)>, ClientError>> + Send;
}

/// Fetches off-chain ledger records by key.
pub trait LedgerRecordSource: Send + Sync {
    fn record_data(
        &self,
        id: &Pubkey,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, ClientError>> + Send;
}

/// Deterministic address derivation. Treated as an opaque oracle.
pub trait AddressDeriver: Send + Sync {
    /// Program-derived address and bump for `seeds` under `program_id`.
    ///
    /// # Errors
    ///
    /// [`ClientError::Derivation`] if no address can be derived.
    fn derive(&self, seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8), ClientError>;

    /// Ledger record key for `seeds` under a `base` authority.
    ///
    /// # Errors
    ///
    /// [`ClientError::Derivation`] if no key can be derived.
    fn derive_record_key(&self, base: &Pubkey, seeds: &[&[u8]]) -> Result<Pubkey, ClientError>;
}

/// Stands in for a ledger when none is configured. Every lookup fails
/// with [`ClientError::LedgerNotConfigured`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLedger;

impl LedgerRecordSource for NoLedger {
    async fn record_data(&self, _id: &Pubkey) -> Result<Option<Vec<u8>>, ClientError> {
        Err(ClientError::LedgerNotConfigured)
    }
}

/// Accounts and ledger records held in memory.
///
/// Iteration order of `fetch_by_tag` is key order, so results are
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    accounts: BTreeMap<Pubkey, (Pubkey, Vec<u8>)>,
    records: BTreeMap<Pubkey, Vec<u8>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an account owned by `owner`, replacing any previous data.
    pub fn insert_account(&mut self, owner: Pubkey, id: Pubkey, data: Vec<u8>) {
        self.accounts.insert(id, (owner, data));
    }

    pub fn insert_record(&mut self, id: Pubkey, data: Vec<u8>) {
        self.records.insert(id, data);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountSource for InMemorySource {
    async fn fetch(&self, id: &Pubkey) -> Result<Option<Vec<u8>>, ClientError> {
        Ok(self.accounts.get(id).map(|(_, data)| data.clone()))
    }

    async fn fetch_by_tag(
        &self,
        program_id: &Pubkey,
        filter: &[u8],
    ) -> Result<Vec<(Pubkey, Vec<u8>)>, ClientError> {
        Ok(self
            .accounts
            .iter()
            .filter(|(_, (owner, data))| owner == program_id && data.starts_with(filter))
            .map(|(id, (_, data))| (*id, data.clone()))
            .collect())
    }
}

impl LedgerRecordSource for InMemorySource {
    async fn record_data(&self, id: &Pubkey) -> Result<Option<Vec<u8>>, ClientError> {
        Ok(self.records.get(id).cloned())
    }
}

/// A hash-based deriver for tests and offline tooling.
///
/// Addresses are `SHA-256(seeds ‖ bump ‖ program_id ‖ marker)` with a
/// fixed bump of 255. This is stable and collision-resistant, but it is
/// not the chain's own derivation: it skips the off-curve search.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Deriver;

const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";
const FIXED_BUMP: u8 = 255;

impl AddressDeriver for Sha256Deriver {
    fn derive(&self, seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8), ClientError> {
        let mut hasher = Sha256::new();
        for seed in seeds {
            hasher.update(seed);
        }
        hasher.update([FIXED_BUMP]);
        hasher.update(program_id.as_bytes());
        hasher.update(PDA_MARKER);
        Ok((Pubkey(hasher.finalize().into()), FIXED_BUMP))
    }

    fn derive_record_key(&self, base: &Pubkey, seeds: &[&[u8]]) -> Result<Pubkey, ClientError> {
        let mut hasher = Sha256::new();
        hasher.update(base.as_bytes());
        for seed in seeds {
            hasher.update(seed);
        }
        Ok(Pubkey(hasher.finalize().into()))
    }
}
