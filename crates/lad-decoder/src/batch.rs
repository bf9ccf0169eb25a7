use std::fmt;

use lad_types::account::Account;
use lad_types::account_type::AccountType;
use lad_types::serviceability::{
    AccessPass, Contributor, Device, Exchange, GlobalConfig, GlobalState, Link, Location,
    MulticastGroup, ProgramConfig, ResourceExtension, Tenant, User,
};
use lad_wire::Pubkey;

use crate::error::DecodeError;

/// Limits applied before any byte of a buffer is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchConfig {
    /// Buffers longer than this are recorded as errors, not decoded.
    /// `None` means no limit.
    pub max_buffer_len: Option<usize>,
}

impl BatchConfig {
    pub fn with_max_buffer_len(limit: usize) -> Self {
        Self {
            max_buffer_len: Some(limit),
        }
    }
}

/// Decode one account buffer, surfacing every failure.
///
/// # Errors
///
/// - [`DecodeError::BufferTooLarge`] if the buffer exceeds the limit.
/// - [`DecodeError::EmptyBuffer`] for a zero-length buffer.
/// - [`DecodeError::UnsupportedAccountType`] for a tag with no decoder.
/// - [`DecodeError::Type`] if the record itself fails to decode.
pub fn decode_account(buf: &[u8], config: &BatchConfig) -> Result<Account, DecodeError> {
    if let Some(limit) = config.max_buffer_len
        && buf.len() > limit
    {
        return Err(DecodeError::BufferTooLarge {
            len: buf.len(),
            limit,
        });
    }
    let Some(&tag) = buf.first() else {
        return Err(DecodeError::EmptyBuffer);
    };
    Account::decode(buf)?.ok_or(DecodeError::UnsupportedAccountType { tag })
}

/// A record that failed to decode inside a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub identifier: Pubkey,
    pub type_tag: u8,
    pub buffer_length: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to parse {} account {} ({} bytes): {}",
            AccountType::from_wire_id(self.type_tag).name(),
            self.identifier,
            self.buffer_length,
            self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Everything decoded from one batch of program accounts.
///
/// Each bucket keeps input order, and so does `errors`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgramData {
    pub global_state: Vec<(Pubkey, GlobalState)>,
    pub global_config: Vec<(Pubkey, GlobalConfig)>,
    pub locations: Vec<(Pubkey, Location)>,
    pub exchanges: Vec<(Pubkey, Exchange)>,
    pub devices: Vec<(Pubkey, Device)>,
    pub links: Vec<(Pubkey, Link)>,
    pub users: Vec<(Pubkey, User)>,
    pub multicast_groups: Vec<(Pubkey, MulticastGroup)>,
    pub program_config: Vec<(Pubkey, ProgramConfig)>,
    pub contributors: Vec<(Pubkey, Contributor)>,
    pub access_passes: Vec<(Pubkey, AccessPass)>,
    pub resource_extensions: Vec<(Pubkey, ResourceExtension)>,
    pub tenants: Vec<(Pubkey, Tenant)>,
    pub errors: Vec<ParseError>,
}

impl ProgramData {
    /// Number of successfully decoded records across all buckets.
    pub fn record_count(&self) -> usize {
        self.global_state.len()
            + self.global_config.len()
            + self.locations.len()
            + self.exchanges.len()
            + self.devices.len()
            + self.links.len()
            + self.users.len()
            + self.multicast_groups.len()
            + self.program_config.len()
            + self.contributors.len()
            + self.access_passes.len()
            + self.resource_extensions.len()
            + self.tenants.len()
    }

    fn push(&mut self, key: Pubkey, account: Account) {
        match account {
            Account::GlobalState(r) => self.global_state.push((key, r)),
            Account::GlobalConfig(r) => self.global_config.push((key, r)),
            Account::Location(r) => self.locations.push((key, r)),
            Account::Exchange(r) => self.exchanges.push((key, r)),
            Account::Device(r) => self.devices.push((key, r)),
            Account::Link(r) => self.links.push((key, r)),
            Account::User(r) => self.users.push((key, r)),
            Account::MulticastGroup(r) => self.multicast_groups.push((key, r)),
            Account::ProgramConfig(r) => self.program_config.push((key, r)),
            Account::Contributor(r) => self.contributors.push((key, r)),
            Account::AccessPass(r) => self.access_passes.push((key, r)),
            Account::ResourceExtension(r) => self.resource_extensions.push((key, r)),
            Account::Tenant(r) => self.tenants.push((key, r)),
        }
    }

    fn absorb(&mut self, key: Pubkey, buf_len: usize, outcome: Outcome) {
        match outcome {
            Outcome::Decoded(account) => self.push(key, account),
            Outcome::Skipped => {}
            Outcome::Failed { type_tag, message } => self.errors.push(ParseError {
                identifier: key,
                type_tag,
                buffer_length: buf_len,
                message,
            }),
        }
    }
}

enum Outcome {
    Decoded(Account),
    Skipped,
    Failed { type_tag: u8, message: String },
}

fn decode_one(buf: &[u8], config: &BatchConfig) -> Outcome {
    match decode_account(buf, config) {
        Ok(account) => Outcome::Decoded(account),
        Err(e) if e.is_skip() => Outcome::Skipped,
        Err(e) => Outcome::Failed {
            type_tag: buf.first().copied().unwrap_or_default(),
            message: e.to_string(),
        },
    }
}

/// Decode a batch of `(identifier, buffer)` pairs.
///
/// Empty buffers and buffers whose tag has no decoder are skipped. A
/// buffer that fails to decode becomes a [`ParseError`] and never stops
/// the rest of the batch.
pub fn decode_batch<I, B>(accounts: I, config: &BatchConfig) -> ProgramData
where
    I: IntoIterator<Item = (Pubkey, B)>,
    B: AsRef<[u8]>,
{
    let mut data = ProgramData::default();
    for (key, buf) in accounts {
        let buf = buf.as_ref();
        data.absorb(key, buf.len(), decode_one(buf, config));
    }
    data
}

/// [`decode_batch`] on the rayon pool.
///
/// Results are identical to the sequential path: outcomes are collected
/// per input index and merged in input order.
#[cfg(feature = "parallel")]
pub fn decode_batch_parallel<B>(accounts: &[(Pubkey, B)], config: &BatchConfig) -> ProgramData
where
    B: AsRef<[u8]> + Sync,
{
    use rayon::prelude::*;

    let outcomes: Vec<Outcome> = accounts
        .par_iter()
        .map(|(_, buf)| decode_one(buf.as_ref(), config))
        .collect();

    let mut data = ProgramData::default();
    for ((key, buf), outcome) in accounts.iter().zip(outcomes) {
        data.absorb(*key, buf.as_ref().len(), outcome);
    }
    data
}
