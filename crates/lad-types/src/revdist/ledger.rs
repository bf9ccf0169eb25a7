//! Off-chain ledger records.
//!
//! A ledger record is a Borsh body behind a fixed header:
//!
//! ```text
//! ┌─────────┬──────────────────┬──────────────────────────┐
//! │ u8      │ 32 bytes         │ variable                 │
//! │ version │ authority pubkey │ record body (strict)     │
//! └─────────┴──────────────────┴──────────────────────────┘
//! ```
//!
//! Bodies are read with a strict [`Cursor`]; there is no defaulting here.

use lad_wire::{Cursor, Pubkey, WireError};

use crate::error::TypeError;

pub const RECORD_HEADER_SIZE: usize = 33;

/// The record body after the header.
///
/// # Errors
///
/// [`TypeError::RecordTooShort`] unless the buffer is strictly longer
/// than the header.
pub fn strip_record_header(buf: &[u8]) -> Result<&[u8], TypeError> {
    if buf.len() <= RECORD_HEADER_SIZE {
        return Err(TypeError::RecordTooShort {
            have: buf.len(),
            header: RECORD_HEADER_SIZE,
        });
    }
    Ok(&buf[RECORD_HEADER_SIZE..])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputedSolanaValidatorDebt {
    pub node_id: Pubkey,
    pub amount: u64,
}

/// Validator fee debts computed for a span of Solana epochs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComputedSolanaValidatorDebts {
    pub blockhash: [u8; 32],
    pub first_solana_epoch: u64,
    pub last_solana_epoch: u64,
    pub debts: Vec<ComputedSolanaValidatorDebt>,
}

impl ComputedSolanaValidatorDebts {
    /// Decode a full ledger record, header included.
    ///
    /// # Errors
    ///
    /// A short header or any strict read failure in the body.
    pub fn decode(record: &[u8]) -> Result<Self, TypeError> {
        let body = strip_record_header(record)?;
        Ok(Self::decode_body(body)?)
    }

    /// # Errors
    ///
    /// Any strict read failure.
    pub fn decode_body(body: &[u8]) -> Result<Self, WireError> {
        let mut c = Cursor::new(body);
        Ok(Self {
            blockhash: c.read_array()?,
            first_solana_epoch: c.read_u64()?,
            last_solana_epoch: c.read_u64()?,
            debts: c.read_vec(|c| {
                Ok(ComputedSolanaValidatorDebt {
                    node_id: c.read_pubkey()?,
                    amount: c.read_u64()?,
                })
            })?,
        })
    }

    pub fn total(&self) -> u64 {
        self.debts.iter().fold(0u64, |acc, d| acc.saturating_add(d.amount))
    }
}

const BLOCKED_BIT: u32 = 1 << 31;
const BURN_RATE_MASK: u32 = 0x3FFF_FFFF;

/// One contributor's Shapley share for an epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardShare {
    pub contributor_key: Pubkey,
    pub unit_share: u32,
    /// Packed flags and burn rate, little-endian.
    pub remaining_bytes: [u8; 4],
}

impl RewardShare {
    fn packed(&self) -> u32 {
        u32::from_le_bytes(self.remaining_bytes)
    }

    pub fn is_blocked(&self) -> bool {
        self.packed() & BLOCKED_BIT != 0
    }

    pub fn economic_burn_rate(&self) -> u32 {
        self.packed() & BURN_RATE_MASK
    }
}

/// Shapley-value reward output for one DZ epoch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapleyOutputStorage {
    pub epoch: u64,
    pub rewards: Vec<RewardShare>,
    pub total_unit_shares: u32,
}

impl ShapleyOutputStorage {
    /// Decode a full ledger record, header included.
    ///
    /// # Errors
    ///
    /// A short header or any strict read failure in the body.
    pub fn decode(record: &[u8]) -> Result<Self, TypeError> {
        let body = strip_record_header(record)?;
        Ok(Self::decode_body(body)?)
    }

    /// # Errors
    ///
    /// Any strict read failure.
    pub fn decode_body(body: &[u8]) -> Result<Self, WireError> {
        let mut c = Cursor::new(body);
        Ok(Self {
            epoch: c.read_u64()?,
            rewards: c.read_vec(|c| {
                Ok(RewardShare {
                    contributor_key: c.read_pubkey()?,
                    unit_share: c.read_u32()?,
                    remaining_bytes: c.read_array()?,
                })
            })?,
            total_unit_shares: c.read_u32()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Writer, key};

    fn header() -> Writer {
        Writer::default().u8(1).pubkey(key(0xEE))
    }

    #[test]
    fn header_must_be_followed_by_a_body() {
        assert_eq!(
            strip_record_header(&[0; 33]),
            Err(TypeError::RecordTooShort { have: 33, header: 33 })
        );
        assert_eq!(strip_record_header(&[0; 34]).unwrap(), &[0]);
    }

    #[test]
    fn validator_debts() {
        let data = header()
            .bytes(&[9; 32])
            .u64(700)
            .u64(701)
            .u32(2)
            .pubkey(key(1))
            .u64(5_000)
            .pubkey(key(2))
            .u64(7_500)
            .finish();
        let debts = ComputedSolanaValidatorDebts::decode(&data).unwrap();
        assert_eq!(debts.blockhash, [9; 32]);
        assert_eq!(debts.first_solana_epoch, 700);
        assert_eq!(debts.last_solana_epoch, 701);
        assert_eq!(debts.debts.len(), 2);
        assert_eq!(debts.debts[1].node_id, key(2));
        assert_eq!(debts.total(), 12_500);
    }

    #[test]
    fn truncated_debt_list_is_strict() {
        let data = header()
            .bytes(&[9; 32])
            .u64(700)
            .u64(701)
            .u32(2)
            .pubkey(key(1))
            .u64(5_000)
            .finish();
        assert!(matches!(
            ComputedSolanaValidatorDebts::decode(&data),
            Err(TypeError::Wire(WireError::InsufficientData { .. }))
        ));
    }

    #[test]
    fn reward_share_packed_bits() {
        let packed: u32 = BLOCKED_BIT | 0x4000_0000 | 1_234;
        let data = header()
            .u64(55)
            .u32(2)
            .pubkey(key(1))
            .u32(600)
            .u32(packed)
            .pubkey(key(2))
            .u32(400)
            .u32(250)
            .u32(1_000)
            .finish();
        let out = ShapleyOutputStorage::decode(&data).unwrap();
        assert_eq!(out.epoch, 55);
        assert_eq!(out.total_unit_shares, 1_000);

        let blocked = out.rewards[0];
        assert!(blocked.is_blocked());
        // Bit 30 is neither the blocked flag nor part of the rate.
        assert_eq!(blocked.economic_burn_rate(), 1_234);

        let open = out.rewards[1];
        assert!(!open.is_blocked());
        assert_eq!(open.economic_burn_rate(), 250);
    }

    #[test]
    fn empty_reward_list() {
        let data = header().u64(1).u32(0).u32(0).finish();
        let out = ShapleyOutputStorage::decode(&data).unwrap();
        assert!(out.rewards.is_empty());
    }
}
