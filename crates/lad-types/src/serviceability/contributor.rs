use lad_wire::{Pubkey, ZeroDefaultReader};

use crate::enums::ContributorStatus;
use crate::error::TypeError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Contributor {
    pub account_type: u8,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub status: ContributorStatus,
    pub code: String,
    pub reference_count: u32,
    pub ops_manager: Pubkey,
}

impl Contributor {
    /// # Errors
    ///
    /// A truncated or non-UTF-8 code.
    pub fn decode(data: &[u8]) -> Result<Self, TypeError> {
        let mut r = ZeroDefaultReader::new(data);
        Ok(Self {
            account_type: r.read_u8(),
            owner: r.read_pubkey(),
            index: r.read_u128(),
            bump_seed: r.read_u8(),
            status: ContributorStatus::decode(r.read_u8()),
            code: r.read_string()?,
            reference_count: r.read_u32(),
            ops_manager: r.read_pubkey(),
        })
    }
}
