use lad_wire::{Pubkey, ZeroDefaultReader};

use crate::enums::LocationStatus;
use crate::error::TypeError;

/// A metro or site where devices are installed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    pub account_type: u8,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub lat: f64,
    pub lng: f64,
    pub loc_id: u32,
    pub status: LocationStatus,
    pub code: String,
    pub name: String,
    pub country: String,
    pub reference_count: u32,
}

impl Location {
    /// # Errors
    ///
    /// A truncated or non-UTF-8 string.
    pub fn decode(data: &[u8]) -> Result<Self, TypeError> {
        let mut r = ZeroDefaultReader::new(data);
        Ok(Self {
            account_type: r.read_u8(),
            owner: r.read_pubkey(),
            index: r.read_u128(),
            bump_seed: r.read_u8(),
            lat: r.read_f64(),
            lng: r.read_f64(),
            loc_id: r.read_u32(),
            status: LocationStatus::decode(r.read_u8()),
            code: r.read_string()?,
            name: r.read_string()?,
            country: r.read_string()?,
            reference_count: r.read_u32(),
        })
    }
}
