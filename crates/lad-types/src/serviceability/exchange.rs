use lad_wire::{Pubkey, Reserved, ZeroDefaultReader};

use crate::enums::ExchangeStatus;
use crate::error::TypeError;

/// An exchange groups devices in one metro and anchors BGP communities.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Exchange {
    pub account_type: u8,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub lat: f64,
    pub lng: f64,
    pub bgp_community: u16,
    pub reserved: Reserved<2>,
    pub status: ExchangeStatus,
    pub code: String,
    pub name: String,
    pub reference_count: u32,
    pub device1: Pubkey,
    pub device2: Pubkey,
}

impl Exchange {
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
            bgp_community: r.read_u16(),
            reserved: Reserved::from_bytes(r.read_array()),
            status: ExchangeStatus::decode(r.read_u8()),
            code: r.read_string()?,
            name: r.read_string()?,
            reference_count: r.read_u32(),
            device1: r.read_pubkey(),
            device2: r.read_pubkey(),
        })
    }
}
