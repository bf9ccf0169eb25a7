use std::net::Ipv4Addr;

use lad_wire::{Pubkey, ZeroDefaultReader};

use crate::enums::MulticastGroupStatus;
use crate::error::TypeError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MulticastGroup {
    pub account_type: u8,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub tenant: Pubkey,
    pub multicast_ip: Ipv4Addr,
    pub max_bandwidth: u64,
    pub status: MulticastGroupStatus,
    pub code: String,
    pub publisher_count: u32,
    pub subscriber_count: u32,
}

impl MulticastGroup {
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
            tenant: r.read_pubkey(),
            multicast_ip: r.read_ipv4(),
            max_bandwidth: r.read_u64(),
            status: MulticastGroupStatus::decode(r.read_u8()),
            code: r.read_string()?,
            publisher_count: r.read_u32(),
            subscriber_count: r.read_u32(),
        })
    }
}
