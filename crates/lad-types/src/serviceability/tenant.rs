use lad_wire::{Pubkey, ZeroDefaultReader};

use crate::enums::TenantPaymentStatus;
use crate::error::TypeError;

/// A tenant: a VRF with its administrators and billing state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tenant {
    pub account_type: u8,
    pub owner: Pubkey,
    pub bump_seed: u8,
    pub code: String,
    pub vrf_id: u16,
    pub reference_count: u32,
    pub administrators: Vec<Pubkey>,
    pub payment_status: TenantPaymentStatus,
    pub token_account: Pubkey,
    pub metro_routing: bool,
    pub route_liveness: bool,
    pub billing_discriminant: u8,
    pub billing_rate: u64,
    pub billing_last_deduction_epoch: u64,
}

impl Tenant {
    /// # Errors
    ///
    /// A truncated code or administrator list.
    pub fn decode(data: &[u8]) -> Result<Self, TypeError> {
        let mut r = ZeroDefaultReader::new(data);
        Ok(Self {
            account_type: r.read_u8(),
            owner: r.read_pubkey(),
            bump_seed: r.read_u8(),
            code: r.read_string()?,
            vrf_id: r.read_u16(),
            reference_count: r.read_u32(),
            administrators: r.read_pubkey_vec()?,
            payment_status: TenantPaymentStatus::decode(r.read_u8()),
            token_account: r.read_pubkey(),
            metro_routing: r.read_bool(),
            route_liveness: r.read_bool(),
            billing_discriminant: r.read_u8(),
            billing_rate: r.read_u64(),
            billing_last_deduction_epoch: r.read_u64(),
        })
    }
}
