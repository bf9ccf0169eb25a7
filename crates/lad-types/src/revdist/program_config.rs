use lad_wire::fixed::read_nested;
use lad_wire::{Cursor, FixedLayout, Pubkey, Reserved, WireError};

use super::params::{DistributionParameters, RelayParameters};

/// Singleton configuration of the revenue-distribution program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramConfig {
    pub flags: u64,
    pub next_completed_dz_epoch: u64,
    pub bump_seed: u8,
    pub reserve_2z_bump_seed: u8,
    pub swap_authority_bump_seed: u8,
    pub swap_destination_2z_bump_seed: u8,
    pub withdraw_sol_authority_bump_seed: u8,
    pub reserved0: Reserved<3>,
    pub admin_key: Pubkey,
    pub debt_accountant_key: Pubkey,
    pub rewards_accountant_key: Pubkey,
    pub contributor_manager_key: Pubkey,
    pub placeholder_key: Pubkey,
    pub sol_2z_swap_program_id: Pubkey,
    pub distribution_parameters: DistributionParameters,
    pub relay_parameters: RelayParameters,
    pub last_initialized_distribution_timestamp: u32,
    pub reserved1: Reserved<4>,
    pub debt_write_off_feature_activation_epoch: u64,
}

impl FixedLayout for ProgramConfig {
    const SIZE: usize = 600;
    const NAME: &'static str = "ProgramConfig";

    fn read_fields(c: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            flags: c.read_u64()?,
            next_completed_dz_epoch: c.read_u64()?,
            bump_seed: c.read_u8()?,
            reserve_2z_bump_seed: c.read_u8()?,
            swap_authority_bump_seed: c.read_u8()?,
            swap_destination_2z_bump_seed: c.read_u8()?,
            withdraw_sol_authority_bump_seed: c.read_u8()?,
            reserved0: read_nested(c)?,
            admin_key: c.read_pubkey()?,
            debt_accountant_key: c.read_pubkey()?,
            rewards_accountant_key: c.read_pubkey()?,
            contributor_manager_key: c.read_pubkey()?,
            placeholder_key: c.read_pubkey()?,
            sol_2z_swap_program_id: c.read_pubkey()?,
            distribution_parameters: read_nested(c)?,
            relay_parameters: read_nested(c)?,
            last_initialized_distribution_timestamp: c.read_u32()?,
            reserved1: read_nested(c)?,
            debt_write_off_feature_activation_epoch: c.read_u64()?,
        })
    }
}

fixed_account!(ProgramConfig);
