use lad_wire::fixed::read_nested;
use lad_wire::{Cursor, FixedLayout, Reserved, WireError};

use super::params::SolanaValidatorFeeParameters;

/// Per-epoch distribution state: validator debt collection, contributor
/// reward payout and 2Z burn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Distribution {
    pub dz_epoch: u64,
    pub flags: u64,
    pub community_burn_rate: u32,
    pub bump_seed: u8,
    pub token_2z_pda_bump_seed: u8,
    pub reserved0: Reserved<2>,
    pub solana_validator_fee_parameters: SolanaValidatorFeeParameters,
    pub solana_validator_debt_merkle_root: [u8; 32],
    pub total_solana_validators: u32,
    pub solana_validator_payments_count: u32,
    pub total_solana_validator_debt: u64,
    pub collected_solana_validator_payments: u64,
    pub rewards_merkle_root: [u8; 32],
    pub total_contributors: u32,
    pub distributed_rewards_count: u32,
    pub collected_prepaid_2z_payments: u64,
    pub collected_2z_converted_from_sol: u64,
    pub uncollectible_sol_debt: u64,
    pub processed_solana_validator_debt_start_index: u32,
    pub processed_solana_validator_debt_end_index: u32,
    pub processed_rewards_start_index: u32,
    pub processed_rewards_end_index: u32,
    pub distribute_rewards_relay_lamports: u32,
    pub calculation_allowed_timestamp: u32,
    pub distributed_2z_amount: u64,
    pub burned_2z_amount: u64,
    pub processed_solana_validator_debt_write_off_start_index: u32,
    pub processed_solana_validator_debt_write_off_end_index: u32,
    pub solana_validator_write_off_count: u32,
    pub reserved1: Reserved<20>,
    pub reserved2: Reserved<192>,
}

impl Distribution {
    /// Validator debt still outstanding, floored at zero.
    pub fn outstanding_solana_validator_debt(&self) -> u64 {
        self.total_solana_validator_debt
            .saturating_sub(self.collected_solana_validator_payments)
            .saturating_sub(self.uncollectible_sol_debt)
    }
}

impl FixedLayout for Distribution {
    const SIZE: usize = 448;
    const NAME: &'static str = "Distribution";

    fn read_fields(c: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            dz_epoch: c.read_u64()?,
            flags: c.read_u64()?,
            community_burn_rate: c.read_u32()?,
            bump_seed: c.read_u8()?,
            token_2z_pda_bump_seed: c.read_u8()?,
            reserved0: read_nested(c)?,
            solana_validator_fee_parameters: read_nested(c)?,
            solana_validator_debt_merkle_root: c.read_array()?,
            total_solana_validators: c.read_u32()?,
            solana_validator_payments_count: c.read_u32()?,
            total_solana_validator_debt: c.read_u64()?,
            collected_solana_validator_payments: c.read_u64()?,
            rewards_merkle_root: c.read_array()?,
            total_contributors: c.read_u32()?,
            distributed_rewards_count: c.read_u32()?,
            collected_prepaid_2z_payments: c.read_u64()?,
            collected_2z_converted_from_sol: c.read_u64()?,
            uncollectible_sol_debt: c.read_u64()?,
            processed_solana_validator_debt_start_index: c.read_u32()?,
            processed_solana_validator_debt_end_index: c.read_u32()?,
            processed_rewards_start_index: c.read_u32()?,
            processed_rewards_end_index: c.read_u32()?,
            distribute_rewards_relay_lamports: c.read_u32()?,
            calculation_allowed_timestamp: c.read_u32()?,
            distributed_2z_amount: c.read_u64()?,
            burned_2z_amount: c.read_u64()?,
            processed_solana_validator_debt_write_off_start_index: c.read_u32()?,
            processed_solana_validator_debt_write_off_end_index: c.read_u32()?,
            solana_validator_write_off_count: c.read_u32()?,
            reserved1: read_nested(c)?,
            reserved2: read_nested(c)?,
        })
    }
}

fixed_account!(Distribution);
