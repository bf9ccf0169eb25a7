//! Parameter blocks nested inside the revenue-distribution accounts.

use lad_wire::fixed::read_nested;
use lad_wire::{Cursor, FixedLayout, Pubkey, Reserved, WireError};

/// Burn-rate schedule. The `cached_*` fields are the program's own
/// precomputation and are reported as stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommunityBurnRateParameters {
    pub limit: u32,
    pub dz_epochs_to_increasing: u32,
    pub dz_epochs_to_limit: u32,
    pub cached_slope_numerator: u32,
    pub cached_slope_denominator: u32,
    pub cached_next_burn_rate: u32,
}

impl FixedLayout for CommunityBurnRateParameters {
    const SIZE: usize = 24;
    const NAME: &'static str = "CommunityBurnRateParameters";

    fn read_fields(c: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            limit: c.read_u32()?,
            dz_epochs_to_increasing: c.read_u32()?,
            dz_epochs_to_limit: c.read_u32()?,
            cached_slope_numerator: c.read_u32()?,
            cached_slope_denominator: c.read_u32()?,
            cached_next_burn_rate: c.read_u32()?,
        })
    }
}

/// Percentages are basis points (hundredths of a percent).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolanaValidatorFeeParameters {
    pub base_block_rewards_pct: u16,
    pub priority_block_rewards_pct: u16,
    pub inflation_rewards_pct: u16,
    pub jito_tips_pct: u16,
    pub fixed_sol_amount: u32,
    pub reserved0: Reserved<28>,
}

impl FixedLayout for SolanaValidatorFeeParameters {
    const SIZE: usize = 40;
    const NAME: &'static str = "SolanaValidatorFeeParameters";

    fn read_fields(c: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            base_block_rewards_pct: c.read_u16()?,
            priority_block_rewards_pct: c.read_u16()?,
            inflation_rewards_pct: c.read_u16()?,
            jito_tips_pct: c.read_u16()?,
            fixed_sol_amount: c.read_u32()?,
            reserved0: read_nested(c)?,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DistributionParameters {
    pub calculation_grace_period_minutes: u16,
    pub initialization_grace_period_minutes: u16,
    pub minimum_epoch_duration_to_finalize_rewards: u8,
    pub reserved0: Reserved<3>,
    pub community_burn_rate_parameters: CommunityBurnRateParameters,
    pub solana_validator_fee_parameters: SolanaValidatorFeeParameters,
    pub reserved1: Reserved<256>,
}

impl FixedLayout for DistributionParameters {
    const SIZE: usize = 328;
    const NAME: &'static str = "DistributionParameters";

    fn read_fields(c: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            calculation_grace_period_minutes: c.read_u16()?,
            initialization_grace_period_minutes: c.read_u16()?,
            minimum_epoch_duration_to_finalize_rewards: c.read_u8()?,
            reserved0: read_nested(c)?,
            community_burn_rate_parameters: read_nested(c)?,
            solana_validator_fee_parameters: read_nested(c)?,
            reserved1: read_nested(c)?,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelayParameters {
    pub placeholder_lamports: u32,
    pub distribute_rewards_lamports: u32,
    pub reserved0: Reserved<32>,
}

impl FixedLayout for RelayParameters {
    const SIZE: usize = 40;
    const NAME: &'static str = "RelayParameters";

    fn read_fields(c: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            placeholder_lamports: c.read_u32()?,
            distribute_rewards_lamports: c.read_u32()?,
            reserved0: read_nested(c)?,
        })
    }
}

/// One recipient's slice of a contributor's rewards, in basis points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecipientShare {
    pub recipient_key: Pubkey,
    pub share: u16,
}

impl RecipientShare {
    /// An all-zero slot in the fixed share table.
    pub fn is_empty(&self) -> bool {
        self.recipient_key.is_zero() && self.share == 0
    }
}

impl FixedLayout for RecipientShare {
    const SIZE: usize = 34;
    const NAME: &'static str = "RecipientShare";

    fn read_fields(c: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            recipient_key: c.read_pubkey()?,
            share: c.read_u16()?,
        })
    }
}
