use lad_wire::fixed::read_nested;
use lad_wire::{Cursor, FixedLayout, Reserved, WireError};

/// Running balances of the program's SOL/2Z swap journal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Journal {
    pub bump_seed: u8,
    pub token_2z_pda_bump_seed: u8,
    pub reserved0: Reserved<6>,
    pub total_sol_balance: u64,
    pub total_2z_balance: u64,
    pub swap_2z_destination_balance: u64,
    pub swapped_sol_amount: u64,
    pub next_dz_epoch_to_sweep_tokens: u64,
    pub lifetime_swapped_2z_amount: u128,
}

impl FixedLayout for Journal {
    const SIZE: usize = 64;
    const NAME: &'static str = "Journal";

    fn read_fields(c: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            bump_seed: c.read_u8()?,
            token_2z_pda_bump_seed: c.read_u8()?,
            reserved0: read_nested(c)?,
            total_sol_balance: c.read_u64()?,
            total_2z_balance: c.read_u64()?,
            swap_2z_destination_balance: c.read_u64()?,
            swapped_sol_amount: c.read_u64()?,
            next_dz_epoch_to_sweep_tokens: c.read_u64()?,
            lifetime_swapped_2z_amount: c.read_u128()?,
        })
    }
}

fixed_account!(Journal);
