use lad_wire::fixed::read_nested;
use lad_wire::{Cursor, FixedLayout, Pubkey, Reserved, WireError};

/// SOL a validator has deposited against its fee debt.
///
/// The balance itself is the account's lamports, which live outside the
/// data buffer. Only the written-off debt is recorded here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolanaValidatorDeposit {
    pub node_id: Pubkey,
    pub written_off_sol_debt: u64,
    pub reserved0: Reserved<24>,
    pub reserved1: Reserved<32>,
}

impl FixedLayout for SolanaValidatorDeposit {
    const SIZE: usize = 96;
    const NAME: &'static str = "SolanaValidatorDeposit";

    fn read_fields(c: &mut Cursor<'_>) -> Result<Self, WireError> {
        Ok(Self {
            node_id: c.read_pubkey()?,
            written_off_sol_debt: c.read_u64()?,
            reserved0: read_nested(c)?,
            reserved1: read_nested(c)?,
        })
    }
}

fixed_account!(SolanaValidatorDeposit);
