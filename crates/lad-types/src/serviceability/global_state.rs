use lad_wire::{Pubkey, ZeroDefaultReader};

use crate::error::TypeError;

/// Program-wide singleton: allowlists, authorities and airdrop amounts.
///
/// Two allowlists that used to sit after `foundation_allowlist` are
/// still on the wire. They are read to keep later offsets right and
/// then dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobalState {
    pub account_type: u8,
    pub bump_seed: u8,
    pub account_index: u128,
    pub foundation_allowlist: Vec<Pubkey>,
    pub activator_authority: Pubkey,
    pub sentinel_authority: Pubkey,
    pub contributor_airdrop_lamports: u64,
    pub user_airdrop_lamports: u64,
    pub health_oracle: Pubkey,
    pub qa_allowlist: Vec<Pubkey>,
    pub feature_flags: u128,
    pub reservation_authority: Pubkey,
}

impl GlobalState {
    /// # Errors
    ///
    /// A truncated allowlist body.
    pub fn decode(data: &[u8]) -> Result<Self, TypeError> {
        let mut r = ZeroDefaultReader::new(data);
        let account_type = r.read_u8();
        let bump_seed = r.read_u8();
        let account_index = r.read_u128();
        let foundation_allowlist = r.read_pubkey_vec()?;
        let _device_allowlist = r.read_pubkey_vec()?;
        let _user_allowlist = r.read_pubkey_vec()?;
        Ok(Self {
            account_type,
            bump_seed,
            account_index,
            foundation_allowlist,
            activator_authority: r.read_pubkey(),
            sentinel_authority: r.read_pubkey(),
            contributor_airdrop_lamports: r.read_u64(),
            user_airdrop_lamports: r.read_u64(),
            health_oracle: r.read_pubkey(),
            qa_allowlist: r.read_pubkey_vec()?,
            feature_flags: r.read_u128(),
            reservation_authority: r.read_pubkey(),
        })
    }
}
