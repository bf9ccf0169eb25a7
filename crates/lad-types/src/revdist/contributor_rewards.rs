use lad_wire::fixed::read_nested;
use lad_wire::{Cursor, FixedLayout, Pubkey, Reserved, WireError};

use super::params::RecipientShare;

/// Fixed number of recipient slots in a rewards account.
pub const RECIPIENT_SHARE_SLOTS: usize = 8;

/// How a contributor's rewards are split among recipients.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContributorRewards {
    pub rewards_manager_key: Pubkey,
    pub service_key: Pubkey,
    pub flags: u64,
    pub recipient_shares: [RecipientShare; RECIPIENT_SHARE_SLOTS],
    pub reserved0: Reserved<256>,
}

impl ContributorRewards {
    /// Occupied slots only.
    pub fn active_shares(&self) -> impl Iterator<Item = &RecipientShare> {
        self.recipient_shares.iter().filter(|s| !s.is_empty())
    }
}

impl FixedLayout for ContributorRewards {
    const SIZE: usize = 600;
    const NAME: &'static str = "ContributorRewards";

    fn read_fields(c: &mut Cursor<'_>) -> Result<Self, WireError> {
        let rewards_manager_key = c.read_pubkey()?;
        let service_key = c.read_pubkey()?;
        let flags = c.read_u64()?;
        let mut recipient_shares = [RecipientShare::default(); RECIPIENT_SHARE_SLOTS];
        for slot in &mut recipient_shares {
            *slot = read_nested(c)?;
        }
        Ok(Self {
            rewards_manager_key,
            service_key,
            flags,
            recipient_shares,
            reserved0: read_nested(c)?,
        })
    }
}

fixed_account!(ContributorRewards);
