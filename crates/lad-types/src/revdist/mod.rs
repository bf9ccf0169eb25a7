//! Revenue-distribution accounts.
//!
//! On-chain accounts here are fixed-layout and discriminator-prefixed,
//! decoded strictly through [`lad_wire::fixed`]. The two ledger records
//! in [`ledger`] are variable-length and sit behind a record header.

// Wires a record into `FixedAccount` with a lazily computed
// discriminator, and gives it a `decode` returning `TypeError`.
macro_rules! fixed_account {
    ($ty:ident) => {
        impl lad_wire::FixedAccount for $ty {
            fn discriminator() -> lad_wire::Discriminator {
                static DISCRIMINATOR: std::sync::OnceLock<lad_wire::Discriminator> =
                    std::sync::OnceLock::new();
                *DISCRIMINATOR.get_or_init(|| {
                    lad_wire::Discriminator::for_type(<$ty as lad_wire::FixedLayout>::NAME)
                })
            }
        }

        impl $ty {
            /// Decode from a discriminator-prefixed account buffer.
            ///
            /// # Errors
            ///
            /// See [`lad_wire::fixed::decode_fixed`].
            pub fn decode(buf: &[u8]) -> Result<Self, crate::error::TypeError> {
                Ok(lad_wire::fixed::decode_account(buf)?)
            }
        }
    };
}

pub mod contributor_rewards;
pub mod deposit;
pub mod distribution;
pub mod journal;
pub mod ledger;
pub mod params;
pub mod program_config;

pub use contributor_rewards::{ContributorRewards, RECIPIENT_SHARE_SLOTS};
pub use deposit::SolanaValidatorDeposit;
pub use distribution::Distribution;
pub use journal::Journal;
pub use ledger::{
    ComputedSolanaValidatorDebt, ComputedSolanaValidatorDebts, RECORD_HEADER_SIZE, RewardShare,
    ShapleyOutputStorage, strip_record_header,
};
pub use params::{
    CommunityBurnRateParameters, DistributionParameters, RecipientShare, RelayParameters,
    SolanaValidatorFeeParameters,
};
pub use program_config::ProgramConfig;

#[cfg(test)]
pub(crate) fn account_bytes<T: lad_wire::FixedAccount>(body: Vec<u8>) -> Vec<u8> {
    let mut buf = T::discriminator().as_bytes().to_vec();
    assert!(body.len() <= T::SIZE, "test body overruns {}", T::NAME);
    buf.extend_from_slice(&body);
    buf.resize(lad_wire::discriminator::DISCRIMINATOR_SIZE + T::SIZE, 0);
    buf
}
