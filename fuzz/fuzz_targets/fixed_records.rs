#![no_main]

use libfuzzer_sys::fuzz_target;
use lad_types::revdist::{
    ContributorRewards, Distribution, Journal, ProgramConfig, SolanaValidatorDeposit,
};
use lad_wire::FixedAccount;

fn check<T: FixedAccount>(data: &[u8], decode: fn(&[u8]) -> bool) {
    // Prefix the input with the right discriminator so the fuzzer reaches
    // the body, and also try it raw.
    let mut framed = T::discriminator().as_bytes().to_vec();
    framed.extend_from_slice(data);
    let ok = decode(&framed);
    assert_eq!(ok, data.len() >= T::SIZE);
    let _ = decode(data);
}

// Fuzz target: discriminator-prefixed fixed-layout accounts.
//
// A body decodes exactly when it is at least the declared size.
fuzz_target!(|data: &[u8]| {
    check::<ProgramConfig>(data, |b| ProgramConfig::decode(b).is_ok());
    check::<Distribution>(data, |b| Distribution::decode(b).is_ok());
    check::<Journal>(data, |b| Journal::decode(b).is_ok());
    check::<SolanaValidatorDeposit>(data, |b| SolanaValidatorDeposit::decode(b).is_ok());
    check::<ContributorRewards>(data, |b| ContributorRewards::decode(b).is_ok());
});
