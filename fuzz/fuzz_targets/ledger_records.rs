#![no_main]

use libfuzzer_sys::fuzz_target;
use lad_types::revdist::{ComputedSolanaValidatorDebts, ShapleyOutputStorage};

// Fuzz target: header-prefixed ledger records with strict bodies.
fuzz_target!(|data: &[u8]| {
    let _ = ComputedSolanaValidatorDebts::decode(data);
    let _ = ShapleyOutputStorage::decode(data);
});
