#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lad_decoder::{decode_batch, BatchConfig};
use lad_types::AccountType;
use lad_wire::Pubkey;

#[derive(Debug, Arbitrary)]
struct Input {
    accounts: Vec<([u8; 32], Vec<u8>)>,
    limit: Option<u16>,
}

// Fuzz target: batch dispatch.
//
// Every input either lands in a bucket, is skipped, or becomes exactly
// one collected error.
fuzz_target!(|input: Input| {
    let config = BatchConfig {
        max_buffer_len: input.limit.map(usize::from),
    };
    let skipped = input
        .accounts
        .iter()
        .filter(|(_, d)| {
            d.first()
                .is_none_or(|&t| matches!(AccountType::from_wire_id(t), AccountType::Unknown(_)))
        })
        .count();
    let total = input.accounts.len();
    let data = decode_batch(
        input.accounts.into_iter().map(|(k, d)| (Pubkey(k), d)),
        &config,
    );
    assert!(data.record_count() + data.errors.len() <= total);
    assert!(data.record_count() + data.errors.len() + skipped >= total);
});
