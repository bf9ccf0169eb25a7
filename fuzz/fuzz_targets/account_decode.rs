#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: tag-dispatched serviceability decoding.
//
// Catches bugs in:
// - Length prefixes and counts larger than the buffer
// - Interface version dispatch
// - Access pass variant payloads
// - Invalid UTF-8 in strings
fuzz_target!(|data: &[u8]| {
    if let Ok(Some(account)) = lad_types::Account::decode(data) {
        assert_eq!(account.type_tag(), data[0]);
    }
});
