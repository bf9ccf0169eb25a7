#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lad_wire::ZeroDefaultReader;

#[derive(Debug, Arbitrary)]
enum Op {
    U8,
    U16,
    U32,
    U64,
    U128,
    Pubkey,
    Network,
    String,
    PubkeyVec,
}

#[derive(Debug, Arbitrary)]
struct Input {
    ops: Vec<Op>,
    data: Vec<u8>,
}

// Fuzz target: arbitrary sequences of defaulting reads.
//
// Fixed-width reads never fail; when they default, nothing is consumed.
fuzz_target!(|input: Input| {
    let mut r = ZeroDefaultReader::new(&input.data);
    for op in input.ops {
        let before = r.remaining();
        let width = match op {
            Op::U8 => {
                r.read_u8();
                1
            }
            Op::U16 => {
                r.read_u16();
                2
            }
            Op::U32 => {
                r.read_u32();
                4
            }
            Op::U64 => {
                r.read_u64();
                8
            }
            Op::U128 => {
                r.read_u128();
                16
            }
            Op::Pubkey => {
                r.read_pubkey();
                32
            }
            Op::Network => {
                r.read_network_v4();
                5
            }
            Op::String => {
                let _ = r.read_string();
                continue;
            }
            Op::PubkeyVec => {
                let _ = r.read_pubkey_vec();
                continue;
            }
        };
        let expected = if before < width { before } else { before - width };
        assert_eq!(r.remaining(), expected);
    }
});
