#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lad_wire::Cursor;

#[derive(Debug, Arbitrary)]
enum Op {
    U8,
    Bool,
    U16,
    U32,
    U64,
    U128,
    F64,
    Pubkey,
    Ipv4,
    Network,
    String,
    PubkeyVec,
    Bytes(u16),
}

#[derive(Debug, Arbitrary)]
struct Input {
    ops: Vec<Op>,
    data: Vec<u8>,
}

// Fuzz target: arbitrary sequences of strict reads.
//
// Checks that a failed fixed-width read never moves the cursor, and that
// the offset never passes the end of the buffer.
fuzz_target!(|input: Input| {
    let mut c = Cursor::new(&input.data);
    for op in input.ops {
        let before = c.offset();
        let fixed_ok = match op {
            Op::U8 => Some(c.read_u8().is_ok()),
            Op::Bool => Some(c.read_bool().is_ok()),
            Op::U16 => Some(c.read_u16().is_ok()),
            Op::U32 => Some(c.read_u32().is_ok()),
            Op::U64 => Some(c.read_u64().is_ok()),
            Op::U128 => Some(c.read_u128().is_ok()),
            Op::F64 => Some(c.read_f64().is_ok()),
            Op::Pubkey => Some(c.read_pubkey().is_ok()),
            Op::Ipv4 => Some(c.read_ipv4().is_ok()),
            Op::Network => Some(c.read_network_v4().is_ok()),
            Op::Bytes(n) => Some(c.read_bytes(usize::from(n)).is_ok()),
            Op::String => {
                let _ = c.read_string();
                None
            }
            Op::PubkeyVec => {
                let _ = c.read_pubkey_vec();
                None
            }
        };
        if fixed_ok == Some(false) {
            assert_eq!(c.offset(), before);
        }
        assert!(c.offset() <= input.data.len());
        assert_eq!(c.offset() + c.remaining(), input.data.len());
    }
});
