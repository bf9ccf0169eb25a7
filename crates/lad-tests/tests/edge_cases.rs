//! Edge case integration tests across the decoding stack.
//!
//! Categories:
//!
//! - **Truncation**: every prefix of every fixture must decode or fail
//!   cleanly, never panic. Tagged records that end on a field boundary
//!   decode with zero defaults; fixed-layout accounts never do.
//!
//! - **Schema growth**: bytes appended by a newer program version are
//!   ignored by both decoder families.
//!
//! - **Type mismatches**: a fixed-layout account under the wrong
//!   discriminator is rejected whatever its body holds.
//!
//! - **Batches**: one bad record becomes one collected error and the
//!   rest of the batch still decodes.

use insta::assert_snapshot;
use lad_decoder::{BatchConfig, DecodeError, decode_account, decode_batch};
use lad_tests::{FixtureWriter, fixtures, pubkey_from_byte};
use lad_types::revdist::{
    ComputedSolanaValidatorDebts, ContributorRewards, Distribution, Journal, ProgramConfig,
    ShapleyOutputStorage, SolanaValidatorDeposit,
};
use lad_types::serviceability::{Interface, Location};
use lad_types::{Account, TypeError};
use lad_wire::{Cursor, DefaultingCursor, NetworkV4, WireError};

// ── Truncation ────────────────────────────────────────────────────────────────

#[test]
fn every_serviceability_prefix_decodes_or_errors() {
    for fx in fixtures::serviceability() {
        for len in 0..=fx.data.len() {
            let _ = Account::decode(&fx.data[..len]);
        }
    }
}

#[test]
fn tag_byte_alone_decodes_with_defaults() {
    for fx in fixtures::serviceability() {
        let account = Account::decode(&fx.data[..1])
            .unwrap_or_else(|e| panic!("{}: {e}", fx.name))
            .unwrap_or_else(|| panic!("{} skipped", fx.name));
        assert_eq!(account.type_tag(), fx.data[0], "{}", fx.name);
    }
}

#[test]
fn string_body_cut_short_is_an_error() {
    // account_type .. status is 71 bytes, then "ams" behind a length prefix.
    let fx = fixtures::location();
    assert_eq!(&fx.data[71..75], &3u32.to_le_bytes());

    let err = Location::decode(&fx.data[..76]).unwrap_err();
    assert_eq!(
        err,
        TypeError::Wire(WireError::InsufficientData {
            offset: 75,
            needed: 3
        })
    );

    // A missing prefix is a default, not an error.
    let loc = Location::decode(&fx.data[..73]).expect("prefix guard");
    assert_eq!(loc.code, "");
    assert_eq!(loc.loc_id, 1001);
}

#[test]
fn fixed_accounts_reject_every_short_prefix() {
    for fx in fixtures::revdist().into_iter().take(5) {
        for len in 0..fx.data.len() {
            let prefix = &fx.data[..len];
            let failed = match fx.name {
                "revdist_program_config" => ProgramConfig::decode(prefix).is_err(),
                "revdist_distribution" => Distribution::decode(prefix).is_err(),
                "revdist_journal" => Journal::decode(prefix).is_err(),
                "revdist_deposit" => SolanaValidatorDeposit::decode(prefix).is_err(),
                "revdist_contributor_rewards" => ContributorRewards::decode(prefix).is_err(),
                other => panic!("unexpected fixture {other}"),
            };
            assert!(failed, "{} decoded from {len} bytes", fx.name);
        }
    }
}

#[test]
fn one_byte_short_reports_sizes() {
    let fx = fixtures::revdist_journal();
    let err = Journal::decode(&fx.data[..fx.data.len() - 1]).unwrap_err();
    assert_eq!(
        err,
        TypeError::Wire(WireError::AccountTooShort { have: 63, need: 64 })
    );
}

#[test]
fn ledger_record_prefixes() {
    let fx = fixtures::validator_debts_record();
    assert!(matches!(
        ComputedSolanaValidatorDebts::decode(&fx.data[..33]),
        Err(TypeError::RecordTooShort { have: 33, header: 33 })
    ));
    for len in 34..fx.data.len() {
        assert!(
            ComputedSolanaValidatorDebts::decode(&fx.data[..len]).is_err(),
            "decoded from {len} bytes"
        );
    }

    let fx = fixtures::reward_shares_record();
    for len in 0..fx.data.len() {
        assert!(ShapleyOutputStorage::decode(&fx.data[..len]).is_err());
    }
}

// ── Schema growth ─────────────────────────────────────────────────────────────

#[test]
fn trailing_bytes_are_ignored() {
    // The pool bitmap runs to the end of the account, so growth is not
    // trailing there.
    for fx in fixtures::serviceability().into_iter().filter(|fx| fx.data[0] != 12) {
        let mut grown = fx.data.clone();
        grown.extend_from_slice(&[0xA5; 64]);
        assert_eq!(
            Account::decode(&grown).expect("decode"),
            Account::decode(&fx.data).expect("decode"),
            "{}",
            fx.name
        );
    }

    let fx = fixtures::revdist_distribution();
    let mut grown = fx.data.clone();
    grown.extend_from_slice(&[0xFF; 128]);
    assert_eq!(
        Distribution::decode(&grown).expect("decode"),
        Distribution::decode(&fx.data).expect("decode"),
    );
}

#[test]
fn unsupported_interface_version_stops_nothing() {
    // A device whose single interface carries a future version tag. Only
    // the tag is consumed, so the trailing counters read the bytes that
    // follow it.
    let data = FixtureWriter::tagged("Device", 5)
        .zeros(32 + 16 + 1 + 32 + 32 + 1 + 4 + 1)
        .string("Code", "x")
        .count("DzPrefixes", 0)
        .zeros(64)
        .string("MgmtVrf", "")
        .count("Interfaces", 1)
        .u8("Interface0Version", 9)
        .u32("ReferenceCount", 77)
        .finish("future_interface")
        .data;

    let Some(Account::Device(dev)) = Account::decode(&data).expect("decode") else {
        panic!("not a device");
    };
    assert_eq!(dev.interfaces, vec![Interface::Unsupported { version: 9 }]);
    assert_eq!(dev.reference_count, 77);
    assert_eq!(dev.max_users, 0);
}

// ── Type mismatches ───────────────────────────────────────────────────────────

#[test]
fn wrong_discriminator_is_rejected() {
    let journal = fixtures::revdist_journal();
    assert!(matches!(
        SolanaValidatorDeposit::decode(&journal.data),
        Err(TypeError::Wire(WireError::InvalidDiscriminator { .. }))
    ));

    // Zero-filled body of the right size does not help.
    let mut forged = journal.data[..8].to_vec();
    forged.resize(8 + 600, 0);
    assert!(matches!(
        ProgramConfig::decode(&forged),
        Err(TypeError::Wire(WireError::InvalidDiscriminator { .. }))
    ));
}

// ── Cursor modes ──────────────────────────────────────────────────────────────

#[test]
fn strict_and_defaulting_disagree_only_on_missing_data() {
    let buf = [0x01, 0x02, 0x03];

    let mut strict = Cursor::new(&buf);
    assert!(strict.read_u32().is_err());
    assert_eq!(strict.offset(), 0);
    assert_eq!(strict.read_u16().unwrap(), 0x0201);

    let mut lenient = DefaultingCursor::new(&buf);
    assert_eq!(lenient.read_u32_or(7), 7);
    assert_eq!(lenient.offset(), 0);
    assert_eq!(lenient.read_u16_or(7), 0x0201);
    assert_eq!(lenient.read_u16_or(7), 7);
    assert_eq!(lenient.read_u8_or(7), 3);
}

#[test]
fn u128_halves() {
    let mut buf = u64::MAX.to_le_bytes().to_vec();
    buf.extend_from_slice(&1u64.to_le_bytes());
    assert_eq!(Cursor::new(&buf).read_u128().unwrap(), (1u128 << 64) | u128::from(u64::MAX));

    // Fifteen bytes is not enough for either mode.
    assert!(Cursor::new(&buf[..15]).read_u128().is_err());
    assert_eq!(DefaultingCursor::new(&buf[..15]).read_u128_or(5), 5);
}

// ── Batches ───────────────────────────────────────────────────────────────────

#[test]
fn truncated_record_is_collected_not_fatal() {
    let location = fixtures::location();
    let accounts = vec![
        (pubkey_from_byte(1), location.data[..76].to_vec()),
        (pubkey_from_byte(2), location.data.clone()),
        (pubkey_from_byte(3), Vec::new()),
        (pubkey_from_byte(4), vec![14, 0, 0]),
        (pubkey_from_byte(5), vec![200]),
        (pubkey_from_byte(6), fixtures::tenant().data),
    ];
    let data = decode_batch(accounts, &BatchConfig::default());

    assert_eq!(data.locations.len(), 1);
    assert_eq!(data.locations[0].0, pubkey_from_byte(2));
    assert_eq!(data.tenants.len(), 1);
    assert_eq!(data.errors.len(), 1);
    assert_snapshot!(
        data.errors[0].to_string(),
        @"failed to parse Location account 4uQeVj5tqViQh7yWWGStvkEG1Zmhx6uasJtWCJziofM (76 bytes): insufficient data at offset 75: needed 3 bytes"
    );
}

#[test]
fn buffer_limit_applies_per_account() {
    let device = fixtures::device();
    let config = BatchConfig::with_max_buffer_len(device.data.len() - 1);

    assert_eq!(
        decode_account(&device.data, &config).unwrap_err(),
        DecodeError::BufferTooLarge {
            len: device.data.len(),
            limit: device.data.len() - 1
        }
    );
    assert!(decode_account(&fixtures::contributor().data, &config).is_ok());

    let data = decode_batch([(pubkey_from_byte(9), device.data)], &config);
    assert_eq!(data.errors.len(), 1);
    assert_eq!(data.errors[0].type_tag, 5);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_batch_matches_sequential() {
    let accounts: Vec<_> = fixtures::serviceability()
        .into_iter()
        .enumerate()
        .map(|(i, fx)| {
            let mut data = fx.data;
            if i % 3 == 0 {
                data.truncate(data.len() / 2);
            }
            (pubkey_from_byte(u8::try_from(i).unwrap()), data)
        })
        .collect();
    let config = BatchConfig::default();
    assert_eq!(
        lad_decoder::decode_batch_parallel(&accounts, &config),
        decode_batch(accounts.clone(), &config)
    );
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[test]
fn network_rendering() {
    let net = |raw: [u8; 5]| NetworkV4::from_bytes(raw).to_string();
    assert_snapshot!(net([10, 0, 0, 0, 8]), @"10.0.0.0/8");
    assert_snapshot!(net([10, 0, 0, 0, 0]), @"");
    assert_snapshot!(net([10, 0, 0, 0, 33]), @"");
}
