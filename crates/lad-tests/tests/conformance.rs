//! Conformance tests: every catalogued fixture decoded and checked against
//! the field values it was written from.
//!
//! Fixtures come from [`lad_tests::fixtures`], the same catalogue the
//! `generate_fixtures` binary exports for other-language decoders. A
//! failure here means either the fixture writer or a decoder drifted from
//! the on-chain layout.
//!
//! The final tests pin the human-readable rendering of a few decoded
//! records with inline insta snapshots.

use std::fmt::Display;

use insta::assert_snapshot;
use lad_decoder::{BatchConfig, decode_batch};
use lad_tests::{Fixture, fixtures, pubkey_from_byte};
use lad_types::Account;
use lad_types::revdist::{
    ComputedSolanaValidatorDebts, ContributorRewards, Distribution, Journal, ProgramConfig,
    ShapleyOutputStorage, SolanaValidatorDeposit,
};
use lad_types::serviceability::{AccessPassKind, Allocator, Interface};
use lad_wire::{FixedAccount, FixedLayout};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[track_caller]
fn check(fx: &Fixture, name: &str, got: impl Display) {
    assert_eq!(got.to_string(), fx.field(name), "{}: field {name}", fx.name);
}

fn account(fx: &Fixture) -> Account {
    Account::decode(&fx.data)
        .unwrap_or_else(|e| panic!("{} failed to decode: {e}", fx.name))
        .unwrap_or_else(|| panic!("{} was skipped", fx.name))
}

macro_rules! expect_variant {
    ($fx:expr, $variant:ident) => {
        match account(&$fx) {
            Account::$variant(r) => r,
            other => panic!("{} decoded as {:?}", $fx.name, other.account_type()),
        }
    };
}

// ── Serviceability ────────────────────────────────────────────────────────────

#[test]
fn global_state() {
    let fx = fixtures::global_state();
    let gs = expect_variant!(fx, GlobalState);
    check(&fx, "AccountIndex", gs.account_index);
    check(&fx, "FoundationAllowlistLen", gs.foundation_allowlist.len());
    check(&fx, "ActivatorAuthorityPk", gs.activator_authority);
    check(&fx, "SentinelAuthorityPk", gs.sentinel_authority);
    check(&fx, "ContributorAirdropLamports", gs.contributor_airdrop_lamports);
    check(&fx, "UserAirdropLamports", gs.user_airdrop_lamports);
    check(&fx, "HealthOraclePk", gs.health_oracle);
    check(&fx, "QaAllowlistLen", gs.qa_allowlist.len());
    check(&fx, "FeatureFlags", gs.feature_flags);
    check(&fx, "ReservationAuthorityPk", gs.reservation_authority);
}

#[test]
fn global_config() {
    let fx = fixtures::global_config();
    let gc = expect_variant!(fx, GlobalConfig);
    check(&fx, "Owner", gc.owner);
    check(&fx, "LocalAsn", gc.local_asn);
    check(&fx, "RemoteAsn", gc.remote_asn);
    check(&fx, "DeviceTunnelBlock", gc.device_tunnel_block);
    check(&fx, "UserTunnelBlock", gc.user_tunnel_block);
    check(&fx, "MulticastGroupBlock", gc.multicast_group_block);
    check(&fx, "NextBgpCommunity", gc.next_bgp_community);
    check(&fx, "MulticastPublisherBlock", gc.multicast_publisher_block);
}

#[test]
fn location() {
    let fx = fixtures::location();
    let loc = expect_variant!(fx, Location);
    check(&fx, "Index", loc.index);
    check(&fx, "Lat", loc.lat);
    check(&fx, "Lng", loc.lng);
    check(&fx, "LocId", loc.loc_id);
    check(&fx, "Status", loc.status.to_wire_byte());
    check(&fx, "Code", &loc.code);
    check(&fx, "Name", &loc.name);
    check(&fx, "Country", &loc.country);
    check(&fx, "ReferenceCount", loc.reference_count);
}

#[test]
fn exchange() {
    let fx = fixtures::exchange();
    let ex = expect_variant!(fx, Exchange);
    check(&fx, "Lat", ex.lat);
    check(&fx, "Lng", ex.lng);
    check(&fx, "BgpCommunity", ex.bgp_community);
    check(&fx, "Code", &ex.code);
    check(&fx, "Name", &ex.name);
    check(&fx, "Device1Pk", ex.device1);
    check(&fx, "Device2Pk", ex.device2);
}

#[test]
fn device_with_mixed_interface_versions() {
    let fx = fixtures::device();
    let dev = expect_variant!(fx, Device);
    check(&fx, "LocationPk", dev.location);
    check(&fx, "ExchangePk", dev.exchange);
    check(&fx, "PublicIp", dev.public_ip);
    check(&fx, "Code", &dev.code);
    check(&fx, "DzPrefixesLen", dev.dz_prefixes.len());
    check(&fx, "MgmtVrf", &dev.mgmt_vrf);
    check(&fx, "InterfacesLen", dev.interfaces.len());

    let Interface::V1(lo) = &dev.interfaces[0] else {
        panic!("interface 0 is {:?}", dev.interfaces[0]);
    };
    check(&fx, "Interface0Name", &lo.name);
    check(&fx, "Interface0IpNet", lo.ip_net);
    check(&fx, "Interface0NodeSegmentIdx", lo.node_segment_idx);

    let Interface::V2(eth) = &dev.interfaces[1] else {
        panic!("interface 1 is {:?}", dev.interfaces[1]);
    };
    check(&fx, "Interface1Name", &eth.name);
    check(&fx, "Interface1Bandwidth", eth.bandwidth);
    check(&fx, "Interface1Cir", eth.cir);
    check(&fx, "Interface1Mtu", eth.mtu);
    check(&fx, "Interface1VlanId", eth.vlan_id);
    check(&fx, "Interface1IpNet", eth.ip_net);
    check(&fx, "Interface1UserTunnelEndpoint", eth.user_tunnel_endpoint);

    check(&fx, "ReferenceCount", dev.reference_count);
    check(&fx, "MaxUsers", dev.max_users);
    check(&fx, "DeviceHealth", dev.device_health.to_wire_byte());
    check(&fx, "MaxMulticastUsers", dev.max_multicast_users);
    check(&fx, "ReservedSeats", dev.reserved_seats);
}

#[test]
fn link() {
    let fx = fixtures::link();
    let link = expect_variant!(fx, Link);
    check(&fx, "SideAPk", link.side_a);
    check(&fx, "SideZPk", link.side_z);
    check(&fx, "Bandwidth", link.bandwidth);
    check(&fx, "DelayNs", link.delay_ns);
    check(&fx, "TunnelNet", link.tunnel_net);
    check(&fx, "Code", &link.code);
    check(&fx, "SideZIfaceName", &link.side_z_iface_name);
    check(&fx, "LinkHealth", link.link_health.to_wire_byte());
    assert_eq!(link.effective_delay_ns(), link.delay_ns);
}

#[test]
fn user() {
    let fx = fixtures::user();
    let user = expect_variant!(fx, User);
    check(&fx, "TenantPk", user.tenant);
    check(&fx, "ClientIp", user.client_ip);
    check(&fx, "DzIp", user.dz_ip);
    check(&fx, "TunnelNet", user.tunnel_net);
    check(&fx, "SubscribersLen", user.subscribers.len());
    check(&fx, "ValidatorPubkey", user.validator);
    assert!(user.is_multicast());
}

#[test]
fn multicast_group() {
    let fx = fixtures::multicast_group();
    let mg = expect_variant!(fx, MulticastGroup);
    check(&fx, "MulticastIp", mg.multicast_ip);
    check(&fx, "MaxBandwidth", mg.max_bandwidth);
    check(&fx, "Code", &mg.code);
    check(&fx, "SubscriberCount", mg.subscriber_count);
}

#[test]
fn program_config() {
    let fx = fixtures::program_config();
    let pc = expect_variant!(fx, ProgramConfig);
    check(&fx, "VersionMinor", pc.version.minor);
    check(&fx, "VersionPatch", pc.version.patch);
    check(&fx, "MinCompatibleVersionMinor", pc.min_compat_version.minor);
    assert!(pc.is_compatible(pc.version));
}

#[test]
fn contributor() {
    let fx = fixtures::contributor();
    let co = expect_variant!(fx, Contributor);
    check(&fx, "Code", &co.code);
    check(&fx, "ReferenceCount", co.reference_count);
    check(&fx, "OpsManagerPk", co.ops_manager);
}

#[test]
fn access_pass_variants() {
    let fx = fixtures::access_pass_prepaid();
    let ap = expect_variant!(fx, AccessPass);
    assert_eq!(ap.kind, AccessPassKind::Prepaid);
    check(&fx, "ClientIp", ap.client_ip);
    check(&fx, "UserPayer", ap.user_payer);
    check(&fx, "MgroupSubAllowlistLen", ap.mgroup_sub_allowlist.len());
    check(&fx, "Flags", ap.flags);
    assert!(ap.is_unlimited());

    let fx = fixtures::access_pass_validator();
    let ap = expect_variant!(fx, AccessPass);
    check(&fx, "AccessPassTypeValidatorPubkey", ap.kind.pubkey().expect("validator key"));
    check(&fx, "UserPayer", ap.user_payer);

    let fx = fixtures::access_pass_others();
    let ap = expect_variant!(fx, AccessPass);
    let AccessPassKind::Others { type_name, key } = &ap.kind else {
        panic!("kind is {:?}", ap.kind);
    };
    check(&fx, "AccessPassTypeOthersName", type_name);
    check(&fx, "AccessPassTypeOthersKey", key);
    check(&fx, "ClientIp", ap.client_ip);
}

#[test]
fn tenant() {
    let fx = fixtures::tenant();
    let t = expect_variant!(fx, Tenant);
    check(&fx, "Code", &t.code);
    check(&fx, "VrfId", t.vrf_id);
    check(&fx, "AdministratorsLen", t.administrators.len());
    check(&fx, "TokenAccount", t.token_account);
    check(&fx, "MetroRouting", t.metro_routing);
    check(&fx, "RouteLiveness", t.route_liveness);
    check(&fx, "BillingRate", t.billing_rate);
    check(&fx, "BillingLastDeductionEpoch", t.billing_last_deduction_epoch);
}

#[test]
fn resource_extension_id_range() {
    let fx = fixtures::resource_extension_id();
    let ext = expect_variant!(fx, ResourceExtension);
    check(&fx, "Owner", ext.owner);
    check(&fx, "AssociatedWith", ext.associated_with);
    check(&fx, "AllocatorType", ext.allocator.tag());
    let Allocator::Id(id) = ext.allocator else {
        panic!("allocator is {:?}", ext.allocator);
    };
    check(&fx, "RangeStart", id.range_start);
    check(&fx, "RangeEnd", id.range_end);
    check(&fx, "FirstFreeIndex", id.first_free_index);
    check(&fx, "TotalCapacity", ext.total_capacity());
    check(&fx, "AllocatedCount", ext.allocated_count());
    check(&fx, "AvailableCount", ext.available_count());
}

#[test]
fn resource_extension_ip_block() {
    let fx = fixtures::resource_extension_ip();
    let ext = expect_variant!(fx, ResourceExtension);
    check(&fx, "BumpSeed", ext.bump_seed);
    check(&fx, "AllocatorType", ext.allocator.tag());
    let Allocator::Ip(ip) = ext.allocator else {
        panic!("allocator is {:?}", ext.allocator);
    };
    check(&fx, "BaseNet", ip.base_net);
    check(&fx, "FirstFreeIndex", ip.first_free_index);
    check(&fx, "TotalCapacity", ext.total_capacity());
    check(&fx, "AllocatedCount", ext.allocated_count());
    check(&fx, "AvailableCount", ext.available_count());
    assert_eq!(ext.bitmap.len(), 32);
}

#[test]
fn whole_catalogue_decodes_as_one_batch() {
    let accounts = fixtures::serviceability()
        .into_iter()
        .enumerate()
        .map(|(i, fx)| (pubkey_from_byte(u8::try_from(i).unwrap()), fx.data));
    let data = decode_batch(accounts, &BatchConfig::default());

    assert!(data.errors.is_empty(), "{:?}", data.errors);
    assert_eq!(data.record_count(), fixtures::serviceability().len());
    assert_eq!(data.access_passes.len(), 3);
    assert_eq!(data.resource_extensions.len(), 2);
    assert_eq!(data.devices[0].0, pubkey_from_byte(4));
}

// ── Revenue distribution ──────────────────────────────────────────────────────

#[test]
fn revdist_program_config() {
    let fx = fixtures::revdist_program_config();
    let pc = ProgramConfig::decode(&fx.data).expect("decode");
    check(&fx, "NextCompletedDZEpoch", pc.next_completed_dz_epoch);
    check(&fx, "WithdrawSOLAuthorityBumpSeed", pc.withdraw_sol_authority_bump_seed);
    check(&fx, "DebtAccountantKey", pc.debt_accountant_key);
    check(&fx, "RewardsAccountantKey", pc.rewards_accountant_key);
    check(&fx, "SOL2ZSwapProgramID", pc.sol_2z_swap_program_id);
    check(
        &fx,
        "BurnRateLimit",
        pc.distribution_parameters.community_burn_rate_parameters.limit,
    );
    check(
        &fx,
        "BaseBlockRewardsPct",
        pc.distribution_parameters
            .solana_validator_fee_parameters
            .base_block_rewards_pct,
    );
    check(
        &fx,
        "DistributeRewardsLamports",
        pc.relay_parameters.distribute_rewards_lamports,
    );
    check(&fx, "DebtWriteOffFeatureActivationEpoch", pc.debt_write_off_feature_activation_epoch);
    check(&fx, "Flags", pc.flags);
}

#[test]
fn revdist_distribution() {
    let fx = fixtures::revdist_distribution();
    let d = Distribution::decode(&fx.data).expect("decode");
    check(&fx, "DZEpoch", d.dz_epoch);
    check(&fx, "CommunityBurnRate", d.community_burn_rate);
    check(&fx, "SolanaValidatorDebtMerkleRoot", hex::encode(d.solana_validator_debt_merkle_root));
    check(&fx, "TotalSolanaValidatorDebt", d.total_solana_validator_debt);
    check(&fx, "RewardsMerkleRoot", hex::encode(d.rewards_merkle_root));
    check(&fx, "UncollectibleSOLDebt", d.uncollectible_sol_debt);
}

#[test]
fn revdist_journal_u128_spans_both_halves() {
    let fx = fixtures::revdist_journal();
    let j = Journal::decode(&fx.data).expect("decode");
    check(&fx, "TotalSOLBalance", j.total_sol_balance);
    check(&fx, "NextDZEpochToSweepTokens", j.next_dz_epoch_to_sweep_tokens);
    check(&fx, "LifetimeSwapped2ZAmount", j.lifetime_swapped_2z_amount);
    assert_eq!(j.lifetime_swapped_2z_amount >> 64, 1);
}

#[test]
fn revdist_deposit() {
    let fx = fixtures::revdist_deposit();
    let dep = SolanaValidatorDeposit::decode(&fx.data).expect("decode");
    check(&fx, "NodeID", dep.node_id);
    check(&fx, "WrittenOffSOLDebt", dep.written_off_sol_debt);
}

#[test]
fn revdist_contributor_rewards() {
    let fx = fixtures::revdist_contributor_rewards();
    let cr = ContributorRewards::decode(&fx.data).expect("decode");
    check(&fx, "ServiceKey", cr.service_key);
    check(&fx, "RecipientShares0RecipientKey", cr.recipient_shares[0].recipient_key);
    check(&fx, "RecipientShares1Share", cr.recipient_shares[1].share);
    assert_eq!(cr.active_shares().count(), 2);
}

#[test]
fn ledger_records() {
    let fx = fixtures::validator_debts_record();
    let debts = ComputedSolanaValidatorDebts::decode(&fx.data).expect("decode");
    check(&fx, "FirstSolanaEpoch", debts.first_solana_epoch);
    check(&fx, "DebtsLen", debts.debts.len());
    check(&fx, "Debts1NodeID", debts.debts[1].node_id);
    assert_eq!(debts.total(), 12_500);

    let fx = fixtures::reward_shares_record();
    let shapley = ShapleyOutputStorage::decode(&fx.data).expect("decode");
    check(&fx, "Epoch", shapley.epoch);
    check(&fx, "Rewards0UnitShare", shapley.rewards[0].unit_share);
    check(&fx, "TotalUnitShares", shapley.total_unit_shares);
    assert!(shapley.rewards[0].is_blocked());
    assert_eq!(shapley.rewards[0].economic_burn_rate(), 1_000);
    assert!(!shapley.rewards[1].is_blocked());
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[test]
fn device_interfaces_render() {
    let dev = expect_variant!(fixtures::device(), Device);
    let lines: Vec<String> = dev
        .interfaces
        .iter()
        .map(|i| {
            format!(
                "tag {} {} {} {}",
                i.version(),
                i.name().unwrap_or("-"),
                i.status().map_or("-".to_string(), |s| s.to_string()),
                i.ip_net().map_or(String::new(), |n| n.to_string()),
            )
        })
        .collect();
    assert_snapshot!(lines.join("\n"), @r"
    tag 0 Loopback255 activated 172.16.0.1/32
    tag 1 Ethernet1/1 activated 10.1.2.3/31
    ");
}

#[test]
fn manifest_headers_follow_framing() {
    let tagged = fixtures::tenant().manifest();
    assert_eq!(tagged["name"], "Tenant");
    assert_eq!(tagged["account_type"], 13);
    assert_eq!(tagged["fields"][1]["name"], "Owner");
    assert_eq!(
        tagged["fields"][1]["value"],
        "4uQeVj5tqViQh7yWWGStvkEG1Zmhx6uasJtWCJziofM"
    );

    let fixed = fixtures::revdist_journal().manifest();
    assert_eq!(fixed["name"], "Journal");
    assert_eq!(fixed["struct_size"], Journal::SIZE);
    assert_eq!(fixed["discriminator_hex"], hex::encode(Journal::discriminator().as_bytes()));
    assert!(fixed.get("account_type").is_none());

    let ledger = fixtures::reward_shares_record().manifest();
    assert_eq!(ledger["name"], "ShapleyOutputStorage");
    assert_eq!(ledger["fields"][1]["name"], "RewardsLen");
}

#[test]
fn manifest_renders_field_table() {
    let fx = fixtures::program_config();
    let manifest = serde_json::to_string(&fx.manifest()["fields"][2]).expect("json");
    assert_snapshot!(manifest, @r#"{"name":"VersionMajor","typ":"u32","value":"0"}"#);
}
