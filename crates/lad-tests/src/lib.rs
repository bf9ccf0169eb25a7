//! Fixture builder shared by the integration tests, benches and the
//! fixture generator binary.
//!
//! Each fixture is written field by field. Every named write also
//! records the field's name, rendered value and wire type, so a fixture
//! carries its own expected values: tests look them up with
//! [`Fixture::field`], and the generator dumps them as a JSON manifest
//! for other-language decoders to check against.
//!
//! Manifests use the shared parity format: PascalCase field names, keys
//! in base58, vectors as a `<Name>Len` count followed by `<Name>0`,
//! `<Name>1`, ... entries.

#![allow(clippy::pedantic)]

pub mod fixtures;

use std::net::Ipv4Addr;

use lad_wire::discriminator::DISCRIMINATOR_SIZE;
use lad_wire::{Discriminator, FixedAccount, NetworkV4, Pubkey};
use serde_json::{Value, json};

/// One recorded field: name, rendered value and wire type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub typ: &'static str,
}

/// How a fixture's account is framed, which decides its manifest header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Framing {
    /// Serviceability record; the first byte is the account type.
    Tagged { account_type: u8 },
    /// Discriminator-prefixed fixed layout of `struct_size` body bytes.
    Fixed {
        struct_size: usize,
        discriminator: Discriminator,
    },
    /// Ledger record behind a version byte and authority.
    Ledger,
}

/// A named byte buffer plus the field values it was built from.
#[derive(Clone, Debug)]
pub struct Fixture {
    /// File stem, e.g. `global_state`.
    pub name: &'static str,
    /// Record type as it appears in the manifest, e.g. `GlobalState`.
    pub type_name: &'static str,
    pub framing: Framing,
    pub data: Vec<u8>,
    pub fields: Vec<Field>,
}

impl Fixture {
    /// Rendered value of a recorded field.
    ///
    /// # Panics
    ///
    /// If the fixture has no field of that name.
    pub fn field(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
            .unwrap_or_else(|| panic!("fixture {} has no field {name}", self.name))
    }

    pub fn manifest(&self) -> Value {
        let fields: Vec<Value> = self
            .fields
            .iter()
            .map(|f| json!({ "name": f.name, "value": f.value, "typ": f.typ }))
            .collect();
        match self.framing {
            Framing::Tagged { account_type } => json!({
                "name": self.type_name,
                "account_type": account_type,
                "fields": fields,
            }),
            Framing::Fixed {
                struct_size,
                discriminator,
            } => json!({
                "name": self.type_name,
                "struct_size": struct_size,
                "discriminator_hex": hex::encode(discriminator.as_bytes()),
                "fields": fields,
            }),
            Framing::Ledger => json!({
                "name": self.type_name,
                "fields": fields,
            }),
        }
    }
}

/// Little-endian writer that records named fields as it goes.
pub struct FixtureWriter {
    type_name: &'static str,
    framing: Framing,
    buf: Vec<u8>,
    fields: Vec<Field>,
}

impl FixtureWriter {
    /// Start a serviceability record; writes and records `AccountType`.
    pub fn tagged(type_name: &'static str, account_type: u8) -> Self {
        Self {
            type_name,
            framing: Framing::Tagged { account_type },
            buf: Vec::new(),
            fields: Vec::new(),
        }
        .u8("AccountType", account_type)
    }

    /// Start a fixed-layout account: its discriminator, unrecorded.
    pub fn fixed_account<T: FixedAccount>(type_name: &'static str) -> Self {
        let discriminator = T::discriminator();
        Self {
            type_name,
            framing: Framing::Fixed {
                struct_size: T::SIZE,
                discriminator,
            },
            buf: Vec::new(),
            fields: Vec::new(),
        }
        .raw(discriminator.as_bytes())
    }

    /// Start a ledger record: version byte then authority, unrecorded.
    pub fn ledger_record(type_name: &'static str, authority: Pubkey) -> Self {
        Self {
            type_name,
            framing: Framing::Ledger,
            buf: Vec::new(),
            fields: Vec::new(),
        }
        .raw(&[1])
        .raw(authority.as_bytes())
    }

    fn record(mut self, name: &str, value: String, typ: &'static str, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self.fields.push(Field {
            name: name.to_string(),
            value,
            typ,
        });
        self
    }

    /// Bytes with no recorded field: padding, reserved regions, prefixes.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn zeros(self, n: usize) -> Self {
        self.raw(&vec![0; n])
    }

    /// Pad with zeros up to absolute offset `at`.
    pub fn pad_to(mut self, at: usize) -> Self {
        assert!(self.buf.len() <= at, "{} already past offset {at}", self.type_name);
        self.buf.resize(at, 0);
        self
    }

    /// A value computed from the record rather than stored in it.
    pub fn derived(self, name: &str, value: impl ToString, typ: &'static str) -> Self {
        self.record(name, value.to_string(), typ, &[])
    }

    pub fn u8(self, name: &str, v: u8) -> Self {
        self.record(name, v.to_string(), "u8", &[v])
    }

    pub fn bool(self, name: &str, v: bool) -> Self {
        self.record(name, v.to_string(), "bool", &[u8::from(v)])
    }

    pub fn u16(self, name: &str, v: u16) -> Self {
        self.record(name, v.to_string(), "u16", &v.to_le_bytes())
    }

    pub fn u32(self, name: &str, v: u32) -> Self {
        self.record(name, v.to_string(), "u32", &v.to_le_bytes())
    }

    pub fn u64(self, name: &str, v: u64) -> Self {
        self.record(name, v.to_string(), "u64", &v.to_le_bytes())
    }

    /// Little-endian bytes of a `u128` are its low word then its high word.
    pub fn u128(self, name: &str, v: u128) -> Self {
        self.record(name, v.to_string(), "u128", &v.to_le_bytes())
    }

    pub fn f64(self, name: &str, v: f64) -> Self {
        self.record(name, v.to_string(), "f64", &v.to_le_bytes())
    }

    pub fn pubkey(self, name: &str, v: Pubkey) -> Self {
        self.record(name, v.to_string(), "pubkey", v.as_bytes())
    }

    pub fn ipv4(self, name: &str, v: Ipv4Addr) -> Self {
        self.record(name, v.to_string(), "ipv4", &v.octets())
    }

    pub fn network(self, name: &str, v: NetworkV4) -> Self {
        self.record(name, v.to_string(), "networkv4", &v.to_bytes())
    }

    pub fn string(self, name: &str, v: &str) -> Self {
        let mut bytes = wire_len(v.len()).to_le_bytes().to_vec();
        bytes.extend_from_slice(v.as_bytes());
        self.record(name, v.to_string(), "string", &bytes)
    }

    pub fn bytes32(self, name: &str, v: [u8; 32]) -> Self {
        self.record(name, hex::encode(v), "bytes32", &v)
    }

    /// `<name>Len` then one `<name><i>` entry per key.
    pub fn pubkeys(self, name: &str, v: &[Pubkey]) -> Self {
        let w = self.count(name, v.len());
        v.iter()
            .enumerate()
            .fold(w, |w, (i, k)| w.pubkey(&format!("{name}{i}"), *k))
    }

    /// `<name>Len` then one `<name><i>` entry per network.
    pub fn networks(self, name: &str, v: &[NetworkV4]) -> Self {
        let w = self.count(name, v.len());
        v.iter()
            .enumerate()
            .fold(w, |w, (i, n)| w.network(&format!("{name}{i}"), *n))
    }

    /// The `u32` element count of a vector whose elements the caller
    /// writes next, recorded as `<name>Len`.
    pub fn count(self, name: &str, len: usize) -> Self {
        self.u32(&format!("{name}Len"), wire_len(len))
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self, name: &'static str) -> Fixture {
        Fixture {
            name,
            type_name: self.type_name,
            framing: self.framing,
            data: self.buf,
            fields: self.fields,
        }
    }

    /// Finish a fixed-layout account, zero-padding the body to `T::SIZE`.
    pub fn finish_fixed<T: FixedAccount>(self, name: &'static str) -> Fixture {
        self.pad_to(DISCRIMINATOR_SIZE + T::SIZE).finish(name)
    }
}

fn wire_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("fixture length {len} does not fit a u32 prefix"))
}

/// A key whose first byte is `b` and the rest zero.
pub fn pubkey_from_byte(b: u8) -> Pubkey {
    let mut bytes = [0u8; 32];
    bytes[0] = b;
    Pubkey(bytes)
}
