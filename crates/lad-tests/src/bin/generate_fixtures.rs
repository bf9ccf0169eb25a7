//! Fixture generator for cross-language decoder parity.
//!
//! Writes every fixture in [`lad_tests::fixtures::all`] as three files:
//! the raw account bytes, the same bytes hex-encoded, and a JSON manifest
//! of the field values the bytes were built from. A decoder in another
//! language passes when it reads each `.bin` and reproduces its manifest.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_fixtures -p lad-tests -- --out target/fixtures
//! cargo run --bin generate_fixtures -p lad-tests -- --only device
//! ```
//!
//! # Output layout
//!
//! | File              | Contents                                            |
//! |-------------------|-----------------------------------------------------|
//! | `<name>.bin`      | Account data exactly as stored on chain             |
//! | `<name>.hex`      | Lowercase hex of the same bytes                     |
//! | `<name>.json`     | Type name, framing header and recorded field values |
//! | `index.json`      | Names of every fixture written                      |
//!
//! The framing header is `account_type` for serviceability records and
//! `struct_size` plus `discriminator_hex` for fixed-layout accounts.

#![allow(clippy::pedantic)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use lad_tests::{Fixture, fixtures};

#[derive(Parser)]
#[command(name = "generate_fixtures", about = "Write account decoding fixtures")]
struct Args {
    /// Output directory. Created if missing.
    #[arg(short, long, default_value = "fixtures")]
    out: PathBuf,

    /// Only write fixtures whose name contains this substring.
    #[arg(long)]
    only: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let selected: Vec<Fixture> = fixtures::all()
        .into_iter()
        .filter(|f| args.only.as_deref().is_none_or(|s| f.name.contains(s)))
        .collect();
    if selected.is_empty() {
        bail!("no fixture matches {:?}", args.only.unwrap_or_default());
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("cannot create {}", args.out.display()))?;

    for fixture in &selected {
        write_fixture(&args.out, fixture)?;
    }

    let names: Vec<&str> = selected.iter().map(|f| f.name).collect();
    write_file(
        &args.out.join("index.json"),
        serde_json::to_string_pretty(&names)?.as_bytes(),
    )?;

    println!("{} fixtures written to {}", selected.len(), args.out.display());
    Ok(())
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_fixture(dir: &Path, fixture: &Fixture) -> Result<()> {
    write_file(&dir.join(format!("{}.bin", fixture.name)), &fixture.data)?;
    write_file(
        &dir.join(format!("{}.hex", fixture.name)),
        hex::encode(&fixture.data).as_bytes(),
    )?;
    let manifest = serde_json::to_string_pretty(&fixture.manifest())
        .with_context(|| format!("cannot serialize manifest for {}", fixture.name))?;
    write_file(&dir.join(format!("{}.json", fixture.name)), manifest.as_bytes())
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("cannot write {}", path.display()))?;
    println!("  wrote {}", path.display());
    Ok(())
}
