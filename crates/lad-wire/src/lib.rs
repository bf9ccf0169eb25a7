#![warn(clippy::pedantic)]

pub mod cursor;
pub mod defaulting;
pub mod discriminator;
pub mod error;
pub mod fixed;
pub mod primitives;
pub mod reserved;

pub use cursor::Cursor;
pub use defaulting::{DefaultingCursor, ZeroDefaultReader};
pub use discriminator::Discriminator;
pub use error::WireError;
pub use fixed::{FixedAccount, FixedLayout};
pub use primitives::{NetworkV4, ParsePubkeyError, Pubkey};
pub use reserved::Reserved;
