#![warn(clippy::pedantic)]

pub mod account;
pub mod account_type;
pub mod enums;
pub mod error;
pub mod revdist;
pub mod serviceability;

#[cfg(test)]
mod testutil;

pub use account::Account;
pub use account_type::AccountType;
pub use error::TypeError;
