#![warn(clippy::pedantic)]

pub mod batch;
pub mod error;

#[cfg(feature = "parallel")]
pub use batch::decode_batch_parallel;
pub use batch::{BatchConfig, ParseError, ProgramData, decode_account, decode_batch};
pub use error::DecodeError;
