use std::fmt;
use std::str::FromStr;

use lad_decoder::BatchConfig;
use lad_wire::Pubkey;

/// Which deployment a client talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    MainnetBeta,
    Testnet,
    #[default]
    Devnet,
    Local,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MainnetBeta => "mainnet-beta",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment {0:?}; expected mainnet-beta, testnet, devnet or local")]
pub struct ParseEnvironmentError(String);

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    /// Accepts the long names and their one-letter forms. `localnet` is
    /// kept as an alias of `local`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet-beta" | "m" => Ok(Self::MainnetBeta),
            "testnet" | "t" => Ok(Self::Testnet),
            "devnet" | "d" => Ok(Self::Devnet),
            "local" | "l" | "localnet" => Ok(Self::Local),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

/// Settings shared by the account clients.
///
/// ```text
/// ┌───────────────────────────┬───────────────────────────────────────┐
/// │ Field                     │ Purpose                               │
/// ├───────────────────────────┼───────────────────────────────────────┤
/// │ environment               │ Deployment; used for log context      │
/// │ serviceability_program_id │ Owner of the tag-prefixed accounts    │
/// │ revdist_program_id        │ Owner of the fixed-layout accounts    │
/// │ batch                     │ Limits applied during batch decoding  │
/// └───────────────────────────┴───────────────────────────────────────┘
/// ```
///
/// Program ids are not baked in per environment. Callers supply them,
/// which keeps local and forked deployments first-class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub environment: Environment,
    pub serviceability_program_id: Pubkey,
    pub revdist_program_id: Pubkey,
    pub batch: BatchConfig,
}

impl ClientConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_serviceability_program(mut self, id: Pubkey) -> Self {
        self.serviceability_program_id = id;
        self
    }

    #[must_use]
    pub fn with_revdist_program(mut self, id: Pubkey) -> Self {
        self.revdist_program_id = id;
        self
    }

    #[must_use]
    pub fn with_max_buffer_len(mut self, limit: usize) -> Self {
        self.batch.max_buffer_len = Some(limit);
        self
    }
}
