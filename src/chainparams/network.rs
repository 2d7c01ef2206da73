//! Network identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Startup configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid combination of -regtest and -testnet")]
    ConflictingNetworkSelection,
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
}

/// The three chains a node can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Network {
    Main = 0,
    Test = 1,
    Regtest = 2,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Main, Network::Test, Network::Regtest];

    pub fn name(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }

    /// Resolve the mutually exclusive `-testnet` / `-regtest` flags
    pub fn from_flags(testnet: bool, regtest: bool) -> Result<Network, ConfigError> {
        match (testnet, regtest) {
            (true, true) => Err(ConfigError::ConflictingNetworkSelection),
            (_, true) => Ok(Network::Regtest),
            (true, false) => Ok(Network::Test),
            (false, false) => Ok(Network::Main),
        }
    }

    pub(crate) fn from_index(index: u8) -> Network {
        match index {
            0 => Network::Main,
            1 => Network::Test,
            2 => Network::Regtest,
            _ => unreachable!("network index {index} was never stored"),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Test),
            "regtest" => Ok(Network::Regtest),
            _ => Err(ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}
