//! Network parameter registry
//!
//! Builds Main, then Test from Main, then Regtest from Test, verifying each
//! genesis block as it goes. The process-wide instance is built on first
//! use; a table that fails its integrity check never becomes visible.

use rand::Rng;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, error};

use super::{main_template, regtest_delta, test_delta, ChainParams, Network};
use crate::checkpoints::CheckpointAuthority;
use crate::node::GenesisError;

static REGISTRY: OnceLock<NetworkParameterRegistry> = OnceLock::new();

/// The parameter sets of all three networks
#[derive(Debug)]
pub struct NetworkParameterRegistry {
    main: ChainParams,
    test: ChainParams,
    regtest: ChainParams,
}

impl NetworkParameterRegistry {
    /// Build and verify every network.
    ///
    /// `now` and `rng` only feed the fixed seeds' last-seen times.
    pub fn build<R: Rng>(now: u64, rng: &mut R) -> Result<Self, GenesisError> {
        let main_template = main_template();
        let test_template = test_delta(main_template.clone());
        let regtest_template = regtest_delta(test_template.clone());

        let registry = Self {
            main: main_template.build(now, rng)?,
            test: test_template.build(now, rng)?,
            regtest: regtest_template.build(now, rng)?,
        };
        debug!("chain parameters verified for all networks");
        Ok(registry)
    }

    pub fn get(&self, network: Network) -> &ChainParams {
        match network {
            Network::Main => &self.main,
            Network::Test => &self.test,
            Network::Regtest => &self.regtest,
        }
    }

    pub fn checkpoints(&self, network: Network) -> &'static CheckpointAuthority {
        self.get(network).checkpoints
    }

    /// Which network a peer speaks, judged by its message-start bytes
    pub fn network_for_magic(&self, magic: [u8; 4]) -> Option<Network> {
        Network::ALL
            .into_iter()
            .find(|network| self.get(*network).message_start == magic)
    }
}

/// Build the process-wide registry, or return the one already built
pub fn init_registry() -> Result<&'static NetworkParameterRegistry, GenesisError> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let built = NetworkParameterRegistry::build(now, &mut rand::thread_rng())?;
    Ok(REGISTRY.get_or_init(|| built))
}

/// The process-wide registry.
///
/// # Panics
///
/// If a genesis block does not match its compiled-in constants. Nothing
/// downstream can be trusted with an inconsistent table.
pub fn registry() -> &'static NetworkParameterRegistry {
    match init_registry() {
        Ok(registry) => registry,
        Err(e) => {
            error!(error = %e, "chain parameter table is inconsistent");
            panic!("chain parameter table is inconsistent: {e}");
        }
    }
}
