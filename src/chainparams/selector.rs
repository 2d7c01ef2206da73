//! Active network selection
//!
//! The active network is chosen exactly once during startup, before any
//! networking, validation or storage code reads chain parameters. Those
//! subsystems should be handed the resulting [`SelectedChain`] rather than
//! calling [`active`] themselves.
//!
//! Selection is not reentrant. Re-selecting after other components have
//! cached parameters is a programming error; the atomic cell only keeps
//! concurrent readers free of data races.

use std::sync::atomic::{AtomicU8, Ordering};
use tracing::info;

use super::{registry, ChainParams, ConfigError, Network};
use crate::checkpoints::CheckpointAuthority;

static ACTIVE: AtomicU8 = AtomicU8::new(Network::Main as u8);

/// Resolved parameters for the network the node runs on
#[derive(Debug, Clone, Copy)]
pub struct SelectedChain {
    pub network: Network,
    pub params: &'static ChainParams,
    pub checkpoints: &'static CheckpointAuthority,
}

impl SelectedChain {
    pub fn new(network: Network) -> Self {
        let registry = registry();
        Self {
            network,
            params: registry.get(network),
            checkpoints: registry.checkpoints(network),
        }
    }
}

/// Make `network` the active network, unconditionally
pub fn select_params(network: Network) -> SelectedChain {
    ACTIVE.store(network as u8, Ordering::Release);
    info!(%network, "selected chain parameters");
    SelectedChain::new(network)
}

/// Select from the `-testnet` / `-regtest` startup flags
pub fn select_params_from_flags(
    testnet: bool,
    regtest: bool,
) -> Result<SelectedChain, ConfigError> {
    let network = Network::from_flags(testnet, regtest)?;
    Ok(select_params(network))
}

pub fn active_network() -> Network {
    Network::from_index(ACTIVE.load(Ordering::Acquire))
}

/// The active network's parameters and checkpoints
pub fn active() -> SelectedChain {
    SelectedChain::new(active_network())
}

/// The active network's parameters
pub fn params() -> &'static ChainParams {
    active().params
}
