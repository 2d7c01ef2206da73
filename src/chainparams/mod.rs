//! Chain parameters - network identity, genesis, address prefixes and seeds

mod base58;
mod network;
mod params;
mod registry;
mod seeds;
mod selector;

pub use base58::*;
pub use network::*;
pub use params::*;
pub use registry::*;
pub use seeds::*;
pub use selector::*;
