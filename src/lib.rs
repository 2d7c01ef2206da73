//! Zeta Core Library
//!
//! Network identity and trust anchors for a Zeta full node: per-network
//! chain parameters with verified genesis blocks, startup network selection,
//! and the compiled-in checkpoint authority.

pub mod chainparams;
pub mod checkpoints;
pub mod consensus;
pub mod crypto;
pub mod node;

/// Protocol constants
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: u64 = 100_000_000;

    pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

    /// Service bit advertised by full nodes
    pub const NODE_NETWORK: u64 = 1;

    /// How many times slower a transaction after the last checkpoint is to
    /// verify than one before it. A compromise: reindexing from a fast disk
    /// on a slow CPU can reach 20, a slow network with a fast multicore CPU
    /// stays near 1.
    pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;
}
