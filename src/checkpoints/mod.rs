//! Checkpoint authority
//!
//! Checkpoints are operator-asserted (height, hash) pairs. A block at a
//! checkpointed height with any other hash is on a history the node must
//! reject, whatever its proof of work. The tables also anchor estimates of
//! how much of the chain is left to download and verify.
//!
//! Enforcement can be switched off for testing and maintenance through a
//! process-wide flag, which should only be written during startup.

mod data;

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

use crate::chainparams::Network;
use crate::constants::SIGCHECK_VERIFICATION_FACTOR;
use crate::crypto::Hash;

static ENABLED: AtomicBool = AtomicBool::new(true);

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Turn checkpoint enforcement on or off
pub fn set_enabled(enabled: bool) {
    if !enabled {
        warn!("checkpoint enforcement disabled");
    }
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// A known-good block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub height: u32,
    pub hash: Hash,
}

/// What the block index knows about a block, as far as progress goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockProgress {
    /// Transactions from genesis up to and including this block
    pub chain_tx: u64,
    /// Block header timestamp
    pub time: u32,
}

/// Checkpoint table and sync statistics of one network
#[derive(Debug)]
pub struct CheckpointAuthority {
    checkpoints: &'static [Checkpoint],
    last_checkpoint_time: i64,
    transactions_at_last_checkpoint: u64,
    transactions_per_day: f64,
}

impl CheckpointAuthority {
    pub fn for_network(network: Network) -> &'static CheckpointAuthority {
        match network {
            Network::Main => &data::MAIN,
            Network::Test => &data::TEST,
            Network::Regtest => &data::REGTEST,
        }
    }

    /// Checkpoints in ascending height order
    pub fn checkpoints(&self) -> &[Checkpoint] {
        self.checkpoints
    }

    pub fn last_checkpoint_time(&self) -> i64 {
        self.last_checkpoint_time
    }

    pub fn transactions_at_last_checkpoint(&self) -> u64 {
        self.transactions_at_last_checkpoint
    }

    pub fn transactions_per_day(&self) -> f64 {
        self.transactions_per_day
    }

    /// Whether a block at `height` with `hash` is allowed by the table
    pub fn check_block(&self, height: u32, hash: &Hash) -> bool {
        if !is_enabled() {
            return true;
        }

        match self.checkpoints.binary_search_by_key(&height, |cp| cp.height) {
            Ok(index) => {
                let expected = &self.checkpoints[index].hash;
                if expected != hash {
                    warn!(height, %expected, found = %hash, "block conflicts with checkpoint");
                    return false;
                }
                true
            }
            Err(_) => true,
        }
    }

    /// Height of the last checkpoint, a lower bound on the chain height
    pub fn total_blocks_estimate(&self) -> u32 {
        if !is_enabled() {
            return 0;
        }
        self.checkpoints.last().map_or(0, |cp| cp.height)
    }

    /// Find the highest checkpoint the caller's block index already holds.
    ///
    /// `lookup` is asked for each checkpoint from the top down and should
    /// return the indexed block if it has one with that hash.
    pub fn find_last_checkpoint<B, F>(&self, mut lookup: F) -> Option<B>
    where
        F: FnMut(u32, &Hash) -> Option<B>,
    {
        if !is_enabled() {
            return None;
        }
        self.checkpoints
            .iter()
            .rev()
            .find_map(|cp| lookup(cp.height, &cp.hash))
    }

    /// Guess how far verification has progressed at `block`, in `[0, 1]`.
    ///
    /// Work is counted as 1.0 per transaction up to the last checkpoint and,
    /// when `sigchecks` is set, [`SIGCHECK_VERIFICATION_FACTOR`] per
    /// transaction after it. Transactions still to come are extrapolated
    /// from the table's transactions-per-day rate.
    pub fn guess_verification_progress(
        &self,
        block: Option<BlockProgress>,
        now: i64,
        sigchecks: bool,
    ) -> f64 {
        let Some(block) = block else {
            return 0.0;
        };

        let factor = if sigchecks {
            SIGCHECK_VERIFICATION_FACTOR
        } else {
            1.0
        };
        let checkpoint_tx = self.transactions_at_last_checkpoint as f64;
        let chain_tx = block.chain_tx as f64;

        let (work_before, work_after) = if block.chain_tx <= self.transactions_at_last_checkpoint
        {
            let cheap_before = chain_tx;
            let cheap_after = checkpoint_tx - chain_tx;
            let expensive_after = (now as f64 - self.last_checkpoint_time as f64)
                / SECONDS_PER_DAY
                * self.transactions_per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = checkpoint_tx;
            let expensive_before = chain_tx - checkpoint_tx;
            let expensive_after = (now as f64 - f64::from(block.time)) / SECONDS_PER_DAY
                * self.transactions_per_day;
            (cheap_before + expensive_before * factor, expensive_after * factor)
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            // Nothing done and nothing left, or a block stamped in the future.
            return if work_before > 0.0 { 1.0 } else { 0.0 };
        }
        (work_before / total).clamp(0.0, 1.0)
    }
}
