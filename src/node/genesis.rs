//! Genesis block construction
//!
//! A genesis block is fully determined by a handful of declarative fields.
//! Building it is a pure function; verifying it compares the derived hash
//! and merkle root against the constants compiled into the parameter table.

use serde::Serialize;
use thiserror::Error;

use crate::chainparams::Network;
use crate::consensus::{Block, BlockHeader, Script, Transaction, OP_CHECKSIG};
use crate::crypto::Hash;

/// Genesis integrity errors
///
/// Any of these means the compiled parameter table is inconsistent.
#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("{network} genesis hash mismatch: expected {expected}, derived {actual}")]
    HashMismatch {
        network: Network,
        expected: Hash,
        actual: Hash,
    },
    #[error("{network} genesis merkle root mismatch: expected {expected}, derived {actual}")]
    MerkleRootMismatch {
        network: Network,
        expected: Hash,
        actual: Hash,
    },
}

/// Declarative description of a genesis block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisSpec {
    /// Headline embedded in the coinbase input script
    pub timestamp_message: &'static str,
    /// First integer pushed by the coinbase input script
    pub script_prefix: i64,
    /// Extra nonce pushed after the prefix
    pub extra_nonce: i64,
    /// Coinbase reward in base units
    pub reward: u64,
    /// Public key the reward is paid to
    pub output_pubkey: &'static [u8],
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Build the genesis block described by `spec`
///
/// The coinbase has one input and one output; the previous-block hash is
/// zero and the merkle root covers the coinbase alone.
pub fn build_genesis_block(spec: &GenesisSpec) -> Block {
    let script_sig = Script::new()
        .push_int(spec.script_prefix)
        .push_script_num(spec.extra_nonce)
        .push_slice(spec.timestamp_message.as_bytes());
    let script_pubkey = Script::new()
        .push_slice(spec.output_pubkey)
        .push_opcode(OP_CHECKSIG);

    let coinbase = Transaction::coinbase(script_sig, spec.reward, script_pubkey);
    let merkle_root = coinbase.hash();

    let header = BlockHeader {
        version: spec.version,
        prev_hash: Hash::zero(),
        merkle_root,
        timestamp: spec.time,
        bits: spec.bits,
        nonce: spec.nonce,
    };

    Block::new(header, vec![coinbase])
}

/// Verify a derived genesis block against its expected constants
pub fn verify_genesis(
    network: Network,
    block: &Block,
    expected_hash: &Hash,
    expected_merkle_root: &Hash,
) -> Result<Hash, GenesisError> {
    let merkle_root = block.compute_merkle_root();
    if merkle_root != *expected_merkle_root || block.header.merkle_root != merkle_root {
        return Err(GenesisError::MerkleRootMismatch {
            network,
            expected: *expected_merkle_root,
            actual: block.header.merkle_root,
        });
    }

    let hash = block.hash();
    if hash != *expected_hash {
        return Err(GenesisError::HashMismatch {
            network,
            expected: *expected_hash,
            actual: hash,
        });
    }

    Ok(hash)
}

/// Genesis block statistics
#[derive(Debug, Clone, Serialize)]
pub struct GenesisInfo {
    pub hash: Hash,
    pub merkle_root: Hash,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
    pub reward: u64,
}

impl GenesisInfo {
    pub fn new(block: &Block) -> Self {
        Self {
            hash: block.hash(),
            merkle_root: block.header.merkle_root,
            timestamp: block.header.timestamp,
            bits: block.header.bits,
            nonce: block.header.nonce,
            reward: block
                .transactions
                .iter()
                .flat_map(|tx| tx.outputs.iter())
                .map(|output| output.amount)
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 33] = [0x02; 33];

    fn spec() -> GenesisSpec {
        GenesisSpec {
            timestamp_message: "sample headline",
            script_prefix: 486604799,
            extra_nonce: 4,
            reward: 50 * crate::constants::COIN,
            output_pubkey: &KEY,
            version: 1,
            time: 1_300_000_000,
            bits: 0x207fffff,
            nonce: 0,
        }
    }

    #[test]
    fn test_genesis_is_deterministic() {
        assert_eq!(build_genesis_block(&spec()), build_genesis_block(&spec()));
    }

    #[test]
    fn test_genesis_shape() {
        let genesis = build_genesis_block(&spec());
        assert!(genesis.is_genesis());
        assert_eq!(genesis.transactions.len(), 1);

        let coinbase = &genesis.transactions[0];
        assert!(coinbase.is_coinbase());
        assert_eq!(coinbase.inputs.len(), 1);
        assert_eq!(coinbase.outputs.len(), 1);
        assert_eq!(genesis.header.merkle_root, coinbase.hash());
    }

    #[test]
    fn test_coinbase_embeds_headline() {
        let genesis = build_genesis_block(&spec());
        let script = genesis.transactions[0].inputs[0].script_sig.as_bytes();
        assert_eq!(&script[..7], &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04]);
        assert!(script.ends_with(b"sample headline"));
    }

    #[test]
    fn test_header_fields_change_hash_not_merkle() {
        let base = build_genesis_block(&spec());
        let bumped = build_genesis_block(&GenesisSpec { nonce: 1, ..spec() });
        assert_eq!(base.header.merkle_root, bumped.header.merkle_root);
        assert_ne!(base.hash(), bumped.hash());
    }

    #[test]
    fn test_verify_reports_mismatches() {
        let genesis = build_genesis_block(&spec());
        let hash = genesis.hash();
        let merkle = genesis.header.merkle_root;

        assert_eq!(verify_genesis(Network::Regtest, &genesis, &hash, &merkle).unwrap(), hash);

        let err = verify_genesis(Network::Regtest, &genesis, &Hash::zero(), &merkle).unwrap_err();
        assert!(matches!(err, GenesisError::HashMismatch { .. }));

        let err = verify_genesis(Network::Regtest, &genesis, &hash, &Hash::zero()).unwrap_err();
        assert!(matches!(err, GenesisError::MerkleRootMismatch { .. }));
    }

    #[test]
    fn test_genesis_info() {
        let genesis = build_genesis_block(&spec());
        let info = GenesisInfo::new(&genesis);
        assert_eq!(info.reward, 50 * crate::constants::COIN);
        assert_eq!(info.timestamp, 1_300_000_000);
        assert_eq!(info.hash, genesis.hash());
    }
}
