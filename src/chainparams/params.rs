//! Per-network chain parameters
//!
//! Main is spelled out in full by [`main_template`]. Test and Regtest are
//! produced by applying [`test_delta`] and [`regtest_delta`] in sequence to
//! copies of the previous template; nothing but the listed fields changes.
//! A template becomes [`ChainParams`] once its genesis block has been derived
//! and checked against the expected constants.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use super::{
    fixed_seed_addresses, AddressError, Base58Prefixes, Base58Type, DnsSeed, Network,
    SeedAddress,
};
use crate::checkpoints::CheckpointAuthority;
use crate::consensus::{target_to_compact, Block};
use crate::constants::COIN;
use crate::crypto::{hex_array, AlertError, AlertKey, Hash, U256};
use crate::node::{build_genesis_block, verify_genesis, GenesisError, GenesisInfo, GenesisSpec};

pub const MAIN_GENESIS_HASH: Hash =
    Hash::from_display_hex("000006cab7aa2be2da91015902aa4458dd5fbb8778d175c36d429dc986f2bff4");
pub const TEST_GENESIS_HASH: Hash =
    Hash::from_display_hex("000007717e2e2df52a9ff29b0771901c9c12f5cbb4914cdf0c8047b459bb21d8");
pub const REGTEST_GENESIS_HASH: Hash =
    Hash::from_display_hex("d9a9f4b9a889f6d56ff964d298c46217fb825fd1d4727397d56c6b2be9f2db0d");

/// Every network shares the same coinbase, hence the same merkle root
pub const GENESIS_MERKLE_ROOT: Hash =
    Hash::from_display_hex("d0227b8c3e3d07bce9656b3d9e474f050d23458aaead93357dcfdac9ab9b79f9");

const GENESIS_HEADLINE: &str =
    "3 Aug 2013 - M&G - Mugabe wins Zim election with more than 60% of votes";

const GENESIS_OUTPUT_KEY: [u8; 65] = hex_array(
    "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb6\
     49f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f",
);

const MAIN_ALERT_KEY: [u8; 65] = hex_array(
    "045337216002ca6a71d63edf062895417610a723d453e722bf4728996c58661cda\
     c3d4dec5cecd449b9086e9602b35cc726a9e0163e1a4d40f521fbdaebb674658",
);

const TEST_ALERT_KEY: [u8; 65] = hex_array(
    "04deffaef5b9552d1635013708eff25f2fac734cd6720d86fe83f9618572eb095b\
     738efd752128b885c40ca0a37535df5a4b2b2cae5c80cea9bf315fb67ce9fcb2",
);

/// Fixed seed nodes for Main
const MAIN_FIXED_SEEDS: &[[u8; 4]] = &[[120, 86, 52, 18]];

/// Declarative fields of one network, before the genesis block is derived
#[derive(Debug, Clone)]
pub struct ParamsTemplate {
    pub network: Network,
    pub message_start: [u8; 4],
    pub alert_public_key: &'static [u8],
    pub default_port: u16,
    pub rpc_port: u16,
    pub proof_of_work_limit: U256,
    pub subsidy_halving_interval: u32,
    pub genesis: GenesisSpec,
    pub expected_genesis_hash: Hash,
    pub expected_merkle_root: Hash,
    pub dns_seeds: Vec<DnsSeed>,
    pub base58_prefixes: Base58Prefixes,
    pub fixed_seed_ips: &'static [[u8; 4]],
    pub require_rpc_password: bool,
    pub data_dir: &'static str,
}

/// The production network, in full
pub fn main_template() -> ParamsTemplate {
    ParamsTemplate {
        network: Network::Main,
        // Rarely used upper ASCII, not valid UTF-8, a large int at any alignment.
        message_start: [0xfa, 0xb5, 0x03, 0xdf],
        alert_public_key: &MAIN_ALERT_KEY,
        default_port: 17333,
        rpc_port: 8332,
        proof_of_work_limit: U256::MAX >> 20,
        subsidy_halving_interval: 80_640,
        genesis: GenesisSpec {
            timestamp_message: GENESIS_HEADLINE,
            script_prefix: 486_604_799,
            extra_nonce: 4,
            reward: 1000 * COIN,
            output_pubkey: &GENESIS_OUTPUT_KEY,
            version: 1,
            time: 1_375_548_986,
            bits: 0x1e0fffff,
            nonce: 2_089_928_209,
        },
        expected_genesis_hash: MAIN_GENESIS_HASH,
        expected_merkle_root: GENESIS_MERKLE_ROOT,
        dns_seeds: vec![
            DnsSeed::new("seed1.zeta-coin.com", "seed1.zeta-coin.com"),
            DnsSeed::new("seed2.zeta-coin.com", "seed2.zeta-coin.com"),
            DnsSeed::new("seed3.zeta-coin.com", "seed3.zeta-coin.com"),
            DnsSeed::new("seed4.zeta-coin.com", "seed4.zeta-coin.com"),
            DnsSeed::new("seed5.zeta-coin.com", "seed5.zeta-coin.com"),
            DnsSeed::new("seed6.zeta-coin.com", "seed6.zeta-coin.com"),
            DnsSeed::new("seed7.zeta-coin.com", "seed7.zeta-coin.com"),
            DnsSeed::new("seed8.zeta-coin.com", "seed8.zeta-coin.com"),
        ],
        base58_prefixes: Base58Prefixes {
            pubkey_address: 80,
            script_address: 9,
            secret_key: 224,
            ext_public_key: [0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: [0x04, 0x88, 0xAD, 0xE4],
        },
        fixed_seed_ips: MAIN_FIXED_SEEDS,
        require_rpc_password: true,
        data_dir: "",
    }
}

/// Test network overrides, applied to a copy of Main
pub fn test_delta(base: ParamsTemplate) -> ParamsTemplate {
    ParamsTemplate {
        network: Network::Test,
        message_start: [0x05, 0xfe, 0xa9, 0x01],
        alert_public_key: &TEST_ALERT_KEY,
        default_port: 27333,
        rpc_port: 18332,
        data_dir: "testnet3",
        genesis: GenesisSpec {
            time: 1_374_901_773,
            nonce: 414_708_675,
            ..base.genesis
        },
        expected_genesis_hash: TEST_GENESIS_HASH,
        fixed_seed_ips: &[],
        dns_seeds: vec![
            DnsSeed::new("test1.zetatestnet.pw", "test1.zetatestnet.pw"),
            DnsSeed::new("test2.zetatestnet.pw", "test2.zetatestnet.pw"),
            DnsSeed::new("test3.zetatestnet.pw", "test3.zetatestnet.pw"),
        ],
        base58_prefixes: Base58Prefixes {
            pubkey_address: 88,
            script_address: 188,
            secret_key: 239,
            ext_public_key: [0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: [0x04, 0x35, 0x83, 0x94],
        },
        ..base
    }
}

/// Regression test overrides, applied to a copy of Test
pub fn regtest_delta(base: ParamsTemplate) -> ParamsTemplate {
    ParamsTemplate {
        network: Network::Regtest,
        message_start: [0xfa, 0x0f, 0xa5, 0x5a],
        subsidy_halving_interval: 150,
        proof_of_work_limit: U256::MAX >> 1,
        genesis: GenesisSpec {
            time: 1_296_688_602,
            bits: 0x207fffff,
            nonce: 3,
            ..base.genesis
        },
        expected_genesis_hash: REGTEST_GENESIS_HASH,
        default_port: 18444,
        data_dir: "regtest",
        dns_seeds: Vec::new(),
        require_rpc_password: false,
        ..base
    }
}

impl ParamsTemplate {
    /// Derive the genesis block, check it, and synthesize fixed seeds
    pub fn build<R: Rng>(self, now: u64, rng: &mut R) -> Result<ChainParams, GenesisError> {
        let genesis = build_genesis_block(&self.genesis);
        let genesis_hash = verify_genesis(
            self.network,
            &genesis,
            &self.expected_genesis_hash,
            &self.expected_merkle_root,
        )?;
        debug!(network = %self.network, hash = %genesis_hash, "genesis block verified");

        let fixed_seeds = fixed_seed_addresses(self.fixed_seed_ips, self.default_port, now, rng);

        Ok(ChainParams {
            network: self.network,
            message_start: self.message_start,
            alert_public_key: self.alert_public_key,
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            proof_of_work_limit: self.proof_of_work_limit,
            subsidy_halving_interval: self.subsidy_halving_interval,
            genesis,
            genesis_hash,
            dns_seeds: self.dns_seeds,
            base58_prefixes: self.base58_prefixes,
            fixed_seeds,
            require_rpc_password: self.require_rpc_password,
            data_dir: self.data_dir,
            checkpoints: CheckpointAuthority::for_network(self.network),
        })
    }
}

/// Immutable parameters of one network
#[derive(Debug, Clone)]
pub struct ChainParams {
    pub network: Network,
    /// Magic prefix of every peer-to-peer message
    pub message_start: [u8; 4],
    pub alert_public_key: &'static [u8],
    pub default_port: u16,
    pub rpc_port: u16,
    /// Largest hash a block may have at minimum difficulty
    pub proof_of_work_limit: U256,
    pub subsidy_halving_interval: u32,
    pub genesis: Block,
    pub genesis_hash: Hash,
    pub dns_seeds: Vec<DnsSeed>,
    pub base58_prefixes: Base58Prefixes,
    pub fixed_seeds: Vec<SeedAddress>,
    pub require_rpc_password: bool,
    /// Subdirectory of the data directory; empty for Main
    pub data_dir: &'static str,
    /// Checkpoint table of the same network
    pub checkpoints: &'static CheckpointAuthority,
}

impl ChainParams {
    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn encode_base58(&self, kind: Base58Type, payload: &[u8]) -> String {
        self.base58_prefixes.encode(kind, payload)
    }

    /// Decode base58check text, rejecting prefixes of other networks
    pub fn decode_base58(&self, kind: Base58Type, text: &str) -> Result<Vec<u8>, AddressError> {
        self.base58_prefixes.decode(kind, text)
    }

    pub fn alert_key(&self) -> Result<AlertKey, AlertError> {
        AlertKey::from_sec1_bytes(self.alert_public_key)
    }
}

/// Human and JSON friendly view of one network's parameters
#[derive(Debug, Clone, Serialize)]
pub struct ChainSummary {
    pub network: Network,
    pub message_start: String,
    pub default_port: u16,
    pub rpc_port: u16,
    pub pow_limit_bits: String,
    pub subsidy_halving_interval: u32,
    pub genesis: GenesisInfo,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<SeedAddress>,
    pub require_rpc_password: bool,
    pub data_dir: &'static str,
    pub checkpoints: usize,
    pub total_blocks_estimate: u32,
}

impl ChainSummary {
    pub fn new(params: &ChainParams) -> Self {
        Self {
            network: params.network,
            message_start: hex::encode(params.message_start),
            default_port: params.default_port,
            rpc_port: params.rpc_port,
            pow_limit_bits: format!("0x{:08x}", target_to_compact(params.proof_of_work_limit)),
            subsidy_halving_interval: params.subsidy_halving_interval,
            genesis: GenesisInfo::new(params.genesis_block()),
            dns_seeds: params.dns_seeds.clone(),
            fixed_seeds: params.fixed_seeds.clone(),
            require_rpc_password: params.require_rpc_password,
            data_dir: params.data_dir,
            checkpoints: params.checkpoints.checkpoints().len(),
            total_blocks_estimate: params.checkpoints.total_blocks_estimate(),
        }
    }
}
