//! Startup network selection
//!
//! The active network is process-wide, so these tests run one at a time.

use std::sync::{Mutex, MutexGuard};
use zeta_core::chainparams::{
    active, active_network, params, select_params, select_params_from_flags, ConfigError, Network,
    MAIN_GENESIS_HASH, REGTEST_GENESIS_HASH, TEST_GENESIS_HASH,
};

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn test_both_flags_conflict() {
    let _guard = serial();
    select_params(Network::Main);

    let err = select_params_from_flags(true, true).unwrap_err();
    assert_eq!(err, ConfigError::ConflictingNetworkSelection);
    assert_eq!(err.to_string(), "Invalid combination of -regtest and -testnet");
    // A rejected selection leaves the previous one in place.
    assert_eq!(active_network(), Network::Main);
}

#[test]
fn test_no_flags_selects_main() {
    let _guard = serial();
    select_params(Network::Regtest);

    let chain = select_params_from_flags(false, false).unwrap();
    assert_eq!(chain.network, Network::Main);
    assert_eq!(active_network(), Network::Main);
    assert_eq!(params().genesis_hash, MAIN_GENESIS_HASH);
    assert_eq!(params().default_port, 17333);
}

#[test]
fn test_testnet_flag_selects_test() {
    let _guard = serial();

    let chain = select_params_from_flags(true, false).unwrap();
    assert_eq!(chain.network, Network::Test);
    assert_eq!(chain.params.genesis_hash, TEST_GENESIS_HASH);
    assert_eq!(params().data_dir, "testnet3");
    assert_eq!(active().checkpoints.checkpoints()[0].hash, TEST_GENESIS_HASH);
}

#[test]
fn test_regtest_flag_selects_regtest() {
    let _guard = serial();

    let chain = select_params_from_flags(false, true).unwrap();
    assert_eq!(chain.network, Network::Regtest);
    assert_eq!(active_network(), Network::Regtest);
    assert_eq!(params().genesis_hash, REGTEST_GENESIS_HASH);
    assert!(!params().require_rpc_password);
    assert!(params().dns_seeds.is_empty());
}

#[test]
fn test_reselection_replaces_active() {
    let _guard = serial();

    select_params(Network::Test);
    assert_eq!(active_network(), Network::Test);
    select_params(Network::Main);
    assert_eq!(active_network(), Network::Main);
    assert_eq!(params().network, Network::Main);
}
