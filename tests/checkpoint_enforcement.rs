//! Checkpoint enforcement switch
//!
//! Enforcement is a process-wide flag, so these tests run one at a time and
//! always leave it switched back on.

use std::sync::{Mutex, MutexGuard};
use zeta_core::chainparams::{Network, MAIN_GENESIS_HASH, TEST_GENESIS_HASH};
use zeta_core::checkpoints::{self, CheckpointAuthority};
use zeta_core::crypto::Hash;

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Runs `f` with enforcement off, restoring it even if `f` panics
fn with_enforcement_disabled(f: impl FnOnce()) {
    struct Restore;
    impl Drop for Restore {
        fn drop(&mut self) {
            checkpoints::set_enabled(true);
        }
    }

    let _restore = Restore;
    checkpoints::set_enabled(false);
    f();
}

fn mainnet() -> &'static CheckpointAuthority {
    CheckpointAuthority::for_network(Network::Main)
}

#[test]
fn test_enabled_by_default() {
    let _guard = serial();
    assert!(checkpoints::is_enabled());
    assert!(!mainnet().check_block(0, &TEST_GENESIS_HASH));
}

#[test]
fn test_disabled_accepts_conflicting_hash() {
    let _guard = serial();
    with_enforcement_disabled(|| {
        assert!(!checkpoints::is_enabled());
        assert!(mainnet().check_block(0, &TEST_GENESIS_HASH));
        assert!(mainnet().check_block(4_086_591, &Hash::zero()));
    });
    assert!(!mainnet().check_block(0, &TEST_GENESIS_HASH));
}

#[test]
fn test_disabled_estimate_is_zero() {
    let _guard = serial();
    with_enforcement_disabled(|| {
        for network in Network::ALL {
            assert_eq!(CheckpointAuthority::for_network(network).total_blocks_estimate(), 0);
        }
    });
    assert_eq!(mainnet().total_blocks_estimate(), 4_086_591);
}

#[test]
fn test_disabled_finds_no_checkpoint() {
    let _guard = serial();
    let lookup = |height: u32, hash: &Hash| (height == 0 && *hash == MAIN_GENESIS_HASH).then_some(height);

    with_enforcement_disabled(|| {
        let mut asked = false;
        let found = mainnet().find_last_checkpoint(|height, hash| {
            asked = true;
            lookup(height, hash)
        });
        assert_eq!(found, None);
        assert!(!asked);
    });
    assert_eq!(mainnet().find_last_checkpoint(lookup), Some(0));
}
