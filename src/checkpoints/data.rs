//! Compiled-in checkpoint tables
//!
//! A good checkpoint block is surrounded by blocks with reasonable
//! timestamps (none before it with a later time, none after with an
//! earlier one) and contains no strange transactions.

use super::{CheckpointAuthority, Checkpoint};
use crate::chainparams::{MAIN_GENESIS_HASH, REGTEST_GENESIS_HASH, TEST_GENESIS_HASH};
use crate::crypto::Hash;

const fn cp(height: u32, hash: &str) -> Checkpoint {
    Checkpoint {
        height,
        hash: Hash::from_display_hex(hash),
    }
}

const MAIN_CHECKPOINTS: &[Checkpoint] = &[
    Checkpoint { height: 0, hash: MAIN_GENESIS_HASH },
    cp(30350, "000000000032d087f157871fbc41541a43ac30291f99ce5225d69fd132f8ecdf"),
    cp(66438, "00000000000970ae1d1fddcdf363dfc49505caa2884367ad460839d0621d1f56"),
    cp(103010, "000000000007204260b891b9aa8eb476132e74eb7539dc3e9ac2fb7bc7104ab8"),
    cp(252509, "0000000000090c2b77a3247303784289fb6a18752d54e38e96d2b48eac245016"),
    cp(470201, "00000000000102bdfdfc228ee34304f64650825fd1639a1f57a397af854b9df1"),
    cp(523001, "00000000000076412e07ded5bcdf11c0ea6bfcada9e339cb31d312d8e60c3ef8"),
    cp(569410, "000000000000085bbed51c9196314ee52281428ff5b1d8cade9140efe4b33381"),
    cp(587317, "000000000000b81d6626e9fd0c869764dd992d5429442876a75894e24c0c15e2"),
    cp(636469, "0000000000038394fe569fbd5a42484c69f15dae9f10982a7a7ed96bff4a359e"),
    cp(720261, "000000000005658b461195d927cf3347ebf8a36e987a2d2be26ed4fce0f75b13"),
    cp(815426, "000000000004958ee412205bc78e41061e3cb66b55cdd5230efceaaa07990f55"),
    cp(870101, "000000000006fcd0f5cff20c46d9da02f7835137bce0629431f1968c6d1dcab5"),
    cp(978901, "00000000000456f795ce33e9ad1757150c1b5155230e4438b3690004e00f7ede"),
    cp(1272500, "000000000001567d68a0197b43ec9c764d49a78cee9c318d58c5ae8d3a6a4a88"),
    cp(1410098, "000000000000ad1fe5f741c497aab1f4c9f2799ed2cce1c6715601e84c543368"),
    cp(1538097, "00000000000002f54303f5b45c1ec74c75f085034fe0438834bb6ed2cb2f78f1"),
    cp(1967101, "0000000000006f92c571a6b1a6923efd03320b6bb6bc0656c4f23d01e8664a85"),
    cp(2062289, "000000000001b7e95495d1f418f69498804397745f29e024d40dbe1ef4725af8"),
    cp(2229225, "000000000003c9990b62822e5be8a49bebae5e270c39db223d3504d2ecd38604"),
    cp(2647621, "0000000000019c07fe91065d5dee6b42af812830e04ce59efa7fad10cb020396"),
    cp(4086591, "00000000000284dcc409a09957de00a54bc63bcc3348305375f5df8b150fc4c4"),
];

const TEST_CHECKPOINTS: &[Checkpoint] = &[Checkpoint { height: 0, hash: TEST_GENESIS_HASH }];

const REGTEST_CHECKPOINTS: &[Checkpoint] =
    &[Checkpoint { height: 0, hash: REGTEST_GENESIS_HASH }];

const fn strictly_increasing(table: &[Checkpoint]) -> bool {
    if table.is_empty() {
        return false;
    }
    let mut i = 1;
    while i < table.len() {
        if table[i].height <= table[i - 1].height {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(strictly_increasing(MAIN_CHECKPOINTS));
const _: () = assert!(strictly_increasing(TEST_CHECKPOINTS));
const _: () = assert!(strictly_increasing(REGTEST_CHECKPOINTS));

pub(super) static MAIN: CheckpointAuthority = CheckpointAuthority {
    checkpoints: MAIN_CHECKPOINTS,
    // UNIX timestamp of the last checkpoint block
    last_checkpoint_time: 1_449_673_550,
    // Total transactions between genesis and the last checkpoint
    transactions_at_last_checkpoint: 4_966_027,
    // Estimated transactions per day after the checkpoint
    transactions_per_day: 2880.0,
};

pub(super) static TEST: CheckpointAuthority = CheckpointAuthority {
    checkpoints: TEST_CHECKPOINTS,
    last_checkpoint_time: 1_374_901_773,
    transactions_at_last_checkpoint: 0,
    transactions_per_day: 2880.0,
};

pub(super) static REGTEST: CheckpointAuthority = CheckpointAuthority {
    checkpoints: REGTEST_CHECKPOINTS,
    last_checkpoint_time: 0,
    transactions_at_last_checkpoint: 0,
    transactions_per_day: 0.0,
};
