//! Cryptography module - SHA-256d hashing, merkle roots, alert keys

mod alert;
mod hash;
mod merkle;

pub use alert::*;
pub use hash::*;
pub use merkle::*;

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer used for proof-of-work targets
    pub struct U256(4);
}
