//! Node bootstrap - genesis block definition and verification

mod genesis;

pub use genesis::*;
