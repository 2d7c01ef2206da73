//! Consensus primitives - Block structure, transactions, scripts and targets
//!
//! Just enough to define and hash a genesis block; validation lives elsewhere.

mod block;
mod script;
mod target;
mod transaction;

pub use block::*;
pub use script::*;
pub use target::*;
pub use transaction::*;
