//! Transaction structure and wire serialization

use serde::{Deserialize, Serialize};

use super::Script;
use crate::crypto::{sha256d, Hash};

/// Sequence number of a final input
pub const SEQUENCE_FINAL: u32 = 0xFFFF_FFFF;

/// A transaction input referencing a previous output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// Hash of the transaction containing the output
    pub prev_tx_hash: Hash,
    /// Index of the output in that transaction
    pub output_index: u32,
    /// Unlocking script
    pub script_sig: Script,
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Amount in base units
    pub amount: u64,
    /// Locking script
    pub script_pubkey: Script,
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
}

impl Transaction {
    /// Create a coinbase transaction with a single input and output
    pub fn coinbase(script_sig: Script, amount: u64, script_pubkey: Script) -> Self {
        Self {
            version: 1,
            inputs: vec![TxInput {
                prev_tx_hash: Hash::zero(),
                output_index: 0xFFFF_FFFF,
                script_sig,
                sequence: SEQUENCE_FINAL,
            }],
            outputs: vec![TxOutput {
                amount,
                script_pubkey,
            }],
            lock_time: 0,
        }
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1
            && self.inputs[0].prev_tx_hash == Hash::zero()
            && self.inputs[0].output_index == 0xFFFF_FFFF
    }

    /// Transaction id
    pub fn hash(&self) -> Hash {
        sha256d(&self.to_bytes())
    }

    /// Serialize in network format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prev_tx_hash.0);
            bytes.extend_from_slice(&input.output_index.to_le_bytes());
            write_compact_size(&mut bytes, input.script_sig.len() as u64);
            bytes.extend_from_slice(input.script_sig.as_bytes());
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.amount.to_le_bytes());
            write_compact_size(&mut bytes, output.script_pubkey.len() as u64);
            bytes.extend_from_slice(output.script_pubkey.as_bytes());
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());

        bytes
    }
}

/// Variable-length integer prefix used for counts and script lengths
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coinbase_shape() {
        let tx = Transaction::coinbase(Script::new().push_int(1), 50, Script::new());
        assert!(tx.is_coinbase());
        assert_eq!(tx.inputs.len(), 1);
        assert_eq!(tx.outputs.len(), 1);
        assert_eq!(tx.outputs[0].amount, 50);
    }

    #[test]
    fn test_serialized_length() {
        let tx = Transaction::coinbase(Script(vec![0xaa; 3]), 1, Script(vec![0xbb; 2]));
        // version + count + outpoint + len + script + sequence
        //   + count + amount + len + script + locktime
        let expected = 4 + 1 + 36 + 1 + 3 + 4 + 1 + 8 + 1 + 2 + 4;
        assert_eq!(tx.to_bytes().len(), expected);
    }

    #[test]
    fn test_compact_size_boundaries() {
        let mut out = Vec::new();
        write_compact_size(&mut out, 0xfc);
        assert_eq!(out, vec![0xfc]);

        out.clear();
        write_compact_size(&mut out, 0xfd);
        assert_eq!(out, vec![0xfd, 0xfd, 0x00]);

        out.clear();
        write_compact_size(&mut out, 0x1_0000);
        assert_eq!(out, vec![0xfe, 0x00, 0x00, 0x01, 0x00]);

        out.clear();
        write_compact_size(&mut out, 0x1_0000_0000);
        assert_eq!(out.len(), 9);
    }
}
