//! Merkle root over transaction ids

use super::{hash_pair, Hash};

/// Compute the merkle root of a list of transaction ids
///
/// If the list is empty, returns zero hash.
/// A level with an odd number of nodes pairs its last node with itself.
pub fn compute_merkle_root(hashes: &[Hash]) -> Hash {
    let Some(first) = hashes.first() else {
        return Hash::zero();
    };

    if hashes.len() == 1 {
        return *first;
    }

    let mut current_level: Vec<Hash> = hashes.to_vec();

    while current_level.len() > 1 {
        let mut next_level = Vec::with_capacity(current_level.len().div_ceil(2));

        for chunk in current_level.chunks(2) {
            let right = chunk.get(1).unwrap_or(&chunk[0]);
            next_level.push(hash_pair(&chunk[0], right));
        }

        current_level = next_level;
    }

    current_level[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::sha256d;

    fn make_hashes(n: usize) -> Vec<Hash> {
        (0..n).map(|i| sha256d(&i.to_le_bytes())).collect()
    }

    #[test]
    fn test_empty_merkle_root() {
        assert_eq!(compute_merkle_root(&[]), Hash::zero());
    }

    #[test]
    fn test_single_element_is_its_own_root() {
        let hashes = make_hashes(1);
        assert_eq!(compute_merkle_root(&hashes), hashes[0]);
    }

    #[test]
    fn test_two_elements() {
        let hashes = make_hashes(2);
        let expected = hash_pair(&hashes[0], &hashes[1]);
        assert_eq!(compute_merkle_root(&hashes), expected);
    }

    #[test]
    fn test_odd_level_duplicates_last() {
        let hashes = make_hashes(3);
        let left = hash_pair(&hashes[0], &hashes[1]);
        let right = hash_pair(&hashes[2], &hashes[2]);
        assert_eq!(compute_merkle_root(&hashes), hash_pair(&left, &right));
    }
}
