//! Compact difficulty targets
//!
//! `bits` encodes a 256-bit target as a one-byte exponent and a 23-bit
//! mantissa with a sign bit. Negative and overflowing encodings are invalid.

use crate::crypto::{Hash, U256};

/// Decode a compact target; `None` if negative, zero or overflowing
pub fn compact_to_target(bits: u32) -> Option<U256> {
    let size = bits >> 24;
    let mut word = bits & 0x007f_ffff;

    let target = if size <= 3 {
        word >>= 8 * (3 - size);
        U256::from(word)
    } else {
        if word != 0
            && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32))
        {
            return None;
        }
        U256::from(word) << (8 * (size - 3) as usize)
    };

    let negative = word != 0 && (bits & 0x0080_0000) != 0;
    if negative || target.is_zero() {
        return None;
    }
    Some(target)
}

/// Encode a target in compact form
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = (target.bits() as u32).div_ceil(8);
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (target >> (8 * (size - 3) as usize)).low_u64() as u32
    };

    // The mantissa's top bit is the sign; shift it out of the way.
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | (size << 24)
}

/// Whether `hash` satisfies `bits` and `bits` lies within `pow_limit`
pub fn check_proof_of_work(hash: &Hash, bits: u32, pow_limit: U256) -> bool {
    match compact_to_target(bits) {
        Some(target) if target <= pow_limit => hash.to_u256() <= target,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bitcoin_minimum() {
        let target = compact_to_target(0x1d00ffff).unwrap();
        assert_eq!(target, U256::from(0xffffu64) << 208);
    }

    #[test]
    fn test_decode_small_exponent() {
        assert_eq!(compact_to_target(0x03123456), Some(U256::from(0x123456u64)));
        assert_eq!(compact_to_target(0x02123456), Some(U256::from(0x1234u64)));
    }

    #[test]
    fn test_negative_and_zero_rejected() {
        assert_eq!(compact_to_target(0x04923456), None);
        assert_eq!(compact_to_target(0x00000000), None);
        assert_eq!(compact_to_target(0x01003456), None);
    }

    #[test]
    fn test_overflow_rejected() {
        assert_eq!(compact_to_target(0xff123456), None);
    }

    #[test]
    fn test_compact_round_trip_for_network_bits() {
        for bits in [0x1d00ffffu32, 0x1e0fffff, 0x207fffff] {
            let target = compact_to_target(bits).unwrap();
            assert_eq!(target_to_compact(target), bits);
        }
    }

    #[test]
    fn test_pow_check_respects_limit() {
        let easy = U256::MAX >> 1;
        let hash = Hash::zero();
        assert!(!check_proof_of_work(&hash, 0x1d00ffff, U256::from(1u64)));
        assert!(!check_proof_of_work(&hash, 0x00000000, easy));

        let mut high = [0xffu8; 32];
        high[31] = 0x7f;
        assert!(!check_proof_of_work(&Hash(high), 0x1d00ffff, easy));
    }
}
