//! Bit-level helpers: popcount, evenness ratio, balance.
//!
//! These operate directly on hex nibbles and do not require grid
//! construction.
//!
//! # Citations
//! - Table-driven popcount: Warren, "Hacker's Delight", Section 5-1 (2002)

use crate::input::HashInput;

/// Lookup table mapping a nibble value (0–15) to its one-bit count (0–4).
const POP4: [u32; 16] = [0, 1, 1, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 3, 3, 4];

/// Counts one-bits in the hash.
pub fn popcount(input: &HashInput) -> u32 {
    (0..input.sectors())
        .map(|s| POP4[input.nibble(s) as usize])
        .sum()
}

/// Evenness ratio: `min(ones, zeros) / max(ones, zeros)`, in `[0, 1]`.
///
/// `1.0` means a perfectly balanced hash; `0.0` means all bits equal.
pub fn evenness_ratio(input: &HashInput) -> f64 {
    let ones = popcount(input);
    let zeros = input.bits().bits() as u32 - ones;
    let (lo, hi) = (ones.min(zeros), ones.max(zeros));
    lo as f64 / hi as f64
}

/// Returns true iff the hash has exactly as many one-bits as zero-bits.
pub fn is_balanced(input: &HashInput) -> bool {
    2 * popcount(input) as usize == input.bits().bits()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{HashBits, HashInput};

    fn input_of(hex: &str, bits: HashBits) -> HashInput {
        HashInput::parse(hex, bits).unwrap()
    }

    #[test]
    fn popcount_extremes() {
        assert_eq!(popcount(&input_of(&"0".repeat(64), HashBits::B256)), 0);
        assert_eq!(popcount(&input_of(&"f".repeat(64), HashBits::B256)), 256);
        assert_eq!(popcount(&input_of(&"f".repeat(40), HashBits::B160)), 160);
    }

    /// Each hex digit contributes its own bit count.
    #[test]
    fn popcount_per_nibble() {
        // "7" = 0111 -> 3 bits per digit.
        assert_eq!(popcount(&input_of(&"7".repeat(40), HashBits::B160)), 120);
        // Mixed vector: "f0" contributes 4 per pair.
        assert_eq!(popcount(&input_of(&"f0".repeat(32), HashBits::B256)), 128);
    }

    #[test]
    fn balance_iff_half_ones() {
        let balanced = input_of(&"f0".repeat(32), HashBits::B256);
        assert!(is_balanced(&balanced));
        assert_eq!(popcount(&balanced), 128);

        let sealed = input_of(&"f".repeat(64), HashBits::B256);
        assert!(!is_balanced(&sealed));

        let narrow = input_of(&"a5".repeat(20), HashBits::B160);
        // "a" = 1010 (2 bits), "5" = 0101 (2 bits): 80 ones of 160.
        assert!(is_balanced(&narrow));
        assert_eq!(popcount(&narrow), 80);
    }

    #[test]
    fn evenness_ratio_range() {
        assert_eq!(evenness_ratio(&input_of(&"0".repeat(64), HashBits::B256)), 0.0);
        assert_eq!(evenness_ratio(&input_of(&"f0".repeat(32), HashBits::B256)), 1.0);

        // 16 ones of 256: ratio = 16 / 240.
        let sparse = input_of(&("1".repeat(16) + &"0".repeat(48)), HashBits::B256);
        let ratio = evenness_ratio(&sparse);
        assert!((ratio - 16.0 / 240.0).abs() < 1e-12);
    }
}
