//! Validated hash input and bit-width handling.
//!
//! Every analysis in this crate is a pure function of a `(hex, bits)` pair.
//! `HashInput` is the validated form of that pair: construction checks the
//! length and digit alphabet once, so every downstream component can index
//! nibbles without re-validating.
//!
//! # Citations
//! - SHA-256: NIST FIPS 180-4 (2015)
//! - Hexadecimal text encoding: RFC 4648, Section 8 (2006)

use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Supported hash widths.
///
/// The grid geometry is derived entirely from the width: a hash of `b` bits
/// becomes 4 rings of `b / 4` sectors. Widths outside this enum are
/// unrepresentable, so "wrong bit-width" can never reach the analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HashBits {
    /// 160-bit hashes (40 hex digits, 40 sectors).
    B160,
    /// 256-bit hashes (64 hex digits, 64 sectors).
    B256,
}

impl HashBits {
    /// Returns the width in bits.
    #[inline]
    pub const fn bits(self) -> usize {
        match self {
            HashBits::B160 => 160,
            HashBits::B256 => 256,
        }
    }

    /// Returns the number of hex digits (nibbles) in a hash of this width.
    #[inline]
    pub const fn nibbles(self) -> usize {
        self.bits() / 4
    }

    /// Returns the number of angular sectors in the mandala grid.
    ///
    /// One sector per hex digit.
    #[inline]
    pub const fn sectors(self) -> usize {
        self.nibbles()
    }
}

impl fmt::Display for HashBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Error type for hash input validation.
///
/// This is the only error the engine raises. It is detected synchronously
/// before any analysis runs; malformed input is never coerced by truncation
/// or padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputError {
    /// The hex string (after the optional `0x` prefix) has the wrong length
    /// for the requested width.
    LengthMismatch {
        /// Expected number of hex digits.
        expected: usize,
        /// Number of digits actually supplied.
        actual: usize,
    },
    /// A character is not a hex digit.
    InvalidDigit {
        /// 0-based position after the optional prefix.
        position: usize,
        /// The offending character.
        found: char,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::LengthMismatch { expected, actual } => {
                write!(f, "expected {} hex digits, got {}", expected, actual)
            }
            InputError::InvalidDigit { position, found } => {
                write!(f, "invalid hex digit {:?} at position {}", found, position)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// A validated, immutable hex hash of known bit-width.
///
/// The optional `0x` prefix is stripped at parse time; the digit case of the
/// original text is preserved (slices reported by the symmetry finder quote
/// the caller's spelling verbatim).
///
/// # Invariants
/// - `hex.len() == bits.nibbles()`
/// - every byte of `hex` is an ASCII hex digit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashInput {
    hex: String,
    bits: HashBits,
}

impl HashInput {
    /// Parses and validates a hex string of the given width.
    ///
    /// Accepts an optional lowercase `0x` prefix. Fails with
    /// [`InputError::LengthMismatch`] or [`InputError::InvalidDigit`];
    /// the input is never truncated or padded to fit.
    pub fn parse(raw: &str, bits: HashBits) -> Result<Self, InputError> {
        let clean = raw.strip_prefix("0x").unwrap_or(raw);
        let expected = bits.nibbles();
        if clean.len() != expected {
            return Err(InputError::LengthMismatch {
                expected,
                actual: clean.len(),
            });
        }
        for (position, ch) in clean.chars().enumerate() {
            if !ch.is_ascii_hexdigit() {
                return Err(InputError::InvalidDigit {
                    position,
                    found: ch,
                });
            }
        }
        Ok(Self {
            hex: clean.to_owned(),
            bits,
        })
    }

    /// Derives a hash input from free text via SHA-256.
    ///
    /// For 160-bit mode the *last* 40 hex digits of the digest are kept, so
    /// both widths share one digest pipeline.
    pub fn from_text(text: &str, bits: HashBits) -> Self {
        let digest = Sha256::digest(text.as_bytes());
        let mut full = String::with_capacity(64);
        for byte in digest {
            full.push_str(&format!("{:02x}", byte));
        }
        let keep = bits.nibbles();
        let hex = full[full.len() - keep..].to_owned();
        Self { hex, bits }
    }

    /// Generates a uniformly random hash of the given width.
    ///
    /// The RNG is supplied by the caller; the engine itself stays
    /// deterministic and side-effect free.
    pub fn random<R: Rng + ?Sized>(bits: HashBits, rng: &mut R) -> Self {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let hex = (0..bits.nibbles())
            .map(|_| DIGITS[rng.gen_range(0..16)] as char)
            .collect();
        Self { hex, bits }
    }

    /// Returns the hex digits (no prefix, original case).
    #[inline]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Returns the bit-width of this input.
    #[inline]
    pub const fn bits(&self) -> HashBits {
        self.bits
    }

    /// Returns the number of sectors in the derived grid.
    #[inline]
    pub const fn sectors(&self) -> usize {
        self.bits.sectors()
    }

    /// Returns the nibble value (0–15) of the hex digit at `sector`.
    ///
    /// # Panics
    /// Panics if `sector >= self.sectors()`. Digit validity is guaranteed by
    /// the parse invariant.
    #[inline]
    pub fn nibble(&self, sector: usize) -> u8 {
        match self.hex.as_bytes()[sector] {
            b @ b'0'..=b'9' => b - b'0',
            b @ b'a'..=b'f' => b - b'a' + 10,
            b @ b'A'..=b'F' => b - b'A' + 10,
            _ => unreachable!("digits validated at construction"),
        }
    }

    /// Returns the circular substring covering `[start, start + length)`.
    ///
    /// When the span crosses the end of the string, the tail and head are
    /// concatenated so the text survives the wrap intact.
    pub fn circular_slice(&self, start: usize, length: usize) -> String {
        let n = self.hex.len();
        if start + length <= n {
            self.hex[start..start + length].to_owned()
        } else {
            let end = (start + length) % n;
            let mut slice = String::with_capacity(length);
            slice.push_str(&self.hex[start..]);
            slice.push_str(&self.hex[..end]);
            slice
        }
    }
}

impl fmt::Display for HashInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A well-formed 256-bit hash parses with or without the `0x` prefix.
    #[test]
    fn parse_accepts_optional_prefix() {
        let plain = "a".repeat(64);
        let prefixed = format!("0x{}", plain);
        let a = HashInput::parse(&plain, HashBits::B256).unwrap();
        let b = HashInput::parse(&prefixed, HashBits::B256).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hex(), plain);
    }

    /// Digit case is preserved, and uppercase digits are valid.
    #[test]
    fn parse_preserves_case() {
        let hex = "AbCdEf0123456789".repeat(4);
        let input = HashInput::parse(&hex, HashBits::B256).unwrap();
        assert_eq!(input.hex(), hex);
        assert_eq!(input.nibble(0), 0xa);
        assert_eq!(input.nibble(1), 0xb);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = HashInput::parse("abc", HashBits::B160).unwrap_err();
        assert_eq!(
            err,
            InputError::LengthMismatch {
                expected: 40,
                actual: 3
            }
        );
        // A 160-bit hash is not a valid 256-bit hash and vice versa.
        let short = "0".repeat(40);
        assert!(HashInput::parse(&short, HashBits::B256).is_err());
    }

    #[test]
    fn parse_rejects_non_hex_digit() {
        let mut hex = "0".repeat(64);
        hex.replace_range(10..11, "g");
        let err = HashInput::parse(&hex, HashBits::B256).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidDigit {
                position: 10,
                found: 'g'
            }
        );
    }

    /// An uppercase `0X` prefix is not stripped, so the `X` fails validation.
    #[test]
    fn parse_rejects_uppercase_prefix() {
        let hex = format!("0X{}", "0".repeat(64));
        assert!(HashInput::parse(&hex, HashBits::B256).is_err());
    }

    /// SHA-256 of the empty string is a fixed vector (FIPS 180-4).
    #[test]
    fn from_text_matches_known_digest() {
        let input = HashInput::from_text("", HashBits::B256);
        assert_eq!(
            input.hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        // 160-bit mode keeps the last 40 digits of the same digest.
        let narrow = HashInput::from_text("", HashBits::B160);
        assert_eq!(narrow.hex(), "996fb92427ae41e4649b934ca495991b7852b855");
    }

    #[test]
    fn from_text_abc_vector() {
        let input = HashInput::from_text("abc", HashBits::B256);
        assert_eq!(
            input.hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    /// Random inputs are structurally valid and reproducible per seed.
    #[test]
    fn random_is_valid_and_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = HashInput::random(HashBits::B160, &mut rng);
        assert_eq!(a.hex().len(), 40);
        assert!(HashInput::parse(a.hex(), HashBits::B160).is_ok());

        let mut rng2 = StdRng::seed_from_u64(7);
        let b = HashInput::random(HashBits::B160, &mut rng2);
        assert_eq!(a, b);
    }

    #[test]
    fn circular_slice_wraps() {
        let hex: String = ('0'..='9').chain('a'..='f').cycle().take(40).collect();
        let input = HashInput::parse(&hex, HashBits::B160).unwrap();
        assert_eq!(input.circular_slice(0, 4), &hex[0..4]);
        let wrapped = input.circular_slice(38, 4);
        assert_eq!(wrapped.len(), 4);
        assert_eq!(&wrapped[..2], &hex[38..40]);
        assert_eq!(&wrapped[2..], &hex[0..2]);
    }
}
