//! Highlight ranges and the digest used to detect changes between them.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

/// A highlighted span of text, as document offsets `start..end`.
///
/// Only built through [`HighlightRange::new`], so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HighlightRange {
    start: usize,
    end: usize,
}

impl HighlightRange {
    /// Creates a range.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "highlight range start {} is past its end {}",
            start,
            end
        );
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the range in offsets.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<(usize, usize)> for HighlightRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// 128-bit digest of an ordered list of highlight ranges.
///
/// Each range contributes its start then its end offset as little-endian
/// `u64`s, in the order given, and the digest is the first 16 bytes of the
/// SHA-256 of that byte string. Reordering the same ranges yields a different
/// fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 16]);

impl Fingerprint {
    /// Computes the fingerprint of `ranges`.
    pub fn of(ranges: &[HighlightRange]) -> Self {
        let mut hasher = Sha256::new();
        for range in ranges {
            hasher.update((range.start as u64).to_le_bytes());
            hasher.update((range.end as u64).to_le_bytes());
        }
        let digest = hasher.finalize();

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_order_sensitive() {
        let a = HighlightRange::new(0, 5);
        let b = HighlightRange::new(10, 15);

        assert_eq!(Fingerprint::of(&[a, b]), Fingerprint::of(&[a, b]));
        assert_ne!(Fingerprint::of(&[a, b]), Fingerprint::of(&[b, a]));
    }

    #[test]
    fn test_fingerprint_distinguishes_endpoints() {
        // Same offsets, split differently between ranges
        let first = [HighlightRange::new(0, 5), HighlightRange::new(6, 9)];
        let second = [HighlightRange::new(0, 6), HighlightRange::new(5, 9)];
        assert_ne!(Fingerprint::of(&first), Fingerprint::of(&second));
    }

    #[test]
    fn test_display_is_32_hex_digits() {
        let text = Fingerprint::of(&[HighlightRange::new(1, 2)]).to_string();
        assert_eq!(text.len(), 32);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    #[should_panic(expected = "past its end")]
    fn test_inverted_range_panics() {
        let _ = HighlightRange::new(9, 3);
    }
}
