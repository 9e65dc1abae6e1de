//! Stable identification of component kinds.

use std::fmt;

use rand::Rng;

/// A 128-bit tag naming a component kind.
///
/// Built-in kinds declare a fixed tag so it stays the same across process
/// runs and compilations; kinds created at runtime can use a
/// [`random`](StableTypeId::random) one. Collisions between distinct kinds
/// are not defended against beyond the generator's entropy.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StableTypeId {
    hi: u64,
    lo: u64,
}

impl StableTypeId {
    /// Creates a tag from two fixed halves.
    pub const fn fixed(hi: u64, lo: u64) -> Self {
        Self { hi, lo }
    }

    /// Generates a fresh version 4 tag.
    ///
    /// Only uniqueness matters here, so entropy comes from the thread-local
    /// generator rather than a cryptographic source.
    ///
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let mut hi: u64 = rng.gen();
        let mut lo: u64 = rng.gen();
        hi &= 0xffff_ffff_ffff_0fff; // clear the version nibble
        hi |= 0x0000_0000_0000_4000; // set to version 4
        lo &= 0x3fff_ffff_ffff_ffff; // clear the variant bits
        lo |= 0x8000_0000_0000_0000; // set to IETF variant
        Self { hi, lo }
    }

    pub const fn hi(&self) -> u64 {
        self.hi
    }

    pub const fn lo(&self) -> u64 {
        self.lo
    }
}

impl fmt::Display for StableTypeId {
    /// Canonical `8-4-4-4-12` UUID text form.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            self.hi >> 32,
            (self.hi >> 16) & 0xffff,
            self.hi & 0xffff,
            self.lo >> 48,
            self.lo & 0xffff_ffff_ffff,
        )
    }
}

impl fmt::Debug for StableTypeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "StableTypeId({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_roundtrip() {
        let tag = StableTypeId::fixed(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210);
        assert_eq!(tag.hi(), 0x0123_4567_89ab_cdef);
        assert_eq!(tag.lo(), 0xfedc_ba98_7654_3210);
        assert_eq!(tag, StableTypeId::fixed(tag.hi(), tag.lo()));
    }

    #[test]
    fn test_random_marker_bits() {
        for _ in 0..100 {
            let tag = StableTypeId::random();
            assert_eq!((tag.hi() >> 12) & 0xf, 4);
            assert_eq!(tag.lo() >> 62, 0b10);
        }
    }

    #[test]
    fn test_random_distinct() {
        let a = StableTypeId::random();
        let b = StableTypeId::random();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let tag = StableTypeId::fixed(0x1234_5678_9abc_4def, 0x8123_4567_89ab_cdef);
        assert_eq!(tag.to_string(), "12345678-9abc-4def-8123-456789abcdef");
    }
}
