//! Deterministic random stream derived from a string seed.
//!
//! The seed string is folded into a 32-bit state with the `h * 31 + c` string
//! hash over UTF-16 code units, then expanded with mulberry32. The output is
//! bit-for-bit reproducible, so a seed recorded anywhere replays the same
//! deal.

use rand::RngCore;

const INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Folds a seed string into the initial generator state.
#[must_use]
pub fn hash_seed(seed: &str) -> u32 {
    seed.encode_utf16().fold(0u32, |h, unit| {
        h.wrapping_mul(31).wrapping_add(u32::from(unit))
    })
}

/// Mulberry32 generator seeded from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededGenerator {
    state: u32,
}

impl SeededGenerator {
    /// Creates a generator from a seed string.
    ///
    /// ```
    /// use jouster::rng::SeededGenerator;
    ///
    /// let mut a = SeededGenerator::from_seed("abc123");
    /// let mut b = SeededGenerator::from_seed("abc123");
    /// assert_eq!(a.next_f64(), b.next_f64());
    /// ```
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        Self::from_state(hash_seed(seed))
    }

    /// Creates a generator from a raw state word.
    #[must_use]
    pub const fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Returns the current state word.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Returns the next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.step()) / TWO_POW_32
    }

    /// Returns an index in `0..bound` as `floor(next_f64() * bound)`.
    pub(crate) fn next_index(&mut self, bound: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "bounds are card counts, far below 2^53"
        )]
        let scaled = self.next_f64() * bound as f64;
        scaled as usize
    }

    const fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl RngCore for SeededGenerator {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        rand::rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst);
    }
}
