//! Seed minting for fresh deals.

use alloc::string::String;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Length of a minted seed.
pub const SEED_LEN: usize = 6;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Mints a six character lowercase alphanumeric seed.
pub fn mint_seed<R: Rng>(rng: &mut R) -> String {
    (0..SEED_LEN)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}

/// Mints a seed from a caller-supplied entropy value.
///
/// ```
/// use jouster::seed::{mint_seed_from_entropy, SEED_LEN};
///
/// let seed = mint_seed_from_entropy(7);
/// assert_eq!(seed.len(), SEED_LEN);
/// assert_eq!(seed, mint_seed_from_entropy(7));
/// ```
#[must_use]
pub fn mint_seed_from_entropy(entropy: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(entropy);
    mint_seed(&mut rng)
}

/// Returns whether the string can seed a game.
#[must_use]
pub const fn is_valid_seed(seed: &str) -> bool {
    !seed.is_empty()
}
