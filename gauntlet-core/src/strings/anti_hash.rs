//! Birthday-bound search for strings that collide under polynomial hashes.
//!
//! Each base is attacked on top of the previous result: the two colliding
//! strings found so far become the letters of the next alphabet, so every
//! later word keeps colliding under all earlier bases.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::{error::StringError, random::RandomSource};

/// A `(modulus, base)` pair defining `h(s) = sum s[i] * base^(len-1-i) mod modulus`.
///
/// Characters contribute their Unicode scalar value.
///
/// # Examples
/// ```
/// use gauntlet_core::strings::HashBase;
///
/// let base = HashBase::new(1_000_000_007, 31)?;
/// assert_eq!(base.hash("ab"), (97 * 31 + 98) % 1_000_000_007);
/// # Ok::<(), gauntlet_core::StringError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HashBase {
    modulus: u64,
    base: u64,
}

impl HashBase {
    /// Largest supported modulus.
    pub const MAX_MODULUS: u64 = 2_000_000_000;

    /// Validates and creates a hash base.
    ///
    /// # Errors
    /// Returns [`StringError::InvalidHashBase`] unless
    /// `0 < modulus <= MAX_MODULUS` and `0 < base < modulus`.
    pub const fn new(modulus: u64, base: u64) -> Result<Self, StringError> {
        let reason = if modulus == 0 {
            Some("modulus must be positive")
        } else if modulus > Self::MAX_MODULUS {
            Some("moduli above 2000000000 are not supported")
        } else if base == 0 || base >= modulus {
            Some("base must satisfy 0 < base < modulus")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(StringError::InvalidHashBase {
                modulus,
                base,
                reason,
            }),
            None => Ok(Self { modulus, base }),
        }
    }

    /// Modulus of the hash.
    #[must_use]
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Multiplier applied per character.
    #[must_use]
    pub const fn base(&self) -> u64 {
        self.base
    }

    /// Polynomial hash of `text`.
    #[must_use]
    pub fn hash(&self, text: &str) -> u64 {
        text.chars().fold(0, |hash, ch| {
            (hash * self.base + u64::from(u32::from(ch))) % self.modulus
        })
    }

    /// `base^exponent mod modulus`.
    fn power(&self, exponent: usize) -> u64 {
        (0..exponent).fold(1 % self.modulus, |acc, _| acc * self.base % self.modulus)
    }
}

/// Samples words over `letters` until two distinct words share a hash under
/// `base`, and returns them spelled out.
///
/// `letters` must be non-empty strings of equal length. Word lengths start at
/// three letters and grow while fewer than `5 * sqrt(modulus)` distinct words
/// exist or the sample produced no collision.
pub(super) fn find_collision(
    letters: &[String],
    base: HashBase,
    max_letters: usize,
    rng: &mut impl RandomSource,
) -> Result<[String; 2], StringError> {
    let letter_len = letters.first().map_or(0, |letter| letter.chars().count());
    let letter_power = base.power(letter_len);
    let letter_hashes: Vec<u64> = letters.iter().map(|letter| base.hash(letter)).collect();
    let word_hash = |word: &[usize]| {
        word.iter().fold(0, |hash, &letter| {
            (hash * letter_power + letter_hashes[letter]) % base.modulus
        })
    };

    let samples = usize::try_from(5 * base.modulus.isqrt()).unwrap_or(usize::MAX);
    let alphabet = letters.len();

    for length in 3..=max_letters {
        let exponent = u32::try_from(length).unwrap_or(u32::MAX);
        if alphabet.saturating_pow(exponent) < samples {
            continue;
        }
        trace!(length, samples, "sampling words");

        let mut seen: HashSet<Vec<usize>> = HashSet::with_capacity(samples);
        let mut by_hash: HashMap<u64, Vec<usize>> = HashMap::with_capacity(samples);
        while seen.len() < samples {
            let word: Vec<usize> = (0..length).map(|_| rng.uniform(alphabet)).collect();
            if seen.contains(&word) {
                continue;
            }
            let hash = word_hash(&word);
            if let Some(other) = by_hash.get(&hash) {
                debug!(modulus = base.modulus, length, tried = seen.len(), "collision found");
                return Ok([spell(letters, other), spell(letters, &word)]);
            }
            by_hash.insert(hash, word.clone());
            seen.insert(word);
        }
    }

    Err(StringError::SearchExhausted {
        modulus: base.modulus,
        max_length: max_letters,
    })
}

fn spell(letters: &[String], word: &[usize]) -> String {
    word.iter().map(|&letter| letters[letter].as_str()).collect()
}

/// Draws `len` characters uniformly from `alphabet`.
pub(super) fn random_word(alphabet: &[char], len: usize, rng: &mut impl RandomSource) -> String {
    (0..len)
        .map(|_| alphabet[rng.uniform(alphabet.len())])
        .collect()
}
