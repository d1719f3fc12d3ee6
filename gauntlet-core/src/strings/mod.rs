//! Adversarial and structured string generators.
//!
//! [`StringRandom`] is constructed once by the caller and shared by
//! reference. It produces Thue-Morse and abacaba sequences and pairs of
//! distinct strings that collide under a list of polynomial hashes.

mod alphabet;
mod anti_hash;

use tracing::{debug, instrument};

use crate::{error::StringError, random::RandomSource};

pub use self::{alphabet::parse_alphabet, anti_hash::HashBase};

/// Default limit on the number of letters in a sampled word.
pub const DEFAULT_WORD_LIMIT: usize = 64;

/// String generator configuration.
///
/// # Examples
/// ```
/// use gauntlet_core::{SeededRandom, strings::{HashBase, StringRandom}};
///
/// let strings = StringRandom::new();
/// let base = HashBase::new(1_000_003, 131)?;
/// let (left, right) = strings.anti_hash(&mut SeededRandom::new(5), &[base], "a-z", Some(40))?;
/// assert_ne!(left, right);
/// assert_eq!(base.hash(&left), base.hash(&right));
/// assert_eq!(left.chars().count(), 40);
/// # Ok::<(), gauntlet_core::StringError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StringRandom {
    word_limit: usize,
}

impl StringRandom {
    /// Creates a generator with [`DEFAULT_WORD_LIMIT`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            word_limit: DEFAULT_WORD_LIMIT,
        }
    }

    /// Caps the number of letters per sampled word in [`StringRandom::anti_hash`].
    #[must_use]
    pub const fn with_word_limit(mut self, word_limit: usize) -> Self {
        self.word_limit = word_limit;
        self
    }

    /// Longest word, in letters, the collision search samples.
    #[must_use]
    pub const fn word_limit(&self) -> usize {
        self.word_limit
    }

    /// Thue-Morse sequence: character `i` is `first` when `i` has an even
    /// number of set bits, `second` otherwise.
    ///
    /// ```
    /// use gauntlet_core::strings::StringRandom;
    ///
    /// assert_eq!(StringRandom::new().thue_morse(8, 'a', 'b'), "abbabaab");
    /// ```
    #[must_use]
    pub fn thue_morse(&self, len: usize, first: char, second: char) -> String {
        (0..len)
            .map(|i| if i.count_ones() % 2 == 0 { first } else { second })
            .collect()
    }

    /// Abacaba sequence: character `i` is `first` advanced by the number of
    /// trailing ones of `i`.
    ///
    /// ```
    /// use gauntlet_core::strings::StringRandom;
    ///
    /// assert_eq!(StringRandom::new().abacaba(7, 'a')?, "abacaba");
    /// # Ok::<(), gauntlet_core::StringError>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`StringError::InvalidCharacter`] when an advanced code point
    /// is not a `char`.
    pub fn abacaba(&self, len: usize, first: char) -> Result<String, StringError> {
        (0..len)
            .map(|i| {
                let code_point = u32::from(first).saturating_add((!i).trailing_zeros());
                char::from_u32(code_point).ok_or(StringError::InvalidCharacter { code_point })
            })
            .collect()
    }

    /// Two distinct strings over `alphabet` with equal hashes under every
    /// base in `bases`.
    ///
    /// `alphabet` is a pattern understood by [`parse_alphabet`]. With
    /// `length`, both strings are padded with the same random prefix and
    /// suffix to exactly that many characters.
    ///
    /// # Errors
    /// - [`StringError::AlphabetTooSmall`] when `alphabet` yields fewer than
    ///   two characters.
    /// - [`StringError::SearchExhausted`] when no collision appears within
    ///   the word limit.
    /// - [`StringError::LengthTooShort`] when the colliding pair is longer
    ///   than `length`.
    #[instrument(level = "debug", skip(self, rng, bases), fields(bases = bases.len()))]
    pub fn anti_hash(
        &self,
        rng: &mut impl RandomSource,
        bases: &[HashBase],
        alphabet: &str,
        length: Option<usize>,
    ) -> Result<(String, String), StringError> {
        let chars = parse_alphabet(alphabet);
        if chars.len() < 2 {
            return Err(StringError::AlphabetTooSmall { size: chars.len() });
        }

        let mut letters: Vec<String> = chars.iter().map(char::to_string).collect();
        for &base in bases {
            letters = anti_hash::find_collision(&letters, base, self.word_limit, rng)?.into();
        }
        let mut pair = letters.into_iter();
        let (Some(left), Some(right)) = (pair.next(), pair.next()) else {
            return Err(StringError::AlphabetTooSmall { size: chars.len() });
        };
        debug!(core = left.chars().count(), "colliding pair found");

        let Some(length) = length else {
            return Ok((left, right));
        };
        let core = left.chars().count();
        let extra = length
            .checked_sub(core)
            .ok_or(StringError::LengthTooShort {
                required: core,
                requested: length,
            })?;
        let prefix_len = rng.uniform(extra + 1);
        let prefix = anti_hash::random_word(&chars, prefix_len, rng);
        let suffix = anti_hash::random_word(&chars, extra - prefix_len, rng);
        Ok((
            format!("{prefix}{left}{suffix}"),
            format!("{prefix}{right}{suffix}"),
        ))
    }
}

impl Default for StringRandom {
    fn default() -> Self {
        Self::new()
    }
}
