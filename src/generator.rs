//! Random client identifier generation.
//!
//! An identifier is a string of [`GenerationOptions::length`] characters,
//! each sampled independently and uniformly from the alphabet selected by
//! the options: the 52 ASCII letters, the 10 decimal digits, or both.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// A generated client identifier.
pub type ClientId = String;

/// Upper- and lowercase ASCII letters, in sampling order.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Decimal digits, in sampling order.
pub const NUMBERS: &str = "0123456789";

/// Options controlling the shape of a generated identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Number of characters to generate.
    pub length: usize,
    /// Include `A-Z` and `a-z` in the alphabet.
    pub letters: bool,
    /// Include `0-9` in the alphabet.
    pub numbers: bool,
}

impl GenerationOptions {
    /// Length used when none is specified.
    pub const DEFAULT_LENGTH: usize = 24;

    /// Returns the default options: 24 characters, letters and numbers.
    #[must_use]
    pub const fn new() -> Self {
        Self { length: Self::DEFAULT_LENGTH, letters: true, numbers: true }
    }

    /// Sets the number of characters to generate.
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Enables or disables letters.
    #[must_use]
    pub const fn with_letters(mut self, letters: bool) -> Self {
        self.letters = letters;
        self
    }

    /// Enables or disables digits.
    #[must_use]
    pub const fn with_numbers(mut self, numbers: bool) -> Self {
        self.numbers = numbers;
        self
    }

    /// Builds the sampling alphabet for these options.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyAlphabet`] when both character
    /// classes are disabled.
    pub fn alphabet(&self) -> Result<Vec<u8>, GenerateError> {
        let mut alphabet = Vec::with_capacity(LETTERS.len() + NUMBERS.len());
        if self.letters {
            alphabet.extend_from_slice(LETTERS.as_bytes());
        }
        if self.numbers {
            alphabet.extend_from_slice(NUMBERS.as_bytes());
        }
        if alphabet.is_empty() {
            return Err(GenerateError::EmptyAlphabet);
        }
        Ok(alphabet)
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a random client identifier using the thread-local RNG.
///
/// # Errors
///
/// Returns [`GenerateError::ZeroLength`] for a zero length and
/// [`GenerateError::EmptyAlphabet`] when no character class is enabled.
pub fn generate_client_id(options: &GenerationOptions) -> Result<ClientId, GenerateError> {
    generate_with_rng(&mut rand::thread_rng(), options)
}

pub(crate) fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    options: &GenerationOptions,
) -> Result<ClientId, GenerateError> {
    if options.length == 0 {
        return Err(GenerateError::ZeroLength);
    }
    let alphabet = options.alphabet()?;
    Ok((0..options.length).map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())])).collect())
}
