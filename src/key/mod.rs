//! # Key Module
//!
//! A validated, immutable cipher key. Validation happens once, at
//! construction; every operation downstream can assume a non-empty key of
//! uppercase ASCII letters.

use crate::alphabet::letter_index;
use crate::errors::VigenereError;

use serde::{Deserialize, Serialize};

/// The repeating sequence of letters whose positions determine per-character
/// shift amounts.
///
/// Serialized as the bare letter string; deserialization goes through
/// [`Key::try_with`], so an empty or non-uppercase key can never be smuggled
/// past the validation boundary.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key {
    letters: String,
    shifts: Vec<u8>,
}

impl Key {
    /// Create a new key from a string of uppercase ASCII letters.
    ///
    /// # Errors
    ///
    /// Returns `VigenereError::EmptyKey` for an empty string and
    /// `VigenereError::InvalidKeyCharacter` for any character outside
    /// 'A'..='Z'.
    ///
    /// # Example
    ///
    /// ```
    /// # use vigenere_crypto::key::Key;
    /// let key = Key::try_with("KEY").unwrap();
    /// assert_eq!(key.len(), 3);
    /// assert_eq!(key.as_str(), "KEY");
    ///
    /// assert!(Key::try_with("").is_err());
    /// assert!(Key::try_with("key").is_err());
    /// assert!(Key::try_with("K3Y").is_err());
    /// ```
    pub fn try_with(letters: &str) -> Result<Self, VigenereError> {
        if letters.is_empty() {
            return Err(VigenereError::EmptyKey);
        }

        let mut shifts = Vec::with_capacity(letters.len());
        for (position, ch) in letters.chars().enumerate() {
            match letter_index(ch) {
                Some(index) => shifts.push(index),
                None => return Err(VigenereError::InvalidKeyCharacter { ch, position }),
            }
        }

        Ok(Key {
            letters: letters.to_string(),
            shifts,
        })
    }

    /// Returns the number of letters in the key. Always at least 1.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        // Unreachable for a constructed key, kept for the len/is_empty pair.
        self.shifts.is_empty()
    }

    /// Returns the key letters as originally supplied.
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// Returns the shift amount (0..=25) for the absolute message position
    /// `index`. The key cursor is `index mod len`, so it advances for every
    /// message character, alphabetic or not.
    ///
    /// # Example
    ///
    /// ```
    /// # use vigenere_crypto::key::Key;
    /// let key = Key::try_with("KEY").unwrap();
    /// assert_eq!(key.shift_at(0), 10); // 'K'
    /// assert_eq!(key.shift_at(1), 4);  // 'E'
    /// assert_eq!(key.shift_at(2), 24); // 'Y'
    /// assert_eq!(key.shift_at(3), 10); // wraps back to 'K'
    /// ```
    pub fn shift_at(&self, index: usize) -> u8 {
        self.shifts[index % self.shifts.len()]
    }
}

impl TryFrom<String> for Key {
    type Error = VigenereError;

    fn try_from(letters: String) -> Result<Self, Self::Error> {
        Key::try_with(&letters)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.letters
    }
}
