//! # Cipher Module
//!
//! The [`Vigenere`] engine: polyalphabetic substitution over 'A'..='Z' with a
//! repeating key. Each alphabetic message character is shifted by the
//! alphabet index of the key letter at the same cyclic position; every other
//! character is copied through unchanged.

use crate::alphabet::{ALPHABET_SIZE, INDEX_TO_LETTER_MAP, letter_index};
use crate::errors::VigenereError;
use crate::key::Key;
use crate::ring::Ring;

use serde::{Deserialize, Serialize};

/// A Vigenère cipher engine holding the current key.
///
/// The key cursor is the absolute character index modulo the key length, so
/// it advances across non-alphabetic characters too.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Vigenere {
    key: Key,
    ring: Ring,
}

impl Vigenere {
    /// Create a new engine from a raw key string.
    ///
    /// # Errors
    ///
    /// Returns the `Key::try_with` validation errors for an empty key or a
    /// key containing anything outside 'A'..='Z'.
    ///
    /// # Example
    ///
    /// ```
    /// # use vigenere_crypto::cipher::Vigenere;
    /// let cipher = Vigenere::try_with("KEY").unwrap();
    /// assert_eq!(cipher.encrypt("HELLO"), "RIJVS");
    ///
    /// assert!(Vigenere::try_with("").is_err());
    /// ```
    pub fn try_with(key: &str) -> Result<Self, VigenereError> {
        Ok(Self::with_key(Key::try_with(key)?))
    }

    /// Create a new engine from an already-validated key.
    pub fn with_key(key: Key) -> Self {
        Vigenere {
            key,
            ring: Ring::try_with(ALPHABET_SIZE).expect("the 26-letter alphabet is a valid modulus"),
        }
    }

    /// Returns the current key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Encrypts a message, shifting each uppercase letter forward by the
    /// shift amount of the key letter at the same cyclic position.
    ///
    /// Total over arbitrary input: characters outside 'A'..='Z' (digits,
    /// punctuation, whitespace, lowercase, non-ASCII) pass through unchanged
    /// while still advancing the key cursor. The output always has the same
    /// character count as the input.
    ///
    /// # Example
    ///
    /// ```
    /// # use vigenere_crypto::cipher::Vigenere;
    /// let cipher = Vigenere::try_with("KEY").unwrap();
    /// assert_eq!(cipher.encrypt("HELLO"), "RIJVS");
    /// assert_eq!(cipher.encrypt(""), "");
    /// assert_eq!(cipher.encrypt("100%"), "100%");
    /// ```
    pub fn encrypt(&self, message: &str) -> String {
        let mut encrypted = String::with_capacity(message.len());

        for (i, ch) in message.chars().enumerate() {
            match letter_index(ch) {
                Some(index) => encrypted.push(self.shift_forward(index, self.key.shift_at(i))),
                None => encrypted.push(ch),
            }
        }

        encrypted
    }

    /// Decrypts a message, the exact inverse walk of [`encrypt`]: each
    /// uppercase letter is shifted backward by the shift amount of the key
    /// letter at the same cyclic position.
    ///
    /// `decrypt(encrypt(m)) == m` for every message `m`, since both
    /// directions derive the same shift at every index.
    ///
    /// [`encrypt`]: Vigenere::encrypt
    ///
    /// # Example
    ///
    /// ```
    /// # use vigenere_crypto::cipher::Vigenere;
    /// let cipher = Vigenere::try_with("KEY").unwrap();
    /// assert_eq!(cipher.decrypt("RIJVS"), "HELLO");
    /// ```
    pub fn decrypt(&self, message: &str) -> String {
        let mut decrypted = String::with_capacity(message.len());

        for (i, ch) in message.chars().enumerate() {
            match letter_index(ch) {
                Some(index) => decrypted.push(self.shift_backward(index, self.key.shift_at(i))),
                None => decrypted.push(ch),
            }
        }

        decrypted
    }

    /// Returns true iff `ciphertext` is exactly the encryption of
    /// `plaintext` under the current key.
    ///
    /// This is a correspondence check by re-derivation and equality, not a
    /// detection heuristic: without the matching plaintext there is no way
    /// to tell whether a message was produced by this cipher.
    ///
    /// # Example
    ///
    /// ```
    /// # use vigenere_crypto::cipher::Vigenere;
    /// let cipher = Vigenere::try_with("KEY").unwrap();
    /// assert!(cipher.is_encrypted("RIJVS", "HELLO"));
    /// assert!(!cipher.is_encrypted("RIJVT", "HELLO"));
    /// ```
    pub fn is_encrypted(&self, ciphertext: &str, plaintext: &str) -> bool {
        ciphertext == self.encrypt(plaintext)
    }

    /// Replaces the engine's key with `new_key`.
    ///
    /// # Errors
    ///
    /// Returns the `Key::try_with` validation errors; on failure the prior
    /// key is kept.
    ///
    /// # Example
    ///
    /// ```
    /// # use vigenere_crypto::cipher::Vigenere;
    /// let mut cipher = Vigenere::try_with("KEY").unwrap();
    /// cipher.set_key("LEMON").unwrap();
    /// assert_eq!(cipher.key().as_str(), "LEMON");
    ///
    /// assert!(cipher.set_key("not a key").is_err());
    /// assert_eq!(cipher.key().as_str(), "LEMON");
    /// ```
    pub fn set_key(&mut self, new_key: &str) -> Result<(), VigenereError> {
        self.key = Key::try_with(new_key)?;
        Ok(())
    }

    /// Advances the letter at alphabet index `index` by `n` positions,
    /// wrapping around the 26-letter alphabet.
    fn shift_forward(&self, index: u8, n: u8) -> char {
        let shifted = self.ring.add(index as i64, n as i64) as u8;
        INDEX_TO_LETTER_MAP[&shifted]
    }

    /// Retreats the letter at alphabet index `index` by `n` positions,
    /// wrapping around the 26-letter alphabet.
    fn shift_backward(&self, index: u8, n: u8) -> char {
        let shifted = self.ring.sub(index as i64, n as i64) as u8;
        INDEX_TO_LETTER_MAP[&shifted]
    }
}
