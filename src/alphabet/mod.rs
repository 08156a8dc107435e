//! # Alphabet Module
//!
//! Static encoding tables between the uppercase Latin alphabet 'A'..='Z' and
//! the indices 0..=25 the cipher's modular arithmetic operates on.

pub mod encoding_table;

pub use encoding_table::{INDEX_TO_LETTER_MAP, LETTER_TO_INDEX_MAP};

/// Number of letters in the cipher alphabet.
pub const ALPHABET_SIZE: u64 = 26;

/// Returns the zero-based alphabet index of `ch`, or `None` when `ch` is not
/// an uppercase ASCII letter. A `None` here is what classifies a message
/// character as pass-through.
pub fn letter_index(ch: char) -> Option<u8> {
    LETTER_TO_INDEX_MAP.get(&ch).copied()
}
