#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VigenereError {
    /// Error when constructing a key from an empty sequence of letters.
    #[error("InvalidKey: key must contain at least one letter")]
    EmptyKey,
    /// Error when a key contains a character outside 'A'..='Z'.
    #[error("InvalidKey: character {ch:?} at position {position} is not an uppercase ASCII letter")]
    InvalidKeyCharacter { ch: char, position: usize },
    /// Error when creating a ring with an invalid modulus (k <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
}
