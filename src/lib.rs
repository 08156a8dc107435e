//! Vigenère polyalphabetic substitution cipher over the uppercase Latin
//! alphabet. A historical cipher, not a secure primitive.

pub mod alphabet;
pub mod cipher;
pub mod errors;
pub mod key;
pub mod ring;

pub use cipher::Vigenere;
pub use errors::VigenereError;
pub use key::Key;
