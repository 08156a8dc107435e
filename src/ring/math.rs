//! Implementation of ring ops using modular arithmetic.

use crate::errors::VigenereError;

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_k using modular arithmetic.
///
/// The cipher works in Z_26, one residue per alphabet letter.
///
/// Serialized as the bare modulus; deserialization goes through
/// [`Ring::try_with`], so an invalid modulus can never be smuggled in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, VigenereError> {
        if modulus <= 1 {
            return Err(VigenereError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use vigenere_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.modulus(), 26);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use vigenere_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.normalize(27), 1);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use vigenere_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.add(11, 24), 9);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// assert_eq!(ring.add(25, 1), 0);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_add(b_norm))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use vigenere_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.sub(7, 5), 2);
    /// assert_eq!(ring.sub(3, 10), 19);
    /// assert_eq!(ring.sub(-2, 3), 21);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_sub(b_norm))
    }
}

impl TryFrom<u64> for Ring {
    type Error = VigenereError;

    fn try_from(modulus: u64) -> Result<Self, Self::Error> {
        Ring::try_with(modulus)
    }
}

impl From<Ring> for u64 {
    fn from(ring: Ring) -> Self {
        ring.modulus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_creation() {
        assert!(Ring::try_with(26).is_ok());
        assert!(Ring::try_with(2).is_ok());
        assert!(Ring::try_with(1).is_err());
        assert!(Ring::try_with(0).is_err());
    }

    #[test]
    fn test_serde_goes_through_validation() {
        let ring: Ring = serde_json::from_str("26").unwrap();
        assert_eq!(ring.modulus(), 26);
        assert_eq!(serde_json::to_string(&ring).unwrap(), "26");

        assert!(serde_json::from_str::<Ring>("0").is_err());
        assert!(serde_json::from_str::<Ring>("1").is_err());
    }

    #[test]
    fn test_element_normalization() -> Result<(), VigenereError> {
        let ring = Ring::try_with(26)?;
        assert_eq!(ring.normalize(5), 5);
        assert_eq!(ring.normalize(31), 5);
        assert_eq!(ring.normalize(-21), 5);
        Ok(())
    }

    #[test]
    fn test_addition() -> Result<(), VigenereError> {
        let ring = Ring::try_with(26)?;
        assert_eq!(ring.add(20, 10), 4);
        assert_eq!(ring.add(-3, 8), 5);
        Ok(())
    }

    #[test]
    fn test_subtraction() -> Result<(), VigenereError> {
        let ring = Ring::try_with(26)?;
        assert_eq!(ring.sub(5, 8), 23);
        assert_eq!(ring.sub(8, 5), 3);
        Ok(())
    }

    #[test]
    fn test_add_sub_inverse() -> Result<(), VigenereError> {
        let ring = Ring::try_with(26)?;
        for a in 0..26 {
            for b in 0..26 {
                assert_eq!(ring.sub(ring.add(a, b), b), a);
            }
        }
        Ok(())
    }
}
