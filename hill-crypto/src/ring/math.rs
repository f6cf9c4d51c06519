//! Implementation of ring ops using modular arithmetic.

use crate::errors::HillCryptoError;

use super::{HILL_MODULUS, extended_gcd, gcd};

/// Represents a finite ring Z_m using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ring {
    modulus: u64,
}

impl Default for Ring {
    fn default() -> Self {
        Self::hill()
    }
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, HillCryptoError> {
        if modulus <= 1 || modulus > i64::MAX as u64 {
            return Err(HillCryptoError::InvalidModulus(format!(
                "Modulus must be in 2..=i64::MAX, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// The ring Z_27 used by the Hill cipher.
    pub const fn hill() -> Self {
        Ring {
            modulus: HILL_MODULUS,
        }
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// assert_eq!(Ring::hill().modulus(), 27);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::hill();
    /// assert_eq!(ring.normalize(30), 3);
    /// assert_eq!(ring.normalize(-121), 14);
    /// assert_eq!(ring.normalize(27), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus as i64)
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::hill();
    /// assert_eq!(ring.add(20, 10), 3);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let sum = self.normalize(a) as i128 + self.normalize(b) as i128;

        (sum % self.modulus as i128) as i64
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::hill();
    /// assert_eq!(ring.sub(3, 5), 25);
    /// assert_eq!(ring.sub(15, 136), 14);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let diff = self.normalize(a) as i128 - self.normalize(b) as i128;

        diff.rem_euclid(self.modulus as i128) as i64
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::hill();
    /// assert_eq!(ring.mul(17, 7), 11); // 119 mod 27
    /// assert_eq!(ring.mul(-2, 6), 15); // -12 mod 27
    /// assert_eq!(ring.mul(9, 3), 0);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let product = self.normalize(a) as i128 * self.normalize(b) as i128;

        (product % self.modulus as i128) as i64
    }

    /// Computes the additive inverse `-a mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::hill();
    /// assert_eq!(ring.neg(8), 19);
    /// assert_eq!(ring.neg(0), 0);
    /// assert_eq!(ring.add(8, ring.neg(8)), 0);
    /// ```
    pub fn neg(&self, a: i64) -> i64 {
        self.sub(0, a)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NotInvertible` if `a` is 0 or shares a factor with the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::hill();
    /// assert_eq!(ring.inv(14).unwrap(), 2); // 14 * 2 = 28 = 1 mod 27
    /// assert_eq!(ring.inv(26).unwrap(), 26);
    /// assert!(ring.inv(9).is_err()); // gcd(9, 27) = 9
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCryptoError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(HillCryptoError::NotInvertible(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(HillCryptoError::NotInvertible(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(x.rem_euclid(self.modulus as i128) as i64)
    }

    /// Returns `true` when `a` has a multiplicative inverse in this ring.
    pub fn is_unit(&self, a: i64) -> bool {
        gcd(self.normalize(a), self.modulus as i64) == 1
    }
}
