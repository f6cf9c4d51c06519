//! # Hill Cipher Engine
//!
//! Encrypts and decrypts text with a 2×2 key matrix over Z_27. Each call is
//! independent: validate the key, invert it (decryption only), split the message
//! into residue pairs, multiply each pair by the matrix, reassemble.

pub mod config;

use crate::codec::Alphabet;
use crate::errors::HillCryptoError;
use crate::key::KeyMatrix;
use crate::ring::matrix_ops::matrix_vector_mul;
use crate::ring::{Matrix, Ring};
use crate::text::{Direction, TextPreparer};

use config::CipherConfig;

use itertools::Itertools;

/// Stateless Hill cipher engine over Z_27, holding only the alphabet and symbol policy.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct HillCipher {
    preparer: TextPreparer,
    ring: Ring,
}

impl HillCipher {
    pub fn try_with(config: CipherConfig) -> Result<Self, HillCryptoError> {
        let alphabet = config.alphabet()?;

        Ok(Self {
            preparer: TextPreparer::new(alphabet, config.symbol_policy),
            ring: Ring::hill(),
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.preparer.alphabet()
    }

    /// Encrypts `plaintext`, padding it with one filler symbol when its length is odd.
    ///
    /// Any key is accepted. A key whose determinant is a multiple of 3 still produces
    /// ciphertext, but that ciphertext can never be decrypted.
    pub fn encrypt(&self, plaintext: &str, key: &KeyMatrix) -> Result<String, HillCryptoError> {
        if !key.is_invertible() {
            log::warn!(
                "Encrypting with a non-invertible key (det = {}); the result cannot be decrypted",
                key.determinant()
            );
        }

        let residues = self.preparer.prepare(plaintext, Direction::Encrypt)?;
        log::debug!("Encrypting {} symbols", residues.len());

        Ok(self.transform(&residues, key.entries()))
    }

    /// Decrypts `ciphertext`. The result keeps any filler padding added by
    /// [`HillCipher::encrypt`]; see [`Alphabet::trim_padding`].
    ///
    /// # Errors
    ///
    /// * `InvalidSymbol` / `InvalidLength` when the ciphertext cannot be split into pairs.
    /// * `NotInvertible` when the key's determinant is not coprime to 27.
    pub fn decrypt(&self, ciphertext: &str, key: &KeyMatrix) -> Result<String, HillCryptoError> {
        let residues = self.preparer.prepare(ciphertext, Direction::Decrypt)?;
        let inverse = key.inverse()?;
        log::debug!(
            "Decrypting {} symbols (det = {})",
            residues.len(),
            key.determinant()
        );

        Ok(self.transform(&residues, inverse.entries()))
    }

    /// Multiplies consecutive residue pairs by `matrix` and maps the result back to text.
    ///
    /// `residues` must have even length; a trailing odd residue is not emitted.
    fn transform(&self, residues: &[i64], matrix: &Matrix) -> String {
        let alphabet = self.alphabet();
        let mut output = String::with_capacity(residues.len());

        for (block, (x0, x1)) in residues.iter().copied().tuples().enumerate() {
            let [y0, y1] = matrix_vector_mul(matrix, &[x0, x1], &self.ring);
            log::trace!("Block {}: ({}, {}) -> ({}, {})", block, x0, x1, y0, y1);

            output.push(alphabet.residue_to_symbol(y0));
            output.push(alphabet.residue_to_symbol(y1));
        }

        output
    }
}

/// Encrypts with the default configuration: space filler, foreign characters rejected.
///
/// ```
/// let ciphertext = hill_crypto::encrypt("HELP", [[5, 8], [17, 3]]).unwrap();
/// assert_eq!(ciphertext, "NXNQ");
/// ```
pub fn encrypt(plaintext: &str, key: impl Into<KeyMatrix>) -> Result<String, HillCryptoError> {
    HillCipher::default().encrypt(plaintext, &key.into())
}

/// Decrypts with the default configuration.
///
/// ```
/// let plaintext = hill_crypto::decrypt("NXNQ", [[5, 8], [17, 3]]).unwrap();
/// assert_eq!(plaintext, "HELP");
///
/// assert!(hill_crypto::decrypt("NXNQ", [[3, 3], [2, 5]]).is_err());
/// ```
pub fn decrypt(ciphertext: &str, key: impl Into<KeyMatrix>) -> Result<String, HillCryptoError> {
    HillCipher::default().decrypt(ciphertext, &key.into())
}
