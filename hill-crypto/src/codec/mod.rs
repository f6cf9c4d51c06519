//! # Alphabet Codec
//!
//! Bidirectional mapping between the 27 cipher symbols and the residues of Z_27:
//! `A..=Z` (either case) map to `0..=25` and the filler symbol maps to `26`.

use crate::errors::HillCryptoError;
use crate::preset::alphabet_table::{FILLER_RESIDUE, LETTER_TO_RESIDUE_MAP, RESIDUE_TO_LETTER_MAP};
use crate::ring::HILL_MODULUS;

/// Filler symbol used when none is configured.
pub const DEFAULT_FILLER: char = ' ';

/// Number of symbols in the alphabet; equal to the ring modulus.
pub const ALPHABET_SIZE: usize = HILL_MODULUS as usize;

/// The 27-symbol Hill alphabet: the letters A-Z (residues 0-25) plus a filler symbol (residue 26).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Alphabet {
    filler: char,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            filler: DEFAULT_FILLER,
        }
    }
}

impl Alphabet {
    /// Creates an alphabet with a custom filler symbol.
    ///
    /// The filler must not be an ASCII letter, otherwise two symbols would share a residue.
    pub fn try_with(filler: char) -> Result<Self, HillCryptoError> {
        if filler.is_ascii_alphabetic() {
            return Err(HillCryptoError::InvalidParameters(format!(
                "Filler symbol must not be a letter, got {:?}",
                filler
            )));
        }

        Ok(Self { filler })
    }

    pub fn filler(&self) -> char {
        self.filler
    }

    pub fn contains(&self, symbol: char) -> bool {
        symbol == self.filler || LETTER_TO_RESIDUE_MAP.contains_key(&symbol)
    }

    /// Maps a symbol to its residue. `position` is only used for error reporting.
    pub fn symbol_to_residue(&self, symbol: char, position: usize) -> Result<i64, HillCryptoError> {
        if symbol == self.filler {
            return Ok(FILLER_RESIDUE);
        }

        LETTER_TO_RESIDUE_MAP
            .get(&symbol)
            .copied()
            .ok_or(HillCryptoError::InvalidSymbol { symbol, position })
    }

    /// Maps a residue back to its canonical symbol; letters come out uppercase.
    ///
    /// Residues outside `0..27` are reduced first.
    pub fn residue_to_symbol(&self, residue: i64) -> char {
        let residue = residue.rem_euclid(HILL_MODULUS as i64);
        RESIDUE_TO_LETTER_MAP
            .get(&residue)
            .copied()
            .unwrap_or(self.filler)
    }

    pub fn residues_to_text(&self, residues: &[i64]) -> String {
        residues
            .iter()
            .map(|&residue| self.residue_to_symbol(residue))
            .collect()
    }

    /// Strips trailing filler symbols, e.g. the padding added to odd-length plaintext.
    ///
    /// Decryption never does this on its own: a plaintext that genuinely ends in the
    /// filler symbol is indistinguishable from a padded one.
    pub fn trim_padding<'a>(&self, text: &'a str) -> &'a str {
        text.trim_end_matches(self.filler)
    }
}
