//! Input normalization ahead of the cipher: symbol validation, case folding and padding.

use crate::codec::Alphabet;
use crate::errors::HillCryptoError;

use serde::{Deserialize, Serialize};

/// What to do with characters that are not part of the alphabet.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPolicy {
    /// Abort with `InvalidSymbol` on the first foreign character.
    #[default]
    Reject,
    /// Silently drop foreign characters.
    Filter,
}

/// Which side of the cipher the text is prepared for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    /// Plaintext: odd lengths are padded with one filler symbol.
    Encrypt,
    /// Ciphertext: odd lengths are rejected, never padded.
    Decrypt,
}

/// Turns raw text into residues the cipher can pair up.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct TextPreparer {
    alphabet: Alphabet,
    policy: SymbolPolicy,
}

impl TextPreparer {
    pub fn new(alphabet: Alphabet, policy: SymbolPolicy) -> Self {
        Self { alphabet, policy }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn policy(&self) -> SymbolPolicy {
        self.policy
    }

    /// Converts `text` into an even-length residue sequence.
    ///
    /// Symbols are validated (or filtered) before the length is checked, so the
    /// length rule applies to what is left after filtering. Length counts characters.
    ///
    /// # Errors
    ///
    /// * `InvalidSymbol` under [`SymbolPolicy::Reject`] for any character outside the alphabet.
    /// * `InvalidLength` for an odd-length input prepared for [`Direction::Decrypt`].
    pub fn prepare(&self, text: &str, direction: Direction) -> Result<Vec<i64>, HillCryptoError> {
        let mut residues = Vec::with_capacity(text.len() + 1);
        for (position, symbol) in text.chars().enumerate() {
            match self.alphabet.symbol_to_residue(symbol, position) {
                Ok(residue) => residues.push(residue),
                Err(_) if self.policy == SymbolPolicy::Filter => {
                    log::trace!("Dropping {:?} at position {}", symbol, position);
                }
                Err(e) => return Err(e),
            }
        }

        if residues.len() % 2 == 1 {
            match direction {
                Direction::Encrypt => {
                    let filler = self.alphabet.filler();
                    residues.push(self.alphabet.symbol_to_residue(filler, residues.len())?);
                }
                Direction::Decrypt => {
                    return Err(HillCryptoError::InvalidLength(format!(
                        "Ciphertext must have an even number of symbols, got {}",
                        residues.len()
                    )));
                }
            }
        }

        Ok(residues)
    }

    /// Same as [`TextPreparer::prepare`], but returns the canonical text: uppercase
    /// letters and filler symbols only, padded to even length when encrypting.
    pub fn normalize(&self, text: &str, direction: Direction) -> Result<String, HillCryptoError> {
        let residues = self.prepare(text, direction)?;

        Ok(self.alphabet.residues_to_text(&residues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtering() -> TextPreparer {
        TextPreparer::new(Alphabet::default(), SymbolPolicy::Filter)
    }

    #[test]
    fn test_normalize_folds_case() -> Result<(), HillCryptoError> {
        let preparer = TextPreparer::default();
        assert_eq!(preparer.normalize("help", Direction::Encrypt)?, "HELP");
        assert_eq!(preparer.normalize("Hi There", Direction::Encrypt)?, "HI THERE");
        Ok(())
    }

    #[test]
    fn test_plaintext_is_padded_once() -> Result<(), HillCryptoError> {
        let preparer = TextPreparer::default();
        assert_eq!(preparer.normalize("abc", Direction::Encrypt)?, "ABC ");
        assert_eq!(preparer.prepare("abc", Direction::Encrypt)?, vec![0, 1, 2, 26]);
        assert_eq!(preparer.normalize("", Direction::Encrypt)?, "");
        Ok(())
    }

    #[test]
    fn test_ciphertext_odd_length_rejected() {
        let preparer = TextPreparer::default();
        assert!(matches!(
            preparer.prepare("ABC", Direction::Decrypt),
            Err(HillCryptoError::InvalidLength(_))
        ));
        assert!(preparer.prepare("ABCD", Direction::Decrypt).is_ok());
    }

    #[test]
    fn test_reject_policy() {
        let preparer = TextPreparer::default();
        assert!(matches!(
            preparer.prepare("HEL1P", Direction::Encrypt),
            Err(HillCryptoError::InvalidSymbol {
                symbol: '1',
                position: 3
            })
        ));
        // Symbols are checked before the length.
        assert!(matches!(
            preparer.prepare("AB!", Direction::Decrypt),
            Err(HillCryptoError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn test_filter_policy() -> Result<(), HillCryptoError> {
        let preparer = filtering();
        assert_eq!(preparer.policy(), SymbolPolicy::Filter);
        assert_eq!(preparer.normalize("he11o, world!", Direction::Encrypt)?, "HEO WORLD ");
        assert_eq!(preparer.normalize("AB-CD", Direction::Decrypt)?, "ABCD");
        assert!(matches!(
            preparer.prepare("AB-C", Direction::Decrypt),
            Err(HillCryptoError::InvalidLength(_))
        ));
        Ok(())
    }

    #[test]
    fn test_length_counts_characters() -> Result<(), HillCryptoError> {
        let preparer = TextPreparer::new(Alphabet::try_with('·')?, SymbolPolicy::Reject);
        // '·' is two bytes in UTF-8 but one symbol.
        assert_eq!(preparer.prepare("A·", Direction::Decrypt)?, vec![0, 26]);
        assert_eq!(preparer.normalize("A", Direction::Encrypt)?, "A·");
        Ok(())
    }

    #[test]
    fn test_symbol_policy_serde() -> Result<(), HillCryptoError> {
        assert_eq!(serde_json::to_string(&SymbolPolicy::Filter)?, "\"filter\"");
        let policy: SymbolPolicy = serde_json::from_str("\"reject\"")?;
        assert_eq!(policy, SymbolPolicy::Reject);
        Ok(())
    }
}
