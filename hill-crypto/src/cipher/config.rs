use crate::codec::{Alphabet, DEFAULT_FILLER};
use crate::errors::HillCryptoError;
use crate::text::SymbolPolicy;

use serde::{Deserialize, Serialize};

/// Caller-tunable knobs of the cipher engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// The 27th symbol, used for residue 26 and as padding for odd-length plaintext.
    pub filler: char,
    /// How characters outside the alphabet are treated.
    pub symbol_policy: SymbolPolicy,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            filler: DEFAULT_FILLER,
            symbol_policy: SymbolPolicy::default(),
        }
    }
}

impl CipherConfig {
    pub fn try_with(filler: char, symbol_policy: SymbolPolicy) -> Result<Self, HillCryptoError> {
        let config = Self {
            filler,
            symbol_policy,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, HillCryptoError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HillCryptoError> {
        self.alphabet().map(|_| ())
    }

    pub fn alphabet(&self) -> Result<Alphabet, HillCryptoError> {
        Alphabet::try_with(self.filler)
    }
}
