#[derive(thiserror::Error, Debug)]
pub enum HillCryptoError {
    /// A character outside the 27-symbol alphabet was found in the input.
    #[error("InvalidSymbol: {symbol:?} at position {position} is not part of the alphabet")]
    InvalidSymbol { symbol: char, position: usize },
    /// Input cannot be partitioned into pairs (odd-length ciphertext).
    #[error("InvalidLength: {0}")]
    InvalidLength(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NotInvertible: {0}")]
    NotInvertible(String),
    /// The key is not a well-formed 2x2 integer matrix.
    #[error("InvalidKeyShape: {0}")]
    InvalidKeyShape(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
