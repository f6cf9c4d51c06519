#![allow(non_snake_case)]

//! Hill cipher over Z_27: the 26 letters plus one filler symbol, with a 2×2 key matrix.
//!
//! ```
//! use hill_crypto::key::KeyMatrix;
//! use hill_crypto::{decrypt, encrypt};
//!
//! let key = KeyMatrix::new([[5, 8], [17, 3]]);
//! let ciphertext = encrypt("attack at dawn", key).unwrap();
//! assert_eq!(decrypt(&ciphertext, key).unwrap(), "ATTACK AT DAWN");
//! ```

pub mod cipher;
pub mod codec;
pub mod errors;
pub mod key;
pub mod preset;
pub mod ring;
pub mod text;

pub use cipher::config::CipherConfig;
pub use cipher::{HillCipher, decrypt, encrypt};
pub use errors::HillCryptoError;
pub use key::KeyMatrix;
pub use text::SymbolPolicy;
