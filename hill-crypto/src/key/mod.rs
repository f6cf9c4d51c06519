use crate::errors::HillCryptoError;
use crate::ring::matrix_ops::{determinant, matrix_from_rows, matrix_inverse, normalize_matrix};
use crate::ring::{HILL_MODULUS, Matrix, Ring};

use rand::Rng;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use std::fmt;
use std::str::FromStr;

/// A 2×2 Hill cipher key with entries reduced into `[0, 26]`.
///
/// Serialized as a nested JSON array, e.g. `[[5,8],[17,3]]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Vec<Vec<i64>>")]
pub struct KeyMatrix {
    entries: Matrix,
}

impl KeyMatrix {
    pub fn new(entries: Matrix) -> Self {
        Self {
            entries: normalize_matrix(&entries, &Ring::hill()),
        }
    }

    /// Builds a key from rows of arbitrary shape, e.g. collected from a form.
    pub fn try_from_rows(rows: &[Vec<i64>]) -> Result<Self, HillCryptoError> {
        Ok(Self::new(matrix_from_rows(rows)?))
    }

    /// Parses a nested JSON array such as `[[5, 8], [17, 3]]`.
    ///
    /// Malformed JSON is a `SerializationError`; well-formed JSON that is not a
    /// 2×2 matrix of integers is an `InvalidKeyShape`.
    pub fn from_json(json: &str) -> Result<Self, HillCryptoError> {
        let value: Value = serde_json::from_str(json)?;

        Self::try_from(value)
    }

    pub fn to_json(&self) -> Result<String, HillCryptoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Draws a uniformly random key that is invertible mod 27.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Same as [`KeyMatrix::generate`] with a caller-supplied random source.
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let modulus = HILL_MODULUS as i64;
        loop {
            let mut entries = [[0i64; 2]; 2];
            for entry in entries.iter_mut().flatten() {
                *entry = rng.random_range(0..modulus);
            }

            let key = Self::new(entries);
            if key.is_invertible() {
                return key;
            }
        }
    }

    pub fn entries(&self) -> &Matrix {
        &self.entries
    }

    /// Determinant mod 27.
    pub fn determinant(&self) -> i64 {
        determinant(&self.entries, &Ring::hill())
    }

    /// `true` when the determinant is coprime to 27, i.e. the key can be used to decrypt.
    pub fn is_invertible(&self) -> bool {
        Ring::hill().is_unit(self.determinant())
    }

    /// The key's inverse mod 27.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NotInvertible` when the determinant is a multiple of 3.
    pub fn inverse(&self) -> Result<Self, HillCryptoError> {
        Ok(Self {
            entries: matrix_inverse(&self.entries, &Ring::hill())?,
        })
    }
}

impl From<Matrix> for KeyMatrix {
    fn from(entries: Matrix) -> Self {
        Self::new(entries)
    }
}

impl TryFrom<Vec<Vec<i64>>> for KeyMatrix {
    type Error = HillCryptoError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Self::try_from_rows(&rows)
    }
}

impl TryFrom<Value> for KeyMatrix {
    type Error = HillCryptoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let rows = match value {
            Value::Array(rows) => rows,
            other => {
                return Err(HillCryptoError::InvalidKeyShape(format!(
                    "Expected an array of rows, got {}",
                    other
                )));
            }
        };

        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let Value::Array(entries) = row else {
                    return Err(HillCryptoError::InvalidKeyShape(format!(
                        "Row {} is not an array: {}",
                        i, row
                    )));
                };
                entries
                    .iter()
                    .map(|entry| {
                        entry.as_i64().ok_or_else(|| {
                            HillCryptoError::InvalidKeyShape(format!(
                                "Key entry {} in row {} is not an integer",
                                entry, i
                            ))
                        })
                    })
                    .collect::<Result<Vec<i64>, _>>()
            })
            .collect::<Result<Vec<Vec<i64>>, _>>()?;

        Self::try_from_rows(&rows)
    }
}

impl From<KeyMatrix> for Vec<Vec<i64>> {
    fn from(key: KeyMatrix) -> Self {
        key.entries.iter().map(|row| row.to_vec()).collect()
    }
}

/// Parses a key from text.
///
/// Bracketed input is read as JSON rows (`"[[5, 8], [17, 3]]"`), `;` separates rows
/// (`"5 8; 17 3"`), and anything else is four integers in row-major order separated
/// by whitespace and/or commas (`"5 8 17 3"`, `"5,8,17,3"`). Row and column counts
/// are checked whenever the text carries row structure.
impl FromStr for KeyMatrix {
    type Err = HillCryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(['[', ']']) {
            return Self::from_json(s);
        }

        if s.contains(';') {
            let rows = s
                .split(';')
                .map(parse_entries)
                .collect::<Result<Vec<Vec<i64>>, _>>()?;
            return Self::try_from_rows(&rows);
        }

        let values = parse_entries(s)?;
        let &[a, b, c, d] = values.as_slice() else {
            return Err(HillCryptoError::InvalidKeyShape(format!(
                "Expected 4 key entries, got {}",
                values.len()
            )));
        };

        Ok(Self::new([[a, b], [c, d]]))
    }
}

fn parse_entries(text: &str) -> Result<Vec<i64>, HillCryptoError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                HillCryptoError::InvalidKeyShape(format!("Key entry {:?} is not an integer", token))
            })
        })
        .collect()
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [[a, b], [c, d]] = self.entries;
        write!(f, "[[{}, {}], [{}, {}]]", a, b, c, d)
    }
}
