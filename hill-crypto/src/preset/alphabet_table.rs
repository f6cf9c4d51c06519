use lazy_static::lazy_static;
use std::collections::HashMap;

/// The 26 canonical letters, in residue order.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Residue reserved for the filler symbol.
pub const FILLER_RESIDUE: i64 = 26;

lazy_static! {
    /// A static HashMap mapping a residue (0 to 25) to its canonical uppercase letter.
    pub static ref RESIDUE_TO_LETTER_MAP: HashMap<i64, char> = LETTERS
        .chars()
        .enumerate()
        .map(|(i, ch)| (i as i64, ch))
        .collect();

    /// A static HashMap mapping a letter, in either case, to its residue (0 to 25).
    pub static ref LETTER_TO_RESIDUE_MAP: HashMap<char, i64> = {
        let mut map = HashMap::with_capacity(2 * LETTERS.len());

        for (&index, &ch) in RESIDUE_TO_LETTER_MAP.iter() {
            map.insert(ch, index);
            map.insert(ch.to_ascii_lowercase(), index);
        }

        map
    };
}
