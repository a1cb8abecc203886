use crate::error::{SwResult, SwipeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of letter slots on the reference layout (a..=z).
pub const ALPHABET_SIZE: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyNode {
    pub letter: char,
    pub row: i8, // 0=Top, 1=Home, 2=Bottom
    pub col: i8, // Visual column index
    pub x: f32,  // Key centre X (units ~1u key width)
    pub y: f32,  // Key centre Y
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardGeometry {
    pub keys: Vec<KeyNode>,
}

/// Maps an ASCII letter (either case) to its slot in `0..ALPHABET_SIZE`.
#[inline(always)]
pub fn letter_slot(b: u8) -> Option<usize> {
    let lower = b.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some((lower - b'a') as usize)
    } else {
        None
    }
}

impl KeyboardGeometry {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SwResult<Self> {
        let content = fs::read_to_string(path)?;
        let geom: Self = serde_json::from_str(&content)?;
        geom.validate()?;
        Ok(geom)
    }

    /// Row-staggered QWERTY letter block.
    pub fn qwerty() -> Self {
        Self::from_rows(["qwertyuiop", "asdfghjkl", "zxcvbnm"])
    }

    /// Builds a row-staggered geometry from three rows of letters, top to
    /// bottom. `_` marks a non-letter key that still occupies a column.
    pub fn from_rows(rows: [&str; 3]) -> Self {
        let offsets: [f32; 3] = [0.0, 0.25, 0.75];

        let mut keys = Vec::with_capacity(ALPHABET_SIZE);
        for (row, (letters, offset)) in rows.iter().zip(offsets).enumerate() {
            for (col, letter) in letters.chars().enumerate() {
                if letter == '_' {
                    continue;
                }
                keys.push(KeyNode {
                    letter,
                    row: row as i8,
                    col: col as i8,
                    x: col as f32 + offset,
                    y: row as f32,
                });
            }
        }
        KeyboardGeometry { keys }
    }

    pub fn validate(&self) -> SwResult<()> {
        let mut seen = [false; ALPHABET_SIZE];
        for key in &self.keys {
            let slot = u8::try_from(key.letter)
                .ok()
                .filter(|b| b.is_ascii_lowercase())
                .and_then(letter_slot)
                .ok_or_else(|| {
                    SwipeError::Validation(format!(
                        "Key '{}' is not a lowercase ASCII letter",
                        key.letter
                    ))
                })?;
            if seen[slot] {
                return Err(SwipeError::Validation(format!(
                    "Key '{}' appears more than once",
                    key.letter
                )));
            }
            if !key.x.is_finite() || !key.y.is_finite() {
                return Err(SwipeError::Validation(format!(
                    "Key '{}' has a non-finite position",
                    key.letter
                )));
            }
            seen[slot] = true;
        }
        if self.keys.len() < 2 {
            return Err(SwipeError::Validation(
                "Geometry needs at least two keys".to_string(),
            ));
        }
        Ok(())
    }

    /// Key centre for a letter, or `None` when the layout has no such key.
    pub fn position(&self, letter: u8) -> Option<(f32, f32)> {
        let wanted = letter.to_ascii_lowercase() as char;
        self.keys
            .iter()
            .find(|k| k.letter == wanted)
            .map(|k| (k.x, k.y))
    }

    /// Letter whose key centre is closest to `(x, y)`.
    pub fn nearest_letter(&self, x: f32, y: f32) -> Option<u8> {
        self.keys
            .iter()
            .map(|k| {
                let dx = k.x - x;
                let dy = k.y - y;
                (k.letter, dx * dx + dy * dy)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(letter, _)| letter as u8)
    }
}
