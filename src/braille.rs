//! Six-dot braille cells typed as QWERTY chords.
//!
//! Each chord is a group of keys pressed together; every key raises one dot
//! of the cell. The default layout is `D W Q` for dots 1-3 and `K O P` for
//! dots 4-6, so `DK` is dots 1 and 4, the letter `c`.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::error::{Error, Result};

/// Stands in for a chord that is not a letter.
pub const PLACEHOLDER: char = '?';

pub const DOTS: u8 = 6;

const DEFAULT_KEYS: [(char, u8); 6] = [
    ('D', 0),
    ('W', 1),
    ('Q', 2),
    ('K', 3),
    ('O', 4),
    ('P', 5),
];

// bit i is dot i + 1
const LETTERS: [(u8, char); 26] = [
    (0b000001, 'a'),
    (0b000011, 'b'),
    (0b001001, 'c'),
    (0b011001, 'd'),
    (0b010001, 'e'),
    (0b001011, 'f'),
    (0b011011, 'g'),
    (0b010011, 'h'),
    (0b001010, 'i'),
    (0b011010, 'j'),
    (0b000101, 'k'),
    (0b000111, 'l'),
    (0b001101, 'm'),
    (0b011101, 'n'),
    (0b010101, 'o'),
    (0b001111, 'p'),
    (0b011111, 'q'),
    (0b010111, 'r'),
    (0b001110, 's'),
    (0b011110, 't'),
    (0b100101, 'u'),
    (0b100111, 'v'),
    (0b111010, 'w'),
    (0b101101, 'x'),
    (0b111101, 'y'),
    (0b110101, 'z'),
];

static CHORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("chord pattern is valid"));

/// Dot pattern of one braille cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(u8);

impl Cell {
    /// Cell from 1-based dot numbers; numbers outside 1..=6 are ignored.
    pub fn from_dots(dots: &[u8]) -> Self {
        let mut bits = 0u8;
        for &dot in dots {
            if (1..=DOTS).contains(&dot) {
                bits |= 1 << (dot - 1);
            }
        }
        Cell(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn has_dot(self, dot: u8) -> bool {
        (1..=DOTS).contains(&dot) && self.0 & (1 << (dot - 1)) != 0
    }

    pub fn letter(self) -> Option<char> {
        LETTERS
            .iter()
            .find(|(pattern, _)| *pattern == self.0)
            .map(|(_, letter)| *letter)
    }
}

/// Which keyboard key raises which dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    keys: HashMap<char, u8>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            keys: DEFAULT_KEYS.into_iter().collect(),
        }
    }
}

impl KeyMap {
    /// Builds a map from `key -> dot number (1-6)` entries, as found in config.
    pub fn from_entries(entries: &BTreeMap<String, u8>) -> Result<Self> {
        let mut keys = HashMap::new();
        for (key, &dot) in entries {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(Error::InvalidKeyMap {
                    key: key.clone(),
                    reason: "key must be a single character".to_string(),
                });
            };
            if !(1..=DOTS).contains(&dot) {
                return Err(Error::InvalidKeyMap {
                    key: key.clone(),
                    reason: format!("dot {} is not between 1 and {}", dot, DOTS),
                });
            }
            if keys.insert(c.to_ascii_uppercase(), dot - 1).is_some() {
                return Err(Error::InvalidKeyMap {
                    key: key.clone(),
                    reason: "key is mapped twice".to_string(),
                });
            }
        }
        Ok(Self { keys })
    }

    /// Cell raised by pressing every key of `chord`. Unmapped keys are skipped.
    pub fn chord_to_cell(&self, chord: &str) -> Cell {
        let mut bits = 0u8;
        for key in chord.chars() {
            match self.keys.get(&key.to_ascii_uppercase()) {
                Some(&dot) => bits |= 1 << dot,
                None => warn!("ignoring unmapped key {:?} in chord {:?}", key, chord),
            }
        }
        Cell(bits)
    }

    pub fn decode_chord(&self, chord: &str) -> char {
        self.chord_to_cell(chord).letter().unwrap_or(PLACEHOLDER)
    }

    /// Letters for a word typed as a sequence of chords.
    pub fn decode_word<S: AsRef<str>>(&self, chords: &[S]) -> String {
        chords
            .iter()
            .map(|chord| self.decode_chord(chord.as_ref()))
            .collect()
    }
}

/// Splits a typed line like `"DK D WQKO"` into its chords.
pub fn parse_line(line: &str) -> Vec<&str> {
    CHORD_REGEX.find_iter(line).map(|m| m.as_str()).collect()
}
