use std::{collections::BTreeMap, fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{braille::KeyMap, error::Result};

pub const DEFAULT_RADIUS: i32 = 2;

/// Settings read from a JSON file, e.g.
///
/// ```json
/// { "radius": 1, "dictionary": "words.txt.bz2", "key_map": { "F": 1, "D": 2 } }
/// ```
///
/// Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub radius: i32,
    pub dictionary: Option<PathBuf>,
    /// key -> dot number (1-6); empty means the D W Q K O P layout
    pub key_map: BTreeMap<String, u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            dictionary: None,
            key_map: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn key_map(&self) -> Result<KeyMap> {
        if self.key_map.is_empty() {
            return Ok(KeyMap::default());
        }
        KeyMap::from_entries(&self.key_map)
    }
}
