use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use bzip2::read::BzDecoder;
use log::info;

use crate::error::{Error, Result};

pub const SAMPLE_WORDS: [&str; 10] = [
    "cat", "dog", "bat", "rat", "mat", "hat", "can", "man", "fan", "pan",
];

pub fn sample_words() -> Vec<String> {
    SAMPLE_WORDS.iter().map(|word| word.to_string()).collect()
}

/// Drops repeated words, keeping the first occurrence of each.
pub fn dedupe<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();
    for word in words {
        let word = word.into();
        if seen.insert(word.clone()) {
            unique.push(word);
        }
    }
    unique
}

/// Reads one word per line. Blank lines and `#` comments are skipped, words
/// are lowercased and deduplicated.
pub fn read_words<R: Read>(reader: R) -> Result<Vec<String>> {
    let reader = BufReader::new(reader);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        words.push(word.to_lowercase());
    }
    Ok(dedupe(words))
}

/// Loads a word list, decompressing it first when the file ends in `.bz2`.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let words = if path.extension().and_then(|s| s.to_str()) == Some("bz2") {
        read_words(BzDecoder::new(file))?
    } else {
        read_words(file)?
    };
    if words.is_empty() {
        return Err(Error::EmptyDictionary(path.display().to_string()));
    }
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
