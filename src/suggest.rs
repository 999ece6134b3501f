use log::debug;

use crate::{
    bk_tree::{BkTree, Match, best_match, build},
    braille::KeyMap,
    config::DEFAULT_RADIUS,
    dictionary::dedupe,
};

/// Outcome of correcting one typed word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The word as decoded from the chords.
    pub input: String,
    /// Closest dictionary word, `None` when nothing is within the radius.
    pub best: Option<Match>,
}

pub struct Autocorrector {
    tree: BkTree,
    key_map: KeyMap,
    radius: i32,
}

impl Autocorrector {
    pub fn new<I, S>(words: I, radius: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tree: build(dedupe(words)),
            key_map: KeyMap::default(),
            radius,
        }
    }

    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn tree(&self) -> &BkTree {
        &self.tree
    }

    /// All dictionary words within the radius of `word`, closest first.
    pub fn candidates(&self, word: &str) -> Vec<Match> {
        self.tree.query(word, self.radius)
    }

    pub fn suggest_word(&self, word: &str) -> Suggestion {
        let candidates = self.candidates(word);
        let best = best_match(&candidates).cloned();
        debug!(
            "{:?}: {} candidates, best {:?}",
            word,
            candidates.len(),
            best
        );
        Suggestion {
            input: word.to_string(),
            best,
        }
    }

    pub fn suggest_chords<S: AsRef<str>>(&self, chords: &[S]) -> Suggestion {
        let word = self.key_map.decode_word(chords);
        self.suggest_word(&word)
    }
}

impl Default for Autocorrector {
    fn default() -> Self {
        Self::new(crate::dictionary::SAMPLE_WORDS, DEFAULT_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_chords() {
        let corrector = Autocorrector::default();
        let suggestion = corrector.suggest_chords(&["DK", "D", "WQKO"]);
        assert_eq!(suggestion.input, "cat");
        assert_eq!(suggestion.best, Some(Match::new("cat", 0)));
    }

    #[test]
    fn test_unknown_chord_still_suggests() {
        let corrector = Autocorrector::default();
        let suggestion = corrector.suggest_chords(&["DK", "D", "K"]);
        assert_eq!(suggestion.input, "ca?");
        assert_eq!(suggestion.best, Some(Match::new("cat", 1)));
    }

    #[test]
    fn test_typo_and_missing_and_extra_letter() {
        let corrector = Autocorrector::default();
        assert_eq!(
            corrector.suggest_chords(&["DK", "D", "DK"]).best,
            Some(Match::new("cat", 1))
        );
        assert_eq!(
            corrector.suggest_chords(&["DK", "D"]).best,
            Some(Match::new("cat", 1))
        );
        assert_eq!(
            corrector.suggest_chords(&["DK", "D", "WQKO", "D"]).best,
            Some(Match::new("cat", 1))
        );
    }

    #[test]
    fn test_can_beats_cat_for_can() {
        let corrector = Autocorrector::default();
        let suggestion = corrector.suggest_chords(&["DK", "D", "DQKO"]);
        assert_eq!(suggestion.input, "can");
        assert_eq!(suggestion.best, Some(Match::new("can", 0)));
    }

    #[test]
    fn test_no_suggestion() {
        let corrector = Autocorrector::new(["cat", "dog"], 1);
        let suggestion = corrector.suggest_word("zzz");
        assert_eq!(suggestion.best, None);
        assert!(corrector.candidates("zzz").is_empty());
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let corrector = Autocorrector::new(["cat", "cat", "bat"], 2);
        assert_eq!(corrector.tree().len(), 2);
        assert_eq!(corrector.candidates("cat").len(), 2);
    }

    #[test]
    fn test_zero_radius() {
        let corrector = Autocorrector::new(["cat", "bat"], 0);
        assert_eq!(corrector.radius(), 0);
        assert_eq!(corrector.suggest_word("cab").best, None);
        assert_eq!(
            corrector.suggest_word("bat").best,
            Some(Match::new("bat", 0))
        );
    }
}
