use std::collections::HashMap;

use fancy_regex::Regex;
use tally_logging::tally_warn;

/// Pattern used when the caller does not supply one.
///
/// A word is a maximal run of non-whitespace bounded by word boundaries,
/// plus at most one trailing character immediately after a dot-letter pair.
/// The carve-out keeps dotted runs such as `1.23l` or `john.doe@nowhere.com`
/// whole instead of splitting them at internal punctuation. Standalone
/// sentence punctuation next to whitespace never forms a word, and quote
/// characters adjacent to a word are not merged into it.
pub const DEFAULT_WORD_PATTERN: &str = r"(\b[^\s]+\b)((?<=\.\w).)?";

/// Mapping from distinct lowercased word to its occurrence count.
pub type FrequencyTable = HashMap<String, usize>;

#[derive(Debug, thiserror::Error)]
pub enum SplitterError {
    #[error("word pattern must not be empty")]
    EmptyPattern,
    #[error("invalid word pattern: {0}")]
    BadPattern(#[from] fancy_regex::Error),
}

/// Splits free text into lowercased words using a configurable pattern.
///
/// The pattern is compiled once at construction and reused for every call.
/// Both operations build their results from scratch and take `&self`, so a
/// shared splitter can serve concurrent callers without locking.
#[derive(Debug)]
pub struct WordSplitter {
    pattern: Regex,
}

impl WordSplitter {
    /// Compile `pattern` and keep it for the splitter's lifetime.
    pub fn new(pattern: &str) -> Result<Self, SplitterError> {
        if pattern.is_empty() {
            return Err(SplitterError::EmptyPattern);
        }
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Splitter using [`DEFAULT_WORD_PATTERN`].
    pub fn with_default_pattern() -> Self {
        Self::new(DEFAULT_WORD_PATTERN).expect("default word pattern is valid")
    }

    /// The pattern this splitter was built with.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Every non-overlapping match in input order, lowercased.
    ///
    /// Duplicates are preserved. Empty input yields an empty vector.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .filter_map(|found| match found {
                Ok(word) => Some(word.as_str().to_lowercase()),
                Err(err) => {
                    // The pattern compiled, so only engine limits can land here.
                    tally_warn!("word pattern gave up mid-scan: {err}");
                    None
                }
            })
            .collect()
    }

    /// Distinct words in `text` with how often each occurs.
    ///
    /// The comparison folds both sides again, so counts stay case-insensitive
    /// even for words produced by a pattern that skips folding.
    pub fn count_distinct(&self, text: &str) -> FrequencyTable {
        let words = self.tokenize(text);
        let mut table = FrequencyTable::with_capacity(words.len());
        for word in &words {
            if table.contains_key(word) {
                continue;
            }
            let occurs = words
                .iter()
                .filter(|candidate| candidate.to_lowercase() == word.to_lowercase())
                .count();
            table.insert(word.clone(), occurs);
        }
        table
    }
}
