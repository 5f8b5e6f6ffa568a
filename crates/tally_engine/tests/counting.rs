//! Construction contracts and properties tying `count_distinct` to
//! `tokenize`.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use tally_engine::{SplitterError, WordSplitter, DEFAULT_WORD_PATTERN};

#[test]
fn empty_pattern_is_rejected() {
    assert!(matches!(
        WordSplitter::new(""),
        Err(SplitterError::EmptyPattern)
    ));
}

#[test]
fn malformed_pattern_is_rejected() {
    assert!(matches!(
        WordSplitter::new("(unclosed"),
        Err(SplitterError::BadPattern(_))
    ));
}

#[test]
fn splitter_reports_its_pattern() {
    let splitter = WordSplitter::with_default_pattern();
    assert_eq!(splitter.pattern(), DEFAULT_WORD_PATTERN);
}

#[test]
fn custom_pattern_is_honoured() {
    let splitter = WordSplitter::new(r"[a-z]+").expect("pattern compiles");
    assert_eq!(splitter.tokenize("ab 12 cd"), vec!["ab", "cd"]);
}

#[test]
fn empty_input_yields_empty_results() {
    let splitter = WordSplitter::with_default_pattern();

    assert!(splitter.tokenize("").is_empty());
    assert!(splitter.count_distinct("").is_empty());
}

#[test]
fn whitespace_only_input_yields_empty_results() {
    let splitter = WordSplitter::with_default_pattern();

    assert!(splitter.tokenize("  \t \n ").is_empty());
    assert!(splitter.count_distinct("  \t \n ").is_empty());
}

#[test]
fn tokenize_preserves_order_and_duplicates() {
    let splitter = WordSplitter::with_default_pattern();

    let words = splitter.tokenize("the Cat and the hat");
    assert_eq!(words, vec!["the", "cat", "and", "the", "hat"]);

    // Same input, same order, every time.
    assert_eq!(splitter.tokenize("the Cat and the hat"), words);
}

#[test]
fn standalone_punctuation_never_forms_a_word() {
    let splitter = WordSplitter::with_default_pattern();

    assert_eq!(splitter.tokenize("stop . and ? go !"), vec!["stop", "and", "go"]);
}

#[test]
fn count_keys_are_exactly_the_distinct_words() {
    let splitter = WordSplitter::with_default_pattern();
    let text = "the quick brown fox jumps over the lazy dog";

    let words = splitter.tokenize(text);
    let table = splitter.count_distinct(text);

    let distinct: HashSet<&String> = words.iter().collect();
    let keys: HashSet<&String> = table.keys().collect();
    assert_eq!(keys, distinct);

    for (word, count) in &table {
        let occurs = words
            .iter()
            .filter(|candidate| candidate.eq_ignore_ascii_case(word))
            .count();
        assert_eq!(*count, occurs, "unexpected count for {word}");
    }
}

#[test]
fn counting_is_case_invariant() {
    let splitter = WordSplitter::with_default_pattern();

    assert_eq!(
        splitter.count_distinct("The Cat"),
        splitter.count_distinct("the cat")
    );
}

#[test]
fn interim_sentence_punctuation_does_not_terminate_counting() {
    let splitter = WordSplitter::with_default_pattern();

    let table = splitter.count_distinct("Is this a test? Yes it is!");

    assert_eq!(table.len(), 6);
    assert_eq!(table.get("is"), Some(&2));
    assert!(!table.contains_key("?"));
    assert!(!table.contains_key("!"));
    for (word, count) in &table {
        if word != "is" {
            assert_eq!(*count, 1, "unexpected count for {word}");
        }
    }
}
