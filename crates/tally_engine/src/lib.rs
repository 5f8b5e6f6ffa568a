//! Tally engine: pattern-driven word splitting and distinct counting.
mod splitter;

pub use splitter::{FrequencyTable, SplitterError, WordSplitter, DEFAULT_WORD_PATTERN};
