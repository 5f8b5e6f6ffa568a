use std::collections::HashMap;

use crate::view_model::AppViewModel;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    sentence: String,
    tally: HashMap<String, usize>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub(crate) fn set_sentence(&mut self, text: String) {
        if self.sentence != text {
            self.sentence = text;
            self.dirty = true;
        }
    }

    pub(crate) fn clear_tally(&mut self) {
        if !self.tally.is_empty() {
            self.tally.clear();
            self.dirty = true;
        }
    }

    pub(crate) fn set_tally(&mut self, tally: HashMap<String, usize>) {
        self.tally = tally;
        self.dirty = true;
    }

    pub(crate) fn reset(&mut self) {
        if !self.sentence.is_empty() || !self.tally.is_empty() {
            self.sentence.clear();
            self.tally.clear();
            self.dirty = true;
        }
    }

    /// Returns the dirty flag and clears it, for render coalescing.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let mut word_lines: Vec<String> = self
            .tally
            .iter()
            .map(|(word, count)| format!("{word} - {count}"))
            .collect();
        // The table has no inherent order; sort so each render is stable.
        word_lines.sort();

        AppViewModel {
            sentence: self.sentence.clone(),
            word_lines,
            dirty: self.dirty,
        }
    }
}
