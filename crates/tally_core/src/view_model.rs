#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub sentence: String,
    /// One `"<word> - <count>"` line per distinct word, sorted for display.
    pub word_lines: Vec<String>,
    pub dirty: bool,
}
