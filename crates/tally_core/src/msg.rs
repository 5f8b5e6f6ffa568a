use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the sentence input box.
    InputChanged(String),
    /// User asked for the current sentence to be analysed.
    AnalyseClicked,
    /// Engine finished counting; carries the frequency table.
    TallyReady(HashMap<String, usize>),
    /// User cleared both the input box and the word list.
    ClearClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
