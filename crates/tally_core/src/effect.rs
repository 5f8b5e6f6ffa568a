#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the splitter over `text` and answer with `Msg::TallyReady`.
    AnalyseSentence { text: String },
}
