use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_sentence(text);
            Vec::new()
        }
        Msg::AnalyseClicked => {
            // An empty sentence is still analysed; it yields an empty table.
            state.clear_tally();
            vec![Effect::AnalyseSentence {
                text: state.sentence().to_string(),
            }]
        }
        Msg::TallyReady(tally) => {
            state.set_tally(tally);
            Vec::new()
        }
        Msg::ClearClicked => {
            state.reset();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
