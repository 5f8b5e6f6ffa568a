//! Command-line front end: feeds text through the presenter core and
//! prints the distinct word tally.

use std::io::Read;

use clap::Parser;
use tally_core::{update, AppState, Effect, Msg};
use tally_engine::{WordSplitter, DEFAULT_WORD_PATTERN};
use tally_logging::{tally_debug, tally_info};

/// Count distinct words in a piece of free text.
#[derive(Debug, Parser)]
#[command(name = "tally", version)]
struct Cli {
    /// Text to analyse; reads standard input when omitted.
    text: Option<String>,

    /// Word-matching pattern overriding the built-in one.
    #[arg(long)]
    pattern: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tally_logging::initialize(tally_logging::LogDestination::Terminal);
    let cli = Cli::parse();

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let pattern = cli.pattern.as_deref().unwrap_or(DEFAULT_WORD_PATTERN);
    let splitter = WordSplitter::new(pattern)?;
    tally_info!("analysing {} bytes with pattern {}", text.len(), splitter.pattern());

    let state = AppState::new();
    let (state, _) = update(state, Msg::InputChanged(text));
    let (mut state, effects) = update(state, Msg::AnalyseClicked);

    for effect in effects {
        match effect {
            Effect::AnalyseSentence { text } => {
                let tally = splitter.count_distinct(&text);
                tally_debug!("found {} distinct words", tally.len());
                let (next, _) = update(state, Msg::TallyReady(tally));
                state = next;
            }
        }
    }

    for line in state.view().word_lines {
        println!("{line}");
    }

    Ok(())
}
