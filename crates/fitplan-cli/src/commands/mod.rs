pub mod catalog;
pub mod config;
pub mod plan;
pub mod progress;
pub mod session;

use clap::Args;
use fitplan_core::{Config, PlannerSession};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Items to mark done before rendering.
#[derive(Args, Debug, Default)]
pub struct DoneArgs {
    /// Mark an item as completed (repeatable)
    #[arg(long = "done", value_name = "ID")]
    pub done: Vec<String>,
    /// Fail on unknown item ids instead of ignoring them
    #[arg(long)]
    pub strict: bool,
}

/// Build a session from the stored config and apply `--done` toggles.
pub fn open_session(args: &DoneArgs) -> Result<PlannerSession, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut session = config.build_session()?;
    for id in &args.done {
        if session.completion().is_completed(id) {
            continue;
        }
        if args.strict {
            session.toggle_strict(id)?;
        } else {
            session.toggle(id);
        }
    }
    Ok(session)
}
