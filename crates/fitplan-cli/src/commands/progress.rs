use clap::Args;
use fitplan_core::{Command, HydrationDirection};

use super::{open_session, CliResult, DoneArgs};

#[derive(Args)]
pub struct ProgressArgs {
    #[command(flatten)]
    pub done: DoneArgs,
    /// Number of hydration steps to add
    #[arg(long, default_value = "0")]
    pub water_steps: u32,
    /// Include the timeline in the output
    #[arg(long)]
    pub timeline: bool,
}

pub fn run(args: ProgressArgs) -> CliResult {
    let mut session = open_session(&args.done)?;
    for _ in 0..args.water_steps {
        session.dispatch(Command::Hydrate(HydrationDirection::Increase));
    }

    if args.timeline {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        let output = serde_json::json!({
            "progress": session.progress(),
            "hydration": session.hydration().snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}
