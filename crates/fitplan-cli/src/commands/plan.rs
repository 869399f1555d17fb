use clap::Args;
use fitplan_core::tracker::display_percent;
use fitplan_core::{PlannerSession, TimelineEntry};

use super::{open_session, CliResult, DoneArgs};

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub done: DoneArgs,
    /// Print the timeline as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PlanArgs) -> CliResult {
    let session = open_session(&args.done)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.timeline())?);
    } else {
        print!("{}", render(&session));
    }
    Ok(())
}

/// One timeline row, e.g. `[x] 07:30  meal        Breakfast (40P / 80C / 20F)`.
pub fn render_entry(entry: &TimelineEntry) -> String {
    let mark = if entry.completed { "x" } else { " " };
    let mut line = format!(
        "[{mark}] {:<5}  {:<10}  {}",
        entry.scheduled_time, entry.kind, entry.title
    );
    if let Some(m) = entry.macros {
        line.push_str(&format!(" ({}P / {}C / {}F)", m.protein_g, m.carbs_g, m.fat_g));
    }
    line
}

/// Timeline followed by a one-line summary.
pub fn render(session: &PlannerSession) -> String {
    let mut out = String::new();
    for entry in session.timeline() {
        out.push_str(&render_entry(&entry));
        out.push('\n');
    }
    let progress = session.progress();
    let hydration = session.hydration().snapshot();
    out.push_str(&format!(
        "\n{}/{} done ({}%), {} / {} kcal, {}g protein, water {:.2} / {:.2} L\n",
        progress.completed_count,
        progress.total_count,
        display_percent(progress.percent_complete),
        progress.total_calories,
        progress.target_calories,
        progress.total_macros.protein_g,
        hydration.current_liters,
        hydration.target_liters,
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::{Catalog, Targets};

    #[test]
    fn render_entry_marks_completion_and_macros() {
        let mut session = PlannerSession::new(Catalog::default_day(), Targets::default()).unwrap();
        session.toggle("breakfast");
        let rows: Vec<String> = session.timeline().iter().map(render_entry).collect();

        assert!(rows[0].starts_with("[x] 07:30"));
        assert!(rows[0].contains("Breakfast (40P / 80C / 20F)"));
        assert!(rows.iter().any(|r| r.starts_with("[ ] 17:00") && r.contains("workout")));
    }

    #[test]
    fn render_includes_summary() {
        let session = PlannerSession::new(Catalog::default_day(), Targets::default()).unwrap();
        let out = render(&session);
        assert!(out.contains("0/11 done (0%)"));
        assert!(out.contains("0 / 3200 kcal"));
    }
}
