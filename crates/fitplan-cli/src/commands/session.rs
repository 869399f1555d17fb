//! Line-oriented interactive session.
//!
//! State lives only as long as the process. Each command line prints one JSON
//! line; `plan` prints the rendered timeline instead.

use std::io::{BufRead, Write};

use clap::Args;
use fitplan_core::{Command, HydrationDirection, PlannerSession};
use serde::Serialize;

use super::{open_session, plan, CliResult, DoneArgs};

const HELP: &str = "\
commands:
  toggle <id>        flip completion of an item
  water + | -        one hydration step up or down
  water <liters>     raw hydration delta (clamped)
  status             progress and hydration as JSON
  plan               rendered timeline
  reset              back to the starting state
  quit               leave the session
  {json}             a raw command, e.g. {\"command\":\"toggle_item\",\"arg\":\"lunch\"}";

#[derive(Args)]
pub struct SessionArgs {
    #[command(flatten)]
    pub done: DoneArgs,
}

/// A parsed input line.
#[derive(Debug, PartialEq)]
pub enum Input {
    Dispatch(Command),
    Status,
    Plan,
    Help,
    Quit,
}

#[derive(Serialize)]
struct ErrorLine<'a> {
    error: &'a str,
}

pub fn run(args: SessionArgs) -> CliResult {
    let mut session = open_session(&args.done)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_loop(&mut session, stdin.lock(), stdout.lock(), args.done.strict)?;
    Ok(())
}

/// Parse one line of input. `Ok(None)` means a blank line.
pub fn parse_line(line: &str) -> Result<Option<Input>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line.starts_with('{') {
        return serde_json::from_str::<Command>(line)
            .map(|c| Some(Input::Dispatch(c)))
            .map_err(|e| format!("invalid command JSON: {e}"));
    }

    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("too many arguments for '{verb}'"));
    }

    let input = match (verb, arg) {
        ("toggle" | "t", Some(id)) => Input::Dispatch(Command::ToggleItem(id.to_string())),
        ("toggle" | "t", None) => return Err("usage: toggle <id>".into()),
        ("water" | "w", Some("+")) => Input::Dispatch(Command::Hydrate(HydrationDirection::Increase)),
        ("water" | "w", Some("-")) => Input::Dispatch(Command::Hydrate(HydrationDirection::Decrease)),
        ("water" | "w", Some(raw)) => {
            let delta: f64 = raw
                .parse()
                .map_err(|_| format!("cannot parse '{raw}' as liters"))?;
            Input::Dispatch(Command::AdjustHydration(delta))
        }
        ("water" | "w", None) => return Err("usage: water + | - | <liters>".into()),
        ("status", None) => Input::Status,
        ("plan", None) => Input::Plan,
        ("reset", None) => Input::Dispatch(Command::Reset),
        ("help" | "?", None) => Input::Help,
        ("quit" | "exit" | "q", None) => Input::Quit,
        _ => return Err(format!("unknown command: {line}")),
    };
    Ok(Some(input))
}

fn write_error<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    let line = serde_json::to_string(&ErrorLine { error: message })?;
    writeln!(out, "{line}")
}

/// Drive `session` from `input` until EOF or `quit`.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut PlannerSession,
    mut input: R,
    mut out: W,
    strict: bool,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            tracing::debug!(bytes = buf.len(), "rejected non-UTF-8 input");
            write_error(&mut out, "input is not valid UTF-8")?;
            out.flush()?;
            continue;
        };
        let parsed = match parse_line(line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(message) => {
                tracing::debug!(%line, "rejected input");
                write_error(&mut out, &message)?;
                continue;
            }
        };

        match parsed {
            Input::Dispatch(Command::ToggleItem(id)) if strict => match session.toggle_strict(&id) {
                Ok(event) => writeln!(out, "{}", serde_json::to_string(&event)?)?,
                Err(e) => write_error(&mut out, &e.to_string())?,
            },
            Input::Dispatch(command) => {
                let event = session.dispatch(command);
                if !event.changed_state() {
                    tracing::debug!(?event, "command left the session unchanged");
                }
                writeln!(out, "{}", serde_json::to_string(&event)?)?;
            }
            Input::Status => {
                let status = serde_json::json!({
                    "progress": session.progress(),
                    "hydration": session.hydration().snapshot(),
                });
                writeln!(out, "{}", serde_json::to_string(&status)?)?;
            }
            Input::Plan => write!(out, "{}", plan::render(session))?,
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Quit => break,
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::{Catalog, Targets};
    use std::io::Cursor;

    fn session() -> PlannerSession {
        PlannerSession::new(Catalog::default_day(), Targets::default()).unwrap()
    }

    fn drive(session: &mut PlannerSession, script: &str, strict: bool) -> Vec<String> {
        let mut out = Vec::new();
        run_loop(session, Cursor::new(script.to_string()), &mut out, strict).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn parses_verbs() {
        assert_eq!(
            parse_line("toggle lunch").unwrap(),
            Some(Input::Dispatch(Command::ToggleItem("lunch".into())))
        );
        assert_eq!(
            parse_line("  water -  ").unwrap(),
            Some(Input::Dispatch(Command::Hydrate(HydrationDirection::Decrease)))
        );
        assert_eq!(
            parse_line("w 0.5").unwrap(),
            Some(Input::Dispatch(Command::AdjustHydration(0.5)))
        );
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("quit").unwrap(), Some(Input::Quit));
    }

    #[test]
    fn parses_json_commands() {
        assert_eq!(
            parse_line(r#"{"command":"reset"}"#).unwrap(),
            Some(Input::Dispatch(Command::Reset))
        );
        assert!(parse_line(r#"{"command":"explode"}"#).is_err());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_line("toggle").is_err());
        assert!(parse_line("water lots").is_err());
        assert!(parse_line("toggle a b").is_err());
        assert!(parse_line("dance").is_err());
    }

    #[test]
    fn loop_emits_one_json_line_per_command() {
        let mut s = session();
        let lines = drive(&mut s, "toggle lunch\nwater +\n\nstatus\nquit\ntoggle dinner\n", false);

        assert_eq!(lines.len(), 3);
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["type"], "ItemCompleted");
        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["current_liters"], 0.25);
        let status: serde_json::Value = serde_json::from_str(&lines[2]).unwrap();
        assert_eq!(status["progress"]["completed_count"], 1);
        // quit stops before the last toggle
        assert!(!s.completion().is_completed("dinner"));
    }

    #[test]
    fn lenient_loop_absorbs_unknown_ids() {
        let mut s = session();
        let lines = drive(&mut s, "toggle ghost\n", false);
        let event: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(event["type"], "ToggleIgnored");
    }

    #[test]
    fn strict_loop_reports_unknown_ids() {
        let mut s = session();
        let lines = drive(&mut s, "toggle ghost\ntoggle lunch\n", true);
        let err: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert!(err["error"].as_str().unwrap().contains("ghost"));
        let ok: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(ok["type"], "ItemCompleted");
    }

    #[test]
    fn parse_errors_do_not_stop_the_loop() {
        let mut s = session();
        let lines = drive(&mut s, "bogus\ntoggle lunch\n", false);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("error"));
        assert!(s.completion().is_completed("lunch"));
    }

    #[test]
    fn non_utf8_line_does_not_stop_the_loop() {
        let mut s = session();
        let input = Cursor::new(b"toggle lunch\n\xff\xfe\ntoggle dinner\n".to_vec());
        let mut out = Vec::new();
        run_loop(&mut s, input, &mut out, false).unwrap();

        let lines: Vec<String> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(lines.len(), 3);
        let err: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert!(err["error"].as_str().unwrap().contains("UTF-8"));
        assert!(s.completion().is_completed("lunch"));
        assert!(s.completion().is_completed("dinner"));
    }
}
