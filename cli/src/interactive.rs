//! Line based conversion loop shared by argument and stdin input.

use crate::actions::Actions;
use crate::display::{format_notice, json_record};
use pages_link_converter::Session;
use std::io::{self, BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Paste a GitHub file link or a GitHub Pages link and press Enter.
Commands:
  :copy    copy the last converted link
  :open    open the last converted link in the browser
  :clear   forget the input, result and message
  :help    show this help
  :quit    exit";

/// How converted links and notices are presented.
#[derive(Debug, Clone, Copy)]
pub struct Mode<'a> {
    /// Prompt printed before each line when interactive.
    pub prompt: &'a str,

    /// A person is typing: show help and prompts, keep notices on stdout.
    pub interactive: bool,

    /// Print one JSON record per link instead of plain text.
    pub json: bool,
}

/// A line entered in interactive mode.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Convert(&'a str),
    Copy,
    Open,
    Clear,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":copy" | ":c" => Self::Copy,
            ":open" | ":o" => Self::Open,
            ":clear" => Self::Clear,
            ":help" | ":h" | "?" => Self::Help,
            ":quit" | ":q" | ":exit" => Self::Quit,
            other if other.starts_with(':') => Self::Unknown(other),
            _ => Self::Convert(line),
        }
    }
}

/// Reads links from `input` until EOF or `:quit`.
///
/// Blank lines are skipped. Returns the number of links that failed to convert.
pub fn run(
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    mode: &Mode<'_>,
    actions: &mut Actions,
) -> io::Result<usize> {
    let mut session = Session::new();
    let mut failures = 0;

    if mode.interactive {
        writeln!(out, "{HELP}")?;
    }

    let mut lines = input.lines();
    loop {
        if mode.interactive {
            write!(out, "{}", mode.prompt)?;
            out.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Unknown(command) => {
                let message = format!("✖ Unknown command '{command}', try :help");
                if mode.interactive {
                    writeln!(out, "{message}")?;
                } else {
                    writeln!(err, "{message}")?;
                }
                continue;
            }
            Command::Convert(link) if link.trim().is_empty() => continue,
            Command::Convert(link) => {
                if !convert_line(&mut session, link, mode, actions, out, err)? {
                    failures += 1;
                }
                continue;
            }
            Command::Clear => session.clear(),
            Command::Copy => {
                actions.copy(&mut session);
            }
            Command::Open => {
                actions.open(&mut session);
            }
        }

        write_notice(&session, mode, out, err)?;
    }

    Ok(failures)
}

/// Converts one link and reports the outcome, running any automatic actions.
///
/// Converted links and JSON records go to `out`. Notices go to `out` when
/// interactive and to `err` otherwise. Returns whether the link converted.
pub fn convert_line(
    session: &mut Session,
    link: &str,
    mode: &Mode<'_>,
    actions: &mut Actions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    session.set_input(link);
    let result = session.submit().cloned();

    if let Ok(conversion) = &result {
        debug!(output = %conversion.output, "Converted line");
        if !mode.json {
            writeln!(out, "{}", conversion.output)?;
        }

        if actions.auto_copy() {
            if !mode.json {
                write_notice(session, mode, out, err)?;
            }
            actions.copy(session);
        }
        if actions.auto_open() {
            if !mode.json {
                write_notice(session, mode, out, err)?;
            }
            actions.open(session);
        }
    }

    if mode.json {
        let record = json_record(session.input().trim(), result.as_ref(), session.notice());
        writeln!(out, "{record}")?;
    } else {
        write_notice(session, mode, out, err)?;
    }

    Ok(result.is_ok())
}

/// Writes the session's current notice, if any.
fn write_notice(
    session: &Session,
    mode: &Mode<'_>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    let Some(notice) = session.notice() else {
        return Ok(());
    };

    if mode.interactive {
        writeln!(out, "{}", format_notice(notice))
    } else {
        writeln!(err, "{}", format_notice(notice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pages_link_converter::Settings;
    use serde_json::Value;
    use std::io::Cursor;

    const PIPED: Mode<'static> = Mode {
        prompt: "> ",
        interactive: false,
        json: false,
    };

    /// Runs the loop over `input` and returns (failures, stdout, stderr).
    fn run_lines(input: &str, mode: Mode<'_>) -> (usize, String, String) {
        let mut actions = Actions::new(&Settings::default());
        let mut out = Vec::new();
        let mut err = Vec::new();

        let failures = run(Cursor::new(input), &mut out, &mut err, &mode, &mut actions).unwrap();
        (
            failures,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(":copy"), Command::Copy);
        assert_eq!(Command::parse(" :o "), Command::Open);
        assert_eq!(Command::parse(":clear"), Command::Clear);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":paste"), Command::Unknown(":paste"));
    }

    #[test]
    fn other_lines_are_conversions() {
        let line = " https://alice.github.io/site/a.html ";
        assert_eq!(Command::parse(line), Command::Convert(line));
    }

    #[test]
    fn piped_text_keeps_stdout_to_links() {
        let (failures, out, err) = run_lines("https://github.com/a/b/blob/x/y.html\n", PIPED);

        assert_eq!(failures, 0);
        assert_eq!(out, "https://a.github.io/b/y.html\n");
        assert_eq!(err, "✔ Converted to GitHub Pages link\n");
    }

    #[test]
    fn assumed_branch_is_reported_as_warning() {
        let (failures, out, err) = run_lines("https://alice.github.io/site/a.html\n", PIPED);

        assert_eq!(failures, 0);
        assert_eq!(out, "https://github.com/alice/site/blob/main/a.html\n");
        assert!(err.starts_with("! Converted to GitHub repository link\n  Assumed branch 'main'"));
    }

    #[test]
    fn piped_json_prints_one_record_per_line() {
        let mode = Mode {
            json: true,
            ..PIPED
        };
        let (failures, out, err) = run_lines("https://alice.github.io/site/a.html\nnope\n", mode);

        assert_eq!(failures, 1);
        assert!(err.is_empty());

        let records: Vec<Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["ok"], true);
        assert_eq!(
            records[0]["conversion"]["output"],
            "https://github.com/alice/site/blob/main/a.html"
        );
        assert_eq!(records[1]["ok"], false);
        assert_eq!(records[1]["input"], "nope");
    }

    #[test]
    fn blank_lines_are_not_failures() {
        let interactive = Mode {
            interactive: true,
            ..PIPED
        };

        for mode in [PIPED, interactive] {
            let (failures, _, _) =
                run_lines("\n   \nhttps://alice.github.io/site/a.html\n\n", mode);
            assert_eq!(failures, 0);
        }
    }

    #[test]
    fn interactive_notices_stay_on_stdout() {
        let mode = Mode {
            interactive: true,
            ..PIPED
        };
        let (failures, out, err) = run_lines("nope\n:quit\nhttps://alice.github.io/site/a.html\n", mode);

        assert_eq!(failures, 1);
        assert!(err.is_empty());
        assert!(out.starts_with("Paste a GitHub file link"));
        assert!(out.contains("> "));
        assert!(out.contains("✖ Invalid GitHub link format"));
        // Input after :quit is never read.
        assert!(!out.contains("blob/main/a.html"));
    }

    #[test]
    fn copy_without_result_reports_error() {
        let (failures, out, err) = run_lines(":copy\n", PIPED);

        assert_eq!(failures, 0);
        assert!(out.is_empty());
        assert_eq!(err, "✖ No link to copy\n");
    }

    #[test]
    fn unknown_command_is_reported() {
        let (_, out, err) = run_lines(":paste\n", PIPED);

        assert!(out.is_empty());
        assert!(err.contains("Unknown command ':paste'"));
    }
}
