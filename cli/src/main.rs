//! CLI for the Pages Link Converter.
//!
//! Converts GitHub repository file links into GitHub Pages links and back,
//! either for links given on the command line or interactively.

mod actions;
mod display;
mod interactive;
mod platform;

use actions::Actions;
use clap::Parser;
use interactive::Mode;
use pages_link_converter::{ConfigError, Session, Settings};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Pages Link Converter - Turn GitHub file links into GitHub Pages links and back.
///
/// Without LINKS, reads one link per line from stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Links to convert.
    links: Vec<String>,

    /// Path to a settings file.
    #[arg(long, env = "PAGES_LINK_CONFIG")]
    config: Option<PathBuf>,

    /// Copy each converted link to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Open each converted link in the browser.
    #[arg(long)]
    open: bool,

    /// Print one JSON object per link instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Critical failure");
            return ExitCode::from(2);
        }
    };

    let mut actions = Actions::new(&settings);
    let stdin = io::stdin();
    let mode = Mode {
        prompt: &settings.prompt,
        interactive: args.links.is_empty() && stdin.is_terminal(),
        json: args.json,
    };

    let result = if args.links.is_empty() {
        interactive::run(
            stdin.lock(),
            &mut io::stdout(),
            &mut io::stderr(),
            &mode,
            &mut actions,
        )
    } else {
        convert_all(&args.links, &mode, &mut actions)
    };

    match result {
        Ok(0) => ExitCode::from(0),
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "Failed to read input or write output");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so stdout only carries converted links. Filtering
/// follows `RUST_LOG` and falls back to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Loads the settings file and applies command line overrides.
fn load_settings(args: &Args) -> Result<Settings, ConfigError> {
    let mut settings = Settings::load_or_default(args.config.as_deref())?;
    settings.auto_copy |= args.copy;
    settings.auto_open |= args.open;
    Ok(settings)
}

/// Converts every link given on the command line.
///
/// Returns the number of links that failed to convert.
fn convert_all(links: &[String], mode: &Mode<'_>, actions: &mut Actions) -> io::Result<usize> {
    let mut session = Session::new();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut failures = 0;

    for link in links {
        if !interactive::convert_line(&mut session, link, mode, actions, &mut stdout, &mut stderr)? {
            failures += 1;
        }
    }

    info!(total = links.len(), failures, "Finished converting links");
    Ok(failures)
}
