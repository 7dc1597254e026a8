mod app;
mod help;
use crate::app::App;
use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};
use tracing_subscriber::EnvFilter;
use weekstrip::{Gregorian, WeekStripState, MIN_DRAG_DISTANCE};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Environment variable holding the log filter directives
const LOG_ENV_VAR: &str = "WEEKSTRIP_LOG";

const DEFAULT_LOG_FILTER: &str = "weekstrip=debug";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct RunOptions {
    date: Option<Date>,
    monday: bool,
    drag_distance: u16,
    log_file: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> RunOptions {
        RunOptions {
            date: None,
            monday: false,
            drag_distance: MIN_DRAG_DISTANCE,
            log_file: None,
        }
    }
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('m') | Arg::Long("monday") => opts.monday = true,
                Arg::Short('d') | Arg::Long("drag-distance") => {
                    opts.drag_distance = parser.value()?.parse()?;
                }
                Arg::Short('l') | Arg::Long("log-file") => {
                    opts.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(value) if opts.date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => opts.date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                if let Some(path) = opts.log_file.as_deref() {
                    init_logging(path)?;
                }
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let calendar = if opts.monday {
                    Gregorian::new(time::Weekday::Monday)
                } else {
                    Gregorian::default()
                };
                let strip = WeekStripState::new(calendar, opts.date.unwrap_or(today))
                    .min_drag_distance(opts.drag_distance);
                tracing::info!(date = %strip.date(), first_weekday = %calendar.first_weekday(), "starting");
                with_terminal(|terminal| {
                    App::new(strip, today)
                        .run(terminal)
                        .context("terminal I/O failed")
                })
            }
            Command::Help => {
                println!("Usage: weekstrip [<options>] [YYYY-MM-DD]");
                println!();
                println!("Swipeable one-week calendar strip");
                println!();
                println!("Options:");
                println!("  -d, --drag-distance <N>   Minimum length of a swipe, in cells [default: {MIN_DRAG_DISTANCE}]");
                println!("  -l, --log-file <PATH>     Write diagnostic logs to <PATH>");
                println!("  -m, --monday              Start weeks on Monday instead of Sunday");
                println!("  -h, --help                Display this help message and exit");
                println!("  -V, --version             Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let mut terminal = ratatui::init();
    let r = terminal
        .hide_cursor()
        .context("failed to hide cursor")
        .and_then(|()| MouseCapture::enable())
        .and_then(|capture| {
            let r = func(terminal);
            drop(capture);
            r
        });
    ratatui::restore();
    r
}

/// Keeps terminal mouse reporting on for as long as it lives, including
/// while unwinding from a panic
#[derive(Debug)]
struct MouseCapture;

impl MouseCapture {
    fn enable() -> anyhow::Result<MouseCapture> {
        crossterm::execute!(io::stdout(), EnableMouseCapture)
            .context("failed to enable mouse capture")?;
        Ok(MouseCapture)
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        if let Err(e) = crossterm::execute!(io::stdout(), DisableMouseCapture) {
            tracing::warn!(error = %e, "failed to disable mouse capture");
        }
    }
}
