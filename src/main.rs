mod app;
mod calendar;
mod clock;
mod config;
mod help;
mod nav;
mod theme;
use crate::app::App;
use crate::calendar::{DateCursor, Placement};
use crate::clock::{Clock, LocalClock};
use crate::config::{load_highlights, Config, DEFAULT_HIGHLIGHT_LIMIT};
use crate::nav::NavigationController;
use crate::theme::Theme;
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::io;
use std::path::{Path, PathBuf};
use time::{format_description::FormatItem, macros::format_description, Date, UtcOffset};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Options {
    date: Option<Date>,
    highlights: Vec<String>,
    highlight_limit: Option<usize>,
    navigation: bool,
    theme: Theme,
    placement: Placement,
    log_file: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            date: None,
            highlights: Vec::new(),
            highlight_limit: Some(DEFAULT_HIGHLIGHT_LIMIT),
            navigation: true,
            theme: Theme::default(),
            placement: Placement::default(),
            log_file: None,
        }
    }
}

impl Options {
    fn config(&self) -> Config {
        Config {
            navigation: self.navigation,
            highlights: load_highlights(&self.highlights, self.highlight_limit),
            theme: self.theme,
            placement: self.placement,
        }
    }
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('b') => opts.placement.bottom = true,
                Arg::Short('l') => opts.placement.left = true,
                Arg::Short('H') | Arg::Long("highlight") => {
                    opts.highlights.push(parser.value()?.string()?);
                }
                Arg::Long("max-highlights") => {
                    let limit = parser.value()?.parse::<usize>()?;
                    opts.highlight_limit = (limit > 0).then_some(limit);
                }
                Arg::Short('N') | Arg::Long("no-keyboard") => opts.navigation = false,
                Arg::Long("bg") => opts.theme.background = parser.value()?.parse()?,
                Arg::Long("cf") => opts.theme.current_fg = parser.value()?.parse()?,
                Arg::Long("of") => opts.theme.other_fg = parser.value()?.parse()?,
                Arg::Long("hf") => opts.theme.highlight_fg = parser.value()?.parse()?,
                Arg::Long("log-file") => opts.log_file = Some(parser.value()?.into()),
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
                // Must be determined while the process is still single-threaded
                let offset = UtcOffset::current_local_offset()
                    .context("failed to determine local time zone offset")?;
                let _logger = opts.log_file.as_deref().map(start_logger).transpose()?;
                let config = opts.config();
                let clock = LocalClock::new(offset);
                let start = opts.date.unwrap_or_else(|| clock.today());
                let cursor = DateCursor::new(start).context("start date is out of range")?;
                log::info!(
                    "Starting at {start} with {} highlighted date(s)",
                    config.highlights.len()
                );
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(&config, NavigationController::new(cursor, clock))
                        .run(&mut terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: dcal [<options>] [YYYY-MM-DD]");
                println!();
                println!("Popup month calendar for the terminal");
                println!();
                println!("Options:");
                println!("  -b                   Place the calendar at the bottom of the screen");
                println!("  -l                   Place the calendar at the left of the screen");
                println!("  -H, --highlight YYYYMMDD");
                println!("                       Highlight the given date; may be repeated");
                println!("  --max-highlights N   Highlight at most N dates [default: 32; 0 = no limit]");
                println!("  -N, --no-keyboard    Disable keyboard navigation");
                println!("  --bg COLOR           Background color [default: #cccccc]");
                println!("  --cf COLOR           Current month foreground color [default: #000000]");
                println!("  --of COLOR           Other month foreground color [default: #ffffff]");
                println!("  --hf COLOR           Highlighted date foreground color [default: red]");
                println!("  --log-file PATH      Write a log to PATH");
                println!("  -h, --help           Display this help message and exit");
                println!("  -V, --version        Show the program version and exit");
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

fn start_logger(path: &Path) -> anyhow::Result<LoggerHandle> {
    let level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    Logger::try_with_env_or_str(level)
        .context("invalid log specification")?
        .log_to_file(FileSpec::try_from(path).context("invalid log file path")?)
        .start()
        .context("failed to start logger")
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableMouseCapture)
        .context("failed to enable mouse capture")
        .and_then(|()| func(terminal));
    if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
        log::warn!("Failed to disable mouse capture: {e}");
    }
    ratatui::restore();
    r
}
