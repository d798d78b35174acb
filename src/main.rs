//! Interactive terminal front end for moviedeck.
//!
//! Usage: `moviedeck [--config PATH] [--ephemeral] [ROUTE]`
//!
//! Reads one command per line from stdin and redraws after every input and
//! every fetch completion. Logs go to the rotating log file, never stdout.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use moviedeck::api::TmdbClient;
use moviedeck::observability::init_tracing;
use moviedeck::storage::{JsonStorage, MemoryStorage, StateStorage};
use moviedeck::{initialize, parse_command, ui, Command, Config, Driver, Event, MovieDeckError, Route};
use tokio::io::{AsyncBufReadExt, BufReader};

const USAGE: &str = "usage: moviedeck [--config PATH] [--ephemeral] [ROUTE]";

/// Fallback terminal width when `COLUMNS` is unset.
const DEFAULT_COLUMNS: usize = 80;

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    ephemeral: bool,
    route: Option<String>,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or("--config requires a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--ephemeral" => parsed.ephemeral = true,
            "--help" | "-h" => parsed.help = true,
            flag if flag.starts_with("--") => return Err(format!("unknown option: {flag}")),
            route => {
                if parsed.route.replace(route.to_string()).is_some() {
                    return Err("only one ROUTE may be given".to_string());
                }
            }
        }
    }

    Ok(parsed)
}

fn terminal_columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse().ok())
        .filter(|&cols| cols >= 20)
        .unwrap_or(DEFAULT_COLUMNS)
}

fn draw<S: StateStorage>(
    driver: &Driver<TmdbClient, S>,
    config: &Config,
    message: Option<&str>,
) -> std::io::Result<()> {
    let frame = ui::render(driver.state(), &config.image_base_url, terminal_columns());
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\u{1b}[2J\u{1b}[H{frame}")?;
    if let Some(message) = message {
        writeln!(stdout, "{message}")?;
    }
    write!(stdout, "> ")?;
    stdout.flush()
}

async fn run(args: Args) -> moviedeck::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    }
    .with_env_overrides();
    config.validate()?;

    init_tracing(&config);
    tracing::info!(ephemeral = args.ephemeral, "starting moviedeck");

    let storage: Box<dyn StateStorage> = if args.ephemeral {
        Box::new(MemoryStorage::new())
    } else {
        Box::new(JsonStorage::new(config.state_path())?)
    };

    let state = initialize(&config, storage);
    let api = TmdbClient::new(&config)?;
    let mut driver = Driver::new(state, api);

    let start = args.route.as_deref().map_or(Route::Home, Route::parse);
    driver.navigate(start)?;
    draw(&driver, &config, None)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let mut message = None;

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Command::Quit => break,
                    Command::Empty => {}
                    Command::Unknown(hint) => message = Some(hint),
                    Command::Event(Event::Navigate(route)) => {
                        driver.navigate(route)?;
                    }
                    Command::Event(event) => {
                        driver.dispatch(event)?;
                    }
                }
            }
            completed = driver.next_completion(), if driver.in_flight() > 0 => {
                if completed? == Some(false) {
                    continue;
                }
            }
        }

        draw(&driver, &config, message.as_deref())?;
    }

    tracing::info!(location = %driver.location(), "exiting moviedeck");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) if args.help => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(args) => args,
        Err(e) => {
            eprintln!("moviedeck: {e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("moviedeck: {e}");
            if matches!(e, MovieDeckError::Api(_)) {
                eprintln!("check api_key in config.toml or set TMDB_API_KEY");
            }
            ExitCode::FAILURE
        }
    }
}
