//! Blink CLI - flashes messages to the terminal on a fixed interval.
//!
//! This binary is the display loop the engine itself deliberately does not
//! have: it loads a settings file, builds a [`Sequencer`], and prints one
//! scrambled message per tick.
//!
//! ```text
//! blink [--config <path>] [--count <n>]
//! ```
//!
//! `--config` defaults to `blink.toml` in the working directory. Without
//! `--count` the loop runs until interrupted.

use std::env;
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blink_config::Settings;
use blink_core::Sequencer;

const USAGE: &str = "usage: blink [--config <path>] [--count <n>]";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    config: PathBuf,
    count: Option<u64>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = PathBuf::from("blink.toml");
        let mut count = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = args.next().context("--config requires a path")?;
                    config = PathBuf::from(value);
                }
                "--count" => {
                    let value = args.next().context("--count requires a number")?;
                    count = Some(
                        value
                            .parse::<u64>()
                            .with_context(|| format!("invalid --count value '{value}'"))?,
                    );
                }
                other => bail!("unrecognized argument '{other}'\n{USAGE}"),
            }
        }

        Ok(Self { config, count })
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let raw: Vec<String> = env::args().skip(1).collect();
    if raw.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{USAGE}");
        return Ok(());
    }

    let args = Args::parse(raw.into_iter())?;
    let settings = Settings::load(&args.config)
        .with_context(|| format!("loading settings from {}", args.config.display()))?;

    if settings.messages().is_empty() {
        warn!(config = %args.config.display(), "no messages configured, nothing to flash");
        return Ok(());
    }

    info!(
        messages = settings.messages().len(),
        interval_ms = settings.interval().as_millis(),
        message_order = %settings.message_order(),
        word_order = %settings.word_order(),
        letter_order = %settings.letter_order(),
        "starting flash loop"
    );

    let interval = settings.interval();
    let message_order = settings.message_order();
    let word_order = settings.word_order();
    let letter_order = settings.letter_order();
    let sequencer = Sequencer::new(
        settings.into_messages(),
        message_order,
        word_order,
        letter_order,
    );

    let mut flashed: u64 = 0;
    while args.count.is_none_or(|count| flashed < count) {
        if let Some(message) = sequencer.next() {
            println!("{message}");
        }
        flashed += 1;
        if args.count.is_none_or(|count| flashed < count) {
            thread::sleep(interval);
        }
    }

    Ok(())
}
