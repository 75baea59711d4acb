use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use eyre::{Result, eyre};

use chrome_history_export::config::{self, Config, Platform};
use chrome_history_export::pipeline;
use chrome_history_export::publish::SheetsClient;

/// Upload Google Chrome's browsing history to a Google Sheet.
/// Runs once immediately, then repeats every hour.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The location of the Chrome history file to read.
    /// If omitted, the file is looked up in Chrome's default location.
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,
}

const EXPORT_INTERVAL: Duration = Duration::from_secs(60 * 60);

fn resolve_history_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    config::default_history_path(Platform::current()).ok_or_else(|| {
        eyre!(
            "Your system ({:?}) is not recognized. Please specify the input file manually.",
            std::env::consts::OS
        )
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let history_db = resolve_history_path(cli.input_file)?;
    let config = Config::from_env(history_db)?;
    let uploader = SheetsClient::from_credentials(&config.credentials)?;

    // First pass runs synchronously; a bad path or unreadable database should
    // fail loudly at startup rather than an hour in.
    pipeline::run(&config, &uploader)?;

    // From here on the timer owns the cadence. Per-run failures are reported
    // and the next tick is the retry; the process keeps running.
    loop {
        thread::sleep(EXPORT_INTERVAL);
        if let Err(err) = pipeline::run(&config, &uploader) {
            log::error!("export failed: {err}");
        }
    }
}
