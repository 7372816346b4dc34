use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use tip_cli::{AppConfig, ConfigOverrides, Session, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator.
///
/// Reads commands from stdin (`amount 100`, `preset 15`, `pay`, ...) and
/// prints the calculator screen after each one. Type `help` for the list.
#[derive(Debug, Parser)]
#[command(name = "tip-calculator", version, about)]
struct Cli {
    /// TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. `debug`).
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Start with the history visible.
    #[arg(long, default_value_t = false)]
    show_history: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?.apply(ConfigOverrides {
        log_level: cli.log_level,
        log_file: cli.log_file,
        show_history: cli.show_history,
    });

    logging::init_logging(&config.log_level, config.log_file.as_deref())?;
    debug!("configuration:\n{config}");
    info!("tip calculator started");

    let mut session = Session::new(&config);
    session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("session failed")
}
