//! # CLI
//!
//! The interactive menu client. This is the only place that touches stdin,
//! stdout, stderr and exit codes.
//!
//! Startup order: parse arguments, install logging, resolve the config (file
//! first, flags on top), pick the backend, load the data file, then hand
//! stdin/stdout to the session loop.
//!
//! ## Module Structure
//!
//! - `args`: argument parsing via clap
//! - `session`: the numbered-menu loop and per-command prompts
//! - `print`: menu, rows and colored messages

mod args;
mod print;
mod session;

use args::Cli;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use studentdb::api::StudentDbApi;
use studentdb::backend;
use studentdb::config::StudentDbConfig;
use studentdb::error::Result;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => StudentDbConfig::load_file(path)?,
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            StudentDbConfig::load(cwd)?
        }
    }
    .with_overrides(cli.backend, cli.file);
    tracing::debug!(?config, "resolved config");

    let mut api = StudentDbApi::open(backend::for_kind(config.backend), config.data_file());

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&mut api, &mut stdin.lock(), &mut stdout.lock())
}

/// Logs go to stderr so they never mix with the menu. `RUST_LOG` wins over
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
