use super::print::print_diagnostics;
use super::setup::{init_logging, Cli};
use clap::Parser;
use mixtape::api::MixtapeApi;
use mixtape::config::MixtapeConfig;
use mixtape::error::{MixtapeError, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the user config directory (used by tests).
const CONFIG_DIR_ENV: &str = "MIXTAPE_CONFIG_DIR";

const EXIT_OK: i32 = 0;
const EXIT_INCOMPLETE: i32 = 2;

/// Runs one replay and returns the process exit status.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json_logs);

    let config = load_config(&cli)?;
    debug!(?config, "Loaded config");

    let mut printed = 0;
    let mut api = MixtapeApi::load_operations(open(&cli.changes)?, config)?;
    flush_diagnostics(&api, &mut printed);

    match &cli.input {
        Some(path) => api.ingest(open(path)?)?,
        None => api.ingest(io::stdin().lock())?,
    }
    flush_diagnostics(&api, &mut printed);

    api.run();
    flush_diagnostics(&api, &mut printed);

    match &cli.output {
        Some(path) => api.write_output(create(path)?)?,
        None => api.write_output(io::stdout().lock())?,
    }

    Ok(if api.succeeded() {
        EXIT_OK
    } else {
        EXIT_INCOMPLETE
    })
}

/// Prints the diagnostics added since the last call, so lines appear in the
/// order the phases produced them even if a later phase fails.
fn flush_diagnostics(api: &MixtapeApi, printed: &mut usize) {
    let diagnostics = &api.report().diagnostics;
    print_diagnostics(&diagnostics[*printed..]);
    *printed = diagnostics.len();
}

fn load_config(cli: &Cli) -> Result<MixtapeConfig> {
    let mut config = match &cli.config {
        Some(path) => MixtapeConfig::load_file(path)?,
        None => match config_dir() {
            Some(dir) => MixtapeConfig::load(dir)?,
            None => MixtapeConfig::default(),
        },
    };

    if let Some(batch_size) = cli.batch_size {
        config.batch_size = usize::try_from(batch_size).unwrap_or(usize::MAX);
    }
    config.pretty |= cli.pretty;
    config.strict |= cli.strict;
    Ok(config)
}

fn config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(MixtapeConfig::default_dir)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| with_path(e, path))
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| with_path(e, path))
}

fn with_path(err: io::Error, path: &Path) -> MixtapeError {
    MixtapeError::Io(io::Error::new(
        err.kind(),
        format!("{}: {}", path.display(), err),
    ))
}
