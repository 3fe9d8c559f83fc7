//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use natureconnect_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match natureconnect_cli::run() {
        Ok(()) => Ok(()),
        // Help and version requests surface as clap errors; let clap print them.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => Err(err.into()),
    }
}
