//! linkding: manage bookmarks, tags and the user profile of a linkding instance.
#![deny(clippy::all, clippy::pedantic)]

use std::process;

use clap::Parser;
use linkding_cli::{
    args::Cli,
    config::{self, RawParameters},
    error::CliError,
    handlers,
    print::{Output, print_output},
    session, telemetry,
};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => print_output(&output),
        Err(error) => {
            eprintln!("Error: {error}");
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<Output, CliError> {
    let Cli { global, command } = cli;

    let config = config::resolve(&RawParameters::from(&global))?;
    telemetry::init(config.verbose())?;

    debug!("Starting CLI with config: {config}");
    debug!("About to execute command: {}", command.name());

    let client = session::connect(&config)?;
    handlers::dispatch(&client, command).await
}
