use anyhow::Result;
use clap::Parser;
use clikit::cli::Cli;
use clikit::env::EnvSnapshot;
use clikit::logging::{self, LogSettings};
use clikit::{output, table_demo};

fn main() -> Result<()> {
    let env = EnvSnapshot::capture();
    logging::init(&LogSettings::from_env(&env))?;

    output::print_banner();

    let cli = Cli::parse();
    table_demo::run(&cli)?;

    Ok(())
}
