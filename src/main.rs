mod cli;
mod config;
mod convert;
mod dtmc_cmd;
mod logging;
mod report;
mod stock_cmd;
mod walk_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Dtmc(args) => dtmc_cmd::run(args),
        Command::Stock(args) => stock_cmd::run(args),
        Command::Walk(args) => walk_cmd::run(args),
    }
}
