use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Monte Carlo ensembles of discrete-time stochastic processes.
#[derive(Parser)]
#[command(
    name = "stochsim",
    version,
    about = "Monte Carlo simulation of discrete-time stochastic processes"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Simulate a finite-state Markov chain and answer the configured queries.
    Dtmc(RunArgs),
    /// Sweep the multiplicative stock model over several up-probabilities.
    Stock(RunArgs),
    /// Estimate random-walk return times.
    Walk(WalkArgs),
}

/// Arguments shared by every subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the JSON report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `walk` subcommand.
#[derive(clap::Args)]
pub struct WalkArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Override the number of steps from config.
    #[arg(long)]
    pub steps: Option<usize>,
}
