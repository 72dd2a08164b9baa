mod business_cmd;
mod cli;
mod config;
mod convert;
mod distance_cmd;
mod each_cmd;
mod logging;
mod shift_cmd;
mod week_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let tz = convert::parse_time_zone(cli.time_zone.as_deref().unwrap_or(&config.time_zone))?;

    match cli.command {
        Command::Shift(args) => shift_cmd::run_shift(args, &tz),
        Command::Set(args) => shift_cmd::run_set(args, &tz),
        Command::Week(args) => week_cmd::run(args, &tz),
        Command::Business(args) => business_cmd::run(args, &config, &tz),
        Command::Each(args) => each_cmd::run(args, &config, &tz),
        Command::Distance(args) => distance_cmd::run(args, &config, &tz),
    }
}
