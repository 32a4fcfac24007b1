mod cli;
mod config;
mod convert;
mod examples_cmd;
mod logging;
mod shift_cmd;
mod show_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AlmanacConfig;
use crate::convert::Settings;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AlmanacConfig::load(cli.config.as_deref())?;
    let settings = Settings::from_config(&config.defaults);
    match cli.command {
        Command::Now(args) => show_cmd::run_now(args, &settings),
        Command::Today(args) => show_cmd::run_today(args, &settings),
        Command::Format(args) => show_cmd::run_format(args, &settings),
        Command::Info(args) => show_cmd::run_info(args, &settings),
        Command::Shift(args) => shift_cmd::run_shift(args, &settings),
        Command::Diff(args) => shift_cmd::run_diff(args),
        Command::Examples(args) => examples_cmd::run(args, &settings),
    }
}
