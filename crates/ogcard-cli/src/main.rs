//! ogcard CLI

use clap::Parser;
use ogcard_cli::cli::{Cli, Commands};
use ogcard_cli::commands;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.command.verbose() { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match &cli.command {
        Commands::Segment(args) => commands::segment::run(args),
        Commands::Estimate(args) => commands::estimate::run(args),
        Commands::Layout(args) => commands::layout::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Info(args) => commands::info::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
