use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod scenarios;

#[derive(Parser)]
#[command(name = "simplevec-cmd")]
#[command(about = "Runs SimpleVector usage scenarios and stress checks")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run usage scenarios (all of them unless --scenario is given)
    Run {
        /// Name of a scenario to run (can be specified multiple times)
        #[arg(short, long = "scenario")]
        scenarios: Vec<String>,
    },

    /// List the available scenario names
    List,

    /// Apply random operations and compare the results against `Vec`
    Stress {
        /// Number of operations to apply
        #[arg(short, long, default_value_t = 100_000)]
        count: usize,

        /// Seed for the operation generator (random if not specified)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { scenarios } => commands::run::run(scenarios),
        Commands::List => commands::list::run(),
        Commands::Stress { count, seed } => commands::stress::run(count, seed),
    }
}
