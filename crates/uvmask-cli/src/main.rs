// crates/uvmask-cli/src/main.rs

use clap::{ArgAction, Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "uvmask")]
#[command(about = "Resin printer layer mask codec tools", long_about = None)]
pub struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a layer between formats (by extension or --from/--to)
    Encode(cmd::encode::EncodeArgs),

    /// Report size, runs, fingerprint and weight of a layer
    Info(cmd::info::InfoArgs),

    /// List the built-in formats
    Formats,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Info(args) => cmd::info::run(args),
        Commands::Formats => cmd::formats::run(),
    }
}
