use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hledger_tools::hledger::tools::commands;
use hledger_tools::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Align(args) => {
            args.io.check()?;
            commands::align(args.io.input.as_deref(), args.io.output.as_deref())
        }
        Command::Rename(args) => {
            args.io.check()?;
            commands::rename(
                args.io.input.as_deref(),
                args.io.output.as_deref(),
                &args.source,
                &args.target,
                &args.description,
            )
        }
        Command::Reorder(args) => {
            args.io.check()?;
            commands::reorder(args.io.input.as_deref(), args.io.output.as_deref())
        }
    }
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Line filters for plain-text ledger journals."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Align every posting amount to a common column.
    Align(AlignArgs),
    /// Rewrite an account name inside matching transactions.
    Rename(RenameArgs),
    /// Sort transactions into date order.
    Reorder(ReorderArgs),
}

#[derive(clap::Args)]
struct IoArgs {
    /// Input journal path. Reads standard input when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output path. Writes to standard output when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

impl IoArgs {
    fn check(&self) -> Result<()> {
        match &self.input {
            Some(path) if !path.exists() => Err(ToolError::MissingInput(path.clone())),
            _ => Ok(()),
        }
    }
}

#[derive(clap::Args)]
struct AlignArgs {
    #[command(flatten)]
    io: IoArgs,
}

#[derive(clap::Args)]
struct RenameArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Account name to replace.
    #[arg(long, default_value = "")]
    source: String,

    /// Replacement account name.
    #[arg(long, default_value = "")]
    target: String,

    /// Description substring selecting the transactions to rewrite,
    /// matched case-insensitively.
    #[arg(long, default_value = "")]
    description: String,
}

#[derive(clap::Args)]
struct ReorderArgs {
    #[command(flatten)]
    io: IoArgs,
}
