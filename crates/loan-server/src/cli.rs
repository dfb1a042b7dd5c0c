use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `loantrack` binary.
#[derive(Debug, Parser)]
#[command(name = "loantrack", version, about = "Loan application tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file, merged above loantrack.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the web server
    Serve(ServeArgs),
    /// Print the resolved configuration (secrets masked)
    Config,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on, overriding server.bind
    #[arg(long)]
    pub bind: Option<String>,
}
