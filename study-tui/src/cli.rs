use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "study-tui")]
#[command(about = "Terminal UI for keeping a log of study sessions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the configured record store
    Run,
    /// Run in dev mode with local in-memory data
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}
