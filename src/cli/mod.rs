// CLI module for operations that run instead of, or before, the server

pub mod migrate;

use clap::{Parser, Subcommand};

/// Master-file backend CLI
#[derive(Parser)]
#[command(name = "masterfile-backend")]
#[command(about = "Multi-tenant master-file backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Migrate the database and start the HTTP server (default)
    Serve,

    /// Run pending database migrations and exit
    Migrate,
}

impl Cli {
    /// The command to run; no subcommand means serve
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }
}
