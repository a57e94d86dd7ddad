use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Command {
    Fetch,
}

#[derive(Parser, Debug, Default)]
#[command(about = concat!(env!("CARGO_CRATE_NAME"), " - minimalistic picturegram client"))]
pub struct Flags {
    /// print the feed to stdout instead of opening the TUI
    pub command: Option<Command>,

    /// posts endpoint override
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl Flags {
    /// Parse from `std::env::args_os()`, exit on error.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Check if the command is "fetch"
    pub fn fetch(&self) -> bool {
        matches!(self.command, Some(Command::Fetch))
    }
}
