use clap::{Parser, Subcommand};

use crate::chart::ChartArgs;
use crate::ticker::RunArgs;

#[derive(Debug, Parser)]
#[command(author, version, about = "Functional stock ticker over a mock event stream")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn command(self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Stream the stock ticker from the mock server
    Run(RunArgs),
    /// Collect stock updates and render an ASCII price chart
    Chart(ChartArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Run(RunArgs::default())
    }
}
