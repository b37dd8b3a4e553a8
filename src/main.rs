use anyhow::Result;
use clap::Parser;
use fp_stock_ticker::chart;
use fp_stock_ticker::cli::{self, Cli};
use fp_stock_ticker::logging;
use fp_stock_ticker::ticker;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    let result = match Cli::parse().command() {
        cli::Command::Run(args) => ticker::run(args).await,
        cli::Command::Chart(args) => chart::run(args).await,
    };

    if let Err(err) = &result {
        logging::error(
            "command.failed",
            "Command ended with error",
            json!({ "error": format!("{err:#}") }),
        );
    }
    result
}
