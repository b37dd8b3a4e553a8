pub mod board;
pub mod format;
pub mod wiring;

use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::Args;
use serde_json::json;
use tokio::sync::watch;

use crate::error::TickerError;
use crate::logging;
use crate::server::{self, connect_to_server, ServerConfig, ShutdownSignal};

pub use board::{render_row, Cell, StockRow, TickerBoard};
pub use wiring::{attach_ticker, RenderFn, SharedBoard};

#[derive(Debug, Args, Clone, Default)]
pub struct RunArgs {
    /// Stop after this many stock updates
    #[arg(short, long)]
    pub max_updates: Option<usize>,

    /// Seed the random walk for a reproducible stream
    #[arg(long)]
    pub seed: Option<u64>,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let config = ServerConfig {
        max_updates: args.max_updates,
        seed: args.seed,
        ..ServerConfig::default()
    };

    let render: RenderFn = Arc::new(|row: &StockRow| println!("{}", render_row(row)));
    let (board, stopped_by) = stream_ticker(config, Some(render)).await?;
    if stopped_by == ShutdownSignal::Immediate {
        logging::info(
            "ticker.skip_summary",
            "Immediate shutdown, final board not printed",
            json!({ "rows": board.len() }),
        );
        return Ok(());
    }
    println!("{}", board.render());
    Ok(())
}

/// Connect a fresh board to a mock server and stream until the server stops,
/// returning the final board and the shutdown request that stopped it.
pub async fn stream_ticker(
    config: ServerConfig,
    render: Option<RenderFn>,
) -> Result<(TickerBoard, ShutdownSignal)> {
    let board: SharedBoard = Arc::new(Mutex::new(TickerBoard::new()));
    let mut mock = connect_to_server(config);
    attach_ticker(mock.emitter_mut(), Arc::clone(&board), render);

    let (shutdown_tx, shutdown_rx) = watch::channel(ShutdownSignal::None);
    let signals_task = tokio::spawn(server::handle_signals(shutdown_tx));

    let run_result = mock.run(shutdown_rx).await.map(|server| server.stopped_by());

    signals_task.abort();
    let _ = signals_task.await;
    let stopped_by = run_result?;

    let snapshot = board
        .lock()
        .map_err(|_| TickerError::BoardPoisoned)?
        .clone();
    Ok((snapshot, stopped_by))
}
