use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Args;
use textplots::{Chart, Plot, Shape};
use tokio::sync::{mpsc, watch};
use tokio::time;

use crate::constants::{STOCK_EVENT, STOCK_UPDATE_EVENT};
use crate::server::{connect_to_server, ServerConfig, ShutdownSignal};
use crate::tick::Stock;

type PriceSeries = HashMap<String, Vec<(f64, f64)>>;

#[derive(Debug, Args, Clone)]
pub struct ChartArgs {
    /// Number of seconds to collect data before plotting
    #[arg(short, long, default_value_t = 30)]
    pub duration_secs: u64,

    /// Plot only the provided symbol
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Seed the random walk for a reproducible chart
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chart width in characters
    #[arg(long, default_value_t = 120)]
    pub width: u32,

    /// Chart height in characters
    #[arg(long, default_value_t = 30)]
    pub height: u32,
}

pub async fn run(args: ChartArgs) -> Result<()> {
    let duration = Duration::from_secs(args.duration_secs);
    let config = ServerConfig {
        seed: args.seed,
        ..ServerConfig::default()
    };
    let collected = collect_prices(config, duration).await?;

    if collected.is_empty() {
        bail!("no stock events collected within {}s", duration.as_secs());
    }

    let (symbol, points) = select_series(collected, args.symbol.as_deref())?;
    if points.len() < 2 {
        bail!("not enough data points for {symbol} to render a chart");
    }

    render_chart(&symbol, points, duration, args.width, args.height);
    Ok(())
}

/// Run a mock server for `duration`, recording `(seconds, price)` per stock
/// from both initial and update events.
pub async fn collect_prices(config: ServerConfig, duration: Duration) -> Result<PriceSeries> {
    let (price_tx, mut price_rx) = mpsc::unbounded_channel::<(f64, Stock)>();
    let started = Instant::now();

    let mut mock = connect_to_server(config);
    for event in [STOCK_EVENT, STOCK_UPDATE_EVENT] {
        let price_tx = price_tx.clone();
        mock.on(event, move |stock: &Stock| {
            let _ = price_tx.send((started.elapsed().as_secs_f64(), stock.clone()));
        });
    }
    drop(price_tx);

    println!("Collecting stock events for {}s...", duration.as_secs());

    let (shutdown_tx, shutdown_rx) = watch::channel(ShutdownSignal::None);
    let server_handle = tokio::spawn(async move { mock.run(shutdown_rx).await.map(drop) });

    time::sleep(duration).await;
    let _ = shutdown_tx.send(ShutdownSignal::Graceful);
    server_handle
        .await
        .context("mock server task panicked")??;

    let mut data = PriceSeries::new();
    while let Some((elapsed, stock)) = price_rx.recv().await {
        data.entry(stock.id).or_default().push((elapsed, stock.price));
    }
    Ok(data)
}

fn select_series(collected: PriceSeries, symbol: Option<&str>) -> Result<(String, Vec<(f64, f64)>)> {
    match symbol {
        Some(symbol) => {
            let Some(points) = collected.get(symbol) else {
                bail!("no prices collected for symbol {symbol}");
            };
            Ok((symbol.to_string(), points.clone()))
        }
        None => collected
            .into_iter()
            .max_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| b.0.cmp(&a.0)))
            .context("no series collected"),
    }
}

fn render_chart(
    symbol: &str,
    mut points: Vec<(f64, f64)>,
    duration: Duration,
    width: u32,
    height: u32,
) {
    points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    println!(
        "Rendering chart for {symbol} ({} samples) collected over ~{}s",
        points.len(),
        duration.as_secs()
    );

    let max_time = points
        .last()
        .map(|(t, _)| *t)
        .unwrap_or(duration.as_secs_f64())
        .max(1e-3);
    let min_price = points.iter().map(|(_, p)| *p).fold(f64::INFINITY, f64::min);
    let max_price = points
        .iter()
        .map(|(_, p)| *p)
        .fold(f64::NEG_INFINITY, f64::max);
    println!("Price range: {:.2} → {:.2}", min_price, max_price);

    let samples: Vec<(f32, f32)> = points
        .into_iter()
        .map(|(t, p)| (t as f32, p as f32))
        .collect();

    Chart::new(width.max(40), height.max(10), 0.0, max_time as f32)
        .lineplot(&Shape::Lines(&samples))
        .display();
    println!();
}
