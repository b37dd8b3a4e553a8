use std::time::Duration;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::json;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::watch;
use tokio::time;

use crate::constants::{
    FIRST_UPDATE_DELAY_MS, INITIAL_STOCKS_DELAY_MS, STOCK_EVENT, STOCK_UPDATE_EVENT,
    UPDATE_DELAY_MAX_MS, UPDATE_DELAY_MIN_MS,
};
use crate::events::{EventEmitter, ListenerId};
use crate::logging;
use crate::tick::{default_stocks, Stock};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub initial_delay: Duration,
    pub first_update_delay: Duration,
    pub update_delay_min: Duration,
    pub update_delay_max: Duration,
    pub max_updates: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(INITIAL_STOCKS_DELAY_MS),
            first_update_delay: Duration::from_millis(FIRST_UPDATE_DELAY_MS),
            update_delay_min: Duration::from_millis(UPDATE_DELAY_MIN_MS),
            update_delay_max: Duration::from_millis(UPDATE_DELAY_MAX_MS),
            max_updates: None,
            seed: None,
        }
    }
}

/// `Graceful` lets callers finish their output; `Immediate` asks them to
/// drop it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShutdownSignal {
    None,
    Graceful,
    Immediate,
}

/// Fake server-event stream: announces every stock once, then walks one
/// random stock at a time on a jittered timer.
pub struct MockServer {
    config: ServerConfig,
    stocks: Vec<Stock>,
    emitter: EventEmitter<Stock>,
    rng: StdRng,
    updates_emitted: usize,
    stopped_by: ShutdownSignal,
}

pub fn connect_to_server(config: ServerConfig) -> MockServer {
    MockServer::new(config, default_stocks())
}

impl MockServer {
    pub fn new(config: ServerConfig, stocks: Vec<Stock>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            stocks,
            emitter: EventEmitter::new(),
            rng,
            updates_emitted: 0,
            stopped_by: ShutdownSignal::None,
        }
    }

    pub fn on<F>(&mut self, event: impl Into<String>, handler: F) -> ListenerId
    where
        F: FnMut(&Stock) + Send + 'static,
    {
        self.emitter.on(event, handler)
    }

    pub fn add_event_listener<F>(&mut self, event: impl Into<String>, handler: F) -> ListenerId
    where
        F: FnMut(&Stock) + Send + 'static,
    {
        self.emitter.add_event_listener(event, handler)
    }

    pub fn remove_event_listener(&mut self, event: &str, id: ListenerId) -> bool {
        self.emitter.remove_event_listener(event, id)
    }

    pub fn emitter_mut(&mut self) -> &mut EventEmitter<Stock> {
        &mut self.emitter
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn updates_emitted(&self) -> usize {
        self.updates_emitted
    }

    /// The shutdown request that ended [`MockServer::run`], `None` if it ran
    /// out of updates on its own.
    pub fn stopped_by(&self) -> ShutdownSignal {
        self.stopped_by
    }

    pub fn emit_initial_stocks(&mut self) -> usize {
        for stock in &self.stocks {
            self.emitter.emit(STOCK_EVENT, stock);
        }
        self.stocks.len()
    }

    /// Shift one random stock's price and change by the same delta and
    /// announce it.
    pub fn random_stock_update(&mut self) -> Option<Stock> {
        if self.stocks.is_empty() {
            return None;
        }

        let idx = self.rng.gen_range(0..self.stocks.len());
        let delta = random_delta(&mut self.rng);
        let stock = &mut self.stocks[idx];
        stock.price += delta;
        stock.change += delta;
        let updated = stock.clone();

        self.emitter.emit(STOCK_UPDATE_EVENT, &updated);
        self.updates_emitted += 1;
        Some(updated)
    }

    fn next_update_delay(&mut self) -> Duration {
        let min = self.config.update_delay_min;
        let max = self.config.update_delay_max;
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    fn update_budget_spent(&self) -> bool {
        self.config
            .max_updates
            .is_some_and(|max| self.updates_emitted >= max)
    }

    /// Drive the timers until shutdown is requested or the update budget is
    /// spent. The server is handed back so callers can inspect final state.
    pub async fn run(mut self, mut shutdown: watch::Receiver<ShutdownSignal>) -> Result<Self> {
        logging::info(
            "server.start",
            "Mock stock server started",
            json!({ "stocks": self.stocks.len(), "max_updates": self.config.max_updates }),
        );

        let initial_delay = self.config.initial_delay;
        self.stopped_by = wait_or_shutdown(initial_delay, &mut shutdown).await;
        if self.stopped_by == ShutdownSignal::None {
            let emitted = self.emit_initial_stocks();
            logging::info(
                "server.initial_stocks",
                "Initial stocks announced",
                json!({ "emitted": emitted }),
            );

            let mut delay = self
                .config
                .first_update_delay
                .saturating_sub(self.config.initial_delay);
            loop {
                if self.update_budget_spent() {
                    logging::info(
                        "server.limit",
                        "Mock server reached max update budget",
                        json!({ "updates": self.updates_emitted }),
                    );
                    break;
                }
                self.stopped_by = wait_or_shutdown(delay, &mut shutdown).await;
                if self.stopped_by != ShutdownSignal::None {
                    break;
                }
                self.random_stock_update();
                delay = self.next_update_delay();
            }
        }

        logging::info(
            "server.stop",
            "Mock stock server stopped",
            json!({ "updates": self.updates_emitted, "shutdown": self.stopped_by }),
        );
        Ok(self)
    }
}

/// Draw a price delta: magnitude in `[0.01, 0.09]`, negative roughly two
/// times in nine.
pub fn random_delta<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let sign = if rng.gen_range(1..10) > 7 { -1.0 } else { 1.0 };
    sign * f64::from(rng.gen_range(1..10u32)) / 1e2
}

/// Sleep for `delay`. Returns the shutdown request that cut the sleep short,
/// or `ShutdownSignal::None` once the full delay has elapsed.
async fn wait_or_shutdown(
    delay: Duration,
    shutdown: &mut watch::Receiver<ShutdownSignal>,
) -> ShutdownSignal {
    let requested = *shutdown.borrow();
    if requested != ShutdownSignal::None {
        return requested;
    }

    let sleep = time::sleep(delay);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => return ShutdownSignal::None,
            changed = shutdown.changed() => {
                if changed.is_err() {
                    (&mut sleep).await;
                    return ShutdownSignal::None;
                }
                let requested = *shutdown.borrow();
                if requested != ShutdownSignal::None {
                    return requested;
                }
            }
        }
    }
}

pub(crate) async fn handle_signals(shutdown_tx: watch::Sender<ShutdownSignal>) -> Result<()> {
    let mut sigterm =
        signal(SignalKind::terminate()).context("failed to register SIGTERM handler")?;
    let mut sigint =
        signal(SignalKind::interrupt()).context("failed to register SIGINT handler")?;

    loop {
        tokio::select! {
            _ = sigterm.recv() => {
                logging::info(
                    "signal.received",
                    "SIGTERM received, initiating graceful shutdown",
                    json!({ "signal": "SIGTERM" })
                );
                if shutdown_tx.send(ShutdownSignal::Graceful).is_err() {
                    break;
                }
            }
            _ = sigint.recv() => {
                logging::warn(
                    "signal.received",
                    "SIGINT received, stopping immediately",
                    json!({ "signal": "SIGINT" })
                );
                let _ = shutdown_tx.send(ShutdownSignal::Immediate);
                break;
            }
        }
    }

    Ok(())
}

pub mod testkit {
    use super::*;
    use tokio::sync::mpsc;

    use crate::tick::ServerEvent;

    /// Run a server in-process and collect the first `count` events it
    /// emits, fewer if it stops on its own first.
    pub async fn collect_events(config: ServerConfig, count: usize) -> Result<Vec<ServerEvent>> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut server = connect_to_server(config);
        for event in [STOCK_EVENT, STOCK_UPDATE_EVENT] {
            let event_tx = event_tx.clone();
            server.on(event, move |stock: &Stock| {
                let _ = event_tx.send(ServerEvent {
                    name: event.to_string(),
                    stock: stock.clone(),
                });
            });
        }
        drop(event_tx);

        let (shutdown_tx, shutdown_rx) = watch::channel(ShutdownSignal::None);
        let server_handle = tokio::spawn(async move { server.run(shutdown_rx).await.map(drop) });

        let mut collected = Vec::with_capacity(count);
        while collected.len() < count {
            match event_rx.recv().await {
                Some(event) => collected.push(event),
                None => break,
            }
        }

        let _ = shutdown_tx.send(ShutdownSignal::Graceful);
        server_handle.await??;

        Ok(collected)
    }
}
