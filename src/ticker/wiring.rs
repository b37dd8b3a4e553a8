use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::constants::{STOCK_EVENT, STOCK_UPDATE_EVENT};
use crate::error::TickerError;
use crate::events::{EventEmitter, ListenerId};
use crate::fp::{each, prop, zip};
use crate::logging;
use crate::pipe;
use crate::tick::Stock;

use super::board::{StockRow, TickerBoard};
use super::format::{format_stock_numbers, process_new_stock};

pub type SharedBoard = Arc<Mutex<TickerBoard>>;
pub type RenderFn = Arc<dyn Fn(&StockRow) + Send + Sync>;

type RecordMapper = fn(Value) -> Value;
type BoardMethod = fn(&mut TickerBoard, &Value) -> Result<bool, TickerError>;
type Subscription = (&'static str, (RecordMapper, BoardMethod));

pub const STOCK_EVENT_NAMES: [&str; 2] = [STOCK_EVENT, STOCK_UPDATE_EVENT];

/// Subscribe the board to both stock events.
///
/// New stocks are named and formatted before a row is added; updates are
/// formatted and written into the existing row. `render` sees the row after
/// every successful change.
pub fn attach_ticker(
    emitter: &mut EventEmitter<Stock>,
    board: SharedBoard,
    render: Option<RenderFn>,
) -> Vec<ListenerId> {
    let mappers: Vec<RecordMapper> = vec![process_new_stock, format_stock_numbers];
    let methods: Vec<BoardMethod> = vec![TickerBoard::add_stock, TickerBoard::update_stock];
    let subscriptions = zip(STOCK_EVENT_NAMES, zip(mappers, methods));

    let mut listeners = Vec::with_capacity(subscriptions.len());
    each(|(event, (mapper, method)): Subscription| {
        let handler = ticker_handler(Arc::clone(&board), mapper, method, render.clone());
        listeners.push(emitter.on(event, handler));
    })(subscriptions);

    listeners
}

fn ticker_handler(
    board: SharedBoard,
    mapper: RecordMapper,
    method: BoardMethod,
    render: Option<RenderFn>,
) -> impl FnMut(&Stock) + Send + 'static {
    move |stock| {
        let record = pipe!(Stock::to_record, mapper)(stock);
        if let Err(err) = apply_to_board(&board, method, &record, render.as_deref()) {
            logging::warn(
                "ticker.update_failed",
                "Ticker board rejected stock event",
                json!({ "id": stock.id, "error": err.to_string() }),
            );
        }
    }
}

fn apply_to_board(
    board: &Mutex<TickerBoard>,
    method: BoardMethod,
    record: &Value,
    render: Option<&(dyn Fn(&StockRow) + Send + Sync)>,
) -> Result<(), TickerError> {
    let mut guard = board.lock().map_err(|_| TickerError::BoardPoisoned)?;
    method(&mut *guard, record)?;

    let row = prop("id", record)
        .and_then(Value::as_str)
        .and_then(|id| guard.row(id));
    if let (Some(render), Some(row)) = (render, row) {
        render(row);
    }
    Ok(())
}
