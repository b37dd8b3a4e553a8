use std::sync::{Arc, Mutex};

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fp_stock_ticker::constants::{STOCK_EVENT, STOCK_UPDATE_EVENT};
use fp_stock_ticker::events::EventEmitter;
use fp_stock_ticker::fp::variadic;
use fp_stock_ticker::logging;
use fp_stock_ticker::tick::{default_stocks, Stock};
use fp_stock_ticker::ticker::format::process_new_stock;
use fp_stock_ticker::ticker::{attach_ticker, TickerBoard};

fn bench_record_pipeline(c: &mut Criterion) {
    let record = Stock::new("AAPL", 121.95, 0.01).to_record();
    c.bench_function("process_new_stock", |b| {
        b.iter(|| process_new_stock(black_box(record.clone())))
    });
}

fn bench_variadic_curry(c: &mut Criterion) {
    let sum = variadic::curry(|args: Vec<u64>| args.into_iter().sum::<u64>(), 8);
    c.bench_function("variadic_curry_arity_8", |b| {
        b.iter(|| variadic::uncurry(&sum, black_box((1..=8).collect())).ok())
    });
}

fn bench_ticker_updates(c: &mut Criterion) {
    logging::set_silent(true);
    let batch_size: u64 = 1_000;

    let mut emitter = EventEmitter::<Stock>::new();
    let board = Arc::new(Mutex::new(TickerBoard::new()));
    attach_ticker(&mut emitter, board, None);
    let stocks = default_stocks();
    for stock in &stocks {
        emitter.emit(STOCK_EVENT, stock);
    }

    let mut group = c.benchmark_group("ticker_updates");
    group.throughput(Throughput::Elements(batch_size));
    group.bench_function("emit_update_batch", |b| {
        b.iter(|| {
            for i in 0..batch_size {
                let stock = &stocks[(i as usize) % stocks.len()];
                emitter.emit(STOCK_UPDATE_EVENT, stock);
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_record_pipeline,
    bench_variadic_curry,
    bench_ticker_updates
);
criterion_main!(benches);
