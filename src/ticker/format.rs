use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::fp::{filter_out, map, prop, reduce, set_prop};
use crate::pipe;

/// Two fixed decimals, ties rounded away from zero on the exact binary value.
pub fn format_decimal(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        None => format!("{value:.2}"),
    }
}

pub fn format_currency(value: String) -> String {
    format!("${value}")
}

/// Prefix positive numbers with `+`; everything else passes through.
pub fn format_sign(value: String) -> String {
    match value.parse::<f64>() {
        Ok(number) if number > 0.0 => format!("+{value}"),
        _ => value,
    }
}

pub fn format_price(value: f64) -> String {
    pipe!(format_decimal, format_currency)(value)
}

pub fn format_change(value: f64) -> String {
    pipe!(format_decimal, format_sign)(value)
}

pub fn add_stock_name(stock: Value) -> Value {
    let name = prop("id", &stock).cloned().unwrap_or(Value::Null);
    set_prop("name", &stock, name)
}

type FieldUpdate = (&'static str, Option<String>);

/// Replace the numeric `price` and `change` fields with display strings.
pub fn format_stock_numbers(stock: Value) -> Value {
    let formatters: Vec<(&'static str, fn(f64) -> String)> = vec![
        ("price", format_price as fn(f64) -> String),
        ("change", format_change as fn(f64) -> String),
    ];

    let updates = pipe!(
        map(|(name, formatter): (&'static str, fn(f64) -> String)| -> FieldUpdate {
            (name, prop(name, &stock).and_then(Value::as_f64).map(formatter))
        }),
        filter_out::<FieldUpdate, _>(|(_, formatted)| formatted.is_none())
    )(formatters);

    reduce(|record: Value, (name, formatted): FieldUpdate| match formatted {
        Some(text) => set_prop(name, &record, text),
        None => record,
    })(stock)(updates)
}

pub fn process_new_stock(stock: Value) -> Value {
    pipe!(add_stock_name, format_stock_numbers)(stock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formats_prices_and_changes() {
        assert_eq!(format_price(121.95), "$121.95");
        assert_eq!(format_price(65.0), "$65.00");
        assert_eq!(format_change(1.5), "+1.50");
        assert_eq!(format_change(-8.84), "-8.84");
        assert_eq!(format_change(0.0), "0.00");
        assert_eq!(format_change(0.001), "0.00");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_decimal(0.125), "0.13");
        assert_eq!(format_decimal(10.625), "10.63");
        assert_eq!(format_decimal(-0.125), "-0.13");
        assert_eq!(format_price(0.125), "$0.13");
        assert_eq!(format_change(-0.125), "-0.13");
        assert_eq!(format_change(10.625), "+10.63");
        // 1.005 is stored just below the tie
        assert_eq!(format_decimal(1.005), "1.00");
    }

    #[test]
    fn new_stock_gets_name_and_display_numbers() {
        let record = json!({ "id": "GOOG", "price": 821.31, "change": -8.84 });
        let processed = process_new_stock(record.clone());

        assert_eq!(
            processed,
            json!({ "id": "GOOG", "name": "GOOG", "price": "$821.31", "change": "-8.84" })
        );
        assert_eq!(record["price"], 821.31);
    }

    #[test]
    fn missing_numbers_are_left_alone() {
        let record = json!({ "id": "MSFT", "price": 65.78 });
        let formatted = format_stock_numbers(record);
        assert_eq!(formatted, json!({ "id": "MSFT", "price": "$65.78" }));

        let already = json!({ "id": "MSFT", "price": "$65.78", "change": "+1.51" });
        assert_eq!(format_stock_numbers(already.clone()), already);
    }
}
