use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub id: String,
    pub price: f64,
    pub change: f64,
}

impl Stock {
    pub fn new(id: impl Into<String>, price: f64, change: f64) -> Self {
        Self {
            id: id.into(),
            price,
            change,
        }
    }

    /// Key/value view consumed by the presentation pipelines.
    pub fn to_record(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// An emitted event as seen by a collector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerEvent {
    pub name: String,
    pub stock: Stock,
}

pub fn default_stocks() -> Vec<Stock> {
    vec![
        Stock::new("AAPL", 121.95, 0.01),
        Stock::new("MSFT", 65.78, 1.51),
        Stock::new("GOOG", 821.31, -8.84),
    ]
}
