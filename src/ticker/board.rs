use serde_json::Value;

use crate::constants::STOCK_CLASS_PREFIX;
use crate::error::TickerError;
use crate::fp::{each, filter_in, filter_out, map, prop, spread_args, zip};
use crate::pipe;

const INFO_CELL_CLASSES: [&str; 3] = ["stock-name", "stock-price", "stock-change"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub class: String,
    pub content: String,
}

impl Cell {
    pub fn with_class(class: &str) -> Self {
        Self {
            class: class.to_string(),
            content: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRow {
    pub id: String,
    pub cells: Vec<Cell>,
}

impl StockRow {
    pub fn cell(&self, class: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.class == class)
    }
}

/// Rows of classed cells, one row per stock, in the order stocks arrived.
#[derive(Debug, Clone, Default)]
pub struct TickerBoard {
    rows: Vec<StockRow>,
}

impl TickerBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[StockRow] {
        &self.rows
    }

    pub fn row(&self, id: &str) -> Option<&StockRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row for `data`. Returns `false` when a row for the id already
    /// existed, in which case that row is updated instead.
    pub fn add_stock(&mut self, data: &Value) -> Result<bool, TickerError> {
        let id = stock_id(data)?;
        if self.row(&id).is_some() {
            self.update_stock(data)?;
            return Ok(false);
        }

        let mut row = StockRow {
            id,
            cells: map(Cell::with_class)(INFO_CELL_CLASSES.to_vec()),
        };
        update_stock_elems(stock_info_cells(&mut row), data);
        self.rows.push(row);
        Ok(true)
    }

    /// Refresh the row for `data.id`. Returns whether such a row exists.
    pub fn update_stock(&mut self, data: &Value) -> Result<bool, TickerError> {
        let id = stock_id(data)?;
        let rows = filter_in(matching_stock_id(&id))(self.rows.iter_mut().collect::<Vec<_>>());
        let found = !rows.is_empty();

        each(|row: &mut StockRow| {
            update_stock_elems(stock_info_cells(row), data);
        })(rows);

        Ok(found)
    }

    pub fn render(&self) -> String {
        let mut lines = vec![format!("{:<8} {:>12} {:>10}", "STOCK", "PRICE", "CHANGE")];
        lines.extend(self.rows.iter().map(render_row));
        lines.join("\n")
    }
}

/// Fill each cell from the record field named by its class, skipping cells
/// whose field is absent. Returns how many cells were written.
pub fn update_stock_elems(cells: Vec<&mut Cell>, data: &Value) -> usize {
    let field_value = pipe!(strip_prefix(STOCK_CLASS_PREFIX), |field: String| {
        prop(&field, data)
            .filter(|value| !value.is_null())
            .map(display_value)
    });

    let classes: Vec<String> = cells.iter().map(|cell| cell.class.clone()).collect();
    let values = map(field_value)(classes);
    let updates = filter_out::<(&mut Cell, Option<String>), _>(|(_, value)| value.is_none())(
        zip(cells, values),
    );

    let written = updates.len();
    each(spread_args(set_content))(updates);
    written
}

pub fn render_row(row: &StockRow) -> String {
    format!(
        "{:<8} {:>12} {:>10}",
        cell_content(row, "stock-name"),
        cell_content(row, "stock-price"),
        cell_content(row, "stock-change")
    )
}

fn cell_content<'a>(row: &'a StockRow, class: &str) -> &'a str {
    row.cell(class).map_or("-", |cell| cell.content.as_str())
}

fn strip_prefix(prefix: &'static str) -> impl Fn(String) -> String {
    move |value| match value.strip_prefix(prefix) {
        Some(rest) => rest.to_string(),
        None => value,
    }
}

fn stock_id(data: &Value) -> Result<String, TickerError> {
    prop("id", data)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(TickerError::MissingStockId)
}

fn matching_stock_id(id: &str) -> impl Fn(&&mut StockRow) -> bool + '_ {
    move |row| row.id == id
}

fn is_stock_info_cell(cell: &&mut Cell) -> bool {
    cell.class.starts_with(STOCK_CLASS_PREFIX)
}

fn stock_info_cells(row: &mut StockRow) -> Vec<&mut Cell> {
    filter_in(is_stock_info_cell)(row.cells.iter_mut().collect())
}

fn set_content(cell: &mut Cell, value: Option<String>) {
    if let Some(content) = value {
        cell.content = content;
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn display(id: &str, price: &str, change: &str) -> Value {
        json!({ "id": id, "name": id, "price": price, "change": change })
    }

    #[test]
    fn add_stock_creates_row_with_all_cells() {
        let mut board = TickerBoard::new();
        assert!(board.add_stock(&display("AAPL", "$121.95", "+0.01")).unwrap());

        let row = board.row("AAPL").expect("row added");
        assert_eq!(row.cell("stock-name").unwrap().content, "AAPL");
        assert_eq!(row.cell("stock-price").unwrap().content, "$121.95");
        assert_eq!(row.cell("stock-change").unwrap().content, "+0.01");
    }

    #[test]
    fn update_only_touches_present_fields() {
        let mut board = TickerBoard::new();
        board.add_stock(&display("MSFT", "$65.78", "+1.51")).unwrap();

        let updated = board
            .update_stock(&json!({ "id": "MSFT", "price": "$65.80", "change": "+1.53" }))
            .unwrap();
        assert!(updated);

        let row = board.row("MSFT").unwrap();
        assert_eq!(row.cell("stock-name").unwrap().content, "MSFT");
        assert_eq!(row.cell("stock-price").unwrap().content, "$65.80");
        assert_eq!(row.cell("stock-change").unwrap().content, "+1.53");
    }

    #[test]
    fn unknown_stock_update_is_noop() {
        let mut board = TickerBoard::new();
        board.add_stock(&display("AAPL", "$1.00", "+0.01")).unwrap();
        let before = board.clone();

        assert!(!board.update_stock(&display("GOOG", "$2.00", "-0.01")).unwrap());
        assert_eq!(board.rows(), before.rows());
    }

    #[test]
    fn re_adding_updates_instead_of_duplicating() {
        let mut board = TickerBoard::new();
        board.add_stock(&display("GOOG", "$821.31", "-8.84")).unwrap();
        assert!(!board.add_stock(&display("GOOG", "$821.40", "-8.75")).unwrap());

        assert_eq!(board.len(), 1);
        assert_eq!(board.row("GOOG").unwrap().cell("stock-price").unwrap().content, "$821.40");
    }

    #[test]
    fn records_without_id_are_rejected() {
        let mut board = TickerBoard::new();
        let err = board.add_stock(&json!({ "price": "$1.00" })).unwrap_err();
        assert_eq!(err, TickerError::MissingStockId);
        assert!(board.is_empty());
    }

    #[test]
    fn update_stock_elems_counts_written_cells() {
        let mut cells = vec![Cell::with_class("stock-price"), Cell::with_class("stock-volume")];
        let written = update_stock_elems(cells.iter_mut().collect(), &json!({ "price": 3.5 }));

        assert_eq!(written, 1);
        assert_eq!(cells[0].content, "3.5");
        assert_eq!(cells[1].content, "");
    }

    #[test]
    fn render_lists_rows_in_arrival_order() {
        let mut board = TickerBoard::new();
        board.add_stock(&display("AAPL", "$121.95", "+0.01")).unwrap();
        board.add_stock(&display("MSFT", "$65.78", "+1.51")).unwrap();

        let rendered = board.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("AAPL"));
        assert!(lines[2].starts_with("MSFT"));
        assert!(lines[2].ends_with("+1.51"));
    }
}
