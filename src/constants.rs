pub const STOCK_EVENT: &str = "stock";
pub const STOCK_UPDATE_EVENT: &str = "stock-update";
pub const INITIAL_STOCKS_DELAY_MS: u64 = 100;
pub const FIRST_UPDATE_DELAY_MS: u64 = 1_000;
pub const UPDATE_DELAY_MIN_MS: u64 = 300;
pub const UPDATE_DELAY_MAX_MS: u64 = 1_500;
pub const STOCK_CLASS_PREFIX: &str = "stock-";
