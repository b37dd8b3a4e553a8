pub mod chart;
pub mod cli;
pub mod constants;
pub mod error;
pub mod events;
pub mod fp;
pub mod logging;
pub mod server;
pub mod tick;
pub mod ticker;

pub use error::TickerError;
