//! Async client for the Mercado Bitcoin public ticker.

pub mod datasources;
mod error;
mod response;
mod ticker;

pub use datasources::{MercadoBitcoinService, TickerData, TickerDataSource};
pub use error::{Error, Result};
pub use response::Response;
pub use ticker::{Ticker, TickerResponse};
