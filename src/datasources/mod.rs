mod datasource;
mod mercadobitcoin;

pub use datasource::{TickerData, TickerDataSource};
pub use mercadobitcoin::{MercadoBitcoinService, DEFAULT_BASE_URL, TICKER_PATH};
