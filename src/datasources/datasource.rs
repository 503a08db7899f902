use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
pub trait TickerDataSource: Sync + Send {
    async fn get_ticker_data(&self) -> TickerData;
}

#[derive(Debug, Clone)]
pub struct TickerData {
    pub last_price: Option<Decimal>,
    pub prev_price: Option<Decimal>,
    pub insufficient_data: bool,
    pub errors: Vec<String>,
}

impl TickerData {
    pub fn error(message: String) -> TickerData {
        TickerData {
            last_price: None,
            prev_price: None,
            insufficient_data: true,
            errors: vec![message],
        }
    }
}
