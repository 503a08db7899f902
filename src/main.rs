use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;

use mercado_ticker::datasources::DEFAULT_BASE_URL;
use mercado_ticker::MercadoBitcoinService;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let base_url = env::var("MERCADO_BITCOIN_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
    let timeout = match env::var("MERCADO_BITCOIN_TIMEOUT_SECS") {
        Ok(secs) => secs
            .parse()
            .map_err(|e| anyhow!("MERCADO_BITCOIN_TIMEOUT_SECS: {}", e))?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };

    let client = Client::builder()
        .user_agent(concat!("mercado-ticker ", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(timeout))
        .build()?;
    let service = MercadoBitcoinService::new(Arc::new(client), &base_url)?;

    let response = service.get_ticker().await?;
    let ticker = match response.body() {
        Some(body) => &body.ticker,
        None => {
            return Err(anyhow!(
                "Mercado Bitcoin: HTTP {} {}",
                response.status(),
                response.error_body().unwrap_or("")
            ))
        }
    };

    let rows = [
        ("Last", ticker.last.to_string()),
        ("High", ticker.high.to_string()),
        ("Low", ticker.low.to_string()),
        ("Bid", ticker.buy.to_string()),
        ("Ask", ticker.sell.to_string()),
        ("Volume", ticker.vol.to_string()),
    ];
    let width = rows.iter().map(|(_, v)| v.len()).max().unwrap_or(8);
    println!("BTC @ {}", ticker.date.to_rfc3339());
    for (label, value) in rows.iter() {
        println!("{:<6} {:>width$}", label, value, width = width);
    }
    Ok(())
}
