use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use url::Url;

use super::datasource::{TickerData, TickerDataSource};
use crate::error::{Error, Result};
use crate::response::Response;
use crate::ticker::TickerResponse;

pub const DEFAULT_BASE_URL: &str = "https://www.mercadobitcoin.net/";
pub const TICKER_PATH: &str = "api/BTC/ticker/";

pub struct MercadoBitcoinService {
    client: Arc<Client>,
    ticker_url: Url,
}

impl MercadoBitcoinService {
    pub fn new(client: Arc<Client>, base_url: &str) -> Result<MercadoBitcoinService> {
        let mut base = Url::parse(base_url)?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(Error::UnsupportedScheme(base.scheme().to_owned()));
        }
        // Without the trailing slash `join` would replace the last segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let ticker_url = base.join(TICKER_PATH)?;
        Ok(MercadoBitcoinService { client, ticker_url })
    }

    pub fn ticker_url(&self) -> &Url {
        &self.ticker_url
    }

    /// Non-2xx, 204 and 205 come back as a `Response` without a body.
    pub async fn get_ticker(&self) -> Result<Response<TickerResponse>> {
        let resp_payload = self
            .client
            .get(self.ticker_url.clone())
            .send()
            .await
            .map_err(Error::Transport)?;
        let status = resp_payload.status();
        let headers = resp_payload.headers().clone();
        info!("Mercado Bitcoin response code: {}", status);

        if !status.is_success() {
            let error_body = match resp_payload.text().await {
                Ok(text) if text.is_empty() => None,
                Ok(text) => Some(text),
                Err(e) => {
                    warn!("Mercado Bitcoin: failed to read error body: {}", e);
                    None
                }
            };
            return Ok(Response::failure(status, headers, error_body));
        }
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return Ok(Response::empty(status, headers));
        }

        let bytes = resp_payload.bytes().await.map_err(Error::Transport)?;
        let ticker: TickerResponse = serde_json::from_slice(&bytes)?;
        debug!("Mercado Bitcoin: {:?}", ticker);
        Ok(Response::success(status, headers, ticker))
    }
}

#[async_trait]
impl TickerDataSource for MercadoBitcoinService {
    async fn get_ticker_data(&self) -> TickerData {
        match self.get_ticker().await {
            Ok(response) => {
                let status = response.status();
                match response.into_body() {
                    Some(TickerResponse { ticker }) => TickerData {
                        last_price: Some(ticker.last),
                        prev_price: ticker.open,
                        insufficient_data: false,
                        errors: vec![],
                    },
                    None => TickerData::error(format!("Mercado Bitcoin: HTTP {}", status)),
                }
            }
            Err(e) => TickerData::error(format!("Mercado Bitcoin: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base_url: &str) -> Result<MercadoBitcoinService> {
        MercadoBitcoinService::new(Arc::new(Client::new()), base_url)
    }

    #[test]
    fn default_base_url() {
        let svc = service(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            svc.ticker_url().as_str(),
            "https://www.mercadobitcoin.net/api/BTC/ticker/"
        );
    }

    #[test]
    fn base_url_without_trailing_slash_keeps_prefix() {
        let svc = service("http://localhost:8080/proxy").unwrap();
        assert_eq!(
            svc.ticker_url().as_str(),
            "http://localhost:8080/proxy/api/BTC/ticker/"
        );
    }

    #[test]
    fn rejects_bad_base_urls() {
        assert!(matches!(service("not a url"), Err(Error::InvalidBaseUrl(_))));
        assert!(matches!(
            service("ftp://example.com/"),
            Err(Error::UnsupportedScheme(s)) if s == "ftp"
        ));
    }
}
