use crate::domain::error::DomainError;
use crate::domain::ports::exchange_rate::ExchangeRateProvider;
use crate::domain::values::currency::Currency;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Per-request limit; a lookup that takes longer fails and the plan falls
/// back to rate 1.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// exchangerate-api.com v6 "pair" endpoint.
pub struct ExchangeRateApiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PairResponse {
    result: String,
    #[serde(default)]
    conversion_rate: Option<f64>,
    #[serde(default, rename = "error-type")]
    error_type: Option<String>,
}

impl ExchangeRateApiProvider {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: build_client(DEFAULT_TIMEOUT),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://v6.exchangerate-api.com".to_string()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }

    fn pair_url(&self, currency: &Currency) -> String {
        format!(
            "{}/v6/{}/pair/{}/USD",
            self.base_url.trim_end_matches('/'),
            self.api_key,
            currency.code()
        )
    }

    fn rate_from_response(
        currency: &Currency,
        status: StatusCode,
        body: &str,
    ) -> Result<f64, DomainError> {
        if !status.is_success() {
            let detail = serde_json::from_str::<PairResponse>(body)
                .ok()
                .and_then(|r| r.error_type)
                .map(|t| format!(" ({t})"))
                .unwrap_or_default();
            return Err(DomainError::ExchangeRate(format!(
                "Exchange rate API returned {status} for {currency}{detail}"
            )));
        }
        Self::rate_from_body(body)
    }

    fn rate_from_body(body: &str) -> Result<f64, DomainError> {
        let data: PairResponse = serde_json::from_str(body)
            .map_err(|e| DomainError::ExchangeRate(format!("Bad response: {e}")))?;
        if data.result != "success" {
            return Err(DomainError::ExchangeRate(format!(
                "API returned {}: {}",
                data.result,
                data.error_type.unwrap_or_else(|| "unknown".into())
            )));
        }
        match data.conversion_rate {
            Some(rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
            Some(rate) => Err(DomainError::ExchangeRate(format!("Unusable rate: {rate}"))),
            None => Err(DomainError::ExchangeRate("Response has no conversion_rate".into())),
        }
    }
}

fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .user_agent(concat!("adplan/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}

#[async_trait::async_trait]
impl ExchangeRateProvider for ExchangeRateApiProvider {
    async fn usd_rate(&self, currency: &Currency) -> Result<f64, DomainError> {
        if currency.is_usd() {
            return Ok(1.0);
        }
        if self.api_key.is_empty() {
            return Err(DomainError::ExchangeRate(
                "EXCHANGE_RATE_API_KEY is not set".into(),
            ));
        }

        let resp = self
            .client
            .get(self.pair_url(currency))
            .send()
            .await
            .map_err(|e| DomainError::ExchangeRate(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| DomainError::ExchangeRate(e.to_string()))?;
        let rate = Self::rate_from_response(currency, status, &body)?;
        tracing::debug!(%currency, rate, "fetched exchange rate");
        Ok(rate)
    }

    fn name(&self) -> &str {
        "exchangerate-api"
    }
}
