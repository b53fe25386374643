use crate::domain::error::DomainError;
use crate::domain::values::currency::Currency;

/// Source of USD conversion rates.
#[async_trait::async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// How many US dollars one unit of `currency` is worth.
    async fn usd_rate(&self, currency: &Currency) -> Result<f64, DomainError>;

    fn name(&self) -> &str;
}
