use crate::domain::error::DomainError;
use crate::domain::ports::exchange_rate::ExchangeRateProvider;
use crate::domain::values::currency::Currency;
use std::collections::HashMap;

/// In-memory rate table. USD is always 1.0; unknown currencies are errors.
#[derive(Debug, Clone, Default)]
pub struct FixedRateProvider {
    rates: HashMap<Currency, f64>,
}

impl FixedRateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, currency: Currency, usd_rate: f64) -> Self {
        self.rates.insert(currency, usd_rate);
        self
    }
}

#[async_trait::async_trait]
impl ExchangeRateProvider for FixedRateProvider {
    async fn usd_rate(&self, currency: &Currency) -> Result<f64, DomainError> {
        if currency.is_usd() {
            return Ok(1.0);
        }
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| DomainError::ExchangeRate(format!("No fixed rate for {currency}")))
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
