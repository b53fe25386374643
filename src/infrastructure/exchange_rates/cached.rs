use crate::domain::error::DomainError;
use crate::domain::ports::exchange_rate::ExchangeRateProvider;
use crate::domain::values::currency::Currency;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct CachedRate {
    rate: f64,
    fetched_at: Instant,
}

type Slot = Arc<tokio::sync::Mutex<Option<CachedRate>>>;

/// Caches rates from an inner provider for `ttl`.
///
/// Each currency has its own slot lock, held across the inner lookup:
/// concurrent callers for one currency wait for the request in flight,
/// while other currencies proceed independently. Failed lookups are not
/// cached.
pub struct CachedRateProvider {
    inner: Arc<dyn ExchangeRateProvider>,
    ttl: Duration,
    slots: Mutex<HashMap<Currency, Slot>>,
}

impl CachedRateProvider {
    pub fn new(inner: Arc<dyn ExchangeRateProvider>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    fn slot(&self, currency: &Currency) -> Result<Slot, DomainError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| DomainError::ExchangeRate(format!("Rate cache poisoned: {e}")))?;
        Ok(slots.entry(currency.clone()).or_default().clone())
    }
}

#[async_trait::async_trait]
impl ExchangeRateProvider for CachedRateProvider {
    async fn usd_rate(&self, currency: &Currency) -> Result<f64, DomainError> {
        let slot = self.slot(currency)?;
        let mut entry = slot.lock().await;
        if let Some(hit) = *entry {
            if hit.fetched_at.elapsed() < self.ttl {
                tracing::trace!(%currency, rate = hit.rate, "exchange rate cache hit");
                return Ok(hit.rate);
            }
        }

        tracing::debug!(%currency, provider = self.inner.name(), "exchange rate cache miss");
        let rate = self.inner.usd_rate(currency).await?;
        *entry = Some(CachedRate {
            rate,
            fetched_at: Instant::now(),
        });
        Ok(rate)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
