//! Setup plan use case — resolves the USD rate for the budget's currency,
//! computes the setup strategy, and stores the result for the user.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::plan_input::PlanInput;
use crate::domain::entities::stored_plan::StoredPlan;
use crate::domain::error::DomainError;
use crate::domain::ports::exchange_rate::ExchangeRateProvider;
use crate::domain::ports::plan_repository::PlanRepository;
use crate::domain::values::budget_plan::compute_weekly_plan;
use crate::domain::values::currency::Currency;
use crate::domain::values::strategy_variant::StrategyVariant;

/// How long a setup waits for a rate before planning in USD.
pub const DEFAULT_RATE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct SetupPlanUseCase {
    rates: Arc<dyn ExchangeRateProvider>,
    repo: Arc<dyn PlanRepository>,
    rate_timeout: Duration,
}

impl SetupPlanUseCase {
    pub fn new(rates: Arc<dyn ExchangeRateProvider>, repo: Arc<dyn PlanRepository>) -> Self {
        Self {
            rates,
            repo,
            rate_timeout: DEFAULT_RATE_TIMEOUT,
        }
    }

    pub fn with_rate_timeout(mut self, timeout: Duration) -> Self {
        self.rate_timeout = timeout;
        self
    }

    /// USD rate for `currency`, or 1.0 when the lookup fails or outlasts
    /// `rate_timeout`. The flag reports whether the fallback was used.
    async fn resolve_rate(&self, currency: &Currency) -> (f64, bool) {
        match tokio::time::timeout(self.rate_timeout, self.rates.usd_rate(currency)).await {
            Ok(Ok(rate)) if rate.is_finite() && rate > 0.0 => (rate, false),
            Ok(Ok(rate)) => {
                tracing::warn!(%currency, rate, "unusable exchange rate, treating amounts as USD");
                (1.0, true)
            }
            Ok(Err(e)) => {
                tracing::warn!(%currency, error = %e, "exchange rate lookup failed, treating amounts as USD");
                (1.0, true)
            }
            Err(_) => {
                tracing::warn!(
                    %currency,
                    timeout_ms = self.rate_timeout.as_millis() as u64,
                    "exchange rate lookup timed out, treating amounts as USD"
                );
                (1.0, true)
            }
        }
    }

    pub async fn execute(&self, user_id: &str, input: &PlanInput) -> Result<StoredPlan, DomainError> {
        if user_id.trim().is_empty() {
            return Err(DomainError::InvalidInput("user_id must not be empty".into()));
        }

        let strategy = StrategyVariant::Setup;
        let (rate, fallback) = self.resolve_rate(&input.currency).await;
        let weeks = compute_weekly_plan(input, &strategy.config(), rate)?;

        let plan = StoredPlan::new(
            user_id.to_string(),
            strategy,
            input.currency.clone(),
            rate,
            fallback,
            input.total_budget,
            weeks,
        );
        self.repo.upsert(&plan)?;
        tracing::info!(user_id, currency = %input.currency, rate, fallback, "setup plan stored");
        Ok(plan)
    }
}
