pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::generate_plan::GeneratePlanUseCase;
use crate::application::plan_store::PlanStoreUseCase;
use crate::application::setup_plan::{SetupPlanUseCase, DEFAULT_RATE_TIMEOUT};
use crate::domain::entities::plan_input::PlanInput;
use crate::domain::entities::stored_plan::StoredPlan;
use crate::domain::entities::weekly_allocation::WeeklyAllocation;
use crate::domain::error::DomainError;
use crate::domain::ports::exchange_rate::ExchangeRateProvider;
use crate::domain::ports::plan_repository::PlanRepository;
use crate::domain::values::strategy_variant::StrategyVariant;
use crate::infrastructure::exchange_rates::cached::CachedRateProvider;
use crate::infrastructure::exchange_rates::exchangerate_api::ExchangeRateApiProvider;
use crate::infrastructure::exchange_rates::fixed::FixedRateProvider;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::plan_repo::SqlitePlanRepo;
use rusqlite::Connection;
use std::sync::Arc;
use std::time::Duration;

pub struct AdPlan {
    generate_uc: GeneratePlanUseCase,
    setup_uc: SetupPlanUseCase,
    store_uc: PlanStoreUseCase,
}

impl AdPlan {
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let provider = std::env::var("ADPLAN_RATE_PROVIDER").unwrap_or_else(|_| "exchangerate-api".into());
        let api_key = std::env::var("EXCHANGE_RATE_API_KEY").unwrap_or_default();
        let base_url = std::env::var("ADPLAN_EXCHANGE_RATE_URL").ok();
        let ttl_secs = std::env::var("ADPLAN_RATE_CACHE_TTL_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(3600);
        let timeout = std::env::var("ADPLAN_RATE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_RATE_TIMEOUT);

        let inner: Arc<dyn ExchangeRateProvider> = match provider.as_str() {
            "fixed" => Arc::new(FixedRateProvider::new()),
            _ => Arc::new(ExchangeRateApiProvider::new(api_key, base_url).with_timeout(timeout)),
        };
        let rates = Arc::new(CachedRateProvider::new(inner, Duration::from_secs(ttl_secs)));

        Ok(Self::with_providers(db_path, rates)?.with_rate_timeout(timeout))
    }

    pub fn with_providers(
        db_path: &str,
        rates: Arc<dyn ExchangeRateProvider>,
    ) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL").map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;

        run_migrations(&conn)?;

        let plan_repo: Arc<dyn PlanRepository> = Arc::new(SqlitePlanRepo::new(conn));
        tracing::debug!(db_path, provider = rates.name(), "adplan initialized");

        Ok(Self {
            generate_uc: GeneratePlanUseCase::new(),
            setup_uc: SetupPlanUseCase::new(rates, plan_repo.clone()),
            store_uc: PlanStoreUseCase::new(plan_repo),
        })
    }

    /// Bound on how long `setup` waits for an exchange rate.
    pub fn with_rate_timeout(mut self, timeout: Duration) -> Self {
        self.setup_uc = self.setup_uc.with_rate_timeout(timeout);
        self
    }

    // Delegating methods
    pub fn plan(
        &self,
        strategy: StrategyVariant,
        input: &PlanInput,
    ) -> Result<Vec<WeeklyAllocation>, DomainError> {
        self.generate_uc.execute(strategy, input)
    }

    pub async fn setup(&self, user_id: &str, input: &PlanInput) -> Result<StoredPlan, DomainError> {
        self.setup_uc.execute(user_id, input).await
    }

    pub fn stored_plan(&self, user_id: &str) -> Result<StoredPlan, DomainError> {
        self.store_uc.get(user_id)
    }

    pub fn stored_plans(&self, limit: Option<usize>) -> Result<Vec<StoredPlan>, DomainError> {
        self.store_uc.list(limit)
    }

    pub fn delete_plan(&self, user_id: &str) -> Result<(), DomainError> {
        self.store_uc.delete(user_id)
    }
}
