use crate::domain::entities::weekly_allocation::WeeklyAllocation;
use crate::domain::values::currency::Currency;
use crate::domain::values::strategy_variant::StrategyVariant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generated plan persisted for one user. Regenerating replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPlan {
    pub id: String,
    pub user_id: String,
    pub strategy: StrategyVariant,
    pub currency: Currency,
    /// USD per unit of `currency` used for ad-count thresholds.
    pub conversion_rate: f64,
    /// The rate lookup failed and 1.0 was used instead.
    pub rate_fallback: bool,
    pub budget: f64,
    pub weeks: Vec<WeeklyAllocation>,
    pub created_at: DateTime<Utc>,
}

impl StoredPlan {
    pub fn new(
        user_id: String,
        strategy: StrategyVariant,
        currency: Currency,
        conversion_rate: f64,
        rate_fallback: bool,
        budget: f64,
        weeks: Vec<WeeklyAllocation>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id,
            strategy,
            currency,
            conversion_rate,
            rate_fallback,
            budget,
            weeks,
            created_at: Utc::now(),
        }
    }
}
