use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One week of a budget plan.
///
/// The serialized field names are what stored `strategy_data` rows contain;
/// renaming a field breaks reading older rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAllocation {
    pub week_index: u32,
    pub level: u32,
    pub calendar_week_label: String,
    pub start_date: NaiveDate,
    pub allocation_fraction: f64,
    pub allocation_amount: f64,
    pub ad_count: u64,
    pub daily_budget_per_ad: f64,
    pub message_ad_count: u64,
    pub link_ad_count: u64,
    /// Percent change in `allocation_amount` from the previous week.
    #[serde(rename = "calculatedIncrease")]
    pub period_over_period_change: f64,
}
