//! Weekly budget planner.
//!
//! Spreads a total budget over a fixed number of weeks according to a
//! strategy's percentage table, then derives how many ads each week can
//! fund and how much each ad gets per day.
//!
//! Ad counts are always computed on USD amounts, because the threshold
//! table is denominated in USD. For a budget in another currency pass the
//! USD value of one unit as `usd_rate`: amounts are converted to USD,
//! sized, and converted back, while `ad_count` stays the USD-derived
//! integer. A rate of `1.0` leaves every amount untouched.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::domain::entities::plan_input::PlanInput;
use crate::domain::entities::weekly_allocation::WeeklyAllocation;
use crate::domain::error::DomainError;
use crate::domain::values::ad_count::{split_ads, MAX_AD_COUNT};
use crate::domain::values::strategy_variant::PlanConfig;
use crate::domain::values::week::{iso_week_label, level_for_week, next_week_boundary};

/// Percent change from `previous` to `current`, written the way stored
/// plans have always computed it. Zero when there is no base to compare.
pub fn period_over_period_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    let change = ((previous - current) / previous) * -100.0;
    // no negative zero in stored JSON
    if change == 0.0 {
        0.0
    } else {
        change
    }
}

/// Compute the weekly plan for `input` under `config`.
///
/// Fails on an unusable `usd_rate` (non-finite or not positive) and on a
/// budget so large that a week's ad count cannot be represented exactly.
/// Other budget validation happens when the [`PlanInput`] is built.
pub fn compute_weekly_plan(
    input: &PlanInput,
    config: &PlanConfig,
    usd_rate: f64,
) -> Result<Vec<WeeklyAllocation>, DomainError> {
    if !usd_rate.is_finite() || usd_rate <= 0.0 {
        return Err(DomainError::InvalidInput(format!(
            "Conversion rate must be positive, got {usd_rate}"
        )));
    }

    let budget_usd = input.total_budget * usd_rate;
    let mut start_date = next_week_boundary(input.request_date, config.week_start);
    let mut weeks = Vec::with_capacity(config.percentages.len());
    let mut previous_amount: Option<f64> = None;

    for (i, &fraction) in config.percentages.iter().enumerate() {
        let week_index = i as u32 + 1;

        let amount_usd = config.rounding.apply(budget_usd * fraction);
        let ad_count = config.thresholds.ad_count(amount_usd).ok_or_else(|| {
            DomainError::InvalidInput(format!(
                "Budget {} is too large to plan: week {week_index} would need more than {MAX_AD_COUNT} ads",
                input.total_budget
            ))
        })?;
        let daily_usd = (amount_usd / config.thresholds.days_per_week / ad_count as f64)
            .max(config.min_daily_budget);
        let split = split_ads(ad_count, input.answer_messages);

        let allocation_amount = config.rounding.apply(amount_usd / usd_rate);
        let daily_budget_per_ad = daily_usd / usd_rate;

        let change = previous_amount
            .map(|prev| period_over_period_change(prev, allocation_amount))
            .unwrap_or(0.0);

        weeks.push(WeeklyAllocation {
            week_index,
            level: level_for_week(week_index, config.levels),
            calendar_week_label: iso_week_label(start_date),
            start_date,
            allocation_fraction: fraction,
            allocation_amount,
            ad_count,
            daily_budget_per_ad,
            message_ad_count: split.message,
            link_ad_count: split.link,
            period_over_period_change: change,
        });

        previous_amount = Some(allocation_amount);
        start_date += Duration::days(7);
    }

    Ok(weeks)
}

/// Totals across a computed plan, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub weeks: usize,
    pub first_week: Option<NaiveDate>,
    pub last_week: Option<NaiveDate>,
    pub total_allocated: f64,
    pub total_ads: u64,
    pub peak_week: Option<u32>,
}

impl PlanSummary {
    pub fn from_weeks(weeks: &[WeeklyAllocation]) -> Self {
        let peak_week = weeks
            .iter()
            .fold(None::<&WeeklyAllocation>, |best, w| match best {
                Some(b) if b.allocation_amount >= w.allocation_amount => Some(b),
                _ => Some(w),
            })
            .map(|w| w.week_index);

        Self {
            weeks: weeks.len(),
            first_week: weeks.first().map(|w| w.start_date),
            last_week: weeks.last().map(|w| w.start_date),
            total_allocated: weeks.iter().map(|w| w.allocation_amount).sum(),
            total_ads: weeks
                .iter()
                .fold(0u64, |acc, w| acc.saturating_add(w.ad_count)),
            peak_week,
        }
    }
}
