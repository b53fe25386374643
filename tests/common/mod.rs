//! Shared test helpers.

use adplan::domain::entities::plan_input::PlanInput;
use adplan::domain::values::answer_messages::AnswerMessages;
use adplan::domain::values::currency::Currency;
use adplan::infrastructure::exchange_rates::fixed::FixedRateProvider;
use adplan::AdPlan;
use chrono::NaiveDate;
use std::sync::Arc;

pub fn setup() -> AdPlan {
    AdPlan::with_providers(":memory:", Arc::new(rates())).unwrap()
}

pub fn rates() -> FixedRateProvider {
    FixedRateProvider::new()
        .with_rate(currency("EUR"), 1.08)
        .with_rate(currency("COP"), 0.00025)
}

pub fn currency(code: &str) -> Currency {
    code.parse().unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn input(budget: f64, answer: AnswerMessages) -> PlanInput {
    PlanInput::new(date(2024, 1, 1), budget, answer).unwrap()
}
