pub mod ad_count;
pub mod answer_messages;
pub mod budget_plan;
pub mod currency;
pub mod rounding;
pub mod strategy_variant;
pub mod week;
