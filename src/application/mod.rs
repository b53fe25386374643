pub mod generate_plan;
pub mod plan_store;
pub mod setup_plan;
