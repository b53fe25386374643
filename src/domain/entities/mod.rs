pub mod plan_input;
pub mod plan_request;
pub mod stored_plan;
pub mod weekly_allocation;
