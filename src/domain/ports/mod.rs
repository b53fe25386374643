pub mod exchange_rate;
pub mod plan_repository;
