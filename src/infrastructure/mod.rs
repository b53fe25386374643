pub mod exchange_rates;
pub mod sqlite;
