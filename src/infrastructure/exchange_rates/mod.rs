pub mod cached;
pub mod exchangerate_api;
pub mod fixed;
