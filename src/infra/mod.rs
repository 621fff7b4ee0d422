pub mod cache;
pub mod fleet_api;
