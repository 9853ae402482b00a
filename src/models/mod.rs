//! Database models and configuration shared across the repository.

pub mod config;
pub mod rental_contract;
pub mod vehicle;
