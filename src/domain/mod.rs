//! Domain aggregates exposed by the rental service layer.

pub mod filter;
pub mod rental_contract;
pub mod types;
pub mod vehicle;
