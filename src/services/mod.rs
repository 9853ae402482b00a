pub mod errors;
pub mod vehicles;

pub use errors::{ServiceError, ServiceResult};
