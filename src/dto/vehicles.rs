//! DTOs exposed by the rental API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::vehicle::Vehicle;
use crate::pagination::Paginated;

/// Raw query parameters accepted by the vehicle listing.
///
/// Everything is kept as text so the service can report malformed values
/// instead of the extractor silently dropping them.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    /// Substring of the contract's customer name.
    pub customer_name: Option<String>,
    /// Earliest accepted contract start date.
    pub start_date: Option<String>,
    /// Latest accepted contract end date.
    pub end_date: Option<String>,
}

/// Listing payload: `{data, meta}`.
pub type VehicleListResponse = Paginated<Vehicle>;

/// Body of every failed response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
