use crate::{
    db::{DbConnection, DbPool},
    domain::{
        filter::ContractFilter,
        vehicle::{NewVehicle, Vehicle},
    },
    pagination::PageRequest,
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod vehicle;

/// Diesel-backed record store shared by all request handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct VehicleListQuery {
    pub filter: Option<ContractFilter>,
    pub pagination: Option<PageRequest>,
}

impl VehicleListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to vehicles whose contract matches `filter`.
    /// `None` leaves the listing unfiltered.
    pub fn filter(mut self, filter: Option<ContractFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn paginate(mut self, page: PageRequest) -> Self {
        self.pagination = Some(page);
        self
    }
}

pub trait VehicleReader {
    /// Returns the total number of matching vehicles together with the
    /// requested page, ordered by vehicle id ascending.
    ///
    /// The page and the total come from two separate queries and are not
    /// read in one transaction.
    fn list_vehicles(&self, query: VehicleListQuery) -> RepositoryResult<(usize, Vec<Vehicle>)>;
}

pub trait VehicleWriter {
    /// Inserts the vehicle and its optional contract atomically.
    fn create_vehicle(&self, new_vehicle: &NewVehicle) -> RepositoryResult<Vehicle>;
}
