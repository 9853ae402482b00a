//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::vehicle::{NewVehicle, Vehicle};
use crate::repository::errors::RepositoryResult;
use crate::repository::{VehicleListQuery, VehicleReader, VehicleWriter};

mock! {
    pub Repository {}

    impl VehicleReader for Repository {
        fn list_vehicles(&self, query: VehicleListQuery) -> RepositoryResult<(usize, Vec<Vehicle>)>;
    }

    impl VehicleWriter for Repository {
        fn create_vehicle(&self, new_vehicle: &NewVehicle) -> RepositoryResult<Vehicle>;
    }
}
