//! Diesel implementation of the vehicle record store.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        filter::{ContractFilter, NameMatch},
        rental_contract::RentalContract,
        vehicle::{NewVehicle, Vehicle},
    },
    models::{
        rental_contract::{
            NewRentalContract as DbNewRentalContract, RentalContract as DbRentalContract,
        },
        vehicle::{NewVehicle as DbNewVehicle, Vehicle as DbVehicle},
    },
    repository::{
        DieselRepository, VehicleListQuery, VehicleReader, VehicleWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{rental_contracts, vehicles},
};

diesel::define_sql_function! {
    /// 1-based position of `needle` in `haystack`, 0 when absent. Case-sensitive.
    fn instr(
        haystack: diesel::sql_types::Text,
        needle: diesel::sql_types::Text,
    ) -> diesel::sql_types::Integer;
}

/// Escapes LIKE wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

type BoxedVehicleQuery<'a> = diesel::helper_types::IntoBoxed<
    'a,
    diesel::helper_types::LeftJoin<vehicles::table, rental_contracts::table>,
    Sqlite,
>;

/// Vehicles left-joined with their contracts, narrowed by `filter`.
///
/// Contract conditions compare against NULL for vehicles without a contract,
/// so those rows drop out as soon as any condition is present.
fn filtered_vehicles(filter: Option<&ContractFilter>) -> BoxedVehicleQuery<'static> {
    let mut items = vehicles::table
        .left_join(rental_contracts::table)
        .into_boxed::<Sqlite>();

    let Some(filter) = filter else {
        return items;
    };

    if let Some(name) = &filter.customer_name {
        items = match name.mode {
            NameMatch::CaseSensitive => {
                items.filter(instr(rental_contracts::customer_name, name.needle.clone()).gt(0))
            }
            NameMatch::CaseInsensitive => items.filter(
                rental_contracts::customer_name
                    .like(like_pattern(&name.needle))
                    .escape('\\'),
            ),
        };
    }
    if let Some(from) = filter.start_date_from {
        items = items.filter(rental_contracts::start_date.ge(from));
    }
    if let Some(until) = filter.end_date_until {
        items = items.filter(rental_contracts::end_date.le(until));
    }

    items
}

fn to_i64(value: usize, what: &str) -> RepositoryResult<i64> {
    i64::try_from(value)
        .map_err(|_| RepositoryError::ValidationError(format!("{what} is out of range: {value}")))
}

impl VehicleReader for DieselRepository {
    fn list_vehicles(&self, query: VehicleListQuery) -> RepositoryResult<(usize, Vec<Vehicle>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered_vehicles(query.filter.as_ref())
            .count()
            .get_result(&mut conn)?;

        let mut items = filtered_vehicles(query.filter.as_ref()).order(vehicles::id.asc());
        if let Some(page) = &query.pagination {
            items = items
                .offset(to_i64(page.skip(), "offset")?)
                .limit(to_i64(page.limit(), "limit")?);
        }

        let rows = items.load::<(DbVehicle, Option<DbRentalContract>)>(&mut conn)?;

        let vehicles = rows
            .into_iter()
            .map(|(vehicle, contract)| {
                let contract = contract.map(RentalContract::try_from).transpose()?;
                vehicle.into_domain(contract)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)?;

        Ok((total as usize, vehicles))
    }
}

impl VehicleWriter for DieselRepository {
    fn create_vehicle(&self, new_vehicle: &NewVehicle) -> RepositoryResult<Vehicle> {
        let mut conn = self.conn()?;

        let db_new_vehicle: DbNewVehicle = new_vehicle.into();

        conn.transaction::<Vehicle, RepositoryError, _>(|conn| {
            let db_vehicle = diesel::insert_into(vehicles::table)
                .values(&db_new_vehicle)
                .get_result::<DbVehicle>(conn)?;

            let contract = match &new_vehicle.rental_contract {
                Some(contract) => {
                    let db_contract = diesel::insert_into(rental_contracts::table)
                        .values(DbNewRentalContract::for_vehicle(db_vehicle.id, contract))
                        .get_result::<DbRentalContract>(conn)?;
                    Some(RentalContract::try_from(db_contract)?)
                }
                None => None,
            };

            Ok(db_vehicle.into_domain(contract)?)
        })
    }
}
