//! Repository trait definitions for the reference-data providers

use flete_types::{AllocationError, Error};

use crate::model::{Route, TruckType};

/// Read-only provider of routes and their tariffs
pub trait RouteRepository {
    /// All routes, in catalog order
    fn find_all(&self) -> Result<Vec<Route>, Error>;

    /// Find a route by its id
    fn find_by_id(&self, id: u32) -> Result<Option<Route>, Error>;

    /// Tariff for a (route, truck capacity) pair.
    ///
    /// Exact-match on the contracted capacity classes; a missing route or a
    /// missing tariff entry is an error, never a default.
    fn get_tariff(&self, route_id: u32, capacity_m3: f64) -> Result<f64, Error> {
        let route = self
            .find_by_id(route_id)?
            .ok_or(Error::RouteNotFound(route_id))?;
        route
            .tariff_for(capacity_m3)
            .ok_or_else(|| {
                AllocationError::UnknownTariff {
                    route_id,
                    capacity_m3,
                }
                .into()
            })
    }
}

/// Read-only provider of truck types, ordered smallest to largest
pub trait TruckRepository {
    /// All truck types in ascending capacity order
    fn find_all(&self) -> Result<Vec<TruckType>, Error>;

    /// Find a truck type by its nominal capacity
    fn find_by_capacity(&self, capacity_m3: f64) -> Result<Option<TruckType>, Error>;
}
