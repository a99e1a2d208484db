//! Catalog adapters for the reference-data providers
//!
//! A configured master file takes priority; without one the built-in
//! catalogs answer, so the calculator works with no setup at all.

use flete_domain::repository::{RouteRepository, TruckRepository};
use flete_infra::persistence::{FileRouteRepository, FileTruckRepository};
use flete_store::{RouteCatalog, TruckCatalog};
use flete_types::Result;

use crate::config::Config;

/// Open the route provider: the configured TOML master file when set,
/// otherwise the built-in tariff table
pub fn open_route_repository(config: &Config) -> Result<Box<dyn RouteRepository>> {
    match &config.routes_file {
        Some(path) => Ok(Box::new(FileRouteRepository::new(path.clone())?)),
        None => Ok(Box::new(RouteCatalog::builtin())),
    }
}

/// Open the truck provider: the configured TOML master file when set,
/// otherwise the built-in fleet
pub fn open_truck_repository(config: &Config) -> Result<Box<dyn TruckRepository>> {
    match &config.trucks_file {
        Some(path) => Ok(Box::new(FileTruckRepository::new(path.clone())?)),
        None => Ok(Box::new(TruckCatalog::builtin())),
    }
}
