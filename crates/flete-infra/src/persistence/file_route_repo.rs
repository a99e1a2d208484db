//! File-based implementation of RouteRepository

use std::path::PathBuf;

use flete_domain::model::Route;
use flete_domain::repository::RouteRepository;
use flete_types::Error;

use crate::route_master_loader::RouteMasterLoader;

/// Route repository backed by a TOML master file
pub struct FileRouteRepository {
    toml_path: PathBuf,
    loader: RouteMasterLoader,
}

impl FileRouteRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        let loader = RouteMasterLoader::load_from_file(&toml_path)?;
        Ok(Self { toml_path, loader })
    }

    pub fn toml_path(&self) -> &PathBuf {
        &self.toml_path
    }

    /// Reload data from the TOML file
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = RouteMasterLoader::load_from_file(&self.toml_path)?;
        Ok(())
    }
}

impl RouteRepository for FileRouteRepository {
    fn find_all(&self) -> Result<Vec<Route>, Error> {
        Ok(self.loader.all_routes().to_vec())
    }

    fn find_by_id(&self, id: u32) -> Result<Option<Route>, Error> {
        Ok(self.loader.get_route(id).cloned())
    }
}
