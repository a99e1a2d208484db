//! Route master data loader from TOML configuration
//!
//! Lets an operation override the built-in tariff table with a negotiated
//! one without rebuilding.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use flete_domain::model::Route;
use flete_types::{ConfigError, Error, Result};

/// Container for parsing routes.toml
#[derive(Debug, Deserialize)]
struct RouteMasterConfig {
    routes: Vec<Route>,
}

/// Route master data loaded from TOML
#[derive(Debug)]
pub struct RouteMasterLoader {
    routes: Vec<Route>,
}

impl RouteMasterLoader {
    /// Load route master data from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read route master file: {}",
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load route master data from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: RouteMasterConfig = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse route master TOML: {}",
                e
            )))
        })?;

        Ok(Self {
            routes: config.routes,
        })
    }

    pub fn all_routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get_route(&self, id: u32) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn count(&self) -> usize {
        self.routes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[[routes]]
id = 1
code = "RUTA 01"
name = "URBANO (SIBATE a Calle 26) (1 a 6 Clientes)"
tariff_25m3 = 272967.0
tariff_37m3 = 318462.0
tariff_45m3 = 333626.0

[[routes]]
id = 54
code = "RUTA 54"
name = "EL DONCELLLO - SAN VICENTE DEL CAGUAN"
tariff_45m3 = 1978022.0
"#;

    #[test]
    fn test_load_from_str() {
        let loader = RouteMasterLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(loader.count(), 2);
    }

    #[test]
    fn test_get_route() {
        let loader = RouteMasterLoader::load_from_str(TEST_TOML).unwrap();
        let route = loader.get_route(1).unwrap();
        assert_eq!(route.tariff_for(37.0), Some(318462.0));
        assert!(loader.get_route(2).is_none());
    }

    #[test]
    fn test_missing_tariffs_are_none() {
        let loader = RouteMasterLoader::load_from_str(TEST_TOML).unwrap();
        let route = loader.get_route(54).unwrap();
        assert_eq!(route.tariff_25m3, None);
        assert_eq!(route.tariff_45m3, Some(1978022.0));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(RouteMasterLoader::load_from_str("routes = 3").is_err());
    }
}
