//! Truck master data loader from TOML configuration

use std::fs;
use std::path::Path;

use serde::Deserialize;

use flete_domain::model::TruckType;
use flete_types::{ConfigError, Error, Result};

/// Container for parsing trucks.toml
#[derive(Debug, Deserialize)]
struct TruckMasterConfig {
    trucks: Vec<TruckType>,
}

/// Truck master data loaded from TOML, kept in ascending capacity order
#[derive(Debug)]
pub struct TruckMasterLoader {
    types: Vec<TruckType>,
}

impl TruckMasterLoader {
    /// Load truck master data from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read truck master file: {}",
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load truck master data from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: TruckMasterConfig = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse truck master TOML: {}",
                e
            )))
        })?;

        let mut types = config.trucks;
        // The optimal-truck scan relies on ascending capacity order
        types.sort_by(|a, b| a.capacity_m3.total_cmp(&b.capacity_m3));

        Ok(Self { types })
    }

    pub fn all_types(&self) -> &[TruckType] {
        &self.types
    }

    pub fn get_by_capacity(&self, capacity_m3: f64) -> Option<&TruckType> {
        self.types.iter().find(|t| t.capacity_m3 == capacity_m3)
    }

    pub fn count(&self) -> usize {
        self.types.len()
    }
}
