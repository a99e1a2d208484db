//! File-based implementation of TruckRepository

use std::path::PathBuf;

use flete_domain::model::TruckType;
use flete_domain::repository::TruckRepository;
use flete_types::Error;

use crate::truck_master_loader::TruckMasterLoader;

/// Truck repository backed by a TOML master file
pub struct FileTruckRepository {
    toml_path: PathBuf,
    loader: TruckMasterLoader,
}

impl FileTruckRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        let loader = TruckMasterLoader::load_from_file(&toml_path)?;
        Ok(Self { toml_path, loader })
    }

    pub fn toml_path(&self) -> &PathBuf {
        &self.toml_path
    }

    /// Reload data from the TOML file
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = TruckMasterLoader::load_from_file(&self.toml_path)?;
        Ok(())
    }
}

impl TruckRepository for FileTruckRepository {
    fn find_all(&self) -> Result<Vec<TruckType>, Error> {
        Ok(self.loader.all_types().to_vec())
    }

    fn find_by_capacity(&self, capacity_m3: f64) -> Result<Option<TruckType>, Error> {
        Ok(self.loader.get_by_capacity(capacity_m3).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_TOML: &str = r#"
[[trucks]]
name = "Camión 25 m³"
capacity_m3 = 25.0
efficiency = 0.80

[[trucks]]
name = "Camión 37 m³"
capacity_m3 = 37.0
efficiency = 0.80
"#;

    #[test]
    fn test_file_repository_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEST_TOML.as_bytes()).unwrap();

        let repo = FileTruckRepository::new(file.path().to_path_buf()).unwrap();
        assert_eq!(repo.find_all().unwrap().len(), 2);
        assert!(repo.find_by_capacity(37.0).unwrap().is_some());
        assert!(repo.find_by_capacity(45.0).unwrap().is_none());
    }
}
