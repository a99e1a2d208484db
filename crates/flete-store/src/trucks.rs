//! Built-in truck fleet catalog

use flete_domain::model::TruckType;
use flete_domain::repository::TruckRepository;
use flete_types::Error;

/// Contracted fleet: capacity in m³ and loading efficiency
static TRUCK_TABLE: &[(&str, f64, f64)] = &[
    ("Camión 25 m³", 25.0, 0.80),
    ("Camión 37 m³", 37.0, 0.80),
    ("Camión 45 m³", 45.0, 0.80),
];

/// Built-in truck catalog, ordered smallest to largest
#[derive(Debug, Clone)]
pub struct TruckCatalog {
    types: Vec<TruckType>,
}

impl TruckCatalog {
    pub fn builtin() -> Self {
        let types = TRUCK_TABLE
            .iter()
            .map(|&(name, capacity, efficiency)| TruckType::new(name, capacity, efficiency))
            .collect();
        Self { types }
    }

    pub fn types(&self) -> &[TruckType] {
        &self.types
    }

    pub fn get_by_capacity(&self, capacity_m3: f64) -> Option<&TruckType> {
        self.types.iter().find(|t| t.capacity_m3 == capacity_m3)
    }

    pub fn count(&self) -> usize {
        self.types.len()
    }
}

impl Default for TruckCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TruckRepository for TruckCatalog {
    fn find_all(&self) -> Result<Vec<TruckType>, Error> {
        Ok(self.types.clone())
    }

    fn find_by_capacity(&self, capacity_m3: f64) -> Result<Option<TruckType>, Error> {
        Ok(self.get_by_capacity(capacity_m3).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fleet() {
        let catalog = TruckCatalog::builtin();
        assert_eq!(catalog.count(), 3);

        let truck = catalog.get_by_capacity(25.0).unwrap();
        assert_eq!(truck.efficiency, 0.80);
        assert!((truck.usable_capacity_m3() - 20.0).abs() < 1e-9);

        assert!(catalog.get_by_capacity(30.0).is_none());
    }

    #[test]
    fn test_ascending_capacity_order() {
        let catalog = TruckCatalog::builtin();
        for pair in catalog.types().windows(2) {
            assert!(pair[0].capacity_m3 < pair[1].capacity_m3);
        }
    }
}
