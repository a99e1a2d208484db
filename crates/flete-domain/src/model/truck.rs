//! Truck-related type definitions

use serde::{Deserialize, Serialize};

/// Truck type reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckType {
    /// Display name
    pub name: String,
    /// Nominal box capacity in m³
    pub capacity_m3: f64,
    /// Fraction of the nominal capacity that is actually loadable, in (0, 1]
    pub efficiency: f64,
}

impl TruckType {
    pub fn new(name: impl Into<String>, capacity_m3: f64, efficiency: f64) -> Self {
        Self {
            name: name.into(),
            capacity_m3,
            efficiency,
        }
    }

    /// Usable capacity after applying the loading efficiency
    pub fn usable_capacity_m3(&self) -> f64 {
        self.capacity_m3 * self.efficiency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_capacity() {
        let truck = TruckType::new("Camión 25 m³", 25.0, 0.80);
        assert!((truck.usable_capacity_m3() - 20.0).abs() < 1e-9);
    }
}
