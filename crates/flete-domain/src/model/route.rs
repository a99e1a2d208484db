//! Transport route reference data

use serde::{Deserialize, Serialize};

/// A transport route with its freight tariff per truck capacity class.
///
/// Tariffs are absolute money amounts. A `None` tariff means the class is
/// not contracted for the route (some routes only run with the 45 m³ truck).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: u32,
    /// Short code, e.g. "RUTA 01"
    pub code: String,
    /// Descriptive name with the covered towns
    pub name: String,
    #[serde(default)]
    pub tariff_25m3: Option<f64>,
    #[serde(default)]
    pub tariff_37m3: Option<f64>,
    #[serde(default)]
    pub tariff_45m3: Option<f64>,
}

impl Route {
    /// Tariff for a truck capacity class.
    ///
    /// Exact match on the three contracted classes (25/37/45 m³); any other
    /// capacity has no tariff, never a default.
    pub fn tariff_for(&self, capacity_m3: f64) -> Option<f64> {
        if capacity_m3 == 25.0 {
            self.tariff_25m3
        } else if capacity_m3 == 37.0 {
            self.tariff_37m3
        } else if capacity_m3 == 45.0 {
            self.tariff_45m3
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_route() -> Route {
        Route {
            id: 1,
            code: "RUTA 01".to_string(),
            name: "URBANO (SIBATE a Calle 26) (1 a 6 Clientes)".to_string(),
            tariff_25m3: Some(272967.0),
            tariff_37m3: Some(318462.0),
            tariff_45m3: Some(333626.0),
        }
    }

    #[test]
    fn test_tariff_for_contracted_classes() {
        let route = sample_route();
        assert_eq!(route.tariff_for(25.0), Some(272967.0));
        assert_eq!(route.tariff_for(37.0), Some(318462.0));
        assert_eq!(route.tariff_for(45.0), Some(333626.0));
    }

    #[test]
    fn test_tariff_for_unknown_capacity() {
        let route = sample_route();
        assert_eq!(route.tariff_for(30.0), None);
        assert_eq!(route.tariff_for(0.0), None);
    }

    #[test]
    fn test_tariff_for_missing_entry() {
        let route = Route {
            tariff_25m3: None,
            ..sample_route()
        };
        assert_eq!(route.tariff_for(25.0), None);
        assert_eq!(route.tariff_for(37.0), Some(318462.0));
    }
}
