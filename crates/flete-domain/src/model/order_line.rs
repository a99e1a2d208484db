//! Order line: the unit of freight allocation

use flete_types::AllocationError;
use serde::{Deserialize, Serialize};

/// A client order line registered on a shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Sequential id assigned by the shipment
    pub id: u32,
    pub client: String,
    pub product: String,
    pub destination: String,
    pub purchase_order: String,
    pub quantity: u32,
    pub unit_volume_m3: f64,
    pub unit_weight_kg: f64,
    pub unit_price: f64,
    /// Distance to the delivery point, in km. Zero when not recorded.
    pub distance_km: f64,
}

impl OrderLine {
    pub fn total_volume_m3(&self) -> f64 {
        self.unit_volume_m3 * f64::from(self.quantity)
    }

    pub fn total_weight_kg(&self) -> f64 {
        self.unit_weight_kg * f64::from(self.quantity)
    }

    pub fn total_value(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Check that the line's quantities are usable for allocation.
    ///
    /// The `!(x > 0.0)` form also rejects NaN inputs.
    pub fn validate(&self) -> Result<(), AllocationError> {
        if self.quantity == 0 {
            return Err(self.invalid("quantity must be at least 1"));
        }
        if !(self.unit_volume_m3 > 0.0) {
            return Err(self.invalid("unit volume must be positive"));
        }
        if !(self.unit_weight_kg > 0.0) {
            return Err(self.invalid("unit weight must be positive"));
        }
        if !(self.unit_price >= 0.0) {
            return Err(self.invalid("unit price must not be negative"));
        }
        if !(self.distance_km >= 0.0) {
            return Err(self.invalid("distance must not be negative"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> AllocationError {
        AllocationError::InvalidOrderLine {
            line_id: self.id,
            reason: reason.to_string(),
        }
    }
}

/// Order line input before it is registered on a shipment.
///
/// Optional descriptive fields fall back to the classic dispatch defaults
/// when empty or absent; the shipment assigns the id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderLineDraft {
    #[serde(default)]
    pub client: Option<String>,
    pub product: String,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub purchase_order: Option<String>,
    pub quantity: u32,
    pub unit_volume_m3: f64,
    pub unit_weight_kg: f64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub distance_km: f64,
}

impl OrderLineDraft {
    pub fn total_volume_m3(&self) -> f64 {
        self.unit_volume_m3 * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_line() -> OrderLine {
        OrderLine {
            id: 1,
            client: "Alkosto S.A.".to_string(),
            product: "COL MONARCA 100X190X28 JAC".to_string(),
            destination: "Alkosto Soacha".to_string(),
            purchase_order: "OC-45678".to_string(),
            quantity: 20,
            unit_volume_m3: 0.532,
            unit_weight_kg: 18.5,
            unit_price: 350000.0,
            distance_km: 12.0,
        }
    }

    #[test]
    fn test_derived_totals() {
        let line = sample_line();
        assert!((line.total_volume_m3() - 10.64).abs() < 1e-9);
        assert!((line.total_weight_kg() - 370.0).abs() < 1e-9);
        assert!((line.total_value() - 7_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_validate_accepts_good_line() {
        assert!(sample_line().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        let line = OrderLine {
            quantity: 0,
            ..sample_line()
        };
        assert!(matches!(
            line.validate(),
            Err(AllocationError::InvalidOrderLine { line_id: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nonpositive_volume() {
        let line = OrderLine {
            unit_volume_m3: 0.0,
            ..sample_line()
        };
        assert!(line.validate().is_err());

        let line = OrderLine {
            unit_volume_m3: f64::NAN,
            ..sample_line()
        };
        assert!(line.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_price_and_distance() {
        let line = OrderLine {
            unit_price: -1.0,
            ..sample_line()
        };
        assert!(line.validate().is_err());

        let line = OrderLine {
            distance_km: -5.0,
            ..sample_line()
        };
        assert!(line.validate().is_err());
    }

    #[test]
    fn test_zero_price_is_valid() {
        let line = OrderLine {
            unit_price: 0.0,
            ..sample_line()
        };
        assert!(line.validate().is_ok());
    }
}
