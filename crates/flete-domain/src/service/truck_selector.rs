//! Optimal truck selection for a cargo volume

use serde::{Deserialize, Serialize};

use crate::model::TruckType;

/// Truck recommendation for a cargo volume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruckRecommendation {
    pub truck: TruckType,
    /// False when nothing fits and the largest type is returned best-effort
    pub fits: bool,
}

/// Pick the smallest truck whose usable capacity holds the volume.
///
/// `types` must be ordered smallest to largest. When no type fits, the
/// largest one is returned with `fits = false` so callers that only want a
/// display suggestion still get an answer. Returns `None` for an empty
/// catalog.
pub fn select_optimal_truck(
    total_volume_m3: f64,
    types: &[TruckType],
) -> Option<TruckRecommendation> {
    for truck in types {
        if total_volume_m3 <= truck.usable_capacity_m3() {
            return Some(TruckRecommendation {
                truck: truck.clone(),
                fits: true,
            });
        }
    }

    types.last().map(|truck| TruckRecommendation {
        truck: truck.clone(),
        fits: false,
    })
}
