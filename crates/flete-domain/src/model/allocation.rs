//! Computed allocation results
//!
//! These types are produced by the allocation service and never mutated
//! afterwards; a shipment mutation discards them instead of patching them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::OrderLine;

/// Result of checking a shipment's cargo volume against the selected truck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityCheck {
    pub within_capacity: bool,
    pub used_volume_m3: f64,
    pub usable_capacity_m3: f64,
    /// Free space left on the truck; negative when overloaded
    pub remaining_m3: f64,
    pub utilization_pct: f64,
}

/// Freight share computed for a single order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub line: OrderLine,
    /// Share of the shipment's total volume, in percent
    pub volume_share_pct: f64,
    /// total volume × distance, the weighting factor for distribution
    pub weighted_factor: f64,
    pub allocated_freight: f64,
    pub freight_per_unit: f64,
    /// Freight as a percentage of the line's merchandise value
    pub freight_to_value_pct: f64,
    pub total_cost_with_freight: f64,
    pub unit_cost_with_freight: f64,
}

/// Full freight distribution for a shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub route_id: u32,
    pub route_code: String,
    pub route_name: String,
    pub truck_name: String,
    pub truck_capacity_m3: f64,
    pub usable_capacity_m3: f64,
    pub date: Option<NaiveDate>,
    pub notes: String,
    pub total_tariff: f64,
    pub total_volume_m3: f64,
    pub total_weight_kg: f64,
    pub total_value: f64,
    pub total_weighted_factor: f64,
    pub utilization_pct: f64,
    pub line_count: usize,
    pub avg_freight_per_m3: f64,
    /// Zero when the shipment has no recorded weight
    pub avg_freight_per_kg: f64,
    pub lines: Vec<AllocationResult>,
}
