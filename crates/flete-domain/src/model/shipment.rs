//! Shipment aggregate
//!
//! Owns the route/truck selection and the order lines. The aggregate is held
//! by value by its caller; there is no shared or global dispatch state.

use chrono::NaiveDate;
use flete_types::AllocationError;
use serde::{Deserialize, Serialize};

use crate::model::{AllocationReport, OrderLine, OrderLineDraft, Route, TruckType};
use crate::service::allocation::allocate_freight;

/// Shipment lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentState {
    Empty,
    Configuring,
    Computed,
}

/// Dispatch aggregate: a route, a truck, and the order lines being shipped.
///
/// Invariant: while a truck is selected, the total order volume never
/// exceeds its usable capacity; `add_line` enforces this on every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shipment {
    route: Option<Route>,
    truck: Option<TruckType>,
    pub date: Option<NaiveDate>,
    pub notes: String,
    lines: Vec<OrderLine>,
    next_line_id: u32,
    #[serde(skip)]
    report: Option<AllocationReport>,
}

impl Shipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ShipmentState {
        if self.report.is_some() {
            ShipmentState::Computed
        } else if self.route.is_none() && self.truck.is_none() && self.lines.is_empty() {
            ShipmentState::Empty
        } else {
            ShipmentState::Configuring
        }
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn truck(&self) -> Option<&TruckType> {
        self.truck.as_ref()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn line(&self, id: u32) -> Option<&OrderLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn set_route(&mut self, route: Route) {
        self.route = Some(route);
        self.invalidate();
    }

    pub fn set_truck(&mut self, truck: TruckType) {
        self.truck = Some(truck);
        self.invalidate();
    }

    /// Register a new order line.
    ///
    /// The draft is validated first; when a truck is already selected the
    /// capacity invariant is re-checked including the new line, and the
    /// shipment is left untouched on any failure. Returns the assigned id.
    pub fn add_line(&mut self, draft: OrderLineDraft) -> Result<u32, AllocationError> {
        let id = self.next_line_id + 1;
        let line = OrderLine {
            id,
            client: non_empty(draft.client).unwrap_or_else(|| "Cliente General".to_string()),
            product: draft.product,
            destination: non_empty(draft.destination)
                .unwrap_or_else(|| "Destino Final".to_string()),
            purchase_order: non_empty(draft.purchase_order)
                .unwrap_or_else(|| format!("OC-{}", id)),
            quantity: draft.quantity,
            unit_volume_m3: draft.unit_volume_m3,
            unit_weight_kg: draft.unit_weight_kg,
            unit_price: draft.unit_price,
            distance_km: draft.distance_km,
        };
        line.validate()?;

        if let Some(truck) = &self.truck {
            let used = self.total_volume_m3() + line.total_volume_m3();
            let usable = truck.usable_capacity_m3();
            if used > usable {
                return Err(AllocationError::CapacityExceeded {
                    used_volume_m3: used,
                    usable_capacity_m3: usable,
                    overflow_m3: used - usable,
                });
            }
        }

        self.next_line_id = id;
        self.lines.push(line);
        self.invalidate();
        Ok(id)
    }

    /// Remove an order line by id. Returns whether a line was removed.
    pub fn remove_line(&mut self, id: u32) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        let removed = self.lines.len() != before;
        if removed {
            self.invalidate();
        }
        removed
    }

    pub fn total_volume_m3(&self) -> f64 {
        self.lines.iter().map(OrderLine::total_volume_m3).sum()
    }

    pub fn total_weight_kg(&self) -> f64 {
        self.lines.iter().map(OrderLine::total_weight_kg).sum()
    }

    pub fn total_value(&self) -> f64 {
        self.lines.iter().map(OrderLine::total_value).sum()
    }

    /// Run the allocation and cache the report on the aggregate.
    ///
    /// Any later mutation discards the cached report; a failed run leaves
    /// the shipment exactly as it was.
    pub fn compute(&mut self) -> Result<AllocationReport, AllocationError> {
        let report = allocate_freight(self)?;
        self.report = Some(report.clone());
        Ok(report)
    }

    /// The last computed report, if no mutation happened since
    pub fn report(&self) -> Option<&AllocationReport> {
        self.report.as_ref()
    }

    fn invalidate(&mut self) {
        self.report = None;
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
