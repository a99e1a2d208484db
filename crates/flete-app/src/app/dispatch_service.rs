//! Dispatch calculation use cases
//!
//! Wires the reference-data providers and the order input into the domain
//! engine. Each calculation works on its own Shipment aggregate built from
//! an immutable snapshot of the order lines.

use chrono::NaiveDate;

use flete_domain::model::{
    AllocationReport, CapacityCheck, OrderLineDraft, Route, Shipment, TruckType,
};
use flete_domain::repository::{RouteRepository, TruckRepository};
use flete_domain::service::{
    select_optimal_truck, validate_capacity, TruckRecommendation,
};
use flete_types::{Error, Result};

/// Parameters of a dispatch calculation
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    pub route_id: u32,
    pub truck_capacity_m3: f64,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Result of a dispatch calculation
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    pub report: AllocationReport,
    pub capacity: CapacityCheck,
}

/// Assemble a shipment from drafts and an optional route/truck selection.
///
/// Lines are registered before the truck so that an oversized order file
/// surfaces as a capacity-check result (or a CapacityExceeded from the
/// allocation) rather than failing halfway through the build.
pub fn build_shipment(
    route: Option<Route>,
    truck: Option<TruckType>,
    date: Option<NaiveDate>,
    notes: Option<String>,
    orders: Vec<OrderLineDraft>,
) -> Result<Shipment> {
    let mut shipment = Shipment::new();
    shipment.date = date;
    shipment.notes = notes.unwrap_or_default();

    for draft in orders {
        shipment.add_line(draft)?;
    }
    if let Some(route) = route {
        shipment.set_route(route);
    }
    if let Some(truck) = truck {
        shipment.set_truck(truck);
    }
    Ok(shipment)
}

/// Compute the full freight allocation for an order file
pub fn calculate_dispatch(
    routes: &dyn RouteRepository,
    trucks: &dyn TruckRepository,
    request: &DispatchRequest,
    orders: Vec<OrderLineDraft>,
) -> Result<DispatchOutcome> {
    let route = routes
        .find_by_id(request.route_id)?
        .ok_or(Error::RouteNotFound(request.route_id))?;
    let truck = trucks
        .find_by_capacity(request.truck_capacity_m3)?
        .ok_or(Error::TruckNotFound(request.truck_capacity_m3))?;

    let mut shipment = build_shipment(
        Some(route),
        Some(truck),
        request.date,
        request.notes.clone(),
        orders,
    )?;

    let capacity = validate_capacity(&shipment)?;
    let report = shipment.compute()?;

    Ok(DispatchOutcome { report, capacity })
}

/// Check an order file's volume against a truck's usable capacity
pub fn check_capacity(
    trucks: &dyn TruckRepository,
    truck_capacity_m3: f64,
    orders: Vec<OrderLineDraft>,
) -> Result<CapacityCheck> {
    let truck = trucks
        .find_by_capacity(truck_capacity_m3)?
        .ok_or(Error::TruckNotFound(truck_capacity_m3))?;

    let shipment = build_shipment(None, Some(truck), None, None, orders)?;
    Ok(validate_capacity(&shipment)?)
}

/// Recommend the smallest truck that fits an order file's total volume
pub fn recommend_truck(
    trucks: &dyn TruckRepository,
    orders: Vec<OrderLineDraft>,
) -> Result<(f64, Option<TruckRecommendation>)> {
    let shipment = build_shipment(None, None, None, None, orders)?;
    let total_volume = shipment.total_volume_m3();
    let types = trucks.find_all()?;
    Ok((total_volume, select_optimal_truck(total_volume, &types)))
}
