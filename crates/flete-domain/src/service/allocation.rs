//! Freight allocation engine
//!
//! Distributes a route's fixed tariff across the order lines of a shipment.
//! Lines are weighted by volume × distance; when no line has a recorded
//! distance the split degrades to plain volume participation, so the total
//! is always fully distributed.
//!
//! Every operation here is a pure, synchronous computation over the
//! aggregate; failures are precondition violations, never transient faults.

use flete_types::AllocationError;
use serde::{Deserialize, Serialize};

use crate::model::{AllocationReport, AllocationResult, CapacityCheck, Shipment};

/// Check the shipment's cargo volume against the selected truck.
///
/// Requires a truck selection. No side effects; called before every
/// volume-adding mutation and again before the final allocation.
pub fn validate_capacity(shipment: &Shipment) -> Result<CapacityCheck, AllocationError> {
    let truck = shipment
        .truck()
        .ok_or(AllocationError::MissingRouteOrTruck)?;

    let used = shipment.total_volume_m3();
    let usable = truck.usable_capacity_m3();

    Ok(CapacityCheck {
        within_capacity: used <= usable,
        used_volume_m3: used,
        usable_capacity_m3: usable,
        remaining_m3: usable - used,
        utilization_pct: if usable > 0.0 {
            used / usable * 100.0
        } else {
            0.0
        },
    })
}

/// Distribute the route tariff across the shipment's order lines.
///
/// Preconditions, each reported as its own error: route and truck selected,
/// at least one line, every line valid, cargo within usable capacity, and a
/// tariff contracted for the (route, truck capacity) pair. The sum of the
/// allocated amounts equals the tariff up to floating-point rounding.
pub fn allocate_freight(shipment: &Shipment) -> Result<AllocationReport, AllocationError> {
    let (route, truck) = match (shipment.route(), shipment.truck()) {
        (Some(route), Some(truck)) => (route, truck),
        _ => return Err(AllocationError::MissingRouteOrTruck),
    };

    if shipment.lines().is_empty() {
        return Err(AllocationError::EmptyShipment);
    }

    for line in shipment.lines() {
        line.validate()?;
    }

    let check = validate_capacity(shipment)?;
    if !check.within_capacity {
        return Err(AllocationError::CapacityExceeded {
            used_volume_m3: check.used_volume_m3,
            usable_capacity_m3: check.usable_capacity_m3,
            overflow_m3: check.used_volume_m3 - check.usable_capacity_m3,
        });
    }

    let total_tariff =
        route
            .tariff_for(truck.capacity_m3)
            .ok_or(AllocationError::UnknownTariff {
                route_id: route.id,
                capacity_m3: truck.capacity_m3,
            })?;

    // Line validation guarantees quantity ≥ 1 and unit volume > 0, so the
    // total volume is strictly positive from here on.
    let total_volume = shipment.total_volume_m3();
    let total_weight = shipment.total_weight_kg();
    let total_value = shipment.total_value();
    let total_weighted_factor: f64 = shipment
        .lines()
        .iter()
        .map(|l| l.total_volume_m3() * l.distance_km)
        .sum();

    let lines: Vec<AllocationResult> = shipment
        .lines()
        .iter()
        .map(|line| {
            let volume = line.total_volume_m3();
            let weighted_factor = volume * line.distance_km;

            // Distance-weighted split while any line in the shipment has a
            // recorded distance; plain volume split otherwise.
            let allocated_freight = if total_weighted_factor > 0.0 {
                weighted_factor / total_weighted_factor * total_tariff
            } else {
                volume / total_volume * total_tariff
            };

            let value = line.total_value();
            let quantity = f64::from(line.quantity);
            AllocationResult {
                volume_share_pct: volume / total_volume * 100.0,
                weighted_factor,
                allocated_freight,
                freight_per_unit: allocated_freight / quantity,
                freight_to_value_pct: if value > 0.0 {
                    allocated_freight / value * 100.0
                } else {
                    0.0
                },
                total_cost_with_freight: value + allocated_freight,
                unit_cost_with_freight: (value + allocated_freight) / quantity,
                line: line.clone(),
            }
        })
        .collect();

    Ok(AllocationReport {
        route_id: route.id,
        route_code: route.code.clone(),
        route_name: route.name.clone(),
        truck_name: truck.name.clone(),
        truck_capacity_m3: truck.capacity_m3,
        usable_capacity_m3: check.usable_capacity_m3,
        date: shipment.date,
        notes: shipment.notes.clone(),
        total_tariff,
        total_volume_m3: total_volume,
        total_weight_kg: total_weight,
        total_value,
        total_weighted_factor,
        utilization_pct: check.utilization_pct,
        line_count: lines.len(),
        avg_freight_per_m3: total_tariff / total_volume,
        avg_freight_per_kg: if total_weight > 0.0 {
            total_tariff / total_weight
        } else {
            0.0
        },
        lines,
    })
}

/// Space-efficiency analysis of a computed allocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencyReport {
    pub used_volume_m3: f64,
    pub usable_capacity_m3: f64,
    pub wasted_volume_m3: f64,
    pub utilization_pct: f64,
    /// Share of the tariff paid for empty truck space
    pub wasted_space_cost: f64,
    /// Tariff divided by the volume actually shipped
    pub effective_cost_per_m3: f64,
    /// Tariff divided by the usable capacity (the best achievable rate)
    pub potential_cost_per_m3: f64,
}

/// How well the paid truck space was used by an allocation
pub fn space_efficiency(report: &AllocationReport) -> EfficiencyReport {
    let wasted = report.usable_capacity_m3 - report.total_volume_m3;
    EfficiencyReport {
        used_volume_m3: report.total_volume_m3,
        usable_capacity_m3: report.usable_capacity_m3,
        wasted_volume_m3: wasted,
        utilization_pct: report.utilization_pct,
        wasted_space_cost: if report.usable_capacity_m3 > 0.0 {
            wasted / report.usable_capacity_m3 * report.total_tariff
        } else {
            0.0
        },
        effective_cost_per_m3: report.avg_freight_per_m3,
        potential_cost_per_m3: if report.usable_capacity_m3 > 0.0 {
            report.total_tariff / report.usable_capacity_m3
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderLineDraft, Route, TruckType};

    const EPS: f64 = 1e-6;

    fn route_with_tariff(tariff: f64) -> Route {
        Route {
            id: 1,
            code: "RUTA 01".to_string(),
            name: "URBANO (SIBATE a Calle 26) (1 a 6 Clientes)".to_string(),
            tariff_25m3: Some(tariff),
            tariff_37m3: Some(tariff + 45495.0),
            tariff_45m3: Some(tariff + 60659.0),
        }
    }

    fn truck_25() -> TruckType {
        TruckType::new("Camión 25 m³", 25.0, 0.80)
    }

    fn draft(volume: f64, distance: f64) -> OrderLineDraft {
        OrderLineDraft {
            product: "Colchón Sencillo".to_string(),
            quantity: 1,
            unit_volume_m3: volume,
            unit_weight_kg: 20.0,
            unit_price: 100000.0,
            distance_km: distance,
            ..OrderLineDraft::default()
        }
    }

    fn shipment_with(lines: &[(f64, f64)], tariff: f64) -> Shipment {
        let mut shipment = Shipment::new();
        shipment.set_route(route_with_tariff(tariff));
        shipment.set_truck(truck_25());
        for &(volume, distance) in lines {
            shipment.add_line(draft(volume, distance)).unwrap();
        }
        shipment
    }

    // Scenario: one 15 m³ line on a 25 m³ truck takes the whole tariff
    #[test]
    fn test_single_line_takes_full_tariff() {
        let shipment = shipment_with(&[(15.0, 100.0)], 500000.0);
        let report = allocate_freight(&shipment).unwrap();

        assert_eq!(report.line_count, 1);
        assert!((report.lines[0].allocated_freight - 500000.0).abs() < EPS);
        assert!((report.lines[0].volume_share_pct - 100.0).abs() < EPS);
    }

    // Scenario: 10 m³ @ 100 km and 5 m³ @ 200 km weigh equally (1000 each)
    #[test]
    fn test_distance_weighted_split() {
        let shipment = shipment_with(&[(10.0, 100.0), (5.0, 200.0)], 500000.0);
        let report = allocate_freight(&shipment).unwrap();

        assert!((report.total_weighted_factor - 2000.0).abs() < EPS);
        assert!((report.lines[0].allocated_freight - 250000.0).abs() < EPS);
        assert!((report.lines[1].allocated_freight - 250000.0).abs() < EPS);
    }

    // Scenario: with no distances the split falls back to volume shares
    #[test]
    fn test_volume_only_fallback() {
        let shipment = shipment_with(&[(10.0, 0.0), (5.0, 0.0)], 500000.0);
        let report = allocate_freight(&shipment).unwrap();

        assert!((report.lines[0].allocated_freight - 500000.0 * 10.0 / 15.0).abs() < 0.01);
        assert!((report.lines[1].allocated_freight - 500000.0 * 5.0 / 15.0).abs() < 0.01);
    }

    // One positive distance anywhere switches the whole shipment to
    // distance weighting; the zero-distance line then pays nothing
    #[test]
    fn test_single_positive_distance_enables_weighting() {
        let shipment = shipment_with(&[(10.0, 0.0), (5.0, 50.0)], 500000.0);
        let report = allocate_freight(&shipment).unwrap();

        assert!((report.lines[0].allocated_freight - 0.0).abs() < EPS);
        assert!((report.lines[1].allocated_freight - 500000.0).abs() < EPS);
    }

    #[test]
    fn test_conservation() {
        let shipment = shipment_with(
            &[(3.2, 420.0), (7.5, 37.0), (1.05, 980.0), (4.0, 0.0)],
            1813187.0,
        );
        let report = allocate_freight(&shipment).unwrap();

        let allocated: f64 = report.lines.iter().map(|l| l.allocated_freight).sum();
        assert!((allocated - report.total_tariff).abs() / report.total_tariff < EPS);
    }

    #[test]
    fn test_non_negativity() {
        let shipment = shipment_with(&[(6.0, 470.0), (2.5, 0.0), (0.9, 12.5)], 970659.0);
        let report = allocate_freight(&shipment).unwrap();

        for line in &report.lines {
            assert!(line.allocated_freight >= 0.0);
            assert!(line.volume_share_pct >= 0.0);
            assert!(line.weighted_factor >= 0.0);
            assert!(line.freight_per_unit >= 0.0);
            assert!(line.freight_to_value_pct >= 0.0);
            assert!(line.total_cost_with_freight >= 0.0);
        }
    }

    #[test]
    fn test_idempotence() {
        let shipment = shipment_with(&[(10.0, 100.0), (5.0, 200.0)], 500000.0);
        let first = allocate_freight(&shipment).unwrap();
        let second = allocate_freight(&shipment).unwrap();
        assert_eq!(first, second);
    }

    // Scenario: 22 m³ against 20 m³ usable must error, never clamp
    #[test]
    fn test_capacity_exceeded() {
        let mut shipment = Shipment::new();
        shipment.set_route(route_with_tariff(500000.0));
        shipment.add_line(draft(22.0, 100.0)).unwrap();
        shipment.set_truck(truck_25());

        let check = validate_capacity(&shipment).unwrap();
        assert!(!check.within_capacity);
        assert!((check.remaining_m3 + 2.0).abs() < EPS);

        let err = allocate_freight(&shipment).unwrap_err();
        match err {
            AllocationError::CapacityExceeded {
                used_volume_m3,
                usable_capacity_m3,
                overflow_m3,
            } => {
                assert!((used_volume_m3 - 22.0).abs() < EPS);
                assert!((usable_capacity_m3 - 20.0).abs() < EPS);
                assert!((overflow_m3 - 2.0).abs() < EPS);
            }
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_capacity_check_at_exact_limit() {
        let shipment = shipment_with(&[(20.0, 0.0)], 500000.0);
        let check = validate_capacity(&shipment).unwrap();
        assert!(check.within_capacity);
        assert!((check.utilization_pct - 100.0).abs() < EPS);
        assert!(allocate_freight(&shipment).is_ok());
    }

    #[test]
    fn test_missing_route_or_truck() {
        let mut shipment = Shipment::new();
        shipment.add_line(draft(5.0, 0.0)).unwrap();
        assert!(matches!(
            allocate_freight(&shipment),
            Err(AllocationError::MissingRouteOrTruck)
        ));
        assert!(matches!(
            validate_capacity(&shipment),
            Err(AllocationError::MissingRouteOrTruck)
        ));

        shipment.set_truck(truck_25());
        assert!(matches!(
            allocate_freight(&shipment),
            Err(AllocationError::MissingRouteOrTruck)
        ));
    }

    #[test]
    fn test_empty_shipment() {
        let mut shipment = Shipment::new();
        shipment.set_route(route_with_tariff(500000.0));
        shipment.set_truck(truck_25());
        assert!(matches!(
            allocate_freight(&shipment),
            Err(AllocationError::EmptyShipment)
        ));
    }

    #[test]
    fn test_unknown_tariff() {
        let mut shipment = Shipment::new();
        shipment.set_route(Route {
            id: 54,
            code: "RUTA 54".to_string(),
            name: "EL DONCELLLO - SAN VICENTE DEL CAGUAN".to_string(),
            tariff_25m3: None,
            tariff_37m3: None,
            tariff_45m3: Some(1978022.0),
        });
        shipment.set_truck(truck_25());
        shipment.add_line(draft(5.0, 100.0)).unwrap();

        assert!(matches!(
            allocate_freight(&shipment),
            Err(AllocationError::UnknownTariff {
                route_id: 54,
                ..
            })
        ));
    }

    #[test]
    fn test_derived_ratios() {
        let mut shipment = Shipment::new();
        shipment.set_route(route_with_tariff(500000.0));
        shipment.set_truck(truck_25());
        shipment
            .add_line(OrderLineDraft {
                product: "COL MONARCA 100X190X28 JAC".to_string(),
                quantity: 10,
                unit_volume_m3: 0.5,
                unit_weight_kg: 18.5,
                unit_price: 50000.0,
                distance_km: 100.0,
                ..OrderLineDraft::default()
            })
            .unwrap();

        let report = allocate_freight(&shipment).unwrap();
        let line = &report.lines[0];

        // Single line: full tariff, 50 000 per unit
        assert!((line.freight_per_unit - 50000.0).abs() < EPS);
        // 500 000 freight on 500 000 of merchandise
        assert!((line.freight_to_value_pct - 100.0).abs() < EPS);
        assert!((line.total_cost_with_freight - 1_000_000.0).abs() < EPS);
        assert!((line.unit_cost_with_freight - 100_000.0).abs() < EPS);
        assert!((report.avg_freight_per_m3 - 100000.0).abs() < EPS);
        assert!((report.avg_freight_per_kg - 500000.0 / 185.0).abs() < EPS);
    }

    #[test]
    fn test_failed_allocation_leaves_shipment_unchanged() {
        let mut shipment = Shipment::new();
        shipment.set_route(route_with_tariff(500000.0));
        shipment.add_line(draft(22.0, 100.0)).unwrap();
        shipment.set_truck(truck_25());

        assert!(shipment.compute().is_err());
        assert!(shipment.report().is_none());
        assert_eq!(shipment.lines().len(), 1);
    }

    #[test]
    fn test_space_efficiency() {
        let shipment = shipment_with(&[(15.0, 100.0)], 500000.0);
        let report = allocate_freight(&shipment).unwrap();
        let eff = space_efficiency(&report);

        assert!((eff.used_volume_m3 - 15.0).abs() < EPS);
        assert!((eff.wasted_volume_m3 - 5.0).abs() < EPS);
        assert!((eff.utilization_pct - 75.0).abs() < EPS);
        assert!((eff.wasted_space_cost - 125000.0).abs() < EPS);
        assert!((eff.effective_cost_per_m3 - 500000.0 / 15.0).abs() < EPS);
        assert!((eff.potential_cost_per_m3 - 25000.0).abs() < EPS);
    }
}
