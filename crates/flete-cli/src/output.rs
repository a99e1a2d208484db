//! Output formatting module

use flete_domain::model::{AllocationReport, CapacityCheck, Route, TruckType};
use flete_domain::service::{ClientBreakdown, EfficiencyReport, TruckRecommendation};
use flete_types::{OutputFormat, Result};

fn money(value: f64, currency: &str) -> String {
    format!("{} {:.0}", currency, value)
}

fn tariff_cell(tariff: Option<f64>, currency: &str) -> String {
    tariff
        .map(|t| money(t, currency))
        .unwrap_or_else(|| "-".to_string())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

pub fn output_routes(
    output_format: OutputFormat,
    routes: &[Route],
    currency: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(routes)?);
        return Ok(());
    }

    println!("Route Catalog");
    println!("=============");
    println!(
        "{:<4} {:<10} {:<48} {:>12} {:>12} {:>12}",
        "ID", "Code", "Name", "25 m³", "37 m³", "45 m³"
    );
    println!("{}", "-".repeat(104));

    for route in routes {
        println!(
            "{:<4} {:<10} {:<48} {:>12} {:>12} {:>12}",
            route.id,
            truncate(&route.code, 10),
            truncate(&route.name, 48),
            tariff_cell(route.tariff_25m3, currency),
            tariff_cell(route.tariff_37m3, currency),
            tariff_cell(route.tariff_45m3, currency),
        );
    }

    println!("\n{} routes", routes.len());
    Ok(())
}

pub fn output_route_detail(
    output_format: OutputFormat,
    route: &Route,
    currency: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(route)?);
        return Ok(());
    }

    println!("Route {}", route.id);
    println!("========");
    println!("Code:        {}", route.code);
    println!("Name:        {}", route.name);
    println!("Tariff 25m³: {}", tariff_cell(route.tariff_25m3, currency));
    println!("Tariff 37m³: {}", tariff_cell(route.tariff_37m3, currency));
    println!("Tariff 45m³: {}", tariff_cell(route.tariff_45m3, currency));
    Ok(())
}

pub fn output_trucks(output_format: OutputFormat, types: &[TruckType]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(types)?);
        return Ok(());
    }

    println!("Truck Types");
    println!("===========");
    println!(
        "{:<16} {:>12} {:>12} {:>12}",
        "Name", "Capacity", "Efficiency", "Usable"
    );
    println!("{}", "-".repeat(56));

    for truck in types {
        println!(
            "{:<16} {:>9.1} m³ {:>11.0}% {:>9.1} m³",
            truncate(&truck.name, 16),
            truck.capacity_m3,
            truck.efficiency * 100.0,
            truck.usable_capacity_m3(),
        );
    }

    Ok(())
}

pub fn output_tariff(
    output_format: OutputFormat,
    route: &Route,
    capacity_m3: f64,
    tariff: f64,
    currency: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({
            "route_id": route.id,
            "route_code": route.code,
            "truck_capacity_m3": capacity_m3,
            "tariff": tariff,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Route:  {} - {}", route.code, route.name);
    println!("Truck:  {} m³", capacity_m3);
    println!("Tariff: {}", money(tariff, currency));
    Ok(())
}

pub fn output_capacity_check(output_format: OutputFormat, check: &CapacityCheck) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(check)?);
        return Ok(());
    }

    println!("Capacity Check");
    println!("==============");
    println!(
        "Within capacity: {}",
        if check.within_capacity { "Yes" } else { "No" }
    );
    println!("Used volume:     {:.2} m³", check.used_volume_m3);
    println!("Usable capacity: {:.2} m³", check.usable_capacity_m3);
    println!("Remaining:       {:.2} m³", check.remaining_m3);
    println!("Utilization:     {:.1}%", check.utilization_pct);
    Ok(())
}

pub fn output_recommendation(
    output_format: OutputFormat,
    total_volume_m3: f64,
    recommendation: Option<&TruckRecommendation>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({
            "total_volume_m3": total_volume_m3,
            "recommendation": recommendation,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Cargo volume: {:.2} m³", total_volume_m3);
    match recommendation {
        Some(rec) => {
            println!(
                "Recommended:  {} (usable {:.1} m³)",
                rec.truck.name,
                rec.truck.usable_capacity_m3()
            );
            if !rec.fits {
                println!("Note: cargo does not fit in any truck type; largest shown");
            }
        }
        None => println!("No truck types available"),
    }
    Ok(())
}

pub fn output_report(
    output_format: OutputFormat,
    report: &AllocationReport,
    clients: Option<&[ClientBreakdown]>,
    efficiency: Option<&EfficiencyReport>,
    currency: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({
            "report": report,
            "clients": clients,
            "efficiency": efficiency,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Dispatch Allocation");
    println!("===================");
    println!("Route:       {} - {}", report.route_code, report.route_name);
    println!(
        "Truck:       {} (usable {:.1} m³)",
        report.truck_name, report.usable_capacity_m3
    );
    if let Some(date) = report.date {
        println!("Date:        {}", date);
    }
    if !report.notes.is_empty() {
        println!("Notes:       {}", report.notes);
    }
    println!("Tariff:      {}", money(report.total_tariff, currency));
    println!(
        "Volume:      {:.2} m³ ({:.1}% of usable)",
        report.total_volume_m3, report.utilization_pct
    );
    println!("Weight:      {:.1} kg", report.total_weight_kg);
    println!("Value:       {}", money(report.total_value, currency));
    println!(
        "Avg freight: {} /m³",
        money(report.avg_freight_per_m3, currency)
    );

    println!();
    println!(
        "{:<4} {:<18} {:<24} {:>4} {:>8} {:>8} {:>7} {:>12} {:>12} {:>7}",
        "ID", "Client", "Product", "Qty", "Vol m³", "Dist km", "Vol %", "Freight", "Per unit", "F/V %"
    );
    println!("{}", "-".repeat(112));

    for result in &report.lines {
        println!(
            "{:<4} {:<18} {:<24} {:>4} {:>8.2} {:>8.1} {:>6.1}% {:>12} {:>12} {:>6.1}%",
            result.line.id,
            truncate(&result.line.client, 18),
            truncate(&result.line.product, 24),
            result.line.quantity,
            result.line.total_volume_m3(),
            result.line.distance_km,
            result.volume_share_pct,
            money(result.allocated_freight, currency),
            money(result.freight_per_unit, currency),
            result.freight_to_value_pct,
        );
    }

    println!("{}", "-".repeat(112));
    let allocated: f64 = report.lines.iter().map(|l| l.allocated_freight).sum();
    println!(
        "{:<53} {:>8.2} {:>25}",
        format!("Total ({} lines)", report.line_count),
        report.total_volume_m3,
        money(allocated, currency),
    );

    if let Some(clients) = clients {
        println!();
        println!("By Client");
        println!("---------");
        println!(
            "{:<20} {:>6} {:>8} {:>7} {:>14} {:>7} {:>7}",
            "Client", "Items", "Vol m³", "Vol %", "Freight", "Flt %", "F/V %"
        );
        println!("{}", "-".repeat(76));
        for client in clients {
            println!(
                "{:<20} {:>6} {:>8.2} {:>6.1}% {:>14} {:>6.1}% {:>6.1}%",
                truncate(&client.client, 20),
                client.item_count,
                client.total_volume_m3,
                client.volume_share_pct,
                money(client.allocated_freight, currency),
                client.freight_share_pct,
                client.freight_to_value_pct,
            );
        }
    }

    if let Some(eff) = efficiency {
        println!();
        println!("Space Efficiency");
        println!("----------------");
        println!("Used:           {:.2} m³", eff.used_volume_m3);
        println!("Usable:         {:.2} m³", eff.usable_capacity_m3);
        println!("Wasted:         {:.2} m³", eff.wasted_volume_m3);
        println!("Utilization:    {:.1}%", eff.utilization_pct);
        println!(
            "Wasted cost:    {}",
            money(eff.wasted_space_cost, currency)
        );
        println!(
            "Cost per m³:    {} (potential {})",
            money(eff.effective_cost_per_m3, currency),
            money(eff.potential_cost_per_m3, currency)
        );
    }

    Ok(())
}
