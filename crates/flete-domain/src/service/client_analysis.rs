//! Per-client aggregation of an allocation report

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::AllocationReport;

/// One client's totals across the lines of a computed allocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientBreakdown {
    pub client: String,
    pub line_ids: Vec<u32>,
    /// Sum of line quantities
    pub item_count: u32,
    pub total_volume_m3: f64,
    pub total_weight_kg: f64,
    pub total_value: f64,
    pub allocated_freight: f64,
    pub volume_share_pct: f64,
    pub freight_share_pct: f64,
    pub freight_to_value_pct: f64,
}

/// Group a report's lines by client, ordered by allocated freight descending
pub fn client_breakdown(report: &AllocationReport) -> Vec<ClientBreakdown> {
    let mut by_client: HashMap<&str, ClientBreakdown> = HashMap::new();

    for result in &report.lines {
        let entry = by_client
            .entry(result.line.client.as_str())
            .or_insert_with(|| ClientBreakdown {
                client: result.line.client.clone(),
                line_ids: Vec::new(),
                item_count: 0,
                total_volume_m3: 0.0,
                total_weight_kg: 0.0,
                total_value: 0.0,
                allocated_freight: 0.0,
                volume_share_pct: 0.0,
                freight_share_pct: 0.0,
                freight_to_value_pct: 0.0,
            });

        entry.line_ids.push(result.line.id);
        entry.item_count += result.line.quantity;
        entry.total_volume_m3 += result.line.total_volume_m3();
        entry.total_weight_kg += result.line.total_weight_kg();
        entry.total_value += result.line.total_value();
        entry.allocated_freight += result.allocated_freight;
    }

    let mut clients: Vec<ClientBreakdown> = by_client
        .into_values()
        .map(|mut c| {
            c.volume_share_pct = if report.total_volume_m3 > 0.0 {
                c.total_volume_m3 / report.total_volume_m3 * 100.0
            } else {
                0.0
            };
            c.freight_share_pct = if report.total_tariff > 0.0 {
                c.allocated_freight / report.total_tariff * 100.0
            } else {
                0.0
            };
            c.freight_to_value_pct = if c.total_value > 0.0 {
                c.allocated_freight / c.total_value * 100.0
            } else {
                0.0
            };
            c
        })
        .collect();

    clients.sort_by(|a, b| b.allocated_freight.total_cmp(&a.allocated_freight));
    clients
}
