//! CSV loader for order lines

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use flete_domain::model::OrderLineDraft;

#[derive(Debug, Error)]
pub enum OrdersCsvError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV file has no order rows")]
    Empty,
}

/// Raw CSV row; empty cells become `None` and are defaulted on mapping
#[derive(Debug, Deserialize)]
struct OrderRecord {
    client: Option<String>,
    product: String,
    destination: Option<String>,
    purchase_order: Option<String>,
    quantity: u32,
    unit_volume_m3: f64,
    unit_weight_kg: f64,
    unit_price: Option<f64>,
    distance_km: Option<f64>,
}

impl From<OrderRecord> for OrderLineDraft {
    fn from(record: OrderRecord) -> Self {
        OrderLineDraft {
            client: record.client,
            product: record.product,
            destination: record.destination,
            purchase_order: record.purchase_order,
            quantity: record.quantity,
            unit_volume_m3: record.unit_volume_m3,
            unit_weight_kg: record.unit_weight_kg,
            unit_price: record.unit_price.unwrap_or(0.0),
            distance_km: record.distance_km.unwrap_or(0.0),
        }
    }
}

/// Load order lines from a CSV file.
///
/// Expected header (client, destination, purchase_order, unit_price and
/// distance_km may be left empty):
/// client,product,destination,purchase_order,quantity,unit_volume_m3,unit_weight_kg,unit_price,distance_km
pub fn load_order_lines<P: AsRef<Path>>(path: P) -> Result<Vec<OrderLineDraft>, OrdersCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut drafts = Vec::new();
    for result in reader.deserialize::<OrderRecord>() {
        drafts.push(result?.into());
    }

    if drafts.is_empty() {
        return Err(OrdersCsvError::Empty);
    }

    Ok(drafts)
}
