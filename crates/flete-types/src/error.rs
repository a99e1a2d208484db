//! Error types for flete-calc

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Precondition failures reported by the allocation engine.
///
/// These are all validation errors detected synchronously at the boundary of
/// a computation; a failed attempt never leaves partial results behind.
#[derive(Debug, Clone, Error)]
pub enum AllocationError {
    #[error("A route and a truck type must be selected before computing")]
    MissingRouteOrTruck,

    #[error("The shipment has no order lines")]
    EmptyShipment,

    #[error("Total volume {used_volume_m3:.2} m³ exceeds usable capacity {usable_capacity_m3:.2} m³ (overflow {overflow_m3:.2} m³)")]
    CapacityExceeded {
        used_volume_m3: f64,
        usable_capacity_m3: f64,
        overflow_m3: f64,
    },

    #[error("No tariff for route {route_id} with a {capacity_m3} m³ truck")]
    UnknownTariff { route_id: u32, capacity_m3: f64 },

    #[error("Invalid order line {line_id}: {reason}")]
    InvalidOrderLine { line_id: u32, reason: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Allocation(#[from] AllocationError),

    #[error("CSV loader error: {0}")]
    CsvLoader(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Route not found: {0}")]
    RouteNotFound(u32),

    #[error("Truck type not found: {0} m³")]
    TruckNotFound(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
