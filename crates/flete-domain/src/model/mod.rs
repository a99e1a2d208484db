//! Domain model types

pub mod allocation;
pub mod order_line;
pub mod route;
pub mod shipment;
pub mod truck;

pub use allocation::{AllocationReport, AllocationResult, CapacityCheck};
pub use order_line::{OrderLine, OrderLineDraft};
pub use route::Route;
pub use shipment::{Shipment, ShipmentState};
pub use truck::TruckType;
