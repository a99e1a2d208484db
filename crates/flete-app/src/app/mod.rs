//! Application use cases

mod dispatch_service;

pub use dispatch_service::{
    build_shipment, calculate_dispatch, check_capacity, recommend_truck, DispatchOutcome,
    DispatchRequest,
};
