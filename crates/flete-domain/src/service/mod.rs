//! Domain services

pub mod allocation;
pub mod client_analysis;
pub mod truck_selector;

pub use allocation::{allocate_freight, space_efficiency, validate_capacity, EfficiencyReport};
pub use client_analysis::{client_breakdown, ClientBreakdown};
pub use truck_selector::{select_optimal_truck, TruckRecommendation};
