//! Infrastructure layer for flete-calc: order input and reference-data files

pub mod orders_csv;
pub mod persistence;
pub mod route_master_loader;
pub mod truck_master_loader;
