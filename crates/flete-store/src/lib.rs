//! Built-in reference data for flete-calc
//!
//! The route/tariff table and the truck fleet used to live as hardcoded
//! arrays duplicated across the dispatch screens; they are centralized here
//! behind the domain repository traits so callers cannot tell them apart
//! from a file- or database-backed provider.

mod routes;
mod trucks;

pub use routes::RouteCatalog;
pub use trucks::TruckCatalog;
