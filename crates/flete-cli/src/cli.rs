//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use flete_types::OutputFormat;

#[derive(Parser)]
#[command(name = "flete-calc")]
#[command(version)]
#[command(about = "Freight cost allocation calculator for dispatch planning")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the route catalog, or show one route with its tariffs
    Routes {
        /// Show a single route by id
        #[arg(long)]
        id: Option<u32>,
    },

    /// List the truck types with their usable capacities
    Trucks,

    /// Look up the tariff for a route and truck capacity
    Tariff {
        /// Route id
        #[arg(long)]
        route: u32,

        /// Truck capacity in m³ (25, 37 or 45)
        #[arg(long)]
        truck: f64,
    },

    /// Validate an order file's volume against a truck's usable capacity
    Check {
        /// Path to the orders CSV file
        orders: PathBuf,

        /// Truck capacity in m³
        #[arg(long)]
        truck: f64,
    },

    /// Recommend the smallest truck that fits an order file
    Recommend {
        /// Path to the orders CSV file
        orders: PathBuf,
    },

    /// Compute the freight allocation for a dispatch
    Calc {
        /// Path to the orders CSV file
        orders: PathBuf,

        /// Route id
        #[arg(long)]
        route: u32,

        /// Truck capacity in m³
        #[arg(long)]
        truck: f64,

        /// Dispatch date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Free-form dispatch notes
        #[arg(long)]
        notes: Option<String>,

        /// Include the per-client breakdown
        #[arg(long)]
        by_client: bool,

        /// Include the space-efficiency analysis
        #[arg(long)]
        efficiency: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set a route master TOML file (overrides the built-in catalog)
        #[arg(long)]
        set_routes_file: Option<PathBuf>,

        /// Set a truck master TOML file (overrides the built-in catalog)
        #[arg(long)]
        set_trucks_file: Option<PathBuf>,

        /// Set the currency symbol used in tables
        #[arg(long)]
        set_currency: Option<String>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
