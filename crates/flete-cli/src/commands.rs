//! Command handlers

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use flete_app::app::{calculate_dispatch, check_capacity, recommend_truck, DispatchRequest};
use flete_app::config::Config;
use flete_app::repository::{open_route_repository, open_truck_repository};
use flete_domain::model::OrderLineDraft;
use flete_domain::repository::{RouteRepository, TruckRepository};
use flete_domain::service::{client_breakdown, space_efficiency};
use flete_infra::orders_csv::load_order_lines;
use flete_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Routes { id } => cmd_routes(&config, *id, output_format),

        Commands::Trucks => cmd_trucks(&config, output_format),

        Commands::Tariff { route, truck } => cmd_tariff(&config, *route, *truck, output_format),

        Commands::Check { orders, truck } => {
            cmd_check(&cli, &config, orders.clone(), *truck, output_format)
        }

        Commands::Recommend { orders } => {
            cmd_recommend(&cli, &config, orders.clone(), output_format)
        }

        Commands::Calc {
            orders,
            route,
            truck,
            date,
            notes,
            by_client,
            efficiency,
        } => cmd_calc(
            &cli,
            &config,
            orders.clone(),
            *route,
            *truck,
            *date,
            notes.clone(),
            *by_client,
            *efficiency,
            output_format,
        ),

        Commands::Config {
            show,
            set_format,
            set_routes_file,
            set_trucks_file,
            set_currency,
            reset,
        } => cmd_config(
            *show,
            *set_format,
            set_routes_file.clone(),
            set_trucks_file.clone(),
            set_currency.clone(),
            *reset,
        ),
    }
}

fn load_orders(cli: &Cli, path: &Path) -> Result<Vec<OrderLineDraft>> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Orders file not found: {}",
            path.display()
        )));
    }

    if cli.verbose {
        eprintln!("Loading orders from: {}", path.display());
    }
    let orders =
        load_order_lines(path).map_err(|e| Error::CsvLoader(e.to_string()))?;
    if cli.verbose {
        eprintln!("  Loaded {} order lines", orders.len());
    }

    Ok(orders)
}

fn cmd_routes(config: &Config, id: Option<u32>, output_format: OutputFormat) -> Result<()> {
    let repo = open_route_repository(config)?;

    match id {
        Some(id) => {
            let route = repo.find_by_id(id)?.ok_or(Error::RouteNotFound(id))?;
            output::output_route_detail(output_format, &route, &config.currency)
        }
        None => {
            let routes = repo.find_all()?;
            output::output_routes(output_format, &routes, &config.currency)
        }
    }
}

fn cmd_trucks(config: &Config, output_format: OutputFormat) -> Result<()> {
    let repo = open_truck_repository(config)?;
    let types = repo.find_all()?;
    output::output_trucks(output_format, &types)
}

fn cmd_tariff(
    config: &Config,
    route_id: u32,
    capacity_m3: f64,
    output_format: OutputFormat,
) -> Result<()> {
    let repo = open_route_repository(config)?;
    let route = repo
        .find_by_id(route_id)?
        .ok_or(Error::RouteNotFound(route_id))?;
    let tariff = repo.get_tariff(route_id, capacity_m3)?;
    output::output_tariff(output_format, &route, capacity_m3, tariff, &config.currency)
}

fn cmd_check(
    cli: &Cli,
    config: &Config,
    orders_path: PathBuf,
    capacity_m3: f64,
    output_format: OutputFormat,
) -> Result<()> {
    let orders = load_orders(cli, &orders_path)?;
    let trucks = open_truck_repository(config)?;

    let check = check_capacity(trucks.as_ref(), capacity_m3, orders)?;
    output::output_capacity_check(output_format, &check)?;

    if !check.within_capacity {
        eprintln!(
            "\nWarning: cargo exceeds usable capacity by {:.2} m³",
            check.used_volume_m3 - check.usable_capacity_m3
        );
    }

    Ok(())
}

fn cmd_recommend(
    cli: &Cli,
    config: &Config,
    orders_path: PathBuf,
    output_format: OutputFormat,
) -> Result<()> {
    let orders = load_orders(cli, &orders_path)?;
    let trucks = open_truck_repository(config)?;

    let (total_volume, recommendation) = recommend_truck(trucks.as_ref(), orders)?;
    output::output_recommendation(output_format, total_volume, recommendation.as_ref())
}

fn cmd_calc(
    cli: &Cli,
    config: &Config,
    orders_path: PathBuf,
    route_id: u32,
    capacity_m3: f64,
    date: Option<NaiveDate>,
    notes: Option<String>,
    by_client: bool,
    efficiency: bool,
    output_format: OutputFormat,
) -> Result<()> {
    let orders = load_orders(cli, &orders_path)?;
    let routes = open_route_repository(config)?;
    let trucks = open_truck_repository(config)?;

    let request = DispatchRequest {
        route_id,
        truck_capacity_m3: capacity_m3,
        date,
        notes,
    };

    let outcome = calculate_dispatch(routes.as_ref(), trucks.as_ref(), &request, orders)?;

    let clients = by_client.then(|| client_breakdown(&outcome.report));
    let eff = efficiency.then(|| space_efficiency(&outcome.report));

    output::output_report(
        output_format,
        &outcome.report,
        clients.as_deref(),
        eff.as_ref(),
        &config.currency,
    )
}

fn cmd_config(
    show: bool,
    set_format: Option<OutputFormat>,
    set_routes_file: Option<PathBuf>,
    set_trucks_file: Option<PathBuf>,
    set_currency: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(format) = set_format {
        config.output_format = format;
        modified = true;
    }

    if let Some(path) = set_routes_file {
        config.routes_file = Some(path);
        modified = true;
    }

    if let Some(path) = set_trucks_file {
        config.trucks_file = Some(path);
        modified = true;
    }

    if let Some(currency) = set_currency {
        config.currency = currency;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
