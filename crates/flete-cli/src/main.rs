//! flete-calc - Freight cost allocation calculator
//!
//! A CLI tool that distributes a route's freight tariff across the order
//! lines of a dispatch, weighted by volume and destination distance.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
