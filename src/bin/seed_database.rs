#!/usr/bin/env cargo
//! Oilfield Database Seeder
//!
//! Clears the oilfield tables (fields, wells, sensors, production readings)
//! and fills them with a fixed set of fixture rows. Mock items are left alone.
//!
//! Usage:
//!   `cargo run --bin seed_database -- --db-path data/app.db`

use clap::{Arg, Command};
use console::style;
use oilfield_api::config::Config;
use oilfield_api::db;
use oilfield_api::oilfield::seed::{SeedSummary, seed};
use std::path::PathBuf;

fn display_summary(summary: &SeedSummary) {
    println!();
    println!("{}", style("Oilfield seed complete").bold().green());
    println!("{}", style("═".repeat(40)).dim());

    let summary_data = [
        ("Oil fields", summary.oil_fields),
        ("Wells", summary.wells),
        ("Sensors", summary.sensors),
        ("Readings", summary.readings),
    ];

    for (name, count) in summary_data {
        println!(
            "{:.<20} {}",
            style(name).cyan(),
            style(count).bold().green()
        );
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    let matches = Command::new("Oilfield Database Seeder")
        .version("1.0")
        .about("Replaces the oilfield tables with fixture data")
        .arg(
            Arg::new("db-path")
                .short('d')
                .long("db-path")
                .value_name("PATH")
                .help("SQLite database file, created if missing [default: $DB_PATH or data/app.db]"),
        )
        .get_matches();

    let db_path = matches
        .get_one::<String>("db-path")
        .map_or_else(|| PathBuf::from(&config.db_path), PathBuf::from);

    println!("{}", style("Oilfield Database Seeder v1.0").bold());
    println!("Database: {}", style(db_path.display()).cyan());

    let db = db::open(&db_path).await?;
    db::ensure_schema(&db).await?;

    let summary = seed(&db).await?;
    display_summary(&summary);

    Ok(())
}
