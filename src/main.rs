// Parking Lot Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/parking-lot-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/parking-lot-simulator --floor-count 5 --vehicle-count 40 --seed 7 --verbose
// ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use parking_lot_simulator::simulation::{
    LoggingConfig, LotStatusReport, ParkingSimulation, SimulationRun,
};
use parking_lot_simulator::types::config::CliArgs;
use parking_lot_simulator::types::{ReportFormat, SimulationConfig};
use std::process;
use tracing::{error, info};

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        let json = SimulationConfig::default()
            .print_json()
            .context("Failed to serialize default configuration")?;
        println!("{}", json);
        return Ok(());
    }

    let _logging_guard = LoggingConfig::from_flags(args.verbose, args.debug)
        .init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    info!("Starting Parking Lot Simulator");

    let dry_run = args.dry_run;
    let config =
        SimulationConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    let report_format = config.get_report_format().map_err(|e| anyhow!(e))?;

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_startup_banner(&config);

    let mut simulation =
        ParkingSimulation::new(config).context("Failed to initialize simulation")?;
    let run = simulation.run().context("Simulation failed")?;

    print_run(&run, report_format)?;

    info!("Parking Lot Simulator completed successfully");
    Ok(())
}

/// Print the three status snapshots, every ticket and bill, and the summary
fn print_run(run: &SimulationRun, format: ReportFormat) -> Result<()> {
    print_status("Initial lot status", &run.initial_status, format)?;

    for ticket in &run.tickets {
        println!("{}", ticket);
    }
    println!();
    print_status("After parking", &run.parked_status, format)?;

    for bill in &run.bills {
        println!("{}", bill);
    }
    println!();
    print_status("After unparking", &run.final_status, format)?;

    eprintln!("{}", run.statistics);
    Ok(())
}

fn print_status(title: &str, report: &LotStatusReport, format: ReportFormat) -> Result<()> {
    let rendered = report.render(format).context("Failed to render lot status")?;
    println!("# {}", title);
    println!("{}", rendered);
    println!();
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Parking Lot Simulator");
    eprintln!("=====================");
    eprintln!("Spot allocation, ticketing and billing for a generated parking lot");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Floors: {}", config.floor_count);
    eprintln!("  Spots per Floor: {}", config.spots_per_floor);
    eprintln!("  Gates: {}", config.gate_count);
    eprintln!("  Vehicles: {}", config.vehicle_count);
    eprintln!(
        "  Spot Mix: {:.0}% Two Wheeler, {:.0}% LMV, {:.0}% HMV",
        config.two_wheeler_spot_percentage * 100.0,
        config.light_motor_vehicle_spot_percentage * 100.0,
        config.heavy_motor_vehicle_spot_percentage() * 100.0
    );
    eprintln!(
        "  Initial Status: {:.0}% inactive, {:.0}% occupied",
        config.inactive_spot_percentage * 100.0,
        config.occupied_spot_percentage * 100.0
    );
    eprintln!("  Stay: {} - {} minutes", config.min_stay_minutes, config.max_stay_minutes);
    eprintln!("  UPI Id: {}", config.upi_id);
    eprintln!("  Report Format: {}", config.report_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!("  Total Spots: {}", config.total_spots());
    eprintln!();
}
