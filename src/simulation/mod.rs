//! Simulation orchestration and control
//!
//! This module contains the parking lot service, the simulation runner, time
//! sources, status reporting, statistics collection, logging setup and error
//! handling.
//!
//! # Overview
//!
//! - **ParkingLotService**: owns the lot and the ticket service, parks and
//!   unparks vehicles by gate id
//! - **ParkingSimulation**: drives a park-all then unpark-all run
//! - **Clock**: wall clock ([`SystemClock`]) or manual ([`ManualClock`]) time
//! - **LotStatusReport**: spot counts per class, status and floor
//! - **SimulationStatistics**: arrivals, rejections, bills and revenue
//! - **ParkingError**: error type for every parking operation
//!
//! # Usage Example
//!
//! ```rust
//! use parking_lot_simulator::simulation::*;
//! use parking_lot_simulator::types::*;
//!
//! let config = SimulationConfig {
//!     floor_count: 2,
//!     spots_per_floor: 10,
//!     vehicle_count: 5,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut simulation = ParkingSimulation::new(config).unwrap();
//! let run = simulation.run().unwrap();
//!
//! assert_eq!(run.tickets.len(), run.bills.len());
//! assert_eq!(run.initial_status, run.final_status);
//! ```

pub mod clock;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod runner;
pub mod statistics;
pub mod status;

// Re-export all public types for convenience
pub use clock::*;
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use runner::*;
pub use statistics::*;
pub use status::*;
