//! Core types and identifiers for the parking lot simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: string-backed identifiers for lots, floors, spots, gates,
//!   tickets, bills and payments
//! - **Enums**: vehicle classes (with their tariffs), spot statuses, gate directions
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use parking_lot_simulator::types::*;
//!
//! let spot_id = SpotId::sequential(1);
//! assert_eq!(spot_id.as_str(), "ParkingSpot-1");
//!
//! let vehicle_type = VehicleType::LightMotorVehicle;
//! assert_eq!(vehicle_type.base_charge(), 35.0);
//!
//! let config = SimulationConfig {
//!     floor_count: 2,
//!     vehicle_count: 20,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
