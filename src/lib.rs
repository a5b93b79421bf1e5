//! Parking Lot Simulator
//!
//! An in-memory simulation of a multi-floor parking lot: vehicles enter
//! through gates, are assigned a spot by pluggable placement strategies, and
//! are billed on exit by vehicle class and time parked.
//!
//! # Overview
//!
//! The library models one lot with its gates, floors and spots, issues
//! tickets on entry and bills on exit, and ships a generator plus a runner
//! that exercise the whole lifecycle on a randomized lot.
//!
//! ## Key Features
//!
//! - **Pluggable Placement**: floor and spot selection behind traits
//! - **Ticketing and Billing**: started-hour tariffs per vehicle class
//! - **Injectable Time**: wall clock or manually advanced clock
//! - **Status Reporting**: spot counts per class, status and floor, as text or JSON
//! - **Configurable Simulation**: CLI and JSON configuration with validation
//!
//! ## Quick Start
//!
//! ```rust
//! use parking_lot_simulator::*;
//!
//! let mut floor = ParkingFloor::new(FloorId::sequential(1));
//! floor.add_spot(ParkingSpot::available(SpotId::sequential(1), VehicleType::LightMotorVehicle));
//!
//! let mut lot = ParkingLot::new(LotId::sequential(1));
//! lot.add_gate(Gate::entry(GateId::sequential(1), 1));
//! lot.add_gate(Gate::exit(GateId::sequential(2), 2));
//! lot.add_floor(floor);
//!
//! let clock = ManualClock::starting_now();
//! let mut service = ParkingLotService::new(
//!     lot,
//!     ParkingTicketService::with_clock(Box::new(clock.clone())),
//! );
//!
//! let vehicle = Vehicle::new("KA-01-AB-1234", VehicleType::LightMotorVehicle);
//! let ticket = service.park_vehicle(&vehicle, &GateId::sequential(1))?;
//!
//! clock.advance_by(chrono::Duration::minutes(90));
//! let mut payment = UpiPaymentStrategy::new("upi@ybl");
//! let bill = service.unpark_vehicle(&ticket.id, &GateId::sequential(2), &mut payment)?;
//! assert_eq!(bill.charge, 65.0);
//! # Ok::<(), ParkingError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Core types, identifiers, and configuration
//! - [`lot`]: Gates, floors, spots and the lot generator
//! - [`vehicle`]: Vehicles and the vehicle generator
//! - [`strategy`]: Floor, spot and payment strategies
//! - [`ticketing`]: Tickets, bills and tariffs
//! - [`simulation`]: Service, runner, clock, reporting, logging and errors
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Strategy   │    │  Vehicle    │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Floor       │    │ Vehicles    │
//! │ Enums       │    │ Spot        │    │ Generator   │
//! │ Config      │    │ Payment     │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │    Lot      │    │  Ticketing  │    │ Simulation  │
//! │             │    │             │    │             │
//! │ Gates       │◄───┤ Tickets     │◄───┤ Service     │
//! │ Floors      │    │ Bills       │    │ Runner      │
//! │ Spots       │    │ Charges     │    │ Statistics  │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod lot;
pub mod simulation;
pub mod strategy;
pub mod ticketing;
pub mod types;
pub mod vehicle;

// Core types and identifiers
pub use types::{
    // Identifiers
    BillId,
    // Configuration
    ConfigValidationError,
    FloorId,
    GateId,
    // Enums
    GateType,
    LotId,
    ParkingSpotStatus,
    PaymentId,
    ReportFormat,
    SimulationConfig,
    SpotId,
    TicketId,
    VehicleType,
};

// Lot structure
pub use lot::{Gate, ParkingFloor, ParkingLot, ParkingLotGenerator, ParkingSpot};

// Vehicles
pub use vehicle::{Vehicle, VehicleGenerator};

// Strategies
pub use strategy::{
    NearestParkingFloorStrategy, NearestParkingSpotStrategy, ParkingFloorStrategy,
    ParkingSpotStrategy, PaymentDetails, PaymentMethod, PaymentStrategy, UpiPaymentStrategy,
};

// Ticketing
pub use ticketing::{ParkingBill, ParkingTicket, ParkingTicketService};

// Simulation types and functionality
pub use simulation::{
    Clock, LotStatusReport, ManualClock, ParkingError, ParkingLotService, ParkingResult,
    ParkingSimulation, SimulationRun, SimulationStatistics, SystemClock,
};
