//! Parking lot structure
//!
//! This module contains the physical model of the lot: gates, floors and
//! spots, plus the generator that builds randomized lots.
//!
//! # Overview
//!
//! - **ParkingLot**: owns gates and floors, picks a floor through its
//!   floor strategy
//! - **ParkingFloor**: owns spots, picks a spot through its spot strategy
//! - **ParkingSpot**: one space with a vehicle class and a status
//! - **Gate**: a numbered entry or exit
//! - **ParkingLotGenerator**: randomized lots for simulation runs
//!
//! # Usage Example
//!
//! ```rust
//! use parking_lot_simulator::lot::*;
//! use parking_lot_simulator::types::*;
//!
//! let mut floor = ParkingFloor::new(FloorId::sequential(1));
//! floor.add_spot(ParkingSpot::available(SpotId::sequential(1), VehicleType::TwoWheeler));
//!
//! let mut lot = ParkingLot::new(LotId::sequential(1));
//! lot.add_gate(Gate::entry(GateId::sequential(1), 1));
//! lot.add_floor(floor);
//!
//! let gate = lot.gate(&GateId::sequential(1)).unwrap().clone();
//! let floor = lot.find_parking_floor(VehicleType::TwoWheeler, &gate).unwrap();
//! assert!(floor.find_parking_spot(VehicleType::TwoWheeler).is_some());
//! ```

pub mod floor;
pub mod gate;
pub mod generator;
pub mod parking_lot;
pub mod spot;

pub use floor::*;
pub use gate::*;
pub use generator::*;
pub use parking_lot::*;
pub use spot::*;
