//! Parking lot generation
//!
//! This module builds randomized lots from a [`SimulationConfig`]: gates with
//! a configurable entry/exit mix, and floors of spots whose vehicle classes
//! and initial statuses follow the configured shares.

use crate::lot::{floor::ParkingFloor, gate::Gate, parking_lot::ParkingLot, spot::ParkingSpot};
use crate::simulation::error::{ParkingError, ParkingResult};
use crate::types::{
    FloorId, GateId, GateType, LotId, ParkingSpotStatus, SimulationConfig, SpotId, VehicleType,
};
use rand::{rngs::StdRng, thread_rng, Rng, RngCore, SeedableRng};
use std::fmt;
use tracing::{debug, info};

/// Generator for parking lots, floors, spots and gates
///
/// Identifiers are numbered per generator and keep counting across lots, so
/// two lots from the same generator never share a spot id.
pub struct ParkingLotGenerator {
    rng: Box<dyn RngCore>,
    lots_generated: usize,
    gates_generated: usize,
    floors_generated: usize,
    spots_generated: usize,
}

impl fmt::Debug for ParkingLotGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParkingLotGenerator")
            .field("lots_generated", &self.lots_generated)
            .field("gates_generated", &self.gates_generated)
            .field("floors_generated", &self.floors_generated)
            .field("spots_generated", &self.spots_generated)
            .finish()
    }
}

impl ParkingLotGenerator {
    /// Create a new lot generator
    pub fn new() -> Self {
        Self::from_rng(Box::new(thread_rng()))
    }

    /// Create a new lot generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(Box::new(StdRng::seed_from_u64(seed)))
    }

    fn from_rng(rng: Box<dyn RngCore>) -> Self {
        Self { rng, lots_generated: 0, gates_generated: 0, floors_generated: 0, spots_generated: 0 }
    }

    /// Generate a complete lot
    pub fn generate_lot(&mut self, config: &SimulationConfig) -> ParkingResult<ParkingLot> {
        config.validate().map_err(|e| ParkingError::configuration(e.to_string()))?;

        self.lots_generated += 1;
        let mut lot = ParkingLot::new(LotId::sequential(self.lots_generated));

        for gate in self.generate_gates(config) {
            lot.add_gate(gate);
        }
        for _ in 0..config.floor_count {
            let floor = self.generate_floor(config);
            lot.add_floor(floor);
        }

        info!(
            lot = %lot.id,
            gates = lot.gates().len(),
            floors = lot.floors().len(),
            spots = lot.total_spots(),
            "Generated parking lot"
        );

        Ok(lot)
    }

    /// Generate the gates of a lot
    ///
    /// The first gate is always an entry and the second always an exit, so
    /// every generated lot can be both entered and left. Remaining gates are
    /// entries with `entry_gate_probability`.
    pub fn generate_gates(&mut self, config: &SimulationConfig) -> Vec<Gate> {
        (0..config.gate_count)
            .map(|index| {
                let gate_type = match index {
                    0 => GateType::Entry,
                    1 => GateType::Exit,
                    _ if self.rng.gen_bool(config.entry_gate_probability) => GateType::Entry,
                    _ => GateType::Exit,
                };
                self.generate_gate(gate_type)
            })
            .collect()
    }

    /// Generate a single gate of the given direction
    pub fn generate_gate(&mut self, gate_type: GateType) -> Gate {
        self.gates_generated += 1;
        let number = self.gates_generated;
        Gate::new(GateId::sequential(number), number as u32, gate_type)
    }

    /// Generate a floor with `spots_per_floor` random spots
    pub fn generate_floor(&mut self, config: &SimulationConfig) -> ParkingFloor {
        self.floors_generated += 1;
        let mut floor = ParkingFloor::new(FloorId::sequential(self.floors_generated));

        for _ in 0..config.spots_per_floor {
            let spot = self.generate_spot(config);
            floor.add_spot(spot);
        }

        debug!(floor = %floor.id, spots = floor.total_spots(), "Generated parking floor");
        floor
    }

    /// Generate a single spot with a random class and initial status
    pub fn generate_spot(&mut self, config: &SimulationConfig) -> ParkingSpot {
        self.spots_generated += 1;
        let vehicle_type = self.pick_vehicle_type(config);
        let status = self.pick_status(config);
        ParkingSpot::new(SpotId::sequential(self.spots_generated), vehicle_type, status)
    }

    fn pick_vehicle_type(&mut self, config: &SimulationConfig) -> VehicleType {
        let roll: f64 = self.rng.gen();
        if roll < config.two_wheeler_spot_percentage {
            VehicleType::TwoWheeler
        } else if roll
            < config.two_wheeler_spot_percentage + config.light_motor_vehicle_spot_percentage
        {
            VehicleType::LightMotorVehicle
        } else {
            VehicleType::HeavyMotorVehicle
        }
    }

    fn pick_status(&mut self, config: &SimulationConfig) -> ParkingSpotStatus {
        let roll: f64 = self.rng.gen();
        if roll < config.inactive_spot_percentage {
            ParkingSpotStatus::Inactive
        } else if roll < config.inactive_spot_percentage + config.occupied_spot_percentage {
            ParkingSpotStatus::Occupied
        } else {
            ParkingSpotStatus::Available
        }
    }
}

impl Default for ParkingLotGenerator {
    fn default() -> Self {
        Self::new()
    }
}
