//! The parking lot aggregate
//!
//! This module contains the ParkingLot struct: the gates and floors of a lot,
//! lookup by id, and floor selection through a [`ParkingFloorStrategy`].

use crate::lot::{floor::ParkingFloor, gate::Gate, spot::ParkingSpot};
use crate::simulation::status::LotStatusReport;
use crate::strategy::{NearestParkingFloorStrategy, ParkingFloorStrategy};
use crate::types::{FloorId, GateId, GateType, LotId, ParkingSpotStatus, SpotId, VehicleType};
use std::collections::HashMap;

/// A parking lot with its gates and floors
#[derive(Debug)]
pub struct ParkingLot {
    /// Unique identifier for the lot
    pub id: LotId,
    /// Gates in insertion order
    gates: Vec<Gate>,
    /// Quick lookup map from gate ID to index
    gate_index: HashMap<GateId, usize>,
    /// Floors in insertion order
    floors: Vec<ParkingFloor>,
    /// Quick lookup map from floor ID to index
    floor_index: HashMap<FloorId, usize>,
    /// Strategy used to pick a floor for an arriving vehicle
    floor_strategy: Box<dyn ParkingFloorStrategy>,
}

impl ParkingLot {
    /// Create an empty lot using the nearest floor strategy
    pub fn new(id: LotId) -> Self {
        Self::with_strategy(id, Box::new(NearestParkingFloorStrategy::new()))
    }

    /// Create an empty lot with a custom floor strategy
    pub fn with_strategy(id: LotId, floor_strategy: Box<dyn ParkingFloorStrategy>) -> Self {
        Self {
            id,
            gates: Vec::new(),
            gate_index: HashMap::new(),
            floors: Vec::new(),
            floor_index: HashMap::new(),
            floor_strategy,
        }
    }

    /// Add a gate, replacing any gate with the same id
    pub fn add_gate(&mut self, gate: Gate) {
        match self.gate_index.get(&gate.id) {
            Some(&index) => self.gates[index] = gate,
            None => {
                self.gate_index.insert(gate.id.clone(), self.gates.len());
                self.gates.push(gate);
            }
        }
    }

    /// Add a floor, replacing any floor with the same id
    pub fn add_floor(&mut self, floor: ParkingFloor) {
        match self.floor_index.get(&floor.id) {
            Some(&index) => self.floors[index] = floor,
            None => {
                self.floor_index.insert(floor.id.clone(), self.floors.len());
                self.floors.push(floor);
            }
        }
    }

    /// All gates, in insertion order
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get a gate by ID
    pub fn gate(&self, gate_id: &GateId) -> Option<&Gate> {
        self.gate_index.get(gate_id).map(|&index| &self.gates[index])
    }

    /// Get all gates of a direction
    pub fn gates_of_type(&self, gate_type: GateType) -> Vec<&Gate> {
        self.gates.iter().filter(|gate| gate.gate_type == gate_type).collect()
    }

    /// All floors, in insertion order
    pub fn floors(&self) -> &[ParkingFloor] {
        &self.floors
    }

    /// Get a floor by ID
    pub fn floor(&self, floor_id: &FloorId) -> Option<&ParkingFloor> {
        self.floor_index.get(floor_id).map(|&index| &self.floors[index])
    }

    /// Get a mutable floor by ID
    pub fn floor_mut(&mut self, floor_id: &FloorId) -> Option<&mut ParkingFloor> {
        match self.floor_index.get(floor_id) {
            Some(&index) => self.floors.get_mut(index),
            None => None,
        }
    }

    /// Get a spot by floor and spot ID
    pub fn spot(&self, floor_id: &FloorId, spot_id: &SpotId) -> Option<&ParkingSpot> {
        self.floor(floor_id).and_then(|floor| floor.spot(spot_id))
    }

    /// Get a mutable spot by floor and spot ID
    pub fn spot_mut(&mut self, floor_id: &FloorId, spot_id: &SpotId) -> Option<&mut ParkingSpot> {
        self.floor_mut(floor_id).and_then(|floor| floor.spot_mut(spot_id))
    }

    /// Pick a floor for a vehicle arriving at `gate` using the lot's strategy
    pub fn find_parking_floor(&self, vehicle_type: VehicleType, gate: &Gate) -> Option<&ParkingFloor> {
        self.floor_strategy.assign_floor(vehicle_type, gate, &self.floors)
    }

    /// Count the spots of a vehicle class in a given status across all floors
    pub fn spot_count(&self, vehicle_type: VehicleType, status: ParkingSpotStatus) -> usize {
        self.floors.iter().map(|floor| floor.spot_count(vehicle_type, status)).sum()
    }

    /// Total number of spots across all floors
    pub fn total_spots(&self) -> usize {
        self.floors.iter().map(ParkingFloor::total_spots).sum()
    }

    /// Snapshot of spot counts per class, status and floor
    pub fn status_report(&self) -> LotStatusReport {
        LotStatusReport::from_lot(self)
    }
}
