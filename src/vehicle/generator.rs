//! Vehicle generation
//!
//! This module contains the generator for arriving vehicles and the random
//! gate picker the simulation uses to route them.

use crate::lot::Gate;
use crate::types::{GateType, VehicleType};
use crate::vehicle::Vehicle;
use rand::{rngs::StdRng, seq::SliceRandom, thread_rng, Rng, RngCore, SeedableRng};
use std::fmt;

/// Generator for vehicles arriving at the lot
pub struct VehicleGenerator {
    rng: Box<dyn RngCore>,
    generated: usize,
}

impl fmt::Debug for VehicleGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VehicleGenerator").field("generated", &self.generated).finish()
    }
}

impl VehicleGenerator {
    /// Create a new vehicle generator
    pub fn new() -> Self {
        Self { rng: Box::new(thread_rng()), generated: 0 }
    }

    /// Create a new vehicle generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Box::new(StdRng::seed_from_u64(seed)), generated: 0 }
    }

    /// Generate a single vehicle of a uniformly random class
    ///
    /// Registration numbers are sequential per generator: `Vehicle-1`,
    /// `Vehicle-2`, ...
    pub fn generate_vehicle(&mut self) -> Vehicle {
        self.generated += 1;
        let vehicle_type = VehicleType::ALL[self.rng.gen_range(0..VehicleType::ALL.len())];
        Vehicle::new(format!("Vehicle-{}", self.generated), vehicle_type)
    }

    /// Generate `count` vehicles
    pub fn generate_vehicles(&mut self, count: usize) -> Vec<Vehicle> {
        (0..count).map(|_| self.generate_vehicle()).collect()
    }

    /// Pick a random gate of the given direction, if the lot has one
    pub fn random_gate<'a>(&mut self, gates: &'a [Gate], gate_type: GateType) -> Option<&'a Gate> {
        let candidates: Vec<&Gate> =
            gates.iter().filter(|gate| gate.gate_type == gate_type).collect();
        candidates.choose(&mut self.rng).copied()
    }

    /// Number of vehicles generated so far
    pub fn generated_count(&self) -> usize {
        self.generated
    }
}

impl Default for VehicleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
