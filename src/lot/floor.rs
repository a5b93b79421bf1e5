//! Parking floor management
//!
//! This module contains the ParkingFloor struct, which owns the spots of one
//! level and delegates spot selection to a [`ParkingSpotStrategy`].

use crate::lot::spot::ParkingSpot;
use crate::strategy::{NearestParkingSpotStrategy, ParkingSpotStrategy};
use crate::types::{FloorId, ParkingSpotStatus, SpotId, VehicleType};
use std::collections::HashMap;

/// One level of the lot and the spots on it
#[derive(Debug)]
pub struct ParkingFloor {
    /// Unique identifier for the floor
    pub id: FloorId,
    /// Spots in insertion order
    spots: Vec<ParkingSpot>,
    /// Quick lookup map from spot ID to index
    spot_index: HashMap<SpotId, usize>,
    /// Strategy used to pick a spot on this floor
    spot_strategy: Box<dyn ParkingSpotStrategy>,
}

impl ParkingFloor {
    /// Create an empty floor using the nearest spot strategy
    pub fn new(id: FloorId) -> Self {
        Self::with_strategy(id, Box::new(NearestParkingSpotStrategy::new()))
    }

    /// Create an empty floor with a custom spot strategy
    pub fn with_strategy(id: FloorId, spot_strategy: Box<dyn ParkingSpotStrategy>) -> Self {
        Self { id, spots: Vec::new(), spot_index: HashMap::new(), spot_strategy }
    }

    /// Add a spot to the floor
    ///
    /// A spot whose id is already present replaces the existing one in place.
    pub fn add_spot(&mut self, spot: ParkingSpot) {
        match self.spot_index.get(&spot.id) {
            Some(&index) => self.spots[index] = spot,
            None => {
                self.spot_index.insert(spot.id.clone(), self.spots.len());
                self.spots.push(spot);
            }
        }
    }

    /// All spots on the floor, in insertion order
    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    /// Get a spot by ID
    pub fn spot(&self, spot_id: &SpotId) -> Option<&ParkingSpot> {
        self.spot_index.get(spot_id).map(|&index| &self.spots[index])
    }

    /// Get a mutable spot by ID
    pub fn spot_mut(&mut self, spot_id: &SpotId) -> Option<&mut ParkingSpot> {
        match self.spot_index.get(spot_id) {
            Some(&index) => self.spots.get_mut(index),
            None => None,
        }
    }

    /// Find a spot for the vehicle class using this floor's strategy
    pub fn find_parking_spot(&self, vehicle_type: VehicleType) -> Option<&ParkingSpot> {
        self.spot_strategy.find_spot(vehicle_type, &self.spots)
    }

    /// Count the spots of a vehicle class in a given status
    pub fn spot_count(&self, vehicle_type: VehicleType, status: ParkingSpotStatus) -> usize {
        self.spots
            .iter()
            .filter(|spot| spot.vehicle_type == vehicle_type && spot.status() == status)
            .count()
    }

    /// Total number of spots on the floor
    pub fn total_spots(&self) -> usize {
        self.spots.len()
    }
}
