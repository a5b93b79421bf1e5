//! Spot selection within a single floor

use crate::lot::ParkingSpot;
use crate::types::VehicleType;
use std::fmt;

/// Chooses a spot for a vehicle among the spots of one floor
pub trait ParkingSpotStrategy: fmt::Debug {
    /// Pick an available spot matching the vehicle class, if any
    ///
    /// Implementations must not change any spot; the caller marks the
    /// returned spot as occupied.
    fn find_spot<'a>(
        &self,
        vehicle_type: VehicleType,
        spots: &'a [ParkingSpot],
    ) -> Option<&'a ParkingSpot>;
}

/// Picks the available matching spot with the lowest identifier
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestParkingSpotStrategy;

impl NearestParkingSpotStrategy {
    /// Create a new nearest spot strategy
    pub fn new() -> Self {
        Self
    }
}

impl ParkingSpotStrategy for NearestParkingSpotStrategy {
    fn find_spot<'a>(
        &self,
        vehicle_type: VehicleType,
        spots: &'a [ParkingSpot],
    ) -> Option<&'a ParkingSpot> {
        // Ids compare as strings, so ParkingSpot-10 sorts before ParkingSpot-2
        spots
            .iter()
            .filter(|spot| spot.is_available() && spot.accepts(vehicle_type))
            .min_by(|a, b| a.id.cmp(&b.id))
    }
}
