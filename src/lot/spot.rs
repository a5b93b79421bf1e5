//! Parking spot management
//!
//! This module contains the ParkingSpot struct: a single space typed by
//! vehicle class whose status changes as vehicles come and go.

use crate::types::{ParkingSpotStatus, SpotId, VehicleType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single parking space on a floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingSpot {
    /// Unique identifier for the spot
    pub id: SpotId,
    /// Vehicle class this spot accepts
    pub vehicle_type: VehicleType,
    /// Current status of the spot
    status: ParkingSpotStatus,
}

impl ParkingSpot {
    /// Create a new spot
    pub fn new(id: SpotId, vehicle_type: VehicleType, status: ParkingSpotStatus) -> Self {
        Self { id, vehicle_type, status }
    }

    /// Create a new available spot
    pub fn available(id: SpotId, vehicle_type: VehicleType) -> Self {
        Self::new(id, vehicle_type, ParkingSpotStatus::Available)
    }

    /// Current status of the spot
    pub fn status(&self) -> ParkingSpotStatus {
        self.status
    }

    /// Change the status of the spot
    pub fn set_status(&mut self, status: ParkingSpotStatus) {
        self.status = status;
    }

    /// Check if the spot can be assigned right now
    pub fn is_available(&self) -> bool {
        self.status == ParkingSpotStatus::Available
    }

    /// Check if the spot accepts the given vehicle class
    pub fn accepts(&self, vehicle_type: VehicleType) -> bool {
        self.vehicle_type == vehicle_type
    }
}

impl fmt::Display for ParkingSpot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.id, self.vehicle_type, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_creation() {
        let spot = ParkingSpot::available(SpotId::sequential(1), VehicleType::TwoWheeler);

        assert_eq!(spot.id.as_str(), "ParkingSpot-1");
        assert_eq!(spot.status(), ParkingSpotStatus::Available);
        assert!(spot.is_available());
        assert!(spot.accepts(VehicleType::TwoWheeler));
        assert!(!spot.accepts(VehicleType::LightMotorVehicle));
    }

    #[test]
    fn test_status_changes() {
        let mut spot = ParkingSpot::new(
            SpotId::new("A-01"),
            VehicleType::HeavyMotorVehicle,
            ParkingSpotStatus::Inactive,
        );
        assert!(!spot.is_available());

        spot.set_status(ParkingSpotStatus::Available);
        assert!(spot.is_available());

        spot.set_status(ParkingSpotStatus::Occupied);
        assert_eq!(spot.status(), ParkingSpotStatus::Occupied);
        assert!(!spot.is_available());
    }

    #[test]
    fn test_spot_display() {
        let spot = ParkingSpot::available(SpotId::new("B-7"), VehicleType::LightMotorVehicle);
        assert_eq!(spot.to_string(), "B-7 (LMV, Available)");
    }
}
