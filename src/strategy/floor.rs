//! Floor selection across the lot

use crate::lot::{Gate, ParkingFloor};
use crate::types::{ParkingSpotStatus, VehicleType};
use std::fmt;
use tracing::debug;

/// Chooses the floor a vehicle arriving at a gate is sent to
pub trait ParkingFloorStrategy: fmt::Debug {
    /// Pick a floor for the vehicle class, or `None` when the lot is full for it
    fn assign_floor<'a>(
        &self,
        vehicle_type: VehicleType,
        gate: &Gate,
        floors: &'a [ParkingFloor],
    ) -> Option<&'a ParkingFloor>;
}

/// Sends vehicles to the floor indexed by the gate number
///
/// The availability check runs over the whole lot, but the floor returned is
/// always `floors[gate.number % floors.len()]`. That floor may itself have no
/// free spot for the class, in which case entry fails even though another
/// floor has room.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestParkingFloorStrategy;

impl NearestParkingFloorStrategy {
    /// Create a new nearest floor strategy
    pub fn new() -> Self {
        Self
    }
}

impl ParkingFloorStrategy for NearestParkingFloorStrategy {
    fn assign_floor<'a>(
        &self,
        vehicle_type: VehicleType,
        gate: &Gate,
        floors: &'a [ParkingFloor],
    ) -> Option<&'a ParkingFloor> {
        let has_room = floors
            .iter()
            .any(|floor| floor.spot_count(vehicle_type, ParkingSpotStatus::Available) > 0);
        if !has_room {
            return None;
        }

        let index = gate.number as usize % floors.len();
        let floor = floors.get(index)?;
        debug!(gate = %gate.id, floor = %floor.id, %vehicle_type, "Assigned floor");
        Some(floor)
    }
}
