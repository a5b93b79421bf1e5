//! Lot status reporting
//!
//! This module contains the LotStatusReport, a snapshot of how many spots of
//! each vehicle class are in each status on each floor. The snapshot renders
//! as the console listing or as JSON.

use crate::lot::ParkingLot;
use crate::types::{FloorId, LotId, ParkingSpotStatus, ReportFormat, VehicleType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spot count on a single floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorCount {
    /// Floor the count belongs to
    pub floor_id: FloorId,
    /// Number of matching spots on the floor
    pub count: usize,
}

/// Per-floor counts for one vehicle class in one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Spot status being counted
    pub status: ParkingSpotStatus,
    /// Sum over all floors
    pub total: usize,
    /// Counts in floor order
    pub floors: Vec<FloorCount>,
}

/// All status counts for one vehicle class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleClassStatus {
    /// Vehicle class being counted
    pub vehicle_type: VehicleType,
    /// Counts for every spot status
    pub statuses: Vec<StatusCounts>,
}

/// Snapshot of spot counts per vehicle class, status and floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotStatusReport {
    /// Lot the snapshot was taken of
    pub lot_id: LotId,
    /// Total number of spots in the lot
    pub total_spots: usize,
    /// Counts for every vehicle class
    pub vehicle_classes: Vec<VehicleClassStatus>,
}

impl LotStatusReport {
    /// Take a snapshot of the lot
    pub fn from_lot(lot: &ParkingLot) -> Self {
        let vehicle_classes = VehicleType::ALL
            .iter()
            .map(|&vehicle_type| VehicleClassStatus {
                vehicle_type,
                statuses: ParkingSpotStatus::ALL
                    .iter()
                    .map(|&status| {
                        let floors: Vec<FloorCount> = lot
                            .floors()
                            .iter()
                            .map(|floor| FloorCount {
                                floor_id: floor.id.clone(),
                                count: floor.spot_count(vehicle_type, status),
                            })
                            .collect();
                        StatusCounts {
                            status,
                            total: floors.iter().map(|f| f.count).sum(),
                            floors,
                        }
                    })
                    .collect(),
            })
            .collect();

        Self { lot_id: lot.id.clone(), total_spots: lot.total_spots(), vehicle_classes }
    }

    /// Lot-wide count for a vehicle class in a status
    pub fn count(&self, vehicle_type: VehicleType, status: ParkingSpotStatus) -> usize {
        self.vehicle_classes
            .iter()
            .filter(|class| class.vehicle_type == vehicle_type)
            .flat_map(|class| class.statuses.iter())
            .filter(|counts| counts.status == status)
            .map(|counts| counts.total)
            .sum()
    }

    /// Lot-wide count for a status across all vehicle classes
    pub fn status_total(&self, status: ParkingSpotStatus) -> usize {
        VehicleType::ALL.iter().map(|&vehicle_type| self.count(vehicle_type, status)).sum()
    }

    /// Render the report in the requested format
    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

impl fmt::Display for LotStatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== ParkingLotStatus ({}) =====", self.lot_id)?;
        writeln!(f)?;

        for class in &self.vehicle_classes {
            writeln!(f, "{}:", class.vehicle_type)?;
            for counts in &class.statuses {
                writeln!(f, "  {} ({}):", counts.status, counts.total)?;
                for floor in &counts.floors {
                    writeln!(f, "    {} : {}", floor.floor_id, floor.count)?;
                }
            }
            writeln!(f)?;
        }

        write!(f, "=======================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lot::{ParkingFloor, ParkingSpot};
    use crate::types::SpotId;

    fn create_test_lot() -> ParkingLot {
        let mut lot = ParkingLot::new(LotId::sequential(1));

        let mut first = ParkingFloor::new(FloorId::sequential(1));
        first.add_spot(ParkingSpot::available(SpotId::sequential(1), VehicleType::TwoWheeler));
        first.add_spot(ParkingSpot::new(
            SpotId::sequential(2),
            VehicleType::TwoWheeler,
            ParkingSpotStatus::Occupied,
        ));
        lot.add_floor(first);

        let mut second = ParkingFloor::new(FloorId::sequential(2));
        second.add_spot(ParkingSpot::available(SpotId::sequential(3), VehicleType::TwoWheeler));
        second.add_spot(ParkingSpot::new(
            SpotId::sequential(4),
            VehicleType::HeavyMotorVehicle,
            ParkingSpotStatus::Inactive,
        ));
        lot.add_floor(second);

        lot
    }

    #[test]
    fn test_report_counts() {
        let report = LotStatusReport::from_lot(&create_test_lot());

        assert_eq!(report.total_spots, 4);
        assert_eq!(report.count(VehicleType::TwoWheeler, ParkingSpotStatus::Available), 2);
        assert_eq!(report.count(VehicleType::TwoWheeler, ParkingSpotStatus::Occupied), 1);
        assert_eq!(report.count(VehicleType::HeavyMotorVehicle, ParkingSpotStatus::Inactive), 1);
        assert_eq!(report.count(VehicleType::LightMotorVehicle, ParkingSpotStatus::Available), 0);
        assert_eq!(report.status_total(ParkingSpotStatus::Available), 2);

        let available_two_wheelers = &report.vehicle_classes[0].statuses[0];
        assert_eq!(available_two_wheelers.floors.len(), 2);
        assert_eq!(available_two_wheelers.floors[1].floor_id, FloorId::sequential(2));
        assert_eq!(available_two_wheelers.floors[1].count, 1);
    }

    #[test]
    fn test_text_rendering() {
        let text = LotStatusReport::from_lot(&create_test_lot()).render(ReportFormat::Text).unwrap();

        assert!(text.starts_with("===== ParkingLotStatus (ParkingLot-1) ====="));
        assert!(text.contains("Two Wheeler:"));
        assert!(text.contains("  Available (2):"));
        assert!(text.contains("    ParkingFloor-2 : 1"));
    }

    #[test]
    fn test_json_rendering() {
        let json = LotStatusReport::from_lot(&create_test_lot()).render(ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["lot_id"], "ParkingLot-1");
        assert_eq!(value["total_spots"], 4);
        assert_eq!(value["vehicle_classes"][0]["vehicle_type"], "TwoWheeler");
        assert_eq!(value["vehicle_classes"][0]["statuses"][0]["total"], 2);
    }
}
