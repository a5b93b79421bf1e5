//! Enumeration types for the parking lot simulator
//!
//! This module contains the enumerations used throughout the simulation:
//! vehicle classes with their tariffs, spot statuses, gate directions and
//! report formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle classes accepted by the lot, each with a fixed tariff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VehicleType {
    /// Motorcycles and scooters
    TwoWheeler,
    /// Light motor vehicles (cars, vans)
    LightMotorVehicle,
    /// Heavy motor vehicles (trucks, buses)
    HeavyMotorVehicle,
}

impl VehicleType {
    /// Every vehicle class, in reporting order
    pub const ALL: [VehicleType; 3] =
        [VehicleType::TwoWheeler, VehicleType::LightMotorVehicle, VehicleType::HeavyMotorVehicle];

    /// Flat charge applied to every parking session
    pub fn base_charge(self) -> f64 {
        match self {
            VehicleType::TwoWheeler => 20.0,
            VehicleType::LightMotorVehicle => 35.0,
            VehicleType::HeavyMotorVehicle => 50.0,
        }
    }

    /// Charge per started hour of parking
    pub fn hourly_rate(self) -> f64 {
        match self {
            VehicleType::TwoWheeler => 10.0,
            VehicleType::LightMotorVehicle => 15.0,
            VehicleType::HeavyMotorVehicle => 20.0,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::TwoWheeler => write!(f, "Two Wheeler"),
            VehicleType::LightMotorVehicle => write!(f, "LMV"),
            VehicleType::HeavyMotorVehicle => write!(f, "HMV"),
        }
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "two wheeler" | "twowheeler" | "two_wheeler" | "bike" => Ok(VehicleType::TwoWheeler),
            "lmv" | "light motor vehicle" | "lightmotorvehicle" | "car" => {
                Ok(VehicleType::LightMotorVehicle)
            }
            "hmv" | "heavy motor vehicle" | "heavymotorvehicle" | "truck" => {
                Ok(VehicleType::HeavyMotorVehicle)
            }
            _ => Err(format!("Unknown vehicle type: {}", s)),
        }
    }
}

/// Status of a single parking spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ParkingSpotStatus {
    /// Free and can be assigned
    Available,
    /// Held by a parked vehicle
    Occupied,
    /// Closed for maintenance, never assigned
    Inactive,
}

impl ParkingSpotStatus {
    /// Every spot status, in reporting order
    pub const ALL: [ParkingSpotStatus; 3] =
        [ParkingSpotStatus::Available, ParkingSpotStatus::Occupied, ParkingSpotStatus::Inactive];
}

impl fmt::Display for ParkingSpotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParkingSpotStatus::Available => write!(f, "Available"),
            ParkingSpotStatus::Occupied => write!(f, "Occupied"),
            ParkingSpotStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

impl FromStr for ParkingSpotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" | "free" => Ok(ParkingSpotStatus::Available),
            "occupied" => Ok(ParkingSpotStatus::Occupied),
            "inactive" | "closed" => Ok(ParkingSpotStatus::Inactive),
            _ => Err(format!("Unknown parking spot status: {}", s)),
        }
    }
}

/// Direction of a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateType {
    /// Vehicles enter the lot through this gate
    Entry,
    /// Vehicles leave the lot through this gate
    Exit,
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateType::Entry => write!(f, "Entry"),
            GateType::Exit => write!(f, "Exit"),
        }
    }
}

impl FromStr for GateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entry" | "in" => Ok(GateType::Entry),
            "exit" | "out" => Ok(GateType::Exit),
            _ => Err(format!("Unknown gate type: {}", s)),
        }
    }
}

/// Rendering used for the lot status report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Human-readable console listing
    Text,
    /// Pretty-printed JSON document
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}
