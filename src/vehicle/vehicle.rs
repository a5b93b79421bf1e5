//! Vehicle entity

use crate::types::VehicleType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vehicle identified by its registration number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    /// Registration number shown on the plate
    pub registration_number: String,
    /// Vehicle class, which decides spot type and tariff
    pub vehicle_type: VehicleType,
}

impl Vehicle {
    /// Create a new vehicle
    pub fn new(registration_number: impl Into<String>, vehicle_type: VehicleType) -> Self {
        Self { registration_number: registration_number.into(), vehicle_type }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.registration_number, self.vehicle_type)
    }
}
