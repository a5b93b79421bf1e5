//! Vehicles arriving at the lot
//!
//! - **Vehicle**: registration number and vehicle class
//! - **VehicleGenerator**: random arrivals and random gate routing

pub mod generator;
#[allow(clippy::module_inception)]
pub mod vehicle;

pub use generator::*;
pub use vehicle::*;
