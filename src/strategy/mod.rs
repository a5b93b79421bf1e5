//! Pluggable placement and payment strategies
//!
//! The lot and its floors delegate placement decisions to these traits, and
//! exit handling delegates charging to a [`PaymentStrategy`].
//!
//! - [`ParkingSpotStrategy`]: picks a spot on one floor
//!   ([`NearestParkingSpotStrategy`] takes the lowest available id)
//! - [`ParkingFloorStrategy`]: picks a floor for a gate
//!   ([`NearestParkingFloorStrategy`] indexes floors by gate number)
//! - [`PaymentStrategy`]: charges a bill ([`UpiPaymentStrategy`] is a stub
//!   that always succeeds)

pub mod floor;
pub mod payment;
pub mod spot;

pub use floor::*;
pub use payment::*;
pub use spot::*;
