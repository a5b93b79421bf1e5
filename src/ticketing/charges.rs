//! Tariff calculation

use crate::types::VehicleType;
use chrono::Duration;

const MILLIS_PER_HOUR: i64 = 3_600_000;
const NANOS_PER_HOUR: i64 = 3_600_000_000_000;

/// Hours billed for a stay of `elapsed`
///
/// Every started hour counts as a full hour, so any positive stay bills at
/// least one hour. A zero or negative stay bills zero hours.
pub fn billable_hours(elapsed: Duration) -> i64 {
    if elapsed <= Duration::zero() {
        return 0;
    }

    // Nanoseconds overflow past roughly 292 years
    let (units, per_hour) = match elapsed.num_nanoseconds() {
        Some(nanos) => (nanos, NANOS_PER_HOUR),
        None => (elapsed.num_milliseconds(), MILLIS_PER_HOUR),
    };
    let hours = units / per_hour;
    if units % per_hour == 0 {
        hours
    } else {
        hours + 1
    }
}

/// Charge for parking a vehicle class for `hours` billable hours
pub fn calculate_charges(vehicle_type: VehicleType, hours: i64) -> f64 {
    vehicle_type.base_charge() + vehicle_type.hourly_rate() * hours as f64
}
