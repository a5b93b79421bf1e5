//! Ticket and bill records

use crate::strategy::PaymentDetails;
use crate::types::{BillId, FloorId, SpotId, TicketId};
use crate::vehicle::Vehicle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issued at an entry gate when a vehicle is assigned a spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingTicket {
    /// Ticket identifier
    pub id: TicketId,
    /// Vehicle the ticket was issued to
    pub vehicle: Vehicle,
    /// Floor holding the assigned spot
    pub floor_id: FloorId,
    /// Assigned spot
    pub spot_id: SpotId,
    /// When the vehicle entered
    pub entry_time: DateTime<Utc>,
}

impl fmt::Display for ParkingTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at {} on {} since {}",
            self.id,
            self.vehicle,
            self.spot_id,
            self.floor_id,
            self.entry_time.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Issued at an exit gate once the charge has been paid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingBill {
    /// Bill identifier
    pub id: BillId,
    /// Ticket this bill settles
    pub ticket: ParkingTicket,
    /// When the vehicle left
    pub exit_time: DateTime<Utc>,
    /// Started hours between entry and exit
    pub billable_hours: i64,
    /// Amount charged
    pub charge: f64,
    /// Payment that settled the charge
    pub payment: PaymentDetails,
}

impl fmt::Display for ParkingBill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} for {}, {} h, {:.2} paid by {}",
            self.id,
            self.ticket.id,
            self.ticket.vehicle,
            self.billable_hours,
            self.charge,
            self.payment.method
        )
    }
}
