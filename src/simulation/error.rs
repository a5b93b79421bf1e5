//! Error types and handling
//!
//! This module contains the error type returned by every fallible parking
//! operation, plus helpers for classifying and logging failures.

use crate::types::{FloorId, GateId, GateType, SpotId, TicketId, VehicleType};
use thiserror::Error;
use tracing::{error, warn};

/// Errors that can occur while parking, billing or setting up the lot
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParkingError {
    /// A gate of the wrong direction was used
    #[error("Please, go to {expected} gate, you are on {actual} gate")]
    WrongGate {
        /// Gate type the operation requires
        expected: GateType,
        /// Gate type that was actually used
        actual: GateType,
    },

    /// No floor or spot is available for the vehicle class
    #[error("Very sorry, parking lot is full for {vehicle_type}")]
    LotFull {
        /// Vehicle class that could not be placed
        vehicle_type: VehicleType,
    },

    /// The payment strategy declined the charge
    #[error("Payment failed, please try again: {0}")]
    PaymentFailed(String),

    /// Gate id is unknown to the lot
    #[error("Gate not found: {0}")]
    GateNotFound(GateId),

    /// Ticket id is unknown to the ticket repository
    #[error("Parking ticket not found: {0}")]
    TicketNotFound(TicketId),

    /// Ticket was already settled by an earlier bill
    #[error("Parking ticket already billed: {0}")]
    TicketAlreadyBilled(TicketId),

    /// A ticket refers to a spot the lot does not contain
    #[error("Parking spot {spot} not found on floor {floor}")]
    SpotNotFound {
        /// Floor the ticket points at
        floor: FloorId,
        /// Spot the ticket points at
        spot: SpotId,
    },

    /// Configuration or generation failed
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ParkingError {
    /// Create a wrong gate error
    pub fn wrong_gate(expected: GateType, actual: GateType) -> Self {
        Self::WrongGate { expected, actual }
    }

    /// Create a lot full error
    pub fn lot_full(vehicle_type: VehicleType) -> Self {
        Self::LotFull { vehicle_type }
    }

    /// Create a payment failure
    pub fn payment_failed(msg: impl Into<String>) -> Self {
        Self::PaymentFailed(msg.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Whether the caller can succeed later by trying again (another gate,
    /// after an exit, or with another payment method)
    pub fn is_recoverable(&self) -> bool {
        match self {
            ParkingError::WrongGate { .. } => true,
            ParkingError::LotFull { .. } => true,
            ParkingError::PaymentFailed(_) => true,
            ParkingError::GateNotFound(_) => false,
            ParkingError::TicketNotFound(_) => false,
            ParkingError::TicketAlreadyBilled(_) => false,
            ParkingError::SpotNotFound { .. } => false,
            ParkingError::Configuration(_) => false,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            ParkingError::WrongGate { .. } => "Gate",
            ParkingError::LotFull { .. } => "Capacity",
            ParkingError::PaymentFailed(_) => "Payment",
            ParkingError::GateNotFound(_) => "Lookup",
            ParkingError::TicketNotFound(_) => "Lookup",
            ParkingError::TicketAlreadyBilled(_) => "Ticketing",
            ParkingError::SpotNotFound { .. } => "Lookup",
            ParkingError::Configuration(_) => "Configuration",
        }
    }

    /// Log the error at a level matching its severity
    pub fn log(&self) {
        if self.is_recoverable() {
            warn!(category = self.category(), "{}", self);
        } else {
            error!(category = self.category(), "{}", self);
        }
    }
}

/// Result type for parking operations
pub type ParkingResult<T> = Result<T, ParkingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let wrong_gate = ParkingError::wrong_gate(GateType::Entry, GateType::Exit);
        assert_eq!(wrong_gate.to_string(), "Please, go to Entry gate, you are on Exit gate");

        let full = ParkingError::lot_full(VehicleType::HeavyMotorVehicle);
        assert_eq!(full.to_string(), "Very sorry, parking lot is full for HMV");

        let payment = ParkingError::payment_failed("card declined");
        assert_eq!(payment.to_string(), "Payment failed, please try again: card declined");

        let missing = ParkingError::TicketNotFound(TicketId::sequential(4));
        assert_eq!(missing.to_string(), "Parking ticket not found: ParkingTicket-4");
    }

    #[test]
    fn test_error_recoverability() {
        assert!(ParkingError::wrong_gate(GateType::Exit, GateType::Entry).is_recoverable());
        assert!(ParkingError::lot_full(VehicleType::TwoWheeler).is_recoverable());
        assert!(ParkingError::payment_failed("x").is_recoverable());

        assert!(!ParkingError::GateNotFound(GateId::new("G")).is_recoverable());
        assert!(!ParkingError::TicketAlreadyBilled(TicketId::sequential(1)).is_recoverable());
        assert!(!ParkingError::configuration("bad").is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ParkingError::wrong_gate(GateType::Exit, GateType::Entry).category(), "Gate");
        assert_eq!(ParkingError::lot_full(VehicleType::TwoWheeler).category(), "Capacity");
        assert_eq!(ParkingError::payment_failed("x").category(), "Payment");
        assert_eq!(
            ParkingError::SpotNotFound { floor: FloorId::new("F"), spot: SpotId::new("S") }
                .category(),
            "Lookup"
        );
        assert_eq!(ParkingError::configuration("bad").category(), "Configuration");
    }

    #[test]
    fn test_parking_result_type() {
        let success: ParkingResult<i32> = Ok(42);
        assert_eq!(success, Ok(42));

        let failure: ParkingResult<i32> = Err(ParkingError::configuration("Test"));
        assert!(failure.is_err());
    }
}
