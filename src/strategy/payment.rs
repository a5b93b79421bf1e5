//! Payment collection on exit
//!
//! Payments never leave the process: `UpiPaymentStrategy` records the request
//! and always succeeds. The trait exists so exit handling can be exercised
//! against declining payment methods as well.

use crate::simulation::error::ParkingResult;
use crate::types::PaymentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use uuid::Uuid;

/// How a bill was settled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Unified Payments Interface transfer
    Upi {
        /// Virtual payment address that was charged
        upi_id: String,
    },
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Upi { upi_id } => write!(f, "UPI ({})", upi_id),
        }
    }
}

/// Record of a settled payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    /// Payment identifier
    pub id: PaymentId,
    /// Amount charged
    pub amount: f64,
    /// Method the amount was charged to
    pub method: PaymentMethod,
    /// Reference returned by the payment gateway
    pub transaction_ref: Uuid,
    /// When the payment was accepted
    pub paid_at: DateTime<Utc>,
}

/// Collects the charge for a bill
pub trait PaymentStrategy: fmt::Debug {
    /// Charge `amount`, returning the payment record or an error
    ///
    /// Exit handling reports any error returned here as `PaymentFailed`.
    fn pay(&mut self, amount: f64) -> ParkingResult<PaymentDetails>;

    /// Method this strategy charges to
    fn method(&self) -> PaymentMethod;
}

/// Stub UPI payment that accepts every charge
#[derive(Debug, Clone)]
pub struct UpiPaymentStrategy {
    upi_id: String,
    payments_made: usize,
}

impl UpiPaymentStrategy {
    /// Create a strategy charging the given UPI id
    pub fn new(upi_id: impl Into<String>) -> Self {
        Self { upi_id: upi_id.into(), payments_made: 0 }
    }

    /// UPI id charged by this strategy
    pub fn upi_id(&self) -> &str {
        &self.upi_id
    }

    /// Number of payments accepted so far
    pub fn payments_made(&self) -> usize {
        self.payments_made
    }
}

impl PaymentStrategy for UpiPaymentStrategy {
    fn pay(&mut self, amount: f64) -> ParkingResult<PaymentDetails> {
        self.payments_made += 1;
        let details = PaymentDetails {
            id: PaymentId::sequential(self.payments_made),
            amount,
            method: self.method(),
            transaction_ref: Uuid::new_v4(),
            paid_at: Utc::now(),
        };

        info!(
            payment = %details.id,
            upi_id = %self.upi_id,
            amount,
            transaction_ref = %details.transaction_ref,
            "Payment through UPI accepted"
        );

        Ok(details)
    }

    fn method(&self) -> PaymentMethod {
        PaymentMethod::Upi { upi_id: self.upi_id.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upi_payment_succeeds() {
        let mut strategy = UpiPaymentStrategy::new("upi@ybl");

        let first = strategy.pay(65.0).unwrap();
        let second = strategy.pay(20.0).unwrap();

        assert_eq!(first.id.as_str(), "UpiPayment-1");
        assert_eq!(second.id.as_str(), "UpiPayment-2");
        assert_eq!(first.amount, 65.0);
        assert_eq!(first.method, PaymentMethod::Upi { upi_id: "upi@ybl".to_string() });
        assert_ne!(first.transaction_ref, second.transaction_ref);
        assert_eq!(strategy.payments_made(), 2);
    }

    #[test]
    fn test_payment_method_display() {
        let strategy = UpiPaymentStrategy::new("lot@okaxis");
        assert_eq!(strategy.method().to_string(), "UPI (lot@okaxis)");
        assert_eq!(strategy.upi_id(), "lot@okaxis");
    }

    #[test]
    fn test_payment_method_serialization() {
        let method = PaymentMethod::Upi { upi_id: "upi@ybl".to_string() };
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json["method"], "upi");
        assert_eq!(json["upi_id"], "upi@ybl");
    }
}
