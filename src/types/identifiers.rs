//! Identifier types for the parking lot simulator
//!
//! Every entity carries a string identifier. Generated identifiers follow the
//! `<Prefix>-<n>` pattern (`ParkingSpot-12`, `ParkingTicket-3`, ...). Ordering
//! is lexicographic on the full string, which is what the nearest-spot
//! strategy relies on.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix used by [`Self::sequential`]
            pub const PREFIX: &'static str = $prefix;

            /// Wrap an arbitrary identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Build the `n`-th generated identifier
            pub fn sequential(n: usize) -> Self {
                Self(format!("{}-{}", Self::PREFIX, n))
            }

            /// Borrow the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Identifier of the parking lot
    LotId,
    "ParkingLot"
);
string_id!(
    /// Identifier of a floor within the lot
    FloorId,
    "ParkingFloor"
);
string_id!(
    /// Identifier of a spot within a floor
    SpotId,
    "ParkingSpot"
);
string_id!(
    /// Identifier of an entry or exit gate
    GateId,
    "Gate"
);
string_id!(
    /// Identifier of a parking ticket
    TicketId,
    "ParkingTicket"
);
string_id!(
    /// Identifier of a parking bill
    BillId,
    "ParkingBill"
);
string_id!(
    /// Identifier of a payment made through a payment strategy
    PaymentId,
    "UpiPayment"
);
