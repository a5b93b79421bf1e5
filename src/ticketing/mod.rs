//! Tickets, bills and tariffs
//!
//! - **ParkingTicketService**: issues tickets on entry, bills on exit
//! - **ParkingTicket** / **ParkingBill**: the records it hands out
//! - **charges**: started-hour rounding and the per-class tariff

pub mod charges;
pub mod service;
pub mod ticket;

pub use charges::*;
pub use service::*;
pub use ticket::*;
