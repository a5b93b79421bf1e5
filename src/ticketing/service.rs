//! Ticket issuing and billing
//!
//! This module contains the ParkingTicketService, which turns an arrival at
//! an entry gate into a ticket and a ticket presented at an exit gate into a
//! paid bill. The service keeps every ticket it issued; billed tickets stay
//! in the repository and can be looked up afterwards.

use crate::lot::{Gate, ParkingLot};
use crate::simulation::clock::{Clock, SystemClock};
use crate::simulation::error::{ParkingError, ParkingResult};
use crate::strategy::PaymentStrategy;
use crate::ticketing::charges::{billable_hours, calculate_charges};
use crate::ticketing::ticket::{ParkingBill, ParkingTicket};
use crate::types::{BillId, GateType, ParkingSpotStatus, TicketId};
use crate::vehicle::Vehicle;
use chrono::Duration;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Issues tickets on entry and bills on exit
#[derive(Debug)]
pub struct ParkingTicketService {
    clock: Box<dyn Clock>,
    /// Tickets in issue order
    tickets: Vec<ParkingTicket>,
    /// Quick lookup map from ticket ID to index
    ticket_index: HashMap<TicketId, usize>,
    /// Tickets that have been settled
    billed: HashSet<TicketId>,
    /// Bills in issue order
    bills: Vec<ParkingBill>,
}

impl ParkingTicketService {
    /// Create a service reading wall clock time
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create a service reading time from the given clock
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            tickets: Vec::new(),
            ticket_index: HashMap::new(),
            billed: HashSet::new(),
            bills: Vec::new(),
        }
    }

    /// Assign a spot to `vehicle` arriving at `gate` and issue a ticket
    ///
    /// Fails with `WrongGate` for an exit gate and `LotFull` when either the
    /// floor strategy or the chosen floor's spot strategy finds nothing.
    /// Nothing in the lot changes on failure.
    pub fn create_ticket(
        &mut self,
        lot: &mut ParkingLot,
        vehicle: &Vehicle,
        gate: &Gate,
    ) -> ParkingResult<ParkingTicket> {
        if gate.gate_type != GateType::Entry {
            return Err(ParkingError::wrong_gate(GateType::Entry, gate.gate_type));
        }

        let vehicle_type = vehicle.vehicle_type;
        let floor = lot
            .find_parking_floor(vehicle_type, gate)
            .ok_or_else(|| ParkingError::lot_full(vehicle_type))?;
        let spot = floor
            .find_parking_spot(vehicle_type)
            .ok_or_else(|| ParkingError::lot_full(vehicle_type))?;

        let floor_id = floor.id.clone();
        let spot_id = spot.id.clone();

        lot.spot_mut(&floor_id, &spot_id)
            .ok_or_else(|| ParkingError::SpotNotFound {
                floor: floor_id.clone(),
                spot: spot_id.clone(),
            })?
            .set_status(ParkingSpotStatus::Occupied);

        let ticket = ParkingTicket {
            id: TicketId::sequential(self.tickets.len() + 1),
            vehicle: vehicle.clone(),
            floor_id,
            spot_id,
            entry_time: self.clock.now(),
        };

        info!(
            ticket = %ticket.id,
            vehicle = %ticket.vehicle.registration_number,
            floor = %ticket.floor_id,
            spot = %ticket.spot_id,
            "Issued parking ticket"
        );

        self.ticket_index.insert(ticket.id.clone(), self.tickets.len());
        self.tickets.push(ticket.clone());
        Ok(ticket)
    }

    /// Charge for the ticket, free its spot and issue a bill
    ///
    /// The spot is only released after the payment succeeds; on any error the
    /// ticket stays open and the spot stays occupied.
    pub fn create_bill(
        &mut self,
        lot: &mut ParkingLot,
        ticket_id: &TicketId,
        gate: &Gate,
        payment_strategy: &mut dyn PaymentStrategy,
    ) -> ParkingResult<ParkingBill> {
        if gate.gate_type != GateType::Exit {
            return Err(ParkingError::wrong_gate(GateType::Exit, gate.gate_type));
        }

        let ticket = self
            .ticket(ticket_id)
            .ok_or_else(|| ParkingError::TicketNotFound(ticket_id.clone()))?
            .clone();
        if self.billed.contains(ticket_id) {
            return Err(ParkingError::TicketAlreadyBilled(ticket_id.clone()));
        }
        if lot.spot(&ticket.floor_id, &ticket.spot_id).is_none() {
            return Err(ParkingError::SpotNotFound {
                floor: ticket.floor_id.clone(),
                spot: ticket.spot_id.clone(),
            });
        }

        let exit_time = self.clock.now();
        let elapsed = (exit_time - ticket.entry_time).max(Duration::zero());
        let hours = billable_hours(elapsed);
        let charge = calculate_charges(ticket.vehicle.vehicle_type, hours);
        debug!(ticket = %ticket.id, elapsed_minutes = elapsed.num_minutes(), hours, charge, "Calculated charge");

        // Every refusal from the strategy reaches the caller as PaymentFailed
        let payment = payment_strategy.pay(charge).map_err(|error| match error {
            ParkingError::PaymentFailed(_) => error,
            other => ParkingError::payment_failed(other.to_string()),
        })?;

        if let Some(spot) = lot.spot_mut(&ticket.floor_id, &ticket.spot_id) {
            spot.set_status(ParkingSpotStatus::Available);
        }

        let bill = ParkingBill {
            id: BillId::sequential(self.bills.len() + 1),
            ticket,
            exit_time,
            billable_hours: hours,
            charge,
            payment,
        };

        info!(
            bill = %bill.id,
            ticket = %bill.ticket.id,
            spot = %bill.ticket.spot_id,
            charge,
            "Issued parking bill"
        );

        self.billed.insert(ticket_id.clone());
        self.bills.push(bill.clone());
        Ok(bill)
    }

    /// Get a ticket by ID, billed or not
    pub fn ticket(&self, ticket_id: &TicketId) -> Option<&ParkingTicket> {
        self.ticket_index.get(ticket_id).map(|&index| &self.tickets[index])
    }

    /// All issued tickets, in issue order
    pub fn tickets(&self) -> &[ParkingTicket] {
        &self.tickets
    }

    /// Tickets that have not been billed yet, in issue order
    pub fn open_tickets(&self) -> Vec<&ParkingTicket> {
        self.tickets.iter().filter(|ticket| !self.billed.contains(&ticket.id)).collect()
    }

    /// Check whether a ticket has been settled
    pub fn is_billed(&self, ticket_id: &TicketId) -> bool {
        self.billed.contains(ticket_id)
    }

    /// All issued bills, in issue order
    pub fn bills(&self) -> &[ParkingBill] {
        &self.bills
    }
}

impl Default for ParkingTicketService {
    fn default() -> Self {
        Self::new()
    }
}
