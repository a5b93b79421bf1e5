//! Parking lot service
//!
//! This module contains the ParkingLotService, which owns the lot, the ticket
//! service and the run statistics, and resolves gates by id for every entry
//! and exit.

use crate::lot::{ParkingLot, ParkingLotGenerator};
use crate::simulation::clock::Clock;
use crate::simulation::error::{ParkingError, ParkingResult};
use crate::simulation::statistics::SimulationStatistics;
use crate::simulation::status::LotStatusReport;
use crate::strategy::PaymentStrategy;
use crate::ticketing::{ParkingBill, ParkingTicket, ParkingTicketService};
use crate::types::{GateId, SimulationConfig, TicketId};
use crate::vehicle::Vehicle;
use tracing::{debug, info, instrument};

/// Entry point for parking and unparking vehicles in a single lot
#[derive(Debug)]
pub struct ParkingLotService {
    /// The lot being operated
    lot: ParkingLot,
    /// Ticket and bill repository
    ticket_service: ParkingTicketService,
    /// Counters for everything that happened through this service
    statistics: SimulationStatistics,
}

impl ParkingLotService {
    /// Create a service operating an existing lot
    pub fn new(lot: ParkingLot, ticket_service: ParkingTicketService) -> Self {
        let statistics =
            SimulationStatistics::new(lot.floors().len(), lot.gates().len(), lot.total_spots());
        info!(
            lot = %lot.id,
            floors = statistics.total_floors,
            gates = statistics.total_gates,
            spots = statistics.total_spots,
            "Parking lot service ready"
        );
        Self { lot, ticket_service, statistics }
    }

    /// Generate a lot from the configuration and create a service for it
    #[instrument(skip(config, clock), fields(floor_count = config.floor_count, gate_count = config.gate_count))]
    pub fn from_config(config: &SimulationConfig, clock: Box<dyn Clock>) -> ParkingResult<Self> {
        let mut generator = match config.seed {
            Some(seed) => {
                info!("Using deterministic seed: {}", seed);
                ParkingLotGenerator::with_seed(seed)
            }
            None => {
                debug!("Using entropy-based random seed");
                ParkingLotGenerator::new()
            }
        };

        let lot = generator.generate_lot(config)?;
        Ok(Self::new(lot, ParkingTicketService::with_clock(clock)))
    }

    /// Park a vehicle arriving at the gate with the given id
    #[instrument(skip(self, vehicle), fields(vehicle = %vehicle.registration_number, vehicle_type = %vehicle.vehicle_type))]
    pub fn park_vehicle(&mut self, vehicle: &Vehicle, gate_id: &GateId) -> ParkingResult<ParkingTicket> {
        info!("Park {} at {}", vehicle, gate_id);

        let result = match self.lot.gate(gate_id).cloned() {
            Some(gate) => self.ticket_service.create_ticket(&mut self.lot, vehicle, &gate),
            None => Err(ParkingError::GateNotFound(gate_id.clone())),
        };

        match &result {
            Ok(ticket) => {
                info!("{} is parked at floor {}, and {}", vehicle, ticket.floor_id, ticket.spot_id);
                self.statistics.record_ticket();
            }
            Err(error) => {
                error.log();
                self.statistics.record_entry_failure(error);
            }
        }

        result
    }

    /// Bill a ticket presented at the gate with the given id and release its spot
    #[instrument(skip(self, payment_strategy))]
    pub fn unpark_vehicle(
        &mut self,
        ticket_id: &TicketId,
        gate_id: &GateId,
        payment_strategy: &mut dyn PaymentStrategy,
    ) -> ParkingResult<ParkingBill> {
        info!("UnPark {} at {}", ticket_id, gate_id);

        let result = match self.lot.gate(gate_id).cloned() {
            Some(gate) => {
                self.ticket_service.create_bill(&mut self.lot, ticket_id, &gate, payment_strategy)
            }
            None => Err(ParkingError::GateNotFound(gate_id.clone())),
        };

        match &result {
            Ok(bill) => self.statistics.record_bill(bill),
            Err(error) => {
                error.log();
                self.statistics.record_exit_failure(error);
            }
        }

        result
    }

    /// The lot being operated
    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    /// The ticket and bill repository
    pub fn ticket_service(&self) -> &ParkingTicketService {
        &self.ticket_service
    }

    /// Tickets that have not been billed yet
    pub fn open_tickets(&self) -> Vec<&ParkingTicket> {
        self.ticket_service.open_tickets()
    }

    /// Snapshot of the lot's spot counts
    pub fn status_report(&self) -> LotStatusReport {
        self.lot.status_report()
    }

    /// Counters accumulated so far
    pub fn get_statistics(&self) -> SimulationStatistics {
        self.statistics.clone()
    }

    /// Mutable access to the counters
    pub fn get_statistics_mut(&mut self) -> &mut SimulationStatistics {
        &mut self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lot::{Gate, ParkingFloor, ParkingSpot};
    use crate::simulation::clock::ManualClock;
    use crate::strategy::UpiPaymentStrategy;
    use crate::types::{FloorId, LotId, ParkingSpotStatus, SpotId, VehicleType};
    use chrono::Duration;

    fn create_test_service(clock: &ManualClock) -> ParkingLotService {
        let mut floor = ParkingFloor::new(FloorId::sequential(1));
        floor.add_spot(ParkingSpot::available(SpotId::sequential(1), VehicleType::TwoWheeler));

        let mut lot = ParkingLot::new(LotId::sequential(1));
        lot.add_gate(Gate::entry(GateId::sequential(1), 1));
        lot.add_gate(Gate::exit(GateId::sequential(2), 2));
        lot.add_floor(floor);

        ParkingLotService::new(lot, ParkingTicketService::with_clock(Box::new(clock.clone())))
    }

    #[test]
    fn test_park_and_unpark_by_id() {
        let clock = ManualClock::starting_now();
        let mut service = create_test_service(&clock);
        let mut payment = UpiPaymentStrategy::new("upi@ybl");
        let vehicle = Vehicle::new("Vehicle-1", VehicleType::TwoWheeler);

        let ticket = service.park_vehicle(&vehicle, &GateId::sequential(1)).unwrap();
        assert_eq!(service.open_tickets().len(), 1);

        clock.advance_by(Duration::minutes(150));
        let bill =
            service.unpark_vehicle(&ticket.id, &GateId::sequential(2), &mut payment).unwrap();

        assert_eq!(bill.charge, 50.0);
        assert!(service.open_tickets().is_empty());
        assert_eq!(service.status_report().count(VehicleType::TwoWheeler, ParkingSpotStatus::Available), 1);

        let stats = service.get_statistics();
        assert_eq!(stats.tickets_issued, 1);
        assert_eq!(stats.bills_issued, 1);
        assert_eq!(stats.total_revenue, 50.0);
    }

    #[test]
    fn test_unknown_gate() {
        let clock = ManualClock::starting_now();
        let mut service = create_test_service(&clock);
        let vehicle = Vehicle::new("Vehicle-1", VehicleType::TwoWheeler);

        let missing = GateId::new("Gate-99");
        let result = service.park_vehicle(&vehicle, &missing);
        assert_eq!(result, Err(ParkingError::GateNotFound(missing)));
        assert_eq!(service.get_statistics().other_entry_failures, 1);
    }

    #[test]
    fn test_rejections_are_counted() {
        let clock = ManualClock::starting_now();
        let mut service = create_test_service(&clock);

        service.park_vehicle(&Vehicle::new("Vehicle-1", VehicleType::TwoWheeler), &GateId::sequential(1)).unwrap();
        let full = service.park_vehicle(&Vehicle::new("Vehicle-2", VehicleType::TwoWheeler), &GateId::sequential(1));
        let wrong = service.park_vehicle(&Vehicle::new("Vehicle-3", VehicleType::TwoWheeler), &GateId::sequential(2));

        assert!(matches!(full, Err(ParkingError::LotFull { .. })));
        assert!(matches!(wrong, Err(ParkingError::WrongGate { .. })));

        let stats = service.get_statistics();
        assert_eq!(stats.vehicles_arrived, 3);
        assert_eq!(stats.lot_full_rejections, 1);
        assert_eq!(stats.wrong_gate_rejections, 1);
    }

    #[test]
    fn test_from_config_is_seeded() {
        let config = SimulationConfig { seed: Some(11), ..SimulationConfig::default() };

        let first = ParkingLotService::from_config(&config, Box::new(ManualClock::starting_now())).unwrap();
        let second = ParkingLotService::from_config(&config, Box::new(ManualClock::starting_now())).unwrap();

        assert_eq!(first.status_report(), second.status_report());
        assert_eq!(first.lot().total_spots(), 150);
    }
}
