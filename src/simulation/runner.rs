//! Simulation runner
//!
//! This module drives the demonstration run: generate a lot, park a batch of
//! generated vehicles through random entry gates, then bill and release every
//! parked vehicle through random exit gates. Time runs on a [`ManualClock`],
//! so every stay lasts a random number of minutes within the configured
//! range and the whole run finishes instantly.

use crate::simulation::clock::ManualClock;
use crate::simulation::error::{ParkingError, ParkingResult};
use crate::simulation::orchestrator::ParkingLotService;
use crate::simulation::statistics::SimulationStatistics;
use crate::simulation::status::LotStatusReport;
use crate::strategy::UpiPaymentStrategy;
use crate::ticketing::{ParkingBill, ParkingTicket};
use crate::types::{GateType, SimulationConfig};
use crate::vehicle::VehicleGenerator;
use chrono::Duration;
use rand::{rngs::StdRng, thread_rng, Rng, RngCore, SeedableRng};
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Upper bound for the gap between two consecutive arrivals, in minutes
const MAX_ARRIVAL_GAP_MINUTES: i64 = 5;

/// Everything a simulation run produced
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRun {
    /// Lot status before any vehicle arrived
    pub initial_status: LotStatusReport,
    /// Lot status once every arrival was processed
    pub parked_status: LotStatusReport,
    /// Lot status once every parked vehicle left
    pub final_status: LotStatusReport,
    /// Tickets issued during the run
    pub tickets: Vec<ParkingTicket>,
    /// Bills issued during the run
    pub bills: Vec<ParkingBill>,
    /// Counters for the run
    pub statistics: SimulationStatistics,
}

/// Drives a park-all then unpark-all run over a generated lot
pub struct ParkingSimulation {
    config: SimulationConfig,
    service: ParkingLotService,
    clock: ManualClock,
    vehicle_generator: VehicleGenerator,
    payment_strategy: UpiPaymentStrategy,
    rng: Box<dyn RngCore>,
}

impl fmt::Debug for ParkingSimulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParkingSimulation")
            .field("config", &self.config)
            .field("service", &self.service)
            .field("clock", &self.clock)
            .field("payment_strategy", &self.payment_strategy)
            .finish()
    }
}

impl ParkingSimulation {
    /// Validate the configuration and generate the lot
    pub fn new(config: SimulationConfig) -> ParkingResult<Self> {
        config.validate().map_err(|e| ParkingError::configuration(e.to_string()))?;

        let clock = ManualClock::starting_now();
        let service = ParkingLotService::from_config(&config, Box::new(clock.clone()))?;

        // Lot layout, arrivals and stay lengths draw from separate streams
        let (vehicle_generator, rng): (VehicleGenerator, Box<dyn RngCore>) = match config.seed {
            Some(seed) => (
                VehicleGenerator::with_seed(seed.wrapping_add(1)),
                Box::new(StdRng::seed_from_u64(seed.wrapping_add(2))),
            ),
            None => (VehicleGenerator::new(), Box::new(thread_rng())),
        };

        let payment_strategy = UpiPaymentStrategy::new(config.upi_id.clone());

        Ok(Self { config, service, clock, vehicle_generator, payment_strategy, rng })
    }

    /// The service operating the simulated lot
    pub fn service(&self) -> &ParkingLotService {
        &self.service
    }

    /// Run the simulation to completion
    pub fn run(&mut self) -> ParkingResult<SimulationRun> {
        let started = Instant::now();
        info!(
            vehicles = self.config.vehicle_count,
            spots = self.service.lot().total_spots(),
            "Starting parking simulation"
        );

        let initial_status = self.service.status_report();
        let tickets = self.park_all()?;
        let parked_status = self.service.status_report();
        let bills = self.unpark_all(&tickets)?;
        let final_status = self.service.status_report();

        self.service.get_statistics_mut().set_simulation_duration(started.elapsed());
        let statistics = self.service.get_statistics();

        info!(
            tickets = statistics.tickets_issued,
            bills = statistics.bills_issued,
            revenue = statistics.total_revenue,
            "Parking simulation finished"
        );

        Ok(SimulationRun { initial_status, parked_status, final_status, tickets, bills, statistics })
    }

    /// Send every generated vehicle through a random entry gate
    fn park_all(&mut self) -> ParkingResult<Vec<ParkingTicket>> {
        let vehicles = self.vehicle_generator.generate_vehicles(self.config.vehicle_count);
        let mut tickets = Vec::with_capacity(vehicles.len());

        for vehicle in &vehicles {
            let gate_id = self
                .vehicle_generator
                .random_gate(self.service.lot().gates(), GateType::Entry)
                .map(|gate| gate.id.clone())
                .ok_or_else(|| ParkingError::configuration("lot has no entry gate"))?;

            match self.service.park_vehicle(vehicle, &gate_id) {
                Ok(ticket) => tickets.push(ticket),
                Err(error) if error.is_recoverable() => {
                    debug!(vehicle = %vehicle.registration_number, "Vehicle turned away: {}", error);
                }
                Err(error) => return Err(error),
            }

            let gap = self.rng.gen_range(0..=MAX_ARRIVAL_GAP_MINUTES);
            self.clock.advance_by(Duration::minutes(gap));
        }

        Ok(tickets)
    }

    /// Bill every ticket through a random exit gate, in order of departure
    ///
    /// The clock is set to each departure time in turn. A departure may fall
    /// before the last arrival; no entry happens after this point, so that
    /// only rewinds the clock between exits.
    fn unpark_all(&mut self, tickets: &[ParkingTicket]) -> ParkingResult<Vec<ParkingBill>> {
        let (min_stay, max_stay) = self.config.stay_minutes();

        let mut departures: Vec<_> = tickets
            .iter()
            .map(|ticket| {
                let stay = Duration::minutes(self.rng.gen_range(min_stay..=max_stay));
                (ticket.entry_time + stay, ticket.id.clone())
            })
            .collect();
        departures.sort();

        let mut bills = Vec::with_capacity(departures.len());
        for (departure, ticket_id) in departures {
            self.clock.set(departure);

            let gate_id = self
                .vehicle_generator
                .random_gate(self.service.lot().gates(), GateType::Exit)
                .map(|gate| gate.id.clone())
                .ok_or_else(|| ParkingError::configuration("lot has no exit gate"))?;

            match self.service.unpark_vehicle(&ticket_id, &gate_id, &mut self.payment_strategy) {
                Ok(bill) => bills.push(bill),
                Err(error) if error.is_recoverable() => {
                    warn!(ticket = %ticket_id, "Vehicle could not leave: {}", error);
                }
                Err(error) => return Err(error),
            }
        }

        Ok(bills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParkingSpotStatus, VehicleType};

    fn test_config() -> SimulationConfig {
        SimulationConfig {
            floor_count: 2,
            spots_per_floor: 20,
            gate_count: 4,
            vehicle_count: 15,
            seed: Some(2024),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_run_releases_every_parked_vehicle() {
        let mut simulation = ParkingSimulation::new(test_config()).unwrap();
        let run = simulation.run().unwrap();

        assert_eq!(run.tickets.len(), run.bills.len());
        assert_eq!(run.statistics.vehicles_arrived, 15);
        assert_eq!(
            run.statistics.tickets_issued + run.statistics.lot_full_rejections,
            15
        );
        assert!(simulation.service().open_tickets().is_empty());
        assert_eq!(run.initial_status, run.final_status);
    }

    #[test]
    fn test_parking_occupies_spots() {
        let mut simulation = ParkingSimulation::new(test_config()).unwrap();
        let run = simulation.run().unwrap();

        assert_eq!(
            run.parked_status.status_total(ParkingSpotStatus::Occupied),
            run.initial_status.status_total(ParkingSpotStatus::Occupied) + run.tickets.len()
        );
    }

    #[test]
    fn test_charges_follow_stay_range() {
        let config = SimulationConfig { min_stay_minutes: 61, max_stay_minutes: 120, ..test_config() };
        let mut simulation = ParkingSimulation::new(config).unwrap();
        let run = simulation.run().unwrap();

        for bill in &run.bills {
            assert_eq!(bill.billable_hours, 2);
            let vehicle_type: VehicleType = bill.ticket.vehicle.vehicle_type;
            assert_eq!(bill.charge, vehicle_type.base_charge() + 2.0 * vehicle_type.hourly_rate());
        }
    }

    #[test]
    fn test_seeded_runs_match() {
        let first = ParkingSimulation::new(test_config()).unwrap().run().unwrap();
        let second = ParkingSimulation::new(test_config()).unwrap().run().unwrap();

        assert_eq!(first.parked_status, second.parked_status);
        assert_eq!(first.statistics.total_revenue, second.statistics.total_revenue);
        let spots = |run: &SimulationRun| {
            run.tickets.iter().map(|t| t.spot_id.clone()).collect::<Vec<_>>()
        };
        assert_eq!(spots(&first), spots(&second));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig { gate_count: 1, ..test_config() };
        assert!(matches!(ParkingSimulation::new(config), Err(ParkingError::Configuration(_))));
    }
}
