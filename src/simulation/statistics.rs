//! Statistics collection and reporting
//!
//! This module contains the counters a simulation run accumulates: arrivals,
//! tickets, rejected entries by cause, bills, failed exits and revenue per
//! vehicle class.

use crate::simulation::error::ParkingError;
use crate::ticketing::ParkingBill;
use crate::types::VehicleType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Revenue collected from one vehicle class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRevenue {
    /// Vehicle class
    pub vehicle_type: VehicleType,
    /// Number of bills issued for the class
    pub bills: usize,
    /// Sum of all charges for the class
    pub revenue: f64,
}

/// Counters for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationStatistics {
    // Infrastructure stats
    /// Number of floors in the lot
    pub total_floors: usize,
    /// Number of gates in the lot
    pub total_gates: usize,
    /// Number of spots in the lot
    pub total_spots: usize,

    // Entry stats
    /// Vehicles that presented themselves at a gate
    pub vehicles_arrived: usize,
    /// Tickets issued
    pub tickets_issued: usize,
    /// Entries refused because no spot was found
    pub lot_full_rejections: usize,
    /// Entries or exits refused because of the gate direction
    pub wrong_gate_rejections: usize,
    /// Entries refused for any other reason
    pub other_entry_failures: usize,

    // Exit stats
    /// Bills issued
    pub bills_issued: usize,
    /// Exits refused because the payment failed
    pub payment_failures: usize,
    /// Exits refused for any other reason
    pub other_exit_failures: usize,

    // Revenue
    /// Sum of all charges
    pub total_revenue: f64,
    /// Revenue broken down by vehicle class
    pub revenue_by_class: Vec<ClassRevenue>,

    /// Wall clock time the run took
    pub simulation_duration: Duration,
}

impl SimulationStatistics {
    /// Create statistics for a lot of the given size
    pub fn new(total_floors: usize, total_gates: usize, total_spots: usize) -> Self {
        Self {
            total_floors,
            total_gates,
            total_spots,
            vehicles_arrived: 0,
            tickets_issued: 0,
            lot_full_rejections: 0,
            wrong_gate_rejections: 0,
            other_entry_failures: 0,
            bills_issued: 0,
            payment_failures: 0,
            other_exit_failures: 0,
            total_revenue: 0.0,
            revenue_by_class: VehicleType::ALL
                .iter()
                .map(|&vehicle_type| ClassRevenue { vehicle_type, bills: 0, revenue: 0.0 })
                .collect(),
            simulation_duration: Duration::from_secs(0),
        }
    }

    /// Record a successful entry
    pub fn record_ticket(&mut self) {
        self.vehicles_arrived += 1;
        self.tickets_issued += 1;
    }

    /// Record a refused entry
    pub fn record_entry_failure(&mut self, error: &ParkingError) {
        self.vehicles_arrived += 1;
        match error {
            ParkingError::LotFull { .. } => self.lot_full_rejections += 1,
            ParkingError::WrongGate { .. } => self.wrong_gate_rejections += 1,
            _ => self.other_entry_failures += 1,
        }
    }

    /// Record a successful exit
    pub fn record_bill(&mut self, bill: &ParkingBill) {
        self.bills_issued += 1;
        self.total_revenue += bill.charge;

        let vehicle_type = bill.ticket.vehicle.vehicle_type;
        if let Some(class) =
            self.revenue_by_class.iter_mut().find(|class| class.vehicle_type == vehicle_type)
        {
            class.bills += 1;
            class.revenue += bill.charge;
        }
    }

    /// Record a refused exit
    pub fn record_exit_failure(&mut self, error: &ParkingError) {
        match error {
            ParkingError::PaymentFailed(_) => self.payment_failures += 1,
            ParkingError::WrongGate { .. } => self.wrong_gate_rejections += 1,
            _ => self.other_exit_failures += 1,
        }
    }

    /// Set the run duration
    pub fn set_simulation_duration(&mut self, duration: Duration) {
        self.simulation_duration = duration;
    }

    /// Revenue collected from one vehicle class
    pub fn revenue_for(&self, vehicle_type: VehicleType) -> f64 {
        self.revenue_by_class
            .iter()
            .find(|class| class.vehicle_type == vehicle_type)
            .map(|class| class.revenue)
            .unwrap_or(0.0)
    }

    /// Tickets still open at the end of the run
    pub fn vehicles_still_parked(&self) -> usize {
        self.tickets_issued.saturating_sub(self.bills_issued)
    }

    /// Share of arrivals that received a ticket, as a percentage
    pub fn entry_success_rate(&self) -> f64 {
        if self.vehicles_arrived == 0 {
            0.0
        } else {
            (self.tickets_issued as f64 / self.vehicles_arrived as f64) * 100.0
        }
    }

    /// Average charge per bill
    pub fn average_charge(&self) -> f64 {
        if self.bills_issued == 0 {
            0.0
        } else {
            self.total_revenue / self.bills_issued as f64
        }
    }

    /// Generate a human readable summary report
    pub fn generate_summary_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Simulation Summary Report ===\n\n");
        report.push_str(&format!(
            "Simulation Duration: {:.3} seconds\n\n",
            self.simulation_duration.as_secs_f64()
        ));

        report.push_str("Lot Overview:\n");
        report.push_str(&format!("  • Floors: {}\n", self.total_floors));
        report.push_str(&format!("  • Gates: {}\n", self.total_gates));
        report.push_str(&format!("  • Spots: {}\n\n", self.total_spots));

        report.push_str("Entries:\n");
        report.push_str(&format!("  • Vehicles Arrived: {}\n", self.vehicles_arrived));
        report.push_str(&format!(
            "  • Tickets Issued: {} ({:.1}%)\n",
            self.tickets_issued,
            self.entry_success_rate()
        ));
        report.push_str(&format!("  • Lot Full Rejections: {}\n", self.lot_full_rejections));
        report.push_str(&format!("  • Wrong Gate Rejections: {}\n", self.wrong_gate_rejections));
        if self.other_entry_failures > 0 {
            report.push_str(&format!("  • Other Entry Failures: {}\n", self.other_entry_failures));
        }
        report.push('\n');

        report.push_str("Exits:\n");
        report.push_str(&format!("  • Bills Issued: {}\n", self.bills_issued));
        report.push_str(&format!("  • Payment Failures: {}\n", self.payment_failures));
        if self.other_exit_failures > 0 {
            report.push_str(&format!("  • Other Exit Failures: {}\n", self.other_exit_failures));
        }
        report.push_str(&format!("  • Still Parked: {}\n\n", self.vehicles_still_parked()));

        report.push_str("Revenue:\n");
        for class in &self.revenue_by_class {
            report.push_str(&format!(
                "  • {}: {:.2} ({} bills)\n",
                class.vehicle_type, class.revenue, class.bills
            ));
        }
        report.push_str(&format!(
            "  • Total: {:.2} (avg {:.2}/bill)\n",
            self.total_revenue,
            self.average_charge()
        ));

        report
    }
}

impl fmt::Display for SimulationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generate_summary_report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{PaymentDetails, PaymentMethod};
    use crate::ticketing::ParkingTicket;
    use crate::types::{BillId, FloorId, GateType, PaymentId, SpotId, TicketId};
    use crate::vehicle::Vehicle;
    use chrono::Utc;
    use uuid::Uuid;

    fn create_test_bill(vehicle_type: VehicleType, charge: f64) -> ParkingBill {
        let now = Utc::now();
        ParkingBill {
            id: BillId::sequential(1),
            ticket: ParkingTicket {
                id: TicketId::sequential(1),
                vehicle: Vehicle::new("Vehicle-1", vehicle_type),
                floor_id: FloorId::sequential(1),
                spot_id: SpotId::sequential(1),
                entry_time: now,
            },
            exit_time: now,
            billable_hours: 0,
            charge,
            payment: PaymentDetails {
                id: PaymentId::sequential(1),
                amount: charge,
                method: PaymentMethod::Upi { upi_id: "upi@ybl".to_string() },
                transaction_ref: Uuid::new_v4(),
                paid_at: now,
            },
        }
    }

    #[test]
    fn test_new_statistics() {
        let stats = SimulationStatistics::new(3, 5, 150);

        assert_eq!(stats.total_floors, 3);
        assert_eq!(stats.total_gates, 5);
        assert_eq!(stats.total_spots, 150);
        assert_eq!(stats.revenue_by_class.len(), 3);
        assert_eq!(stats.entry_success_rate(), 0.0);
        assert_eq!(stats.average_charge(), 0.0);
    }

    #[test]
    fn test_entry_accounting() {
        let mut stats = SimulationStatistics::new(1, 2, 10);

        stats.record_ticket();
        stats.record_ticket();
        stats.record_ticket();
        stats.record_entry_failure(&ParkingError::lot_full(VehicleType::TwoWheeler));

        assert_eq!(stats.vehicles_arrived, 4);
        assert_eq!(stats.tickets_issued, 3);
        assert_eq!(stats.lot_full_rejections, 1);
        assert_eq!(stats.entry_success_rate(), 75.0);

        stats.record_entry_failure(&ParkingError::wrong_gate(GateType::Entry, GateType::Exit));
        assert_eq!(stats.wrong_gate_rejections, 1);
    }

    #[test]
    fn test_exit_accounting() {
        let mut stats = SimulationStatistics::new(1, 2, 10);
        stats.record_ticket();
        stats.record_ticket();
        stats.record_ticket();

        stats.record_bill(&create_test_bill(VehicleType::LightMotorVehicle, 65.0));
        stats.record_bill(&create_test_bill(VehicleType::TwoWheeler, 20.0));
        stats.record_exit_failure(&ParkingError::payment_failed("declined"));

        assert_eq!(stats.bills_issued, 2);
        assert_eq!(stats.payment_failures, 1);
        assert_eq!(stats.total_revenue, 85.0);
        assert_eq!(stats.revenue_for(VehicleType::LightMotorVehicle), 65.0);
        assert_eq!(stats.revenue_for(VehicleType::HeavyMotorVehicle), 0.0);
        assert_eq!(stats.average_charge(), 42.5);
        assert_eq!(stats.vehicles_still_parked(), 1);
    }

    #[test]
    fn test_summary_report() {
        let mut stats = SimulationStatistics::new(2, 4, 20);
        stats.record_ticket();
        stats.record_bill(&create_test_bill(VehicleType::HeavyMotorVehicle, 70.0));

        let report = stats.to_string();
        assert!(report.contains("=== Simulation Summary Report ==="));
        assert!(report.contains("Tickets Issued: 1 (100.0%)"));
        assert!(report.contains("HMV: 70.00 (1 bills)"));
        assert!(report.contains("Total: 70.00"));
    }
}
