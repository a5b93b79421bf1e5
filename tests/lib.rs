// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use parking_lot_simulator::*;

mod floor_selection_tests;


#[test]
fn test_core_id_types() {
    assert_eq!(LotId::sequential(1).to_string(), "ParkingLot-1");
    assert_eq!(FloorId::sequential(2).to_string(), "ParkingFloor-2");
    assert_eq!(SpotId::sequential(3).to_string(), "ParkingSpot-3");
    assert_eq!(GateId::sequential(4).to_string(), "Gate-4");
    assert_eq!(TicketId::sequential(5).to_string(), "ParkingTicket-5");
    assert_eq!(BillId::sequential(6).to_string(), "ParkingBill-6");
    assert_eq!(PaymentId::sequential(7).to_string(), "UpiPayment-7");

    // Identifiers order as strings
    assert!(SpotId::sequential(10) < SpotId::sequential(9));
    assert!(SpotId::new("A") < SpotId::new("B"));
}

#[test]
fn test_vehicle_tariffs() {
    let tariffs: Vec<(f64, f64)> =
        VehicleType::ALL.iter().map(|v| (v.base_charge(), v.hourly_rate())).collect();
    assert_eq!(tariffs, vec![(20.0, 10.0), (35.0, 15.0), (50.0, 20.0)]);
}

#[test]
fn test_enum_display() {
    for vehicle_type in VehicleType::ALL {
        assert!(!vehicle_type.to_string().is_empty());
    }
    for status in ParkingSpotStatus::ALL {
        assert!(!status.to_string().is_empty());
    }
    assert_eq!(GateType::Entry.to_string(), "Entry");
    assert_eq!(GateType::Exit.to_string(), "Exit");
}

#[test]
fn test_records_serialize_with_plain_ids() {
    let ticket_id = TicketId::sequential(1);
    assert_eq!(serde_json::to_string(&ticket_id).unwrap(), "\"ParkingTicket-1\"");

    let vehicle = Vehicle::new("Vehicle-1", VehicleType::TwoWheeler);
    let json = serde_json::to_value(&vehicle).unwrap();
    assert_eq!(json["registration_number"], "Vehicle-1");
    assert_eq!(json["vehicle_type"], "TwoWheeler");
}
