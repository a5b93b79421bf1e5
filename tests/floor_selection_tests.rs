//! Tests for floor and spot placement through the service

use parking_lot_simulator::lot::{Gate, ParkingFloor, ParkingLot, ParkingSpot};
use parking_lot_simulator::simulation::{ManualClock, ParkingError, ParkingLotService};
use parking_lot_simulator::strategy::{
    NearestParkingFloorStrategy, NearestParkingSpotStrategy, ParkingFloorStrategy,
    ParkingSpotStrategy, UpiPaymentStrategy,
};
use parking_lot_simulator::ticketing::ParkingTicketService;
use parking_lot_simulator::types::{
    FloorId, GateId, LotId, ParkingSpotStatus, SpotId, VehicleType,
};
use parking_lot_simulator::vehicle::Vehicle;

fn service_for(lot: ParkingLot) -> ParkingLotService {
    ParkingLotService::new(lot, ParkingTicketService::with_clock(Box::new(ManualClock::starting_now())))
}

fn lmv(n: usize) -> Vehicle {
    Vehicle::new(format!("Vehicle-{}", n), VehicleType::LightMotorVehicle)
}

#[test]
fn test_single_spot_lot_fills_up() {
    let mut floor = ParkingFloor::new(FloorId::sequential(1));
    floor.add_spot(ParkingSpot::available(SpotId::sequential(1), VehicleType::LightMotorVehicle));
    let mut lot = ParkingLot::new(LotId::sequential(1));
    lot.add_gate(Gate::entry(GateId::sequential(1), 0));
    lot.add_gate(Gate::exit(GateId::sequential(2), 0));
    lot.add_floor(floor);
    let mut service = service_for(lot);

    let first = service.park_vehicle(&lmv(1), &GateId::sequential(1)).unwrap();
    assert_eq!(first.spot_id, SpotId::sequential(1));

    let second = service.park_vehicle(&lmv(2), &GateId::sequential(1));
    assert_eq!(
        second,
        Err(ParkingError::LotFull { vehicle_type: VehicleType::LightMotorVehicle })
    );
    assert_eq!(service.get_statistics().lot_full_rejections, 1);
    assert_eq!(service.ticket_service().tickets().len(), 1);

    // Once the first vehicle leaves, the spot is free again
    let mut payment = UpiPaymentStrategy::new("upi@ybl");
    service.unpark_vehicle(&first.id, &GateId::sequential(2), &mut payment).unwrap();
    let third = service.park_vehicle(&lmv(3), &GateId::sequential(1)).unwrap();
    assert_eq!(third.spot_id, SpotId::sequential(1));
}

#[test]
fn test_gate_number_selects_full_floor() {
    // Floor 1 has no LMV room, floor 2 does
    let mut full = ParkingFloor::new(FloorId::sequential(1));
    full.add_spot(ParkingSpot::new(
        SpotId::sequential(1),
        VehicleType::LightMotorVehicle,
        ParkingSpotStatus::Occupied,
    ));
    let mut roomy = ParkingFloor::new(FloorId::sequential(2));
    roomy.add_spot(ParkingSpot::available(SpotId::sequential(2), VehicleType::LightMotorVehicle));

    let mut lot = ParkingLot::new(LotId::sequential(1));
    lot.add_gate(Gate::entry(GateId::sequential(1), 2));
    lot.add_gate(Gate::entry(GateId::sequential(2), 1));
    lot.add_floor(full);
    lot.add_floor(roomy);
    let mut service = service_for(lot);

    // Gate number 2 maps to the first floor, which is full
    let rejected = service.park_vehicle(&lmv(1), &GateId::sequential(1));
    assert_eq!(
        rejected,
        Err(ParkingError::LotFull { vehicle_type: VehicleType::LightMotorVehicle })
    );

    // Gate number 1 maps to the second floor
    let ticket = service.park_vehicle(&lmv(2), &GateId::sequential(2)).unwrap();
    assert_eq!(ticket.floor_id, FloorId::sequential(2));
    assert_eq!(ticket.spot_id, SpotId::sequential(2));
}

#[test]
fn test_no_room_for_class_anywhere() {
    let mut floor = ParkingFloor::new(FloorId::sequential(1));
    floor.add_spot(ParkingSpot::available(SpotId::sequential(1), VehicleType::TwoWheeler));
    floor.add_spot(ParkingSpot::new(
        SpotId::sequential(2),
        VehicleType::HeavyMotorVehicle,
        ParkingSpotStatus::Inactive,
    ));
    let gate = Gate::entry(GateId::sequential(1), 0);

    let floors = vec![floor];
    let strategy = NearestParkingFloorStrategy::new();
    assert!(strategy.assign_floor(VehicleType::HeavyMotorVehicle, &gate, &floors).is_none());
    assert!(strategy.assign_floor(VehicleType::LightMotorVehicle, &gate, &floors).is_none());
    assert!(strategy.assign_floor(VehicleType::TwoWheeler, &gate, &floors).is_some());
}

#[test]
fn test_spot_order_is_lexicographic() {
    let mut floor = ParkingFloor::new(FloorId::sequential(1));
    for n in [2, 10, 3] {
        floor.add_spot(ParkingSpot::available(SpotId::sequential(n), VehicleType::TwoWheeler));
    }

    let chosen = NearestParkingSpotStrategy
        .find_spot(VehicleType::TwoWheeler, floor.spots())
        .map(|spot| spot.id.clone());

    assert_eq!(chosen, Some(SpotId::sequential(10)));
}

#[test]
fn test_inactive_and_foreign_spots_are_skipped() {
    let mut floor = ParkingFloor::new(FloorId::sequential(1));
    floor.add_spot(ParkingSpot::new(
        SpotId::new("A"),
        VehicleType::LightMotorVehicle,
        ParkingSpotStatus::Inactive,
    ));
    floor.add_spot(ParkingSpot::available(SpotId::new("B"), VehicleType::HeavyMotorVehicle));
    floor.add_spot(ParkingSpot::available(SpotId::new("C"), VehicleType::LightMotorVehicle));
    let mut lot = ParkingLot::new(LotId::sequential(1));
    lot.add_gate(Gate::entry(GateId::sequential(1), 7));
    lot.add_floor(floor);
    let mut service = service_for(lot);

    let ticket = service.park_vehicle(&lmv(1), &GateId::sequential(1)).unwrap();

    assert_eq!(ticket.spot_id, SpotId::new("C"));
    let lot = service.lot();
    assert_eq!(
        lot.spot(&FloorId::sequential(1), &SpotId::new("A")).unwrap().status(),
        ParkingSpotStatus::Inactive
    );
    assert_eq!(
        lot.spot(&FloorId::sequential(1), &SpotId::new("B")).unwrap().status(),
        ParkingSpotStatus::Available
    );
}
