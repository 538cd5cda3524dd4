//! End-to-end scenarios driven through the command interface, the way the
//! console drives the controller.

use smarthome_app::command::{Command, Outcome};
use smarthome_app::services::home_controller::{HomeController, Limits};
use smarthome_domain::error::SmartHomeError;

fn add_room(room: &str) -> Command {
    Command::AddRoom {
        room: room.to_string(),
    }
}

fn add_device(room: &str, kind: &str, name: &str) -> Command {
    Command::AddDevice {
        room: room.to_string(),
        kind: kind.to_string(),
        name: name.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

#[test]
fn should_turn_on_lamp_in_living_room() {
    let mut controller = HomeController::default();
    controller.execute(add_room("Living Room")).unwrap();
    controller
        .execute(add_device("Living Room", "Light", "Lamp1"))
        .unwrap();

    let outcome = controller
        .execute(Command::TurnAllOn {
            room: "Living Room".to_string(),
        })
        .unwrap();
    assert_eq!(outcome, Outcome::Messages(vec!["Lamp1 is ON".to_string()]));

    let lamp = controller
        .get_room_by_name("Living Room")
        .and_then(|room| room.device("Lamp1"))
        .unwrap();
    assert!(lamp.is_on());
    assert_eq!(lamp.status(), "Lamp1 in Living Room is ON");
}

#[test]
fn should_reject_device_for_nonexistent_room() {
    let mut controller = HomeController::default();
    controller.execute(add_room("Kitchen")).unwrap();

    let result = controller.execute(add_device("Nonexistent", "Light", "X"));
    assert!(matches!(result, Err(SmartHomeError::NotFound(_))));
    assert_eq!(controller.room_count(), 1);
    assert!(controller.get_room_by_name("Kitchen").unwrap().is_empty());
}

#[test]
fn should_reject_sixth_room() {
    let mut controller = HomeController::default();
    for name in ["A", "B", "C", "D", "E"] {
        controller.execute(add_room(name)).unwrap();
    }

    let result = controller.execute(add_room("F"));
    assert!(matches!(result, Err(SmartHomeError::CapacityExceeded(_))));
    assert_eq!(controller.room_count(), 5);
}

// ---------------------------------------------------------------------------
// Devices
// ---------------------------------------------------------------------------

#[test]
fn should_reject_eleventh_device() {
    let mut controller = HomeController::default();
    controller.execute(add_room("Den")).unwrap();
    for i in 0..10 {
        let kind = ["Light", "thermostat", "Camera"][i % 3];
        controller
            .execute(add_device("Den", kind, &format!("D{i}")))
            .unwrap();
    }

    let result = controller.execute(add_device("Den", "Light", "D10"));
    assert!(matches!(result, Err(SmartHomeError::CapacityExceeded(_))));
    assert_eq!(controller.get_room_by_name("Den").unwrap().len(), 10);
}

#[test]
fn should_reject_unknown_device_type() {
    let mut controller = HomeController::default();
    controller.execute(add_room("Den")).unwrap();

    let result = controller.execute(add_device("Den", "bogus", "B"));
    assert!(matches!(result, Err(SmartHomeError::InvalidDeviceType(_))));
    assert!(controller.get_room_by_name("Den").unwrap().is_empty());
}

#[test]
fn should_reset_thermostat_to_23_on_schedule_all() {
    let mut controller = HomeController::default();
    controller.execute(add_room("Hall")).unwrap();
    controller
        .execute(add_device("Hall", "Thermostat", "Nest"))
        .unwrap();
    controller
        .get_room_by_name_mut("Hall")
        .and_then(|room| room.device_mut("Nest"))
        .unwrap()
        .set_temperature(-5)
        .unwrap();

    let outcome = controller
        .execute(Command::ScheduleAll {
            room: "Hall".to_string(),
        })
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Messages(vec![
            "Nest will turn OFF at 10:00 PM".to_string(),
            "Nest set to 23°C".to_string(),
        ])
    );

    let nest = controller
        .get_room_by_name("Hall")
        .and_then(|room| room.device("Nest"))
        .unwrap();
    assert_eq!(nest.temperature(), Some(23));
    assert!(!nest.is_on());
}

#[test]
fn should_show_all_rooms_grouped_by_kind() {
    let mut controller = HomeController::new(Limits {
        max_rooms: 2,
        max_devices_per_room: 4,
    });
    controller.execute(add_room("Den")).unwrap();
    controller.execute(add_room("Porch")).unwrap();
    controller.execute(add_device("Den", "camera", "Cam")).unwrap();
    controller.execute(add_device("Den", "light", "Lamp")).unwrap();
    controller
        .execute(add_device("Porch", "Thermostat", "Heat"))
        .unwrap();

    let Outcome::Rooms(rooms) = controller.execute(Command::ShowAll).unwrap() else {
        panic!("expected Rooms");
    };
    let rendered: Vec<String> = rooms.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "Devices in Room: Den\nLamp in Den is OFF\nCam in Den is OFF",
            "Devices in Room: Porch\nHeat in Porch is OFF",
        ]
    );
}
