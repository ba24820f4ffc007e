use crate::common::fixtures;

use libleviton::controller::Controller;
use libleviton::test_support::{command_frame, mock_controller};
use libleviton::transport::MockConnector;
use libleviton::{CommandKind, Error};

#[test]
fn on_and_off_write_whole_frames() {
    let (controller, mock) = mock_controller(fixtures::lights());
    assert!(controller.turn_on("Kitchen"));
    assert!(controller.send_command("Garage", "off".parse().unwrap()));

    let writes = mock.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0], (0x01, command_frame(fixtures::KITCHEN_ON)));
    assert_eq!(writes[1], (0x01, command_frame(fixtures::GARAGE_OFF)));
    assert_eq!(mock.resets(), 2);
}

#[test]
fn missing_off_command_fails_without_write() {
    let (controller, mock) = mock_controller(fixtures::lights());
    assert!(!controller.turn_off("Porch"));
    assert!(matches!(
        controller.try_send_command("Porch", CommandKind::Off),
        Err(Error::UndefinedCommand { .. })
    ));
    assert_eq!(mock.opens(), 0);
    assert!(mock.writes().is_empty());
}

#[test]
fn unknown_light_fails() {
    let (controller, mock) = mock_controller(fixtures::lights());
    assert!(matches!(
        controller.try_send_command("Sauna", CommandKind::On),
        Err(Error::UnknownLight(_))
    ));
    assert_eq!(mock.opens(), 0);
}

#[test]
fn write_error_is_reported_and_device_reset() {
    let (controller, mock) = mock_controller(fixtures::lights());
    mock.set_fail_writes(true);
    assert!(!controller.turn_on("Kitchen"));
    assert_eq!(mock.resets(), 1);
}

#[test]
fn absent_device_fails_command() {
    let controller = Controller::new(
        Box::new(MockConnector::absent()),
        fixtures::lights().into(),
        vec![0x01],
        1000,
    );
    assert!(!controller.turn_on("Kitchen"));
    assert!(matches!(
        controller.try_send_command("Kitchen", CommandKind::Off),
        Err(Error::DeviceNotFound { .. })
    ));
}
