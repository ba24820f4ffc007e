use libleviton::transport::{Connector, MockConnector, MockTransport, Transport};
use libleviton::Error;

#[test]
fn overflow_is_transient_and_recoverable() {
    let mut m = MockTransport::new();
    m.push_error(Error::TransientOverflow);
    m.push_report(vec![0xAA]);

    let err = m.read(0x81, 64, 1000).unwrap_err();
    assert!(err.is_transient());
    assert_eq!(m.read(0x81, 64, 1000).unwrap(), vec![0xAA]);
}

#[test]
fn exhausted_queue_times_out() {
    let mut m = MockTransport::new();
    let err = m.read(0x81, 64, 1000).unwrap_err();
    assert!(matches!(err, Error::Timeout));
    assert!(!err.is_transient());
}

#[test]
fn absent_device_is_not_found() {
    let err = MockConnector::absent().open().err().unwrap();
    assert!(matches!(err, Error::DeviceNotFound { .. }));
}
