use crate::common::fixtures;

use libleviton::entity::{MemorySink, publish_states};
use libleviton::test_support::mock_controller;
use libleviton::Error;

#[test]
fn session_reconciles_against_catalog() {
    let (controller, mock) = mock_controller(fixtures::lights());
    for r in fixtures::session_reports() {
        mock.push_report(r);
    }

    let report = controller.poll().unwrap();
    assert_eq!(report.reports.len(), 8);
    assert_eq!(report.rejected, 1);

    // Kitchen reported ON against its on signature, the den reported OFF
    // against its off signature; garage and porch never appeared.
    assert_eq!(report.states.get("Kitchen"), Some(&true));
    assert_eq!(report.states.get("Den (Väst)"), Some(&true));
    assert!(!report.states.contains_key("Garage"));
    assert!(!report.states.contains_key("Porch"));

    // decoded labels never key the state map
    assert!(!report.states.contains_key("Dimmer1"));
    assert_eq!(mock.resets(), 1);
}

#[test]
fn states_publish_under_normalized_ids() {
    let (controller, mock) = mock_controller(fixtures::lights());
    for r in fixtures::session_reports() {
        mock.push_report(r);
    }

    let states = controller.poll_states().unwrap();
    let mut sink = MemorySink::default();
    assert_eq!(publish_states(&mut sink, &states), 2);
    assert_eq!(sink.states.get("light.kitchen"), Some(&true));
    assert_eq!(sink.states.get("light.den_vast"), Some(&true));
}

#[test]
fn overflow_mid_session_is_tolerated() {
    let (controller, mock) = mock_controller(fixtures::lights());
    let reports = fixtures::session_reports();
    mock.push_report(reports[0].clone());
    mock.push_error(Error::TransientOverflow);
    for r in &reports[1..] {
        mock.push_report(r.clone());
    }

    let report = controller.poll().unwrap();
    assert_eq!(report.reports.len(), 8);
    assert_eq!(report.states.get("Kitchen"), Some(&true));
}

#[test]
fn transport_fault_aborts_without_states() {
    let (controller, mock) = mock_controller(fixtures::lights());
    mock.push_report(fixtures::session_reports()[0].clone());
    mock.push_error(Error::TransportFault("no device".into()));

    assert!(controller.poll_states().is_none());
    assert_eq!(mock.resets(), 1);
}

#[test]
fn every_poll_rebuilds_the_map() {
    let (controller, mock) = mock_controller(fixtures::lights());
    for r in fixtures::session_reports() {
        mock.push_report(r);
    }
    assert_eq!(controller.poll_states().unwrap().len(), 2);

    mock.push_repeated(fixtures::idle_report(), 4);
    assert!(controller.poll_states().unwrap().is_empty());
}
