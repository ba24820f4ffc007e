#![cfg(feature = "usb")]

use crate::common::{device_ids, open_transport};

use libleviton::constants::{IN_ENDPOINT, REPORT_SIZE};
use libleviton::controller::ControllerBuilder;
use libleviton::transport::{Transport, UsbConnector};

#[test]
#[ignore]
fn open_and_reset_device() {
    let _ = env_logger::builder().is_test(true).try_init();
    let Some(mut t) = open_transport().expect("usb error") else {
        eprintln!("no controller attached; skipping");
        return;
    };
    // an idle controller either answers with filler or times out
    match t.read(IN_ENDPOINT, REPORT_SIZE, 200) {
        Ok(report) => assert!(report.len() <= REPORT_SIZE),
        Err(e) => eprintln!("idle read: {}", e),
    }
    t.reset().expect("reset");
}

#[test]
#[ignore]
fn poll_session_terminates() {
    let _ = env_logger::builder().is_test(true).try_init();
    let Some((vid, pid)) = device_ids() else {
        eprintln!("LEVITON_VID/LEVITON_PID not set; skipping");
        return;
    };
    let poll_command = std::env::var("LEVITON_POLL")
        .ok()
        .and_then(|s| hex::decode(s).ok())
        .unwrap_or_else(|| vec![0x00, 0x05, 0x7E, 0x01]);

    let controller = ControllerBuilder::new()
        .with_connector(Box::new(UsbConnector::new(vid, pid)))
        .with_poll_command(poll_command)
        .build()
        .expect("build");

    match controller.poll() {
        Ok(report) => {
            println!(
                "{} reports, {} records, {} rejected",
                report.reports.len(),
                report.records.len(),
                report.rejected
            );
            for event in &report.events {
                println!("{} {}", event.label, event.state);
            }
        }
        Err(e) => eprintln!("poll failed: {}", e),
    }
}
