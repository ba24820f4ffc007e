#![cfg(all(feature = "usb", feature = "config"))]

//! Poll a controller once and print the state of every configured light.
//!
//! Usage:
//!   cargo run -p libleviton --example poll_once --features usb -- leviton.toml
//!
//! Set `RUST_LOG=debug` to see the raw reports and decoded records.

use libleviton::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "leviton.toml".to_string());
    let config = ControllerConfig::load(&path)?;

    let controller = ControllerBuilder::new()
        .with_connector(Box::new(UsbConnector::new(
            config.vendor_id,
            config.product_id,
        )))
        .with_config(&config)
        .build()?;

    let report = controller.poll()?;
    println!(
        "read {} reports, {} records ({} rejected)",
        report.reports.len(),
        report.records.len(),
        report.rejected
    );
    for event in &report.events {
        println!(
            "  {:<15} {:<6} {} {}",
            event.label,
            event.device_kind(),
            event.header.signature(),
            event.state
        );
    }

    let mut sink = MemorySink::default();
    publish_states(&mut sink, &report.states);
    for (entity, on) in &sink.states {
        println!("{} = {}", entity, if *on { "on" } else { "off" });
    }
    Ok(())
}
