use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::Parser;
use vehicle_history::domain::ports::Sink;
use vehicle_history::{CliConfig, HistoryEngine};

#[derive(Clone, Default)]
struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Sink for CaptureSink {
    fn emit(&self, rendered: &str) -> vehicle_history::Result<()> {
        self.lines.lock().unwrap().push(rendered.to_string());
        Ok(())
    }
}

#[test]
fn default_run_prints_dealer_ship_then_truck() -> Result<()> {
    let settings = CliConfig::parse_from(["vehicle-history"]).resolve()?;
    let sink = CaptureSink::default();
    let engine = HistoryEngine::new(sink.clone(), settings);

    let rendered = engine.run()?;

    assert_eq!(rendered.len(), 2);
    assert_eq!(sink.lines(), rendered);

    let first: serde_json::Value = serde_json::from_str(&rendered[0])?;
    assert!(first.get("DealerName").is_some());
    assert!(first.get("Date").is_some());
    assert!(first.get("VehicleType").is_none());
    assert!(first.get("Action").is_none());

    let second: serde_json::Value = serde_json::from_str(&rendered[1])?;
    assert!(second.get("VehicleType").is_some());
    assert!(second.get("Date").is_some());
    assert!(second.get("DealerName").is_none());
    assert!(second.get("Action").is_none());

    Ok(())
}

#[test]
fn kind_selection_controls_the_emitted_sequence() -> Result<()> {
    let settings =
        CliConfig::parse_from(["vehicle-history", "--kinds", "truck,truck,dealer-ship"])
            .resolve()?;
    let sink = CaptureSink::default();
    let engine = HistoryEngine::new(sink, settings);

    let rendered = engine.run()?;

    assert_eq!(rendered.len(), 3);
    let last: serde_json::Value = serde_json::from_str(&rendered[2])?;
    assert!(last.get("DealerName").is_some());

    Ok(())
}

#[test]
fn pretty_format_produces_parseable_blocks() -> Result<()> {
    let settings =
        CliConfig::parse_from(["vehicle-history", "--kinds", "truck", "--format", "pretty"])
            .resolve()?;
    let sink = CaptureSink::default();
    let engine = HistoryEngine::new(sink, settings);

    let rendered = engine.run()?;

    assert_eq!(rendered.len(), 1);
    assert!(rendered[0].contains('\n'));

    let parsed: serde_json::Value = serde_json::from_str(&rendered[0])?;
    assert!(parsed.get("VehicleType").is_some());

    Ok(())
}
