pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{CliConfig, ReportSettings};
pub use crate::core::engine::{ConsoleSink, HistoryEngine};
pub use crate::core::factory;
pub use crate::domain::fields::{exported_map, ExportedMap};
pub use crate::domain::model::{DealerShip, HistoryKind, OutputFormat, Truck};
pub use crate::utils::error::{HistoryError, Result};
