pub mod engine;
pub mod factory;

pub use crate::domain::fields::{exported_map, ExportedMap};
pub use crate::domain::model::{DealerShip, HistoryKind, OutputFormat, Truck};
pub use crate::domain::ports::{ConfigProvider, History, Sink};
pub use crate::utils::error::Result;
