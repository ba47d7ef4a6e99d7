use crate::domain::fields::ExportedMap;
use crate::domain::model::{HistoryKind, OutputFormat};
use crate::utils::error::Result;

/// Capability wrapper produced by the factory: a record that can project
/// its exported fields.
pub trait History: Send + Sync {
    fn kind(&self) -> HistoryKind;
    fn exported(&self) -> ExportedMap;
}

pub trait ConfigProvider: Send + Sync {
    fn kinds(&self) -> &[HistoryKind];
    fn format(&self) -> OutputFormat;
}

/// Where rendered snapshots go. Console in production, a capture buffer in
/// tests.
pub trait Sink: Send + Sync {
    fn emit(&self, rendered: &str) -> Result<()>;
}
