use serde::{Deserialize, Serialize};

use crate::domain::model::{HistoryKind, OutputFormat};
use crate::utils::error::Result;

/// Report file layout:
///
/// ```toml
/// [report]
/// kinds = ["dealer-ship", "truck"]
/// format = "json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub report: ReportSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub kinds: Option<Vec<HistoryKind>>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}
