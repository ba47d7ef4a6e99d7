pub mod file;

use clap::Parser;

use crate::domain::model::{HistoryKind, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_path, Validate};

use self::file::FileConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "vehicle-history")]
#[command(about = "Render vehicle and dealership history snapshots")]
pub struct CliConfig {
    /// History kinds to render, in order (truck, dealer-ship).
    #[arg(long, value_delimiter = ',')]
    pub kinds: Vec<HistoryKind>,

    /// Output rendering: json (one line per snapshot) or pretty.
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Optional TOML report file supplying kinds/format defaults.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Settings after merging CLI flags with the optional report file.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub kinds: Vec<HistoryKind>,
    pub format: OutputFormat,
}

impl CliConfig {
    /// Merges flags with the report file (explicit flags win) and falls back
    /// to the fixed default sequence: dealer-ship, then truck.
    pub fn resolve(self) -> Result<ReportSettings> {
        let file = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                Some(FileConfig::from_file(path)?)
            }
            None => None,
        };

        let kinds = if !self.kinds.is_empty() {
            self.kinds
        } else {
            file.as_ref()
                .and_then(|f| f.report.kinds.clone())
                .unwrap_or_else(|| vec![HistoryKind::DealerShip, HistoryKind::Truck])
        };

        let format = self
            .format
            .or(file.as_ref().and_then(|f| f.report.format))
            .unwrap_or_default();

        let settings = ReportSettings { kinds, format };
        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for ReportSettings {
    fn kinds(&self) -> &[HistoryKind] {
        &self.kinds
    }

    fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for ReportSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("kinds", &self.kinds)
    }
}
