use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::fields::{Exposure, FieldSpec, Inspect};
use crate::utils::error::HistoryError;

/// Discriminator selecting which record variant the provider constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryKind {
    Truck,
    DealerShip,
}

impl HistoryKind {
    pub const ALL: [HistoryKind; 2] = [HistoryKind::Truck, HistoryKind::DealerShip];

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryKind::Truck => "truck",
            HistoryKind::DealerShip => "dealer-ship",
        }
    }
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryKind {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truck" => Ok(HistoryKind::Truck),
            "dealer-ship" => Ok(HistoryKind::DealerShip),
            other => Err(HistoryError::UnknownKindError {
                value: other.to_string(),
            }),
        }
    }
}

/// Rendering applied to each exported map before it reaches the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One compact JSON object per snapshot.
    #[default]
    Json,
    /// Indented JSON block per snapshot.
    Pretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Pretty => "pretty",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            other => Err(HistoryError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Expected one of: json, pretty".to_string(),
            }),
        }
    }
}

/// History snapshot for a truck. All fields stay at their defaults until a
/// business-layer hydration path exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Truck {
    pub vehicle_type: String,
    pub date: DateTime<Utc>,
    pub action: String,
}

impl Inspect for Truck {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec {
            name: "VehicleType",
            exposure: Exposure::Exported,
            read: |t| json!(t.vehicle_type),
        },
        FieldSpec {
            name: "Date",
            exposure: Exposure::Exported,
            read: |t| json!(t.date),
        },
        FieldSpec {
            name: "Action",
            exposure: Exposure::Internal,
            read: |t| json!(t.action),
        },
    ];
}

/// History snapshot for a dealership.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DealerShip {
    pub dealer_name: String,
    pub date: DateTime<Utc>,
    pub action: String,
}

impl Inspect for DealerShip {
    const FIELDS: &'static [FieldSpec<Self>] = &[
        FieldSpec {
            name: "DealerName",
            exposure: Exposure::Exported,
            read: |d| json!(d.dealer_name),
        },
        FieldSpec {
            name: "Date",
            exposure: Exposure::Exported,
            read: |d| json!(d.date),
        },
        FieldSpec {
            name: "Action",
            exposure: Exposure::Internal,
            read: |d| json!(d.action),
        },
    ];
}
