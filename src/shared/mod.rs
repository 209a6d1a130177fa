//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the service speaks, so they can be used
//! directly in request and response types without conversion overhead.

pub mod time;

pub use time::Unit;

use crate::error::SdkError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Bar resolution accepted by the history endpoint.
///
/// Intraday resolutions are in minutes; `D`/`W`/`M` are calendar bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "1")]
    Min1,
    #[serde(rename = "5")]
    Min5,
    #[serde(rename = "15")]
    Min15,
    #[serde(rename = "30")]
    Min30,
    #[serde(rename = "45")]
    Min45,
    #[serde(rename = "60")]
    Min60,
    #[serde(rename = "120")]
    Min120,
    #[serde(rename = "180")]
    Min180,
    #[serde(rename = "240")]
    Min240,
    #[default]
    #[serde(rename = "D")]
    Day,
    #[serde(rename = "W")]
    Week,
    #[serde(rename = "M")]
    Month,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Min1 => "1",
            Self::Min5 => "5",
            Self::Min15 => "15",
            Self::Min30 => "30",
            Self::Min45 => "45",
            Self::Min60 => "60",
            Self::Min120 => "120",
            Self::Min180 => "180",
            Self::Min240 => "240",
            Self::Day => "D",
            Self::Week => "W",
            Self::Month => "M",
        }
    }

    /// Duration of one bar in seconds. Calendar bars use nominal lengths
    /// (`M` is 30 days).
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Min1 => 60,
            Self::Min5 => 300,
            Self::Min15 => 900,
            Self::Min30 => 1800,
            Self::Min45 => 2700,
            Self::Min60 => 3600,
            Self::Min120 => 7200,
            Self::Min180 => 10800,
            Self::Min240 => 14400,
            Self::Day => 86_400,
            Self::Week => 604_800,
            Self::Month => 2_592_000,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Min1),
            "5" => Ok(Self::Min5),
            "15" => Ok(Self::Min15),
            "30" => Ok(Self::Min30),
            "45" => Ok(Self::Min45),
            "60" => Ok(Self::Min60),
            "120" => Ok(Self::Min120),
            "180" => Ok(Self::Min180),
            "240" => Ok(Self::Min240),
            "D" => Ok(Self::Day),
            "W" => Ok(Self::Week),
            "M" => Ok(Self::Month),
            other => Err(SdkError::Validation(format!(
                "unknown resolution: {other:?}"
            ))),
        }
    }
}
