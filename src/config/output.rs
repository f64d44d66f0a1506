//! Output settings for lint reports.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Report rendering format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable lines
    #[default]
    Text,
    /// A single JSON document on stdout
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => bail!("Invalid format '{}'. Use 'text' or 'json'.", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Colored text output; ignored when stdout is not a terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

impl PartialOutputConfig {
    pub(super) fn merge(self, top: PartialOutputConfig) -> PartialOutputConfig {
        PartialOutputConfig {
            format: top.format.or(self.format),
            color: top.color.or(self.color),
        }
    }

    pub(super) fn finish(self) -> OutputConfig {
        OutputConfig {
            format: self.format.unwrap_or_default(),
            color: self.color.unwrap_or_else(default_color),
        }
    }
}
