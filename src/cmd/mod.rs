//! Command module structure for the buildlint CLI

use anyhow::Result;
use std::path::Path;

use buildlint::config::{Config, OutputFormat};
use buildlint::RuleEngine;

pub mod check;
pub mod rules;
pub mod template;

/// Settings shared by every command that touches the rule engine.
pub struct Session {
    pub config: Config,
    pub engine: RuleEngine,
    pub quiet: bool,
}

impl Session {
    /// Load layered config, apply `--disable` overrides, and build the engine.
    pub fn load(config_path: Option<&Path>, disable: &[String], quiet: bool) -> Result<Self> {
        let mut config = Config::load(config_path)?;
        for name in disable {
            if !config.lint.disable.contains(name) {
                config.lint.disable.push(name.clone());
            }
        }

        let engine = config.rule_engine()?;
        tracing::debug!(
            rules = engine.rules().len(),
            disabled = config.lint.disable.len(),
            "rule engine ready"
        );

        Ok(Self {
            config,
            engine,
            quiet,
        })
    }

    /// Output format from `--format`, falling back to config.
    pub fn format(&self, flag: Option<&str>) -> Result<OutputFormat> {
        match flag {
            Some(value) => value.parse(),
            None => Ok(self.config.output.format),
        }
    }
}
